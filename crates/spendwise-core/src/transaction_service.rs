//! Write-side helpers for the transaction log.

use spendwise_domain::{Budget, CategorySet, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    admission_service::{AdmissionDecision, AdmissionPolicy, AdmissionService, ProposedPayment},
    amount::ensure_positive,
    storage::TransactionStore,
    time::Clock,
    CoreError,
};

pub struct TransactionService;

impl TransactionService {
    /// Validates and appends a transaction. When `categories` is supplied the
    /// category must be registered for the transaction's kind.
    pub fn record<S: TransactionStore + ?Sized>(
        store: &mut S,
        transaction: Transaction,
        categories: Option<&CategorySet>,
    ) -> Result<Uuid, CoreError> {
        validate_transaction(&transaction, categories)?;
        let id = transaction.id;
        debug!(%id, category = %transaction.category, amount = %transaction.amount, "recording transaction");
        store.append(transaction)?;
        Ok(id)
    }

    pub fn remove<S: TransactionStore + ?Sized>(
        store: &mut S,
        id: Uuid,
    ) -> Result<Transaction, CoreError> {
        store.remove(id)
    }

    /// Runs the admission check for a payment and, only when admitted, records it
    /// as an expense dated today.
    pub fn simulate_payment<S: TransactionStore + ?Sized>(
        store: &mut S,
        budgets: &[Budget],
        proposed: &ProposedPayment,
        policy: &AdmissionPolicy,
        clock: &dyn Clock,
    ) -> Result<AdmissionDecision, CoreError> {
        let today = clock.today();
        let transactions = store.list()?;
        let decision =
            AdmissionService::admit_with_policy(proposed, budgets, &transactions, today, policy)?;
        match &decision {
            AdmissionDecision::Admitted => {
                let payment = Transaction::expense(
                    today,
                    format!("Payment: {}", proposed.category),
                    proposed.amount,
                    proposed.category.clone(),
                );
                store.append(payment)?;
                info!(category = %proposed.category, amount = %proposed.amount, "payment admitted");
            }
            AdmissionDecision::Rejected(rejection) => {
                info!(
                    category = %proposed.category,
                    amount = %proposed.amount,
                    hypothetical = %rejection.hypothetical_spent,
                    "payment rejected"
                );
            }
        }
        Ok(decision)
    }
}

pub(crate) fn validate_transaction(
    transaction: &Transaction,
    categories: Option<&CategorySet>,
) -> Result<(), CoreError> {
    ensure_positive(transaction.amount)?;
    if transaction.description.trim().is_empty() {
        return Err(CoreError::Validation(
            "transaction description is required".into(),
        ));
    }
    if transaction.category.trim().is_empty() {
        return Err(CoreError::Validation("transaction category is required".into()));
    }
    if let Some(set) = categories {
        if !set.allows(transaction.kind, &transaction.category) {
            return Err(CoreError::UnknownCategory(transaction.category.clone()));
        }
    }
    Ok(())
}
