//! Whole-ledger checks applied to snapshots read from storage.

use std::collections::HashSet;

use spendwise_domain::Ledger;
use tracing::debug;
use uuid::Uuid;

use crate::{
    budget_service::{ensure_unique, validate_budget},
    goal_service::validate_goal,
    transaction_service::validate_transaction,
    CoreError,
};

pub struct LedgerService;

impl LedgerService {
    /// Applies the same rules the write paths enforce to every record of a
    /// snapshot. Categories are not checked against configuration since the
    /// configured set may have changed since the records were written.
    pub fn validate(ledger: &Ledger) -> Result<(), CoreError> {
        for txn in &ledger.transactions {
            validate_transaction(txn, None)?;
        }
        ensure_distinct_ids(ledger.transactions.iter().map(|txn| txn.id), "transaction")?;

        for (index, budget) in ledger.budgets.iter().enumerate() {
            validate_budget(budget)?;
            ensure_unique(&ledger.budgets[..index], &budget.category, budget.period, None)?;
        }
        ensure_distinct_ids(ledger.budgets.iter().map(|budget| budget.id), "budget")?;

        for goal in &ledger.goals {
            validate_goal(goal)?;
        }
        ensure_distinct_ids(ledger.goals.iter().map(|goal| goal.id), "goal")?;

        debug!(
            transactions = ledger.transactions.len(),
            budgets = ledger.budgets.len(),
            goals = ledger.goals.len(),
            "ledger validated"
        );
        Ok(())
    }
}

fn ensure_distinct_ids(ids: impl Iterator<Item = Uuid>, kind: &str) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}
