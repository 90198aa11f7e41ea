use spendwise_domain::{Ledger, Transaction};
use uuid::Uuid;

use crate::CoreError;

/// Abstraction over whatever holds the transaction log.
///
/// The engine never reads a store itself; callers list the transactions,
/// hand them to the services, and append once a payment has been admitted.
pub trait TransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, CoreError>;
    fn append(&mut self, transaction: Transaction) -> Result<(), CoreError>;
    fn remove(&mut self, id: Uuid) -> Result<Transaction, CoreError>;
}

impl TransactionStore for Ledger {
    fn list(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.transactions.clone())
    }

    fn append(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        if self.transaction(transaction.id).is_some() {
            return Err(CoreError::Validation(format!(
                "transaction {} already recorded",
                transaction.id
            )));
        }
        self.transactions.push(transaction);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        Ok(self.transactions.remove(index))
    }
}
