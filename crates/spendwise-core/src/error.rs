use rust_decimal::Decimal;
use spendwise_domain::BudgetPeriod;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid amount: {0} (amounts must be positive)")]
    InvalidAmount(Decimal),
    #[error("Amount {0} exceeds the supported maximum of {max}", max = crate::amount::MAX_AMOUNT)]
    AmountTooLarge(Decimal),
    #[error("A {} budget for {category} already exists", period.as_str())]
    DuplicateBudget {
        category: String,
        period: BudgetPeriod,
    },
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}
