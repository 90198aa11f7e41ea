//! spendwise-core
//!
//! Reconciliation engine and write-side services for spendwise.
//! Depends on spendwise-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod admission_service;
pub mod amount;
pub mod budget_service;
pub mod error;
pub mod format;
pub mod goal_service;
pub mod ledger_service;
pub mod period_service;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

pub use admission_service::*;
pub use amount::{ensure_positive, ensure_within_bounds, MAX_AMOUNT};
pub use budget_service::*;
pub use error::CoreError;
pub use format::*;
pub use goal_service::*;
pub use ledger_service::LedgerService;
pub use period_service::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;

#[cfg(test)]
mod tests;
