//! spendwise-domain
//!
//! Pure domain models (Transaction, Budget, FinancialGoal, PeriodWindow, Ledger).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod goal;
pub mod ledger;
pub mod transaction;
pub mod window;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use goal::*;
pub use ledger::*;
pub use transaction::*;
pub use window::*;
