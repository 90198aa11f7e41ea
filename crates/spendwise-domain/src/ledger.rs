//! Serializable snapshot holding every record a user owns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{budget::Budget, goal::FinancialGoal, transaction::Transaction};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Transactions, budgets and goals as persisted by callers.
///
/// The ledger carries no derived data: budget spending and goal progress are
/// recomputed on every query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u32,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ..Self::default()
        }
    }

    fn schema_version_default() -> u32 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn goal(&self, id: Uuid) -> Option<&FinancialGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }
}
