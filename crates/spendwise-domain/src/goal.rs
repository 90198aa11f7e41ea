//! Savings goals and their progress view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings objective with an optional deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub description: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl FinancialGoal {
    pub fn new(description: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            target_amount,
            current_amount: Decimal::ZERO,
            deadline: None,
        }
    }

    pub fn with_current(mut self, current_amount: Decimal) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Amount still needed to reach the target, never negative.
    pub fn shortfall(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }
}

/// Progress snapshot of a goal relative to a reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalStatus {
    pub goal: FinancialGoal,
    pub percent_complete: Decimal,
    pub is_complete: bool,
    pub is_overdue: bool,
}
