//! Budget definitions and their derived consumption view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::BudgetPeriod, window::PeriodWindow};

/// Describes a spending limit for a category over a recurring period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub limit: Decimal,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Decimal, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            limit,
            period,
        }
    }

    /// Returns `true` when this budget covers the given category and period.
    pub fn matches(&self, category: &str, period: BudgetPeriod) -> bool {
        self.category == category && self.period == period
    }
}

/// Budget joined with the expenses recorded in its current window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub window: PeriodWindow,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent_used: Decimal,
    pub is_over_budget: bool,
}

impl BudgetStatus {
    /// Derives remaining, utilisation and overspend flags from a spent total.
    pub fn from_spent(budget: Budget, window: PeriodWindow, spent: Decimal) -> Self {
        let remaining = budget.limit.checked_sub(spent).unwrap_or(Decimal::MIN);
        let percent_used = if budget.limit > Decimal::ZERO {
            spent
                .checked_div(budget.limit)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        };
        let is_over_budget = spent > budget.limit;
        Self {
            budget,
            window,
            spent,
            remaining,
            percent_used,
            is_over_budget,
        }
    }

    /// Amount by which spending exceeds the limit, zero when within budget.
    pub fn overspend(&self) -> Decimal {
        if self.is_over_budget {
            self.spent
                .checked_sub(self.budget.limit)
                .unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        }
    }
}
