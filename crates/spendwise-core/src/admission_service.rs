//! Pre-payment budget checks.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_domain::{Budget, BudgetPeriod, BudgetStatus, Transaction};
use tracing::debug;

use crate::{
    amount::{ensure_positive, saturating_add},
    budget_service::BudgetService,
    CoreError,
};

/// A payment the user wants to make, not yet recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedPayment {
    pub category: String,
    pub amount: Decimal,
}

impl ProposedPayment {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Which budget periods take part in admission control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionPolicy {
    pub gated_periods: Vec<BudgetPeriod>,
}

impl Default for AdmissionPolicy {
    /// Only monthly budgets gate payments unless configured otherwise.
    fn default() -> Self {
        Self::monthly_only()
    }
}

impl AdmissionPolicy {
    pub fn new(gated_periods: Vec<BudgetPeriod>) -> Self {
        Self { gated_periods }
    }

    pub fn monthly_only() -> Self {
        Self::new(vec![BudgetPeriod::Monthly])
    }

    pub fn all_periods() -> Self {
        Self::new(BudgetPeriod::ALL.to_vec())
    }

    pub fn gates(&self, period: BudgetPeriod) -> bool {
        self.gated_periods.contains(&period)
    }
}

/// Outcome of an admission check. A rejection is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AdmissionDecision {
    Admitted,
    Rejected(Rejection),
}

impl AdmissionDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionDecision::Admitted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AdmissionDecision::Admitted => None,
            AdmissionDecision::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Why a payment was refused, with the budget state it was judged against.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub reason: String,
    pub status: BudgetStatus,
    pub hypothetical_spent: Decimal,
}

impl Rejection {
    fn new(proposed: &ProposedPayment, status: BudgetStatus, hypothetical_spent: Decimal) -> Self {
        let mut rejection = Self {
            reason: String::new(),
            status,
            hypothetical_spent,
        };
        rejection.reason = over_budget_message(proposed, &rejection);
        rejection
    }

    /// How far past the limit the payment would have taken the budget.
    pub fn excess(&self) -> Decimal {
        self.hypothetical_spent
            .checked_sub(self.status.budget.limit)
            .unwrap_or(Decimal::MAX)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

pub struct AdmissionService;

impl AdmissionService {
    /// Checks a payment against the category's monthly budget.
    pub fn admit(
        proposed: &ProposedPayment,
        budgets: &[Budget],
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> Result<AdmissionDecision, CoreError> {
        Self::admit_with_policy(
            proposed,
            budgets,
            transactions,
            now,
            &AdmissionPolicy::default(),
        )
    }

    /// Checks a payment against every budget of the category whose period the
    /// policy gates. The first budget, in policy order, that the payment would
    /// overrun decides the rejection. Categories without a gated budget are
    /// always admitted.
    pub fn admit_with_policy(
        proposed: &ProposedPayment,
        budgets: &[Budget],
        transactions: &[Transaction],
        now: NaiveDate,
        policy: &AdmissionPolicy,
    ) -> Result<AdmissionDecision, CoreError> {
        ensure_positive(proposed.amount)?;

        for period in &policy.gated_periods {
            let Some(budget) = budgets
                .iter()
                .find(|budget| budget.matches(&proposed.category, *period))
            else {
                continue;
            };

            let status = BudgetService::reconcile(budget, transactions, now);
            let hypothetical_spent = saturating_add(status.spent, proposed.amount);
            debug!(
                category = %proposed.category,
                period = period.as_str(),
                spent = %status.spent,
                amount = %proposed.amount,
                limit = %budget.limit,
                "admission check"
            );
            if hypothetical_spent > budget.limit {
                return Ok(AdmissionDecision::Rejected(Rejection::new(
                    proposed,
                    status,
                    hypothetical_spent,
                )));
            }
        }

        Ok(AdmissionDecision::Admitted)
    }
}

fn over_budget_message(proposed: &ProposedPayment, rejection: &Rejection) -> String {
    let status = &rejection.status;
    format!(
        "Your {} budget for {} is {:.2}. You've already spent {:.2} this period ({}). \
         This payment of {:.2} would exceed your limit by {:.2}.",
        status.budget.period.as_str(),
        proposed.category,
        status.budget.limit,
        status.spent,
        status.window,
        proposed.amount,
        rejection.excess(),
    )
}
