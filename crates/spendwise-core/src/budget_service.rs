//! Provides budget reconciliation and budget bookkeeping over ledger data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_domain::{Budget, BudgetPeriod, BudgetStatus, PeriodWindow, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::{
    amount::{ensure_positive, saturating_sum},
    period_service::PeriodService,
    CoreError,
};

/// Stateless budgeting utilities that operate over slices of ledger records.
pub struct BudgetService;

impl BudgetService {
    /// Computes how much of `budget` has been consumed in the period containing `now`.
    ///
    /// Only expenses whose category matches exactly and whose date falls inside the
    /// window (inclusive) count towards `spent`.
    pub fn reconcile(budget: &Budget, transactions: &[Transaction], now: NaiveDate) -> BudgetStatus {
        let window = PeriodService::resolve(budget.period, now);
        let spent = Self::spent_in_window(&budget.category, window, transactions);
        debug!(
            category = %budget.category,
            period = budget.period.as_str(),
            %window,
            %spent,
            limit = %budget.limit,
            "reconciled budget"
        );
        BudgetStatus::from_spent(budget.clone(), window, spent)
    }

    /// Reconciles every budget, preserving input order.
    pub fn reconcile_all(
        budgets: &[Budget],
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> Vec<BudgetStatus> {
        budgets
            .iter()
            .map(|budget| Self::reconcile(budget, transactions, now))
            .collect()
    }

    /// Sums the expenses recorded against `category` within `window`.
    pub fn spent_in_window(
        category: &str,
        window: PeriodWindow,
        transactions: &[Transaction],
    ) -> Decimal {
        saturating_sum(
            transactions
                .iter()
                .filter(|txn| txn.is_expense())
                .filter(|txn| txn.category == category)
                .filter(|txn| window.contains(txn.date))
                .map(|txn| txn.amount),
        )
    }

    /// Adds a budget after checking the limit and the one-per-(category, period) rule.
    pub fn add_budget(budgets: &mut Vec<Budget>, budget: Budget) -> Result<Uuid, CoreError> {
        validate_budget(&budget)?;
        ensure_unique(budgets, &budget.category, budget.period, None)?;
        let id = budget.id;
        debug!(%id, category = %budget.category, "budget added");
        budgets.push(budget);
        Ok(id)
    }

    /// Replaces the category, limit and period of an existing budget.
    pub fn update_budget(
        budgets: &mut [Budget],
        id: Uuid,
        category: impl Into<String>,
        limit: Decimal,
        period: BudgetPeriod,
    ) -> Result<(), CoreError> {
        let candidate = Budget {
            id,
            category: category.into(),
            limit,
            period,
        };
        validate_budget(&candidate)?;
        ensure_unique(budgets, &candidate.category, candidate.period, Some(id))?;
        let slot = budgets
            .iter_mut()
            .find(|budget| budget.id == id)
            .ok_or(CoreError::BudgetNotFound(id))?;
        *slot = candidate;
        Ok(())
    }

    pub fn remove_budget(budgets: &mut Vec<Budget>, id: Uuid) -> Result<Budget, CoreError> {
        let index = budgets
            .iter()
            .position(|budget| budget.id == id)
            .ok_or(CoreError::BudgetNotFound(id))?;
        Ok(budgets.remove(index))
    }
}

pub(crate) fn validate_budget(budget: &Budget) -> Result<(), CoreError> {
    if budget.category.trim().is_empty() {
        return Err(CoreError::Validation("budget category is required".into()));
    }
    ensure_positive(budget.limit)
}

pub(crate) fn ensure_unique(
    budgets: &[Budget],
    category: &str,
    period: BudgetPeriod,
    ignore: Option<Uuid>,
) -> Result<(), CoreError> {
    let clash = budgets
        .iter()
        .filter(|budget| Some(budget.id) != ignore)
        .any(|budget| budget.matches(category, period));
    if clash {
        return Err(CoreError::DuplicateBudget {
            category: category.to_string(),
            period,
        });
    }
    Ok(())
}
