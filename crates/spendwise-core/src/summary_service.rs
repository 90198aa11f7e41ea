//! Aggregation helpers for spending digests.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_domain::{BudgetPeriod, PeriodWindow, Transaction, TransactionKind};

use crate::amount::{checked_percent, saturating_add};
use crate::period_service::PeriodService;

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub transactions: usize,
}

/// Income and expense totals for a window, with an expense breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub window: PeriodWindow,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    /// Sorted by descending amount, then by category name.
    pub per_category: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Share of total expenses taken by `category`, as a percentage.
    pub fn share_of_expenses(&self, category: &str) -> Decimal {
        if self.expenses <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.per_category
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| {
                checked_percent(entry.amount, self.expenses)
                    .map_or(Decimal::ONE_HUNDRED, |share| share.min(Decimal::ONE_HUNDRED))
            })
            .unwrap_or(Decimal::ZERO)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(transactions: &[Transaction], window: PeriodWindow) -> SpendingSummary {
        let mut acc = Accumulator::default();
        let mut per_category: HashMap<&str, (Decimal, usize)> = HashMap::new();

        for txn in transactions.iter().filter(|txn| window.contains(txn.date)) {
            match txn.kind {
                TransactionKind::Income => acc.add_income(txn.amount),
                TransactionKind::Expense => {
                    acc.add_expense(txn.amount);
                    let entry = per_category
                        .entry(txn.category.as_str())
                        .or_insert((Decimal::ZERO, 0));
                    entry.0 = saturating_add(entry.0, txn.amount);
                    entry.1 += 1;
                }
            }
        }

        let mut per_category: Vec<CategoryTotal> = per_category
            .into_iter()
            .map(|(category, (amount, transactions))| CategoryTotal {
                category: category.to_string(),
                amount,
                transactions,
            })
            .collect();
        per_category.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        SpendingSummary {
            window,
            income: acc.income,
            expenses: acc.expenses,
            net: saturating_add(acc.income, -acc.expenses),
            per_category,
        }
    }

    /// Summarizes the period of the given kind that contains `now`.
    pub fn summarize_period(
        period: BudgetPeriod,
        transactions: &[Transaction],
        now: NaiveDate,
    ) -> SpendingSummary {
        Self::summarize(transactions, PeriodService::resolve(period, now))
    }
}

#[derive(Default)]
struct Accumulator {
    income: Decimal,
    expenses: Decimal,
}

impl Accumulator {
    fn add_income(&mut self, amount: Decimal) {
        self.income = saturating_add(self.income, amount);
    }

    fn add_expense(&mut self, amount: Decimal) {
        self.expenses = saturating_add(self.expenses, amount);
    }
}
