//! Registered category labels.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Health",
    "Other",
];

const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Gift", "Other"];

/// The set of category labels accepted for new transactions, split by kind.
///
/// Matching is exact and case-sensitive: `"food"` is not `"Food"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySet {
    pub expense: Vec<String>,
    pub income: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            expense: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            income: DEFAULT_INCOME_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl CategorySet {
    pub fn for_kind(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Expense => &self.expense,
            TransactionKind::Income => &self.income,
        }
    }

    pub fn allows(&self, kind: TransactionKind, category: &str) -> bool {
        self.for_kind(kind).iter().any(|name| name == category)
    }

    /// Registers a label for the given kind. Returns `false` if it was already present.
    pub fn register(&mut self, kind: TransactionKind, category: impl Into<String>) -> bool {
        let category = category.into();
        let names = match kind {
            TransactionKind::Expense => &mut self.expense,
            TransactionKind::Income => &mut self.income,
        };
        if names.contains(&category) {
            return false;
        }
        names.push(category);
        true
    }
}
