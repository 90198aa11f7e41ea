//! Domain models for ledger transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ParseEnumError;

/// A dated, categorised money movement. Never mutated once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            amount,
            category: category.into(),
            kind,
        }
    }

    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self::new(date, description, amount, category, TransactionKind::Expense)
    }

    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self::new(date, description, amount, category, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by the kind: income positive, expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Direction of a transaction.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ParseEnumError::new("transaction kind", value)),
        }
    }
}
