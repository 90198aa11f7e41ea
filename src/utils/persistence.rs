use std::{fs, path::Path};

use spendwise_core::LedgerService;
use spendwise_domain::{Ledger, CURRENT_SCHEMA_VERSION};
use tracing::debug;

use crate::errors::SpendwiseError;

/// Writes the provided ledger to disk atomically by staging to a temporary file.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), SpendwiseError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), transactions = ledger.transactions.len(), "ledger saved");
    Ok(())
}

/// Loads a ledger snapshot from disk. A missing file is an empty ledger; a
/// snapshot that breaks any write-time rule is refused.
pub fn load_ledger_from_file(path: &Path) -> Result<Ledger, SpendwiseError> {
    if !path.exists() {
        debug!(path = %path.display(), "no ledger on disk, starting empty");
        return Ok(Ledger::new());
    }
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    if ledger.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(SpendwiseError::UnsupportedSchema {
            found: ledger.schema_version,
            expected: CURRENT_SCHEMA_VERSION,
        });
    }
    LedgerService::validate(&ledger)?;
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use spendwise_core::CoreError;
    use spendwise_domain::{Budget, BudgetPeriod, Transaction};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_ledger() {
        let dir = tempdir().unwrap();
        let ledger = load_ledger_from_file(&dir.path().join("absent.json")).unwrap();
        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger.json");
        let mut ledger = Ledger::new();
        ledger
            .budgets
            .push(Budget::new("Food", dec!(500), BudgetPeriod::Monthly));
        ledger.transactions.push(Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            "Groceries",
            dec!(42.10),
            "Food",
        ));

        save_ledger_to_file(&ledger, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_ledger_from_file(&path).unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn newer_schema_is_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"schema_version": 99}"#).unwrap();
        assert!(matches!(
            load_ledger_from_file(&path),
            Err(SpendwiseError::UnsupportedSchema { found: 99, .. })
        ));
    }

    #[test]
    fn duplicate_budgets_on_disk_are_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let mut ledger = Ledger::new();
        ledger
            .budgets
            .push(Budget::new("Food", dec!(500), BudgetPeriod::Monthly));
        ledger
            .budgets
            .push(Budget::new("Food", dec!(300), BudgetPeriod::Monthly));
        fs::write(&path, serde_json::to_string(&ledger).unwrap()).unwrap();

        assert!(matches!(
            load_ledger_from_file(&path),
            Err(SpendwiseError::Core(CoreError::DuplicateBudget { .. }))
        ));
    }

    #[test]
    fn oversized_amounts_on_disk_are_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let mut ledger = Ledger::new();
        ledger.transactions.push(Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            "Import",
            dec!(50000000000000000000000000000),
            "Food",
        ));
        fs::write(&path, serde_json::to_string(&ledger).unwrap()).unwrap();

        assert!(matches!(
            load_ledger_from_file(&path),
            Err(SpendwiseError::Core(CoreError::AmountTooLarge(_)))
        ));
    }
}
