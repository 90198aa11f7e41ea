use serde::{Deserialize, Serialize};
use spendwise_domain::{BudgetPeriod, CategorySet};
use std::path::{Path, PathBuf};

const DEFAULT_LEDGER_FILE: &str = "ledger.json";

/// Stores user-configurable preferences for the ledger and its reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    #[serde(default)]
    pub admission: AdmissionSettings,
    #[serde(default)]
    pub categories: CategorySet,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location of the ledger file. Defaults to `<config dir>/spendwise/ledger.json`.
    pub ledger_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            currency_precision: Self::default_currency_precision(),
            admission: AdmissionSettings::default(),
            categories: CategorySet::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            ledger_path: None,
        }
    }
}

impl Config {
    pub fn default_currency_precision() -> u8 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Base directory for spendwise files when nothing more specific is configured.
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spendwise")
    }

    /// Location of the ledger file, falling back to `ledger.json` inside `base`.
    pub fn resolve_ledger_path(&self, base: &Path) -> PathBuf {
        match &self.ledger_path {
            Some(path) => path.clone(),
            None => base.join(DEFAULT_LEDGER_FILE),
        }
    }
}

/// Controls which budget periods gate simulated payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdmissionSettings {
    #[serde(default = "AdmissionSettings::default_gated_periods")]
    pub gated_periods: Vec<BudgetPeriod>,
}

impl Default for AdmissionSettings {
    fn default() -> Self {
        Self {
            gated_periods: Self::default_gated_periods(),
        }
    }
}

impl AdmissionSettings {
    pub fn default_gated_periods() -> Vec<BudgetPeriod> {
        vec![BudgetPeriod::Monthly]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency":"GBP"}"#).unwrap();
        assert_eq!(config.currency, "GBP");
        assert_eq!(config.currency_precision, 2);
        assert_eq!(config.admission.gated_periods, vec![BudgetPeriod::Monthly]);
        assert_eq!(config.categories, CategorySet::default());
        assert!(config.ui_color_enabled);
    }

    #[test]
    fn gated_periods_accept_lowercase_names() {
        let config: Config = serde_json::from_str(
            r#"{"currency":"USD","admission":{"gated_periods":["weekly","monthly"]}}"#,
        )
        .unwrap();
        assert_eq!(
            config.admission.gated_periods,
            vec![BudgetPeriod::Weekly, BudgetPeriod::Monthly]
        );
    }

    #[test]
    fn ledger_path_defaults_inside_base_dir() {
        let base = Path::new("/var/lib/spendwise");
        assert_eq!(
            Config::default().resolve_ledger_path(base),
            base.join("ledger.json")
        );

        let config = Config {
            ledger_path: Some(PathBuf::from("/tmp/custom.json")),
            ..Config::default()
        };
        assert_eq!(config.resolve_ledger_path(base), PathBuf::from("/tmp/custom.json"));
    }
}
