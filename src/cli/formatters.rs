use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_config::Config;
use spendwise_core::{CurrencyFormatter, DateFormatter};

/// Formatter implementations backed by the active CLI configuration.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency: String,
    precision: usize,
}

impl CliFormatters {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency.clone(),
            precision: config.currency_precision as usize,
        }
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{amount:.prec$} {code}",
            amount = amount,
            prec = self.precision,
            code = self.currency
        )
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_follow_configured_currency_and_precision() {
        let config = Config {
            currency: "EUR".into(),
            currency_precision: 2,
            ..Config::default()
        };
        let formatters = CliFormatters::new(&config);
        assert_eq!(formatters.format_amount(dec!(480)), "480.00 EUR");
        assert_eq!(formatters.format_amount(dec!(12.3)), "12.30 EUR");
        assert_eq!(formatters.format_percent(dec!(96)), "96.0%");
        assert_eq!(
            formatters.format_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            "2025-03-01"
        );
    }
}
