use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Decimal) -> String;

    /// Formats a percentage such as budget utilisation or goal progress.
    fn format_percent(&self, percent: Decimal) -> String {
        format!("{:.1}%", percent)
    }
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}
