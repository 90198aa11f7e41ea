//! Inclusive calendar-date ranges used to bound budget periods.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Defines the current accounting window for a budget. Both ends are inclusive.
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodWindowError> {
        if end < start {
            return Err(PeriodWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`PeriodWindow`] values.
pub enum PeriodWindowError {
    InvalidRange,
}

impl fmt::Display for PeriodWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodWindowError::InvalidRange => {
                f.write_str("period window end must not precede start")
            }
        }
    }
}

impl std::error::Error for PeriodWindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = PeriodWindow::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        assert!(window.contains(date(2025, 3, 1)));
        assert!(window.contains(date(2025, 3, 31)));
        assert!(!window.contains(date(2025, 2, 28)));
        assert!(!window.contains(date(2025, 4, 1)));
        assert_eq!(window.days(), 31);
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = PeriodWindow::new(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(window.days(), 1);
        assert_eq!(
            PeriodWindow::new(date(2025, 3, 2), date(2025, 3, 1)),
            Err(PeriodWindowError::InvalidRange)
        );
    }
}
