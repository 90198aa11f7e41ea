//! Resolves the calendar window a budget period covers on a given day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use spendwise_domain::{BudgetPeriod, PeriodWindow};

/// First day of a weekly period. Weeks run Monday through Sunday (ISO 8601).
pub const WEEK_START: Weekday = Weekday::Mon;

/// Stateless period arithmetic.
pub struct PeriodService;

impl PeriodService {
    /// Returns the inclusive window of `period` that contains `now`.
    pub fn resolve(period: BudgetPeriod, now: NaiveDate) -> PeriodWindow {
        let (start, end) = match period {
            BudgetPeriod::Weekly => {
                let start = week_start(now);
                (start, start + Duration::days(6))
            }
            BudgetPeriod::Monthly => (
                now.with_day(1).unwrap_or(now),
                month_end(now.year(), now.month()),
            ),
            BudgetPeriod::Yearly => (
                NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or(now),
                NaiveDate::from_ymd_opt(now.year(), 12, 31).unwrap_or(now),
            ),
        };
        PeriodWindow { start, end }
    }

    /// Window immediately preceding the one that contains `now`.
    pub fn previous(period: BudgetPeriod, now: NaiveDate) -> PeriodWindow {
        let current = Self::resolve(period, now);
        Self::resolve(period, current.start - Duration::days(1))
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let delta = (date.weekday().num_days_from_monday() + 7 - WEEK_START.num_days_from_monday()) % 7;
    let delta = delta as i64;
    date - Duration::days(delta)
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| first_next - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}
