//! Accounting period resolver.
//!
//! This module maps "today" onto the rolling pay-period window whose start
//! day comes from the settings profile, and onto fixed trailing lookback
//! windows. The accounting month is deliberately not calendar-aligned:
//! with a start day of 25, the period spanning today runs from the 25th of
//! one month through the 24th of the next.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::AccountingPeriod;

/// Length in days of the fixed trailing lookback window.
pub const TRAILING_WINDOW_DAYS: u64 = 7;

/// Returns `start_day` of the given month, clamped to the month's last
/// valid day (e.g. 30 in February resolves to the 28th or 29th).
fn clamped_date(year: i32, month: u32, start_day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, start_day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 30))
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 29))
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 28))
        .expect("every month has at least 28 days")
}

/// Resolves the accounting period that contains `today`.
///
/// If `today` has reached `start_day` of its month, the period starts on
/// that day; otherwise it starts on `start_day` of the previous month
/// (with year rollover at January). The period ends one day before the
/// next period begins, inclusive. Start days beyond a month's length clamp
/// to the month's last valid day.
///
/// The returned window always satisfies `start_date <= today <= end_date`.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::current_period;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let period = current_period(today, 25);
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 25).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 3, 24).unwrap());
/// ```
pub fn current_period(today: NaiveDate, start_day: u32) -> AccountingPeriod {
    let this_month_start = clamped_date(today.year(), today.month(), start_day);

    let start_date = if today >= this_month_start {
        this_month_start
    } else {
        let (year, month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        clamped_date(year, month, start_day)
    };

    // The period ends the day before the next one begins.
    let (year, month) = if start_date.month() == 12 {
        (start_date.year() + 1, 1)
    } else {
        (start_date.year(), start_date.month() + 1)
    };
    let end_date = clamped_date(year, month, start_day) - Days::new(1);

    AccountingPeriod {
        start_date,
        end_date,
    }
}

/// Resolves a fixed trailing window of `days` days ending at `today`.
///
/// The window runs `[today - days, today]`, both inclusive.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::trailing_window;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let window = trailing_window(today, 7);
///
/// assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
/// assert_eq!(window.end_date, today);
/// ```
pub fn trailing_window(today: NaiveDate, days: u64) -> AccountingPeriod {
    AccountingPeriod {
        start_date: today - Days::new(days),
        end_date: today,
    }
}
