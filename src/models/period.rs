//! Accounting period model.
//!
//! This module contains the [`AccountingPeriod`] type describing an
//! inclusive calendar-date window used for filtering and reporting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar-date window.
///
/// Produced by the accounting period resolver for both the rolling
/// "accounting month" (whose start day is configurable and need not align
/// with the calendar month) and fixed trailing lookback windows. Because
/// journeys carry dates without time-of-day, inclusive date comparison is
/// equivalent to comparing against the last instant of the end day.
///
/// # Example
///
/// ```
/// use jornada_engine::models::AccountingPeriod;
/// use chrono::NaiveDate;
///
/// let period = AccountingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 25).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 24).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 3, 25).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl AccountingPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
