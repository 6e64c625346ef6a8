//! Listing, sorting, and filtering of journeys.
//!
//! This module produces the ordered, filtered view the presentation layer
//! renders: journeys paired with their derived breakdowns, restricted to an
//! accounting window and ordered by a sort key. It is a pure derivation
//! layer, re-run on demand from the latest snapshot rather than patched
//! incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::EngineResult;
use crate::models::{Breakdown, Journey, Settings};

use super::breakdown::compute_breakdown;
use super::period::{TRAILING_WINDOW_DAYS, current_period, trailing_window};

/// Which accounting window to restrict the listing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodFilter {
    /// The rolling accounting month containing today.
    CurrentPeriod,
    /// The trailing seven days ending today.
    #[serde(rename = "trailing_7")]
    Trailing7,
    /// No restriction.
    All,
}

/// The ordering applied to the listing.
///
/// Every key is a strict total order: ties are broken by journey id
/// ascending, so equal dates or equal totals still order deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recent journeys first.
    DateDesc,
    /// Oldest journeys first.
    DateAsc,
    /// Highest total worked minutes first.
    TotalHoursDesc,
    /// Highest combined overtime minutes first.
    ExtraHoursDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::DateDesc
    }
}

impl Default for PeriodFilter {
    fn default() -> Self {
        Self::CurrentPeriod
    }
}

/// Builds the filtered, ordered view of a journey collection.
///
/// Each journey's breakdown is computed exactly once; the breakdown then
/// serves both as a sort criterion and as part of the returned pairs. The
/// input collection is never mutated.
///
/// `today` anchors the period resolution and is passed explicitly so the
/// same snapshot can be viewed deterministically for any reference date.
///
/// # Errors
///
/// Propagates the first engine error encountered while computing
/// breakdowns (a malformed clock string in any journey fails the view).
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{view, PeriodFilter, SortKey};
/// use jornada_engine::models::{Journey, Settings};
/// use chrono::NaiveDate;
///
/// let journeys = vec![Journey {
///     id: "jrn_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     start_at: "08:00".to_string(),
///     end_at: "18:00".to_string(),
///     is_feriado: false,
///     distance_traveled: None,
/// }];
/// let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
///
/// let listing = view(
///     &journeys,
///     &Settings::default(),
///     today,
///     PeriodFilter::CurrentPeriod,
///     SortKey::DateDesc,
/// )
/// .unwrap();
///
/// assert_eq!(listing.len(), 1);
/// assert_eq!(listing[0].1.total_trabalhado, 600);
/// ```
pub fn view(
    journeys: &[Journey],
    settings: &Settings,
    today: NaiveDate,
    period: PeriodFilter,
    sort: SortKey,
) -> EngineResult<Vec<(Journey, Breakdown)>> {
    let window = match period {
        PeriodFilter::CurrentPeriod => Some(current_period(today, settings.month_start_day)),
        PeriodFilter::Trailing7 => Some(trailing_window(today, TRAILING_WINDOW_DAYS)),
        PeriodFilter::All => None,
    };

    let mut entries: Vec<(Journey, Breakdown)> = journeys
        .iter()
        .filter(|journey| {
            window
                .map(|w| w.contains_date(journey.date))
                .unwrap_or(true)
        })
        .map(|journey| {
            compute_breakdown(journey, settings).map(|breakdown| (journey.clone(), breakdown))
        })
        .collect::<EngineResult<_>>()?;

    entries.sort_by(|a, b| compare(a, b, sort).then_with(|| a.0.id.cmp(&b.0.id)));

    Ok(entries)
}

fn compare(a: &(Journey, Breakdown), b: &(Journey, Breakdown), sort: SortKey) -> Ordering {
    match sort {
        SortKey::DateDesc => b.0.date.cmp(&a.0.date),
        SortKey::DateAsc => a.0.date.cmp(&b.0.date),
        SortKey::TotalHoursDesc => b.1.total_trabalhado.cmp(&a.1.total_trabalhado),
        SortKey::ExtraHoursDesc => b.1.total_extras().cmp(&a.1.total_extras()),
    }
}
