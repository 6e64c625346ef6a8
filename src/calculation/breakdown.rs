//! Journey accounting engine.
//!
//! This module provides the core computation that turns one journey plus a
//! settings profile into a categorized time/distance breakdown.
//!
//! ## Policy
//!
//! **Worked minutes beyond the standard workday are overtime, split into
//! two tiers:**
//! - the first `overtime_tier1_cap_minutes` are billed at the 50% rate
//! - everything past the cap is billed at the 100% rate
//!
//! On a holiday (feriado) no regular obligation exists, so every worked
//! minute is overtime and all of it lands in the 100% tier: holiday work
//! never receives the discounted 50% rate.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Breakdown, Journey, Settings};

use super::clock::{parse_clock, shift_duration_minutes};

/// Computes the time/distance breakdown for one journey.
///
/// Pure function of its two inputs: no side effects, no mutation of the
/// journey, and identical inputs always yield identical breakdowns, so
/// callers may recompute freely instead of caching.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidClockTime`](crate::error::EngineError)
/// from a malformed `start_at` or `end_at`. Settings invariants are checked
/// at load time via [`Settings::validate`], not here.
///
/// # Examples
///
/// ## Ordinary day with tier-1 overtime
///
/// ```
/// use jornada_engine::calculation::compute_breakdown;
/// use jornada_engine::models::{Journey, Settings};
/// use chrono::NaiveDate;
///
/// let journey = Journey {
///     id: "jrn_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     start_at: "08:00".to_string(),
///     end_at: "18:00".to_string(),
///     is_feriado: false,
///     distance_traveled: None,
/// };
/// let settings = Settings {
///     standard_workday_minutes: 480,
///     overtime_tier1_cap_minutes: 120,
///     ..Settings::default()
/// };
///
/// let breakdown = compute_breakdown(&journey, &settings).unwrap();
/// assert_eq!(breakdown.total_trabalhado, 600);
/// assert_eq!(breakdown.horas_extras_50, 120);
/// assert_eq!(breakdown.horas_extras_100, 0);
/// ```
///
/// ## Holiday shift (all minutes at the 100% rate)
///
/// ```
/// use jornada_engine::calculation::compute_breakdown;
/// use jornada_engine::models::{Journey, Settings};
/// use chrono::NaiveDate;
///
/// let journey = Journey {
///     id: "jrn_002".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
///     start_at: "09:00".to_string(),
///     end_at: "13:00".to_string(),
///     is_feriado: true,
///     distance_traveled: None,
/// };
///
/// let breakdown = compute_breakdown(&journey, &Settings::default()).unwrap();
/// assert_eq!(breakdown.total_trabalhado, 240);
/// assert_eq!(breakdown.horas_extras_50, 0);
/// assert_eq!(breakdown.horas_extras_100, 240);
/// ```
pub fn compute_breakdown(journey: &Journey, settings: &Settings) -> EngineResult<Breakdown> {
    let start = parse_clock(&journey.start_at)?;
    let end = parse_clock(&journey.end_at)?;
    let total = shift_duration_minutes(start, end);

    // On a feriado the regular-time ceiling is zero: there is no regular
    // obligation that day, so every worked minute is overtime.
    let standard_cap = if journey.is_feriado {
        0
    } else {
        settings.standard_workday_minutes
    };
    let overtime = total.saturating_sub(standard_cap);

    let (tier1, tier2) = if journey.is_feriado {
        // Holiday work is always at the premium rate.
        (0, overtime)
    } else {
        let tier1 = overtime.min(settings.overtime_tier1_cap_minutes);
        (tier1, overtime - tier1)
    };

    let km_rodados = if settings.km_enabled {
        journey.distance_traveled.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Ok(Breakdown {
        total_trabalhado: total,
        horas_extras_50: tier1,
        horas_extras_100: tier2,
        km_rodados,
    })
}
