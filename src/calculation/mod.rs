//! Calculation logic for the Journey Accounting Engine.
//!
//! This module contains all the pure computation: clock-string parsing and
//! midnight-safe duration arithmetic, the journey accounting engine that
//! splits worked minutes into regular time and two overtime tiers, the
//! accounting period resolver for the rolling pay-period window, and the
//! listing layer that filters and orders journeys by their derived totals.
//!
//! Everything here is synchronous, side-effect free, and safe to call
//! concurrently: the engine and resolver are pure functions over immutable
//! inputs.

mod breakdown;
mod clock;
mod listing;
mod period;

pub use breakdown::compute_breakdown;
pub use clock::{
    FULL_DAY_MINUTES, format_minutes_to_hours, parse_clock, shift_duration_minutes,
};
pub use listing::{PeriodFilter, SortKey, view};
pub use period::{TRAILING_WINDOW_DAYS, current_period, trailing_window};
