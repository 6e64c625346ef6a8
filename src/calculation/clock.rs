//! Time arithmetic utilities.
//!
//! This module provides the clock-string parsing, shift duration, and
//! minute formatting primitives the engine is built on. Durations are
//! normalized with modular arithmetic on minutes-of-day rather than full
//! date-time objects, which keeps timezone and calendar-rollover edge
//! cases out of the core calculation.

use crate::error::{EngineError, EngineResult};

/// The number of minutes in a full day.
pub const FULL_DAY_MINUTES: u32 = 1440;

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// The accepted format is exactly `HH:MM`: 24-hour, zero-padded, hour 0-23
/// and minute 0-59. This is the sole textual wire format the engine parses.
///
/// # Errors
///
/// Returns [`EngineError::InvalidClockTime`] for anything else, including
/// unpadded hours ("9:00"), out-of-range components ("24:00", "08:60"),
/// and trailing garbage.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::parse_clock;
///
/// assert_eq!(parse_clock("00:00").unwrap(), 0);
/// assert_eq!(parse_clock("08:30").unwrap(), 510);
/// assert_eq!(parse_clock("23:59").unwrap(), 1439);
/// assert!(parse_clock("24:00").is_err());
/// ```
pub fn parse_clock(value: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidClockTime {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    if !bytes[..2].iter().all(u8::is_ascii_digit) || !bytes[3..].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let hour: u32 = value[..2].parse().map_err(|_| invalid())?;
    let minute: u32 = value[3..].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

/// Computes the duration of a shift in minutes, crossing midnight if needed.
///
/// Both arguments are minutes since midnight as returned by [`parse_clock`].
/// The duration is `(end - start + 1440) mod 1440`, treating every shift as
/// forward-in-time, so a shift ending at a numerically earlier time simply
/// runs into the next day.
///
/// An identical start and end is by policy a full 24-hour shift rather than
/// an error: a zero-length record cannot represent "no work". The result is
/// therefore always in `[1, 1440]`.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::{parse_clock, shift_duration_minutes};
///
/// let start = parse_clock("22:00").unwrap();
/// let end = parse_clock("06:00").unwrap();
/// assert_eq!(shift_duration_minutes(start, end), 480);
///
/// let noon = parse_clock("12:00").unwrap();
/// assert_eq!(shift_duration_minutes(noon, noon), 1440);
/// ```
pub fn shift_duration_minutes(start: u32, end: u32) -> u32 {
    let duration = (end + FULL_DAY_MINUTES - start) % FULL_DAY_MINUTES;
    if duration == 0 { FULL_DAY_MINUTES } else { duration }
}

/// Formats a minute count as an `"8h 05m"` style string.
///
/// # Errors
///
/// Returns [`EngineError::NegativeMinutes`] for negative input; a negative
/// duration indicates a data defect upstream, never a formatting concern.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::format_minutes_to_hours;
///
/// assert_eq!(format_minutes_to_hours(600).unwrap(), "10h 00m");
/// assert_eq!(format_minutes_to_hours(125).unwrap(), "2h 05m");
/// assert!(format_minutes_to_hours(-1).is_err());
/// ```
pub fn format_minutes_to_hours(minutes: i64) -> EngineResult<String> {
    if minutes < 0 {
        return Err(EngineError::NegativeMinutes { minutes });
    }
    Ok(format!("{}h {:02}m", minutes / 60, minutes % 60))
}
