//! Error types for the Journey Accounting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during journey accounting.
//! Every error here is deterministic and raised synchronously; none of
//! them indicates a transient condition worth retrying.

use thiserror::Error;

/// The main error type for the Journey Accounting Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use jornada_engine::error::EngineError;
///
/// let error = EngineError::InvalidClockTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid clock time '25:00': expected HH:MM, 24-hour, zero-padded"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock string did not match the `HH:MM` wire format.
    #[error("Invalid clock time '{value}': expected HH:MM, 24-hour, zero-padded")]
    InvalidClockTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A settings profile field held an out-of-range value.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A negative minute count was passed to duration formatting.
    #[error("Cannot format negative minutes: {minutes}")]
    NegativeMinutes {
        /// The offending minute count.
        minutes: i64,
    },

    /// Settings profile file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings profile file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
