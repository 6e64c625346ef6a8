//! Journey model.
//!
//! This module defines the Journey struct representing one recorded work
//! shift in the journey accounting system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one recorded work shift ("journey").
///
/// A journey carries the raw facts of a shift: its nominal day, the
/// wall-clock start and end times in `HH:MM`, a holiday flag that changes
/// overtime policy, and an optional distance traveled. When `end_at` is
/// numerically earlier than `start_at` the shift crosses midnight.
///
/// The record identity (`id`) is owned by the external store; the engine
/// never mutates a journey, it borrows the data for the duration of one
/// computation.
///
/// The wire format uses the store's camelCase field names.
///
/// # Example
///
/// ```
/// use jornada_engine::models::Journey;
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
/// assert!(!journey.is_feriado);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Unique identifier for the journey, assigned by the store.
    pub id: String,
    /// The calendar date of the shift (local, no time-of-day).
    pub date: NaiveDate,
    /// The wall-clock start time, `HH:MM`.
    pub start_at: String,
    /// The wall-clock end time, `HH:MM`. May be earlier than `start_at`
    /// when the shift crosses midnight.
    pub end_at: String,
    /// Whether the shift day is a holiday (feriado).
    pub is_feriado: bool,
    /// Distance traveled during the shift, present only when distance
    /// accounting is enabled in the settings profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_traveled: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_journey() -> Journey {
        Journey {
            id: "jrn_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            start_at: "08:00".to_string(),
            end_at: "18:00".to_string(),
            is_feriado: false,
            distance_traveled: Some(Decimal::from_str("42.5").unwrap()),
        }
    }

    #[test]
    fn test_journey_serialization_uses_camel_case() {
        let journey = make_journey();
        let json = serde_json::to_string(&journey).unwrap();
        assert!(json.contains("\"startAt\":\"08:00\""));
        assert!(json.contains("\"endAt\":\"18:00\""));
        assert!(json.contains("\"isFeriado\":false"));
        assert!(json.contains("\"distanceTraveled\":\"42.5\""));
    }

    #[test]
    fn test_journey_round_trip() {
        let journey = make_journey();
        let json = serde_json::to_string(&journey).unwrap();
        let deserialized: Journey = serde_json::from_str(&json).unwrap();
        assert_eq!(journey, deserialized);
    }

    #[test]
    fn test_journey_deserialization_without_distance() {
        let json = r#"{
            "id": "jrn_002",
            "date": "2026-03-11",
            "startAt": "22:00",
            "endAt": "06:00",
            "isFeriado": true
        }"#;
        let journey: Journey = serde_json::from_str(json).unwrap();
        assert_eq!(journey.id, "jrn_002");
        assert!(journey.is_feriado);
        assert_eq!(journey.distance_traveled, None);
    }

    #[test]
    fn test_distance_omitted_when_absent() {
        let journey = Journey {
            distance_traveled: None,
            ..make_journey()
        };
        let json = serde_json::to_string(&journey).unwrap();
        assert!(!json.contains("distanceTraveled"));
    }
}
