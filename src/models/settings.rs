//! Settings profile model.
//!
//! This module defines the Settings struct holding the accounting-calendar
//! and overtime policy parameters shared across all journey computations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_month_start_day() -> u32 {
    1
}

/// The accounting-calendar and overtime policy profile.
///
/// A settings profile is an explicit immutable configuration value passed
/// into every engine and resolver call, never ambient state, so the same
/// journey can be recomputed deterministically under hypothetical settings.
///
/// The wire format uses the store's camelCase field names.
///
/// # Example
///
/// ```
/// use jornada_engine::models::Settings;
///
/// let settings = Settings {
///     month_start_day: 25,
///     km_enabled: false,
///     standard_workday_minutes: 480,
///     overtime_tier1_cap_minutes: 120,
///     km_rate: None,
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Day of the month (1-28) that begins a pay period.
    #[serde(default = "default_month_start_day")]
    pub month_start_day: u32,
    /// Whether distance accounting is active.
    pub km_enabled: bool,
    /// Minutes of regular time before overtime accrues on a non-holiday.
    pub standard_workday_minutes: u32,
    /// Minutes of overtime beyond the standard workday billed at the 50%
    /// rate before the 100% rate begins.
    pub overtime_tier1_cap_minutes: u32,
    /// Rate per kilometer, only meaningful when `km_enabled`. Not used in
    /// time math; carried for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km_rate: Option<Decimal>,
}

impl Settings {
    /// Validates the profile invariants.
    ///
    /// Checked once at settings-load time, never per journey. Rejects a
    /// non-positive standard workday and a month start day outside 1-28
    /// (29-31 are excluded so every month contains the start day).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_workday_minutes == 0 {
            return Err(EngineError::InvalidSettings {
                field: "standardWorkdayMinutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(1..=28).contains(&self.month_start_day) {
            return Err(EngineError::InvalidSettings {
                field: "monthStartDay".to_string(),
                message: format!("must be between 1 and 28, got {}", self.month_start_day),
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            month_start_day: default_month_start_day(),
            km_enabled: false,
            standard_workday_minutes: 480,
            overtime_tier1_cap_minutes: 120,
            km_rate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_standard_workday_rejected() {
        let settings = Settings {
            standard_workday_minutes: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("standardWorkdayMinutes"));
    }

    #[test]
    fn test_month_start_day_zero_rejected() {
        let settings = Settings {
            month_start_day: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_month_start_day_29_rejected() {
        let settings = Settings {
            month_start_day: 29,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("monthStartDay"));
    }

    #[test]
    fn test_month_start_day_bounds_accepted() {
        for day in [1, 28] {
            let settings = Settings {
                month_start_day: day,
                ..Settings::default()
            };
            assert!(settings.validate().is_ok());
        }
    }

    #[test]
    fn test_deserialization_defaults_month_start_day() {
        let json = r#"{
            "kmEnabled": false,
            "standardWorkdayMinutes": 480,
            "overtimeTier1CapMinutes": 120
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.month_start_day, 1);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let settings = Settings {
            km_enabled: true,
            km_rate: Some(Decimal::from_str("1.25").unwrap()),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"monthStartDay\":1"));
        assert!(json.contains("\"kmEnabled\":true"));
        assert!(json.contains("\"standardWorkdayMinutes\":480"));
        assert!(json.contains("\"overtimeTier1CapMinutes\":120"));
        assert!(json.contains("\"kmRate\":\"1.25\""));
    }

    #[test]
    fn test_km_rate_omitted_when_absent() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(!json.contains("kmRate"));
    }
}
