//! Settings profile loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for reading a settings
//! profile from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Settings;

/// Loads a settings profile from a YAML file.
///
/// Validation happens here, at load time: a profile with a non-positive
/// standard workday or an out-of-range month start day never reaches the
/// engine, so per-journey computations can assume a well-formed profile.
///
/// # File format
///
/// ```yaml
/// monthStartDay: 25
/// kmEnabled: true
/// standardWorkdayMinutes: 480
/// overtimeTier1CapMinutes: 120
/// kmRate: "1.25"
/// ```
///
/// # Example
///
/// ```no_run
/// use jornada_engine::config::SettingsLoader;
///
/// let settings = SettingsLoader::load("./config/settings.yaml")?;
/// assert!(settings.standard_workday_minutes > 0);
/// # Ok::<(), jornada_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads and validates the settings profile at `path`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::SettingsNotFound`] if the file cannot be read
    /// - [`EngineError::SettingsParseError`] if it is not valid YAML for a
    ///   settings profile
    /// - [`EngineError::InvalidSettings`] if a field violates a profile
    ///   invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp_profile(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("settings-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_profile() {
        let path = write_temp_profile(
            "monthStartDay: 25\n\
             kmEnabled: true\n\
             standardWorkdayMinutes: 480\n\
             overtimeTier1CapMinutes: 120\n\
             kmRate: \"1.25\"\n",
        );

        let settings = SettingsLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.month_start_day, 25);
        assert!(settings.km_enabled);
        assert_eq!(settings.standard_workday_minutes, 480);
        assert_eq!(settings.overtime_tier1_cap_minutes, 120);
        assert!(settings.km_rate.is_some());
    }

    #[test]
    fn test_load_defaults_month_start_day() {
        let path = write_temp_profile(
            "kmEnabled: false\n\
             standardWorkdayMinutes: 480\n\
             overtimeTier1CapMinutes: 60\n",
        );

        let settings = SettingsLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.month_start_day, 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = SettingsLoader::load("/definitely/missing/settings.yaml").unwrap_err();
        assert!(matches!(err, EngineError::SettingsNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let path = write_temp_profile("kmEnabled: [not a bool\n");

        let err = SettingsLoader::load(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, EngineError::SettingsParseError { .. }));
    }

    #[test]
    fn test_zero_workday_rejected_at_load_time() {
        let path = write_temp_profile(
            "kmEnabled: false\n\
             standardWorkdayMinutes: 0\n\
             overtimeTier1CapMinutes: 120\n",
        );

        let err = SettingsLoader::load(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, EngineError::InvalidSettings { .. }));
    }
}
