//! Response types for the Journey Accounting Engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from engine and store errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Breakdown, Journey};
use crate::store::StoreError;

/// One entry of the journey listing: the record paired with its derived
/// breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyEntry {
    /// The journey record as stored.
    pub journey: Journey,
    /// The breakdown computed under the current settings profile.
    pub breakdown: Breakdown,
}

/// Response body for a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResponse {
    /// The store-owned id of the saved journey.
    pub id: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidClockTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CLOCK_TIME",
                    format!("Invalid clock time '{}'", value),
                    "Clock times must be HH:MM, 24-hour, zero-padded",
                ),
            },
            EngineError::InvalidSettings { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SETTINGS",
                    format!("Invalid settings field '{}': {}", field, message),
                    "The settings profile violates an invariant",
                ),
            },
            EngineError::NegativeMinutes { minutes } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation produced a negative duration",
                    format!("{} minutes", minutes),
                ),
            },
            EngineError::SettingsNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Settings file not found: {}", path),
                ),
            },
            EngineError::SettingsParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "JOURNEY_NOT_FOUND",
                    format!("Journey not found: {}", id),
                    "No journey exists with the given id",
                ),
            },
            StoreError::Unavailable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Store unavailable", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_clock_time_maps_to_400() {
        let engine_error = EngineError::InvalidClockTime {
            value: "9:00".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_CLOCK_TIME");
    }

    #[test]
    fn test_invalid_settings_maps_to_400() {
        let engine_error = EngineError::InvalidSettings {
            field: "standardWorkdayMinutes".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SETTINGS");
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let store_error = StoreError::NotFound {
            id: "ghost".to_string(),
        };
        let api_error: ApiErrorResponse = store_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "JOURNEY_NOT_FOUND");
    }

    #[test]
    fn test_store_unavailable_maps_to_500() {
        let store_error = StoreError::Unavailable {
            message: "connection refused".to_string(),
        };
        let api_error: ApiErrorResponse = store_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_ERROR");
    }
}
