//! Request types for the Journey Accounting Engine API.
//!
//! This module defines the JSON request structures for the journey and
//! compute endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PeriodFilter, SortKey};
use crate::models::{Journey, Settings};

/// Request body for `POST /journeys` and the journey half of a compute
/// preview.
///
/// The id is absent on creation; an edit resubmits the whole record with
/// its id, replacing it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRequest {
    /// The id of an existing journey when editing; omitted on creation.
    #[serde(default)]
    pub id: Option<String>,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The wall-clock start time, `HH:MM`.
    pub start_at: String,
    /// The wall-clock end time, `HH:MM`.
    pub end_at: String,
    /// Whether the shift day is a holiday.
    #[serde(default)]
    pub is_feriado: bool,
    /// Distance traveled during the shift.
    #[serde(default)]
    pub distance_traveled: Option<Decimal>,
}

/// Request body for the `POST /compute` what-if preview.
///
/// Computes a breakdown without persisting anything. When `settings` is
/// present it overrides the stored profile, so the same journey can be
/// previewed under hypothetical policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    /// The journey to compute.
    pub journey: JourneyRequest,
    /// Optional settings override.
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Query parameters for `GET /journeys`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    /// The accounting window to filter by (defaults to the current period).
    #[serde(default)]
    pub period: PeriodFilter,
    /// The ordering to apply (defaults to most recent first).
    #[serde(default)]
    pub sort: SortKey,
}

impl From<JourneyRequest> for Journey {
    fn from(req: JourneyRequest) -> Self {
        Journey {
            id: req.id.unwrap_or_default(),
            date: req.date,
            start_at: req.start_at,
            end_at: req.end_at,
            is_feriado: req.is_feriado,
            distance_traveled: req.distance_traveled,
        }
    }
}
