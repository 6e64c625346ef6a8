//! HTTP request handlers for the Journey Accounting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_breakdown, parse_clock, view};
use crate::models::{Journey, Settings};

use super::request::{ComputeRequest, JourneyRequest, ListQuery};
use super::response::{ApiError, ApiErrorResponse, JourneyEntry, SavedResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/journeys",
            get(list_journeys_handler).post(save_journey_handler),
        )
        .route("/journeys/:id", axum::routing::delete(delete_journey_handler))
        .route("/compute", post(compute_handler))
        .route(
            "/settings",
            get(get_settings_handler).put(put_settings_handler),
        )
        .with_state(state)
}

/// Converts a JSON extractor rejection into an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /journeys.
///
/// Loads the snapshot from the store, filters it to the requested
/// accounting window, and returns the ordered `(journey, breakdown)`
/// pairs.
async fn list_journeys_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        period = ?query.period,
        sort = ?query.sort,
        "Listing journeys"
    );

    let (journeys, settings) = match state.store().load() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Store load failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let today = Local::now().date_naive();
    let start_time = Instant::now();
    match view(&journeys, &settings, today, query.period, query.sort) {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                journeys_count = journeys.len(),
                listed_count = entries.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Listing computed"
            );
            let body: Vec<JourneyEntry> = entries
                .into_iter()
                .map(|(journey, breakdown)| JourneyEntry { journey, breakdown })
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Listing failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /journeys.
///
/// Creates a journey (no id) or replaces one wholesale (id present).
/// Malformed clock strings are rejected at the boundary so the store never
/// holds a record the engine cannot compute.
async fn save_journey_handler(
    State(state): State<AppState>,
    payload: Result<Json<JourneyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let journey: Journey = request.into();
    if let Err(err) = parse_clock(&journey.start_at).and(parse_clock(&journey.end_at)) {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected malformed journey");
        return ApiErrorResponse::from(err).into_response();
    }

    let editing = !journey.id.is_empty();
    match state.store().save(journey) {
        Ok(id) => {
            info!(correlation_id = %correlation_id, journey_id = %id, editing, "Journey saved");
            let status = if editing {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            (status, Json(SavedResponse { id })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Save failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /journeys/{id}.
async fn delete_journey_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().delete(&id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, journey_id = %id, "Journey deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, journey_id = %id, error = %err, "Delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /compute.
///
/// A what-if preview: computes the breakdown for one journey without
/// persisting it, optionally under a settings override instead of the
/// stored profile.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let settings = match request.settings {
        Some(settings) => {
            if let Err(err) = settings.validate() {
                warn!(correlation_id = %correlation_id, error = %err, "Invalid settings override");
                return ApiErrorResponse::from(err).into_response();
            }
            settings
        }
        None => match state.store().load() {
            Ok((_, settings)) => settings,
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Store load failed");
                return ApiErrorResponse::from(err).into_response();
            }
        },
    };

    let journey: Journey = request.journey.into();
    match compute_breakdown(&journey, &settings) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                total_trabalhado = breakdown.total_trabalhado,
                "Preview computed"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Preview failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> Response {
    match state.store().load() {
        Ok((_, settings)) => (StatusCode::OK, Json(settings)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PUT /settings.
///
/// Replaces the settings profile. Validation happens here, before the
/// profile is stored, so an invalid profile never reaches a computation.
async fn put_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    if let Err(err) = settings.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected invalid settings");
        return ApiErrorResponse::from(err).into_response();
    }

    match state.store().update_settings(settings.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                month_start_day = settings.month_start_day,
                "Settings replaced"
            );
            (StatusCode::OK, Json(settings)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Settings update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
