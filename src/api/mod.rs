//! HTTP API module for the Journey Accounting Engine.
//!
//! This module provides the REST endpoints for listing journeys with their
//! derived breakdowns, recording and deleting journeys, previewing a
//! breakdown under hypothetical settings, and reading or replacing the
//! settings profile.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, JourneyRequest, ListQuery};
pub use response::{ApiError, JourneyEntry, SavedResponse};
pub use state::AppState;
