//! External store contract for journeys and settings.
//!
//! The engine never owns persistence: journeys and the settings profile
//! live behind a load/save/delete contract supplied by an external
//! collaborator. This module defines that contract plus a reference
//! in-memory implementation used by the API and tests. Store failures are
//! a separate taxonomy from engine errors and are surfaced unchanged.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{Journey, Settings};

/// Errors surfaced by a journey store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No journey exists with the given id.
    #[error("Journey not found: {id}")]
    NotFound {
        /// The id that was not found.
        id: String,
    },

    /// The store could not service the request.
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// The contract an external journey store fulfils.
///
/// The store is the sole owner of record identity and persistence; the
/// engine only ever sees fully materialized snapshots from [`load`] and
/// hands back whole records for [`save`]. Records are mutated only by full
/// replacement.
///
/// [`load`]: JourneyStore::load
/// [`save`]: JourneyStore::save
pub trait JourneyStore: Send + Sync {
    /// Loads the full snapshot: all journeys in insertion order plus the
    /// settings profile.
    fn load(&self) -> StoreResult<(Vec<Journey>, Settings)>;

    /// Saves a journey and returns its id.
    ///
    /// A journey with an empty id is a creation and receives a store-owned
    /// id; a journey carrying an id replaces the existing record wholesale
    /// and fails with [`StoreError::NotFound`] if no such record exists.
    fn save(&self, journey: Journey) -> StoreResult<String>;

    /// Deletes the journey with the given id.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Replaces the settings profile.
    fn update_settings(&self, settings: Settings) -> StoreResult<()>;
}
