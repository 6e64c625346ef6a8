//! In-memory reference store.

use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{Journey, Settings};

use super::{JourneyStore, StoreError, StoreResult};

/// An in-memory [`JourneyStore`].
///
/// Keeps journeys in insertion order behind interior locks so it can be
/// shared across request handlers. Intended for tests and single-process
/// deployments; a remote store satisfies the same trait.
#[derive(Debug)]
pub struct MemoryStore {
    journeys: RwLock<Vec<Journey>>,
    settings: RwLock<Settings>,
}

fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Unavailable {
        message: "store lock poisoned".to_string(),
    }
}

impl MemoryStore {
    /// Creates an empty store with the given settings profile.
    pub fn new(settings: Settings) -> Self {
        Self {
            journeys: RwLock::new(Vec::new()),
            settings: RwLock::new(settings),
        }
    }

    /// Creates a store pre-seeded with journeys, preserving their order.
    pub fn with_journeys(settings: Settings, journeys: Vec<Journey>) -> Self {
        Self {
            journeys: RwLock::new(journeys),
            settings: RwLock::new(settings),
        }
    }
}

impl JourneyStore for MemoryStore {
    fn load(&self) -> StoreResult<(Vec<Journey>, Settings)> {
        let journeys = self.journeys.read().map_err(poisoned)?.clone();
        let settings = self.settings.read().map_err(poisoned)?.clone();
        Ok((journeys, settings))
    }

    fn save(&self, mut journey: Journey) -> StoreResult<String> {
        let mut journeys = self.journeys.write().map_err(poisoned)?;

        if journey.id.is_empty() {
            journey.id = Uuid::new_v4().to_string();
            let id = journey.id.clone();
            journeys.push(journey);
            return Ok(id);
        }

        let existing = journeys
            .iter_mut()
            .find(|j| j.id == journey.id)
            .ok_or_else(|| StoreError::NotFound {
                id: journey.id.clone(),
            })?;
        let id = journey.id.clone();
        *existing = journey;
        Ok(id)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut journeys = self.journeys.write().map_err(poisoned)?;
        let before = journeys.len();
        journeys.retain(|j| j.id != id);
        if journeys.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn update_settings(&self, settings: Settings) -> StoreResult<()> {
        *self.settings.write().map_err(poisoned)? = settings;
        Ok(())
    }
}
