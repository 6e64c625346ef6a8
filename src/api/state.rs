//! Application state for the Journey Accounting Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::JourneyStore;

/// Shared application state.
///
/// Holds the journey store behind an `Arc` so every handler sees the same
/// snapshot source. The engine itself is stateless; all shared state lives
/// in the store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn JourneyStore>,
}

impl AppState {
    /// Creates a new application state backed by the given store.
    pub fn new(store: impl JourneyStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the journey store.
    pub fn store(&self) -> &dyn JourneyStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
