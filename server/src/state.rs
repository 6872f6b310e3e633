//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the forwarding client; activity data lives in the backend.

use crate::services::backend::ActivitiesBackend;

/// Clone is required by Axum; the inner `reqwest::Client` is reference-counted.
#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: ActivitiesBackend,
}

impl AppState {
    #[must_use]
    pub fn new(backend: ActivitiesBackend) -> Self {
        Self { backend }
    }
}
