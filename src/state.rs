//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! movie source is optional: without an upstream key the server still serves
//! the app shell and the movie endpoints report themselves unavailable.

use std::sync::Arc;

use crate::tmdb::MovieSource;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub movies: Option<Arc<dyn MovieSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(movies: Option<Arc<dyn MovieSource>>) -> Self {
        Self { movies }
    }
}
