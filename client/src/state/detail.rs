//! Detail overlay state and click-target resolution.
//!
//! DESIGN
//! ======
//! The board listens for clicks once on the grid container. A click only
//! opens the overlay when it resolves to a poster carrying a numeric movie
//! id; anything else (gaps, skeletons, chrome) is ignored.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use catalog::{CatalogError, MovieDetail};

/// Data attribute carrying a poster's catalog id.
pub const MOVIE_ID_ATTR: &str = "data-movie-id";

/// CSS selector for the clickable poster card.
pub const POSTER_CARD_SELECTOR: &str = "div.item-card[data-movie-id]";

/// Lifecycle of one open detail overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(MovieDetail),
    Failed(String),
}

impl DetailState {
    /// Fold a detail fetch result into overlay state.
    #[must_use]
    pub fn from_result(result: Result<MovieDetail, CatalogError>) -> Self {
        match result {
            Ok(detail) => Self::Loaded(detail),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Resolve the movie id from a poster's data attribute.
#[must_use]
pub fn movie_id_from_attr(attr: Option<String>) -> Option<u64> {
    attr?.trim().parse().ok()
}
