//! Shared movie catalog model for the poster board.
//!
//! This crate owns the representation exchanged between `cinegrid` (the
//! catalog proxy) and `client` (the board UI). Upstream entries arrive as
//! [`RawMovie`] pages; the board only ever renders [`DisplayItem`]s built from
//! them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Image CDN prefix for poster thumbnails sized for the board grid.
pub const POSTER_CDN_BASE: &str = "https://image.tmdb.org/t/p/w220_and_h330_face";

/// Image CDN prefix for the larger detail overlay poster.
pub const DETAIL_CDN_BASE: &str = "https://image.tmdb.org/t/p/w500";

// =============================================================================
// ERROR
// =============================================================================

/// Failure to obtain a page (or detail record) from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("catalog request failed: {0}")]
    Request(String),
    /// The catalog answered with a non-success HTTP status.
    #[error("catalog responded with status {status}")]
    Status { status: u16 },
    /// The response body did not match the expected schema.
    #[error("catalog response decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One movie entry inside a catalog page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    pub id: u64,
    pub title: String,
    /// Server-relative poster path (e.g. `/abc.jpg`); upstream sends `null`
    /// for movies without artwork.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// One page of catalog results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<RawMovie>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

/// Genre label attached to a movie detail record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full record shown by the detail overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetail {
    /// Poster URL at overlay size, empty when the movie has no artwork.
    #[must_use]
    pub fn image_url(&self) -> String {
        poster_url(DETAIL_CDN_BASE, self.poster_path.as_deref())
    }

    /// Comma-separated genre names.
    #[must_use]
    pub fn genre_line(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Decode a catalog page from a JSON body.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the body is not a valid page.
pub fn decode_page(body: &str) -> Result<MoviePage, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// Decode a movie detail record from a JSON body.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the body is not a valid detail record.
pub fn decode_detail(body: &str) -> Result<MovieDetail, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

// =============================================================================
// BOARD MODE
// =============================================================================

/// Which listing a board pages through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoardMode {
    /// The "popular right now" listing.
    #[default]
    Popular,
    /// Title search for the given term.
    Search(String),
}

impl BoardMode {
    /// Pick a mode from an optional search query; blank terms mean popular.
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        match query.map(str::trim) {
            Some(term) if !term.is_empty() => Self::Search(term.to_owned()),
            _ => Self::Popular,
        }
    }

    /// Search term, or `""` in popular mode.
    #[must_use]
    pub fn term(&self) -> &str {
        match self {
            Self::Popular => "",
            Self::Search(term) => term,
        }
    }

    /// Board headline.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Popular => "Popular movies right now".to_owned(),
            Self::Search(term) => format!("\"{term}\" search results"),
        }
    }

    /// Inline message shown when a cycle returns zero results.
    #[must_use]
    pub fn not_found_message(&self) -> String {
        match self {
            Self::Popular => "No movies to show right now.".to_owned(),
            Self::Search(term) => format!("No movies found for \"{term}\"."),
        }
    }
}

/// The next page a board wants from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub mode: BoardMode,
}

// =============================================================================
// DISPLAY ITEMS
// =============================================================================

/// A poster as rendered on the board. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem {
    /// Catalog id; unique within one page, not across pages.
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub rating: f64,
}

impl DisplayItem {
    /// Map a raw catalog entry into a board poster.
    #[must_use]
    pub fn from_raw(raw: &RawMovie) -> Self {
        Self {
            id: raw.id,
            title: raw.title.clone(),
            image_url: poster_url(POSTER_CDN_BASE, raw.poster_path.as_deref()),
            rating: raw.vote_average,
        }
    }

    /// Rating formatted for the poster badge.
    #[must_use]
    pub fn rating_label(&self) -> String {
        rating_label(self.rating)
    }
}

/// Format a vote average with one decimal place.
#[must_use]
pub fn rating_label(rating: f64) -> String {
    format!("{rating:.1}")
}

fn poster_url(base: &str, path: Option<&str>) -> String {
    match path.map(str::trim) {
        Some(path) if !path.is_empty() => format!("{base}/{}", path.trim_start_matches('/')),
        _ => String::new(),
    }
}
