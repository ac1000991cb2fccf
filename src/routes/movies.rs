//! Movie catalog proxy routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the upstream catalog directly; these handlers
//! validate paging input, forward to the configured [`MovieSource`] and map
//! upstream failures onto proxy status codes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::{MovieDetail, MoviePage};
use serde::Deserialize;

use crate::state::AppState;
use crate::tmdb::{MovieSource, TmdbError};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub page: Option<u32>,
    pub query: Option<String>,
}

/// Rejections produced by the movie routes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("page must be 1 or greater")]
    InvalidPage,

    #[error("query must not be empty")]
    EmptyQuery,

    #[error("movie catalog is not configured")]
    Unavailable,

    #[error(transparent)]
    Upstream(#[from] TmdbError),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPage | Self::EmptyQuery => StatusCode::BAD_REQUEST,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(err) => err.status_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// `GET /api/movies/popular?page=N` — one page of popular movies.
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<MoviePage>, ApiError> {
    let page = validate_page(params.page)?;
    let source = source(&state)?;
    let listing = source.popular(page).await.inspect_err(|e| log_upstream("popular", e))?;
    Ok(Json(listing))
}

/// `GET /api/movies/search?page=N&query=Q` — one page of title matches.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<MoviePage>, ApiError> {
    let page = validate_page(params.page)?;
    let query = validate_query(params.query.as_deref())?;
    let source = source(&state)?;
    let listing = source
        .search(page, query)
        .await
        .inspect_err(|e| log_upstream("search", e))?;
    Ok(Json(listing))
}

/// `GET /api/movies/{id}` — full record for the detail overlay.
pub async fn detail(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<MovieDetail>, ApiError> {
    let source = source(&state)?;
    let movie = source.detail(id).await.inspect_err(|e| log_upstream("detail", e))?;
    Ok(Json(movie))
}

fn source(state: &AppState) -> Result<Arc<dyn MovieSource>, ApiError> {
    state.movies.clone().ok_or(ApiError::Unavailable)
}

pub(crate) fn validate_page(page: Option<u32>) -> Result<u32, ApiError> {
    match page.unwrap_or(1) {
        0 => Err(ApiError::InvalidPage),
        n => Ok(n),
    }
}

pub(crate) fn validate_query(query: Option<&str>) -> Result<&str, ApiError> {
    match query.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(ApiError::EmptyQuery),
    }
}

fn log_upstream(route: &'static str, err: &TmdbError) {
    tracing::warn!(route, status = %err.status_code(), error = %err, "movie upstream failed");
}

#[cfg(test)]
#[path = "movies_test.rs"]
mod tests;
