//! Upstream movie catalog (TMDB) client.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`MovieSource`] trait so route tests can swap in a
//! canned source. [`TmdbClient`] is the thin reqwest wrapper used in
//! production; response bodies go through the pure `parse_*` functions.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use catalog::{MovieDetail, MoviePage};

use crate::config::{ConfigError, TmdbConfig};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by upstream catalog calls.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP request never produced a response.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("upstream response error: status {status}")]
    Status { status: u16, body: String },

    /// The upstream body did not match the expected schema.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl TmdbError {
    /// HTTP status the proxy answers with for this failure.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::HttpClientBuild(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Status { status: 404, .. } => StatusCode::NOT_FOUND,
            Self::Request(_) | Self::Status { .. } | Self::Parse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Paged movie listings plus detail lookups.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// One page of the popular listing.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the request fails or the body is malformed.
    async fn popular(&self, page: u32) -> Result<MoviePage, TmdbError>;

    /// One page of title search results for `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the request fails or the body is malformed.
    async fn search(&self, page: u32, query: &str) -> Result<MoviePage, TmdbError>;

    /// Full record for movie `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`TmdbError`] if the request fails, the movie does not
    /// exist, or the body is malformed.
    async fn detail(&self, id: u64) -> Result<MovieDetail, TmdbError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    /// Build a client from the parsed upstream config.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_config(config: &TmdbConfig) -> Result<Self, TmdbError> {
        let api_key = config.require_api_key()?.to_string();
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| TmdbError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: config.base_url.clone(), language: config.language.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, extra: &[(&str, String)]) -> Result<String, TmdbError> {
        let url = format!("{}{path}", self.base_url);
        let started = std::time::Instant::now();
        let response = self
            .http
            .get(&url)
            .query(&base_params(&self.api_key, &self.language))
            .query(extra)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%path, error = %e, "tmdb request failed");
                TmdbError::Request(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TmdbError::Request(e.to_string()))?;
        tracing::debug!(%path, status, elapsed_ms = elapsed_ms(started.elapsed()), "tmdb response");

        check_status(status, text)
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn popular(&self, page: u32) -> Result<MoviePage, TmdbError> {
        let body = self.get("/movie/popular", &page_params(page)).await?;
        parse_page(&body)
    }

    async fn search(&self, page: u32, query: &str) -> Result<MoviePage, TmdbError> {
        let body = self.get("/search/movie", &search_params(page, query)).await?;
        parse_page(&body)
    }

    async fn detail(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        let body = self.get(&detail_path(id), &[]).await?;
        parse_detail(&body)
    }
}

// =============================================================================
// REQUEST BUILDING
// =============================================================================

fn base_params<'a>(api_key: &'a str, language: &'a str) -> [(&'static str, &'a str); 2] {
    [("api_key", api_key), ("language", language)]
}

fn page_params(page: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string())]
}

fn search_params(page: u32, query: &str) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("query", query.to_string()), ("include_adult", "false".to_string())]
}

fn detail_path(id: u64) -> String {
    format!("/movie/{id}")
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

// =============================================================================
// PARSING
// =============================================================================

fn check_status(status: u16, body: String) -> Result<String, TmdbError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(TmdbError::Status { status, body })
    }
}

/// Parse an upstream listing page.
///
/// # Errors
///
/// Returns [`TmdbError::Parse`] when the body is not a valid page.
pub fn parse_page(json: &str) -> Result<MoviePage, TmdbError> {
    catalog::decode_page(json).map_err(|e| TmdbError::Parse(e.to_string()))
}

/// Parse an upstream movie detail record.
///
/// # Errors
///
/// Returns [`TmdbError::Parse`] when the body is not a valid record.
pub fn parse_detail(json: &str) -> Result<MovieDetail, TmdbError> {
    catalog::decode_detail(json).map_err(|e| TmdbError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
