//! Catalog API helpers for the poster board.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the server's
//! catalog proxy.
//! Server-side (SSR): stubs returning [`CatalogError::Request`] since boards
//! only load pages in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`CatalogError`] so the board controller can
//! treat them uniformly as a fetch failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use catalog::{CatalogError, MovieDetail, MoviePage};
use serde::de::DeserializeOwned;

const POPULAR_ENDPOINT: &str = "/api/movies/popular";
const SEARCH_ENDPOINT: &str = "/api/movies/search";

/// Source of catalog pages for a poster board.
///
/// Implemented over HTTP by [`HttpCatalog`]; tests substitute scripted sources.
pub trait CatalogClient {
    /// Fetch one page of the popular listing.
    fn fetch_popular(&self, page: u32) -> impl Future<Output = Result<MoviePage, CatalogError>>;

    /// Fetch one page of title search results for `term`.
    fn fetch_search(&self, page: u32, term: &str) -> impl Future<Output = Result<MoviePage, CatalogError>>;
}

/// Catalog client backed by the server's `/api/movies` proxy.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCatalog;

impl CatalogClient for HttpCatalog {
    async fn fetch_popular(&self, page: u32) -> Result<MoviePage, CatalogError> {
        get_json(POPULAR_ENDPOINT, &popular_params(page)).await
    }

    async fn fetch_search(&self, page: u32, term: &str) -> Result<MoviePage, CatalogError> {
        get_json(SEARCH_ENDPOINT, &search_params(page, term)).await
    }
}

/// Fetch the detail record shown by the movie overlay.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_movie_detail(id: u64) -> Result<MovieDetail, CatalogError> {
    get_json(&movie_detail_endpoint(id), &[]).await
}

fn popular_params(page: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string())]
}

fn search_params(page: u32, term: &str) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("query", term.to_owned())]
}

fn movie_detail_endpoint(id: u64) -> String {
    format!("/api/movies/{id}")
}

async fn get_json<T: DeserializeOwned>(url: &str, params: &[(&'static str, String)]) -> Result<T, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status { status: resp.status() });
        }
        resp.json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, params);
        Err(CatalogError::Request("not available on server".to_owned()))
    }
}
