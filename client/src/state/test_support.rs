//! Scripted catalog and page builders shared by state tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use catalog::{CatalogError, MoviePage, RawMovie};

use crate::net::api::CatalogClient;

/// Catalog that replays queued responses and records every call as
/// `(page, search term)`.
pub struct ScriptedCatalog {
    responses: RefCell<VecDeque<Result<MoviePage, CatalogError>>>,
    calls: RefCell<Vec<(u32, Option<String>)>>,
}

impl ScriptedCatalog {
    pub fn new(responses: Vec<Result<MoviePage, CatalogError>>) -> Self {
        Self { responses: RefCell::new(responses.into()), calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(u32, Option<String>)> {
        self.calls.borrow().clone()
    }

    fn next(&self) -> Result<MoviePage, CatalogError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::Request("script exhausted".to_owned())))
    }
}

impl CatalogClient for ScriptedCatalog {
    async fn fetch_popular(&self, page: u32) -> Result<MoviePage, CatalogError> {
        self.calls.borrow_mut().push((page, None));
        self.next()
    }

    async fn fetch_search(&self, page: u32, term: &str) -> Result<MoviePage, CatalogError> {
        self.calls.borrow_mut().push((page, Some(term.to_owned())));
        self.next()
    }
}

/// A page of `count` movies (ids `1..=count`) reporting `total_pages`.
pub fn page_of(count: u64, total_pages: u32) -> MoviePage {
    MoviePage {
        page: 1,
        results: (1..=count)
            .map(|id| RawMovie {
                id,
                title: format!("Movie {id}"),
                poster_path: Some(format!("/poster-{id}.jpg")),
                vote_average: 6.5,
            })
            .collect(),
        total_pages,
        total_results: count,
    }
}
