//! Per-board page cursor.
//!
//! DESIGN
//! ======
//! The cursor only advances after a response arrives; a failed fetch leaves
//! it exactly where it was. Terminal detection is recorded here but enforced
//! by the board controller, which never asks a terminal cursor for more.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use catalog::{BoardMode, CatalogError, DisplayItem, MoviePage, PageRequest};

use crate::net::api::CatalogClient;

/// Page counter and last-page flag for one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor {
    current_page: u32,
    last_page: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    #[must_use]
    pub fn new() -> Self {
        Self { current_page: 1, last_page: false }
    }

    /// Page the next fetch will ask for.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// True once a response reported the page just fetched as the final one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.last_page
    }

    /// Build the request for the next page in `mode`.
    #[must_use]
    pub fn request(&self, mode: &BoardMode) -> PageRequest {
        PageRequest { page: self.current_page, mode: mode.clone() }
    }

    /// Record a received page: latch the last-page flag, advance the counter,
    /// and map the raw entries into display items.
    ///
    /// Empty pages advance the counter too.
    pub fn record(&mut self, page: &MoviePage) -> Vec<DisplayItem> {
        if self.current_page >= page.total_pages {
            self.last_page = true;
        }
        self.current_page = self.current_page.saturating_add(1);
        page.results.iter().map(DisplayItem::from_raw).collect()
    }

    /// Fetch and record the next page.
    ///
    /// # Errors
    ///
    /// Returns the client's [`CatalogError`] unchanged; the cursor does not
    /// move in that case.
    pub async fn fetch_next<C: CatalogClient>(
        &mut self,
        client: &C,
        mode: &BoardMode,
    ) -> Result<Vec<DisplayItem>, CatalogError> {
        let request = self.request(mode);
        let page = fetch_page(client, &request).await?;
        Ok(self.record(&page))
    }
}

/// Dispatch a page request to the fetch function matching its mode.
///
/// # Errors
///
/// Propagates the client's [`CatalogError`].
pub async fn fetch_page<C: CatalogClient>(client: &C, request: &PageRequest) -> Result<MoviePage, CatalogError> {
    match &request.mode {
        BoardMode::Popular => client.fetch_popular(request.page).await,
        BoardMode::Search(term) => client.fetch_search(request.page, term).await,
    }
}
