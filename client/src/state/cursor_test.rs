use super::*;
use crate::state::test_support::{ScriptedCatalog, page_of};

use futures::executor::block_on;

// =============================================================
// PageCursor
// =============================================================

#[test]
fn cursor_starts_on_first_page() {
    let cursor = PageCursor::new();
    assert_eq!(cursor.current_page(), 1);
    assert!(!cursor.is_last_page());
}

#[test]
fn request_carries_current_page_and_mode() {
    let cursor = PageCursor::new();
    let mode = BoardMode::Search("Matrix".to_owned());
    assert_eq!(cursor.request(&mode), PageRequest { page: 1, mode });
}

#[test]
fn record_advances_and_maps_items() {
    let mut cursor = PageCursor::new();
    let items = cursor.record(&page_of(3, 5));
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, 1);
    assert!(items[0].image_url.ends_with("/poster-1.jpg"));
    assert_eq!(cursor.current_page(), 2);
    assert!(!cursor.is_last_page());
}

#[test]
fn record_latches_last_page_when_page_equals_total() {
    let mut cursor = PageCursor::new();
    cursor.record(&page_of(20, 2));
    assert!(!cursor.is_last_page());
    cursor.record(&page_of(20, 2));
    assert!(cursor.is_last_page());
    assert_eq!(cursor.current_page(), 3);
}

#[test]
fn record_advances_on_empty_page() {
    let mut cursor = PageCursor::new();
    let items = cursor.record(&page_of(0, 0));
    assert!(items.is_empty());
    assert_eq!(cursor.current_page(), 2);
    assert!(cursor.is_last_page());
}

// =============================================================
// fetch_next
// =============================================================

#[test]
fn fetch_next_uses_popular_source_in_popular_mode() {
    let catalog = ScriptedCatalog::new(vec![Ok(page_of(20, 3))]);
    let mut cursor = PageCursor::new();

    let items = block_on(cursor.fetch_next(&catalog, &BoardMode::Popular)).expect("page");

    assert_eq!(items.len(), 20);
    assert_eq!(catalog.calls(), vec![(1, None)]);
}

#[test]
fn fetch_next_passes_term_in_search_mode() {
    let catalog = ScriptedCatalog::new(vec![Ok(page_of(5, 1))]);
    let mut cursor = PageCursor::new();
    let mode = BoardMode::Search("Matrix".to_owned());

    let items = block_on(cursor.fetch_next(&catalog, &mode)).expect("page");

    assert_eq!(items.len(), 5);
    assert_eq!(catalog.calls(), vec![(1, Some("Matrix".to_owned()))]);
    assert!(cursor.is_last_page());
}

#[test]
fn fetch_next_failure_leaves_cursor_untouched() {
    let catalog = ScriptedCatalog::new(vec![Ok(page_of(20, 3)), Err(CatalogError::Status { status: 500 })]);
    let mut cursor = PageCursor::new();

    block_on(cursor.fetch_next(&catalog, &BoardMode::Popular)).expect("first page");
    let err = block_on(cursor.fetch_next(&catalog, &BoardMode::Popular)).expect_err("second page fails");

    assert_eq!(err, CatalogError::Status { status: 500 });
    assert_eq!(cursor.current_page(), 2);
    assert!(!cursor.is_last_page());
    assert_eq!(catalog.calls(), vec![(1, None), (2, None)]);
}

#[test]
fn current_page_never_decreases_across_mixed_outcomes() {
    let catalog = ScriptedCatalog::new(vec![
        Ok(page_of(20, 9)),
        Err(CatalogError::Request("offline".to_owned())),
        Ok(page_of(0, 9)),
        Ok(page_of(20, 9)),
    ]);
    let mut cursor = PageCursor::new();
    let mut seen = vec![cursor.current_page()];

    for _ in 0..4 {
        let _ = block_on(cursor.fetch_next(&catalog, &BoardMode::Popular));
        seen.push(cursor.current_page());
    }

    assert_eq!(seen, vec![1, 2, 2, 3, 4]);
}
