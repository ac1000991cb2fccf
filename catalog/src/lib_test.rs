use super::*;

fn raw(id: u64, poster_path: Option<&str>) -> RawMovie {
    RawMovie {
        id,
        title: format!("Movie {id}"),
        poster_path: poster_path.map(str::to_owned),
        vote_average: 7.25,
    }
}

// =============================================================
// BoardMode
// =============================================================

#[test]
fn board_mode_from_blank_query_is_popular() {
    assert_eq!(BoardMode::from_query(None), BoardMode::Popular);
    assert_eq!(BoardMode::from_query(Some("")), BoardMode::Popular);
    assert_eq!(BoardMode::from_query(Some("   ")), BoardMode::Popular);
}

#[test]
fn board_mode_from_query_trims_term() {
    assert_eq!(BoardMode::from_query(Some("  Matrix ")), BoardMode::Search("Matrix".to_owned()));
}

#[test]
fn board_mode_description_quotes_search_term() {
    assert_eq!(BoardMode::Popular.description(), "Popular movies right now");
    assert_eq!(BoardMode::Search("Matrix".to_owned()).description(), "\"Matrix\" search results");
}

#[test]
fn not_found_message_contains_term_verbatim() {
    let mode = BoardMode::Search("Blade Runner 2049".to_owned());
    assert!(mode.not_found_message().contains("Blade Runner 2049"));
    assert_eq!(mode.term(), "Blade Runner 2049");
    assert_eq!(BoardMode::Popular.term(), "");
}

// =============================================================
// DisplayItem
// =============================================================

#[test]
fn display_item_builds_cdn_url_from_poster_path() {
    let item = DisplayItem::from_raw(&raw(7, Some("/abc.jpg")));
    assert_eq!(item.id, 7);
    assert_eq!(item.title, "Movie 7");
    assert_eq!(item.image_url, "https://image.tmdb.org/t/p/w220_and_h330_face/abc.jpg");
    assert!((item.rating - 7.25).abs() < f64::EPSILON);
}

#[test]
fn display_item_accepts_path_without_leading_slash() {
    let item = DisplayItem::from_raw(&raw(1, Some("abc.jpg")));
    assert_eq!(item.image_url, "https://image.tmdb.org/t/p/w220_and_h330_face/abc.jpg");
}

#[test]
fn display_item_without_poster_has_empty_url() {
    assert_eq!(DisplayItem::from_raw(&raw(1, None)).image_url, "");
    assert_eq!(DisplayItem::from_raw(&raw(1, Some(""))).image_url, "");
}

#[test]
fn rating_label_uses_one_decimal() {
    assert_eq!(rating_label(7.0), "7.0");
    assert_eq!(rating_label(8.46), "8.5");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_page_reads_upstream_shape() {
    let body = serde_json::json!({
        "page": 2,
        "results": [
            { "id": 603, "title": "The Matrix", "poster_path": "/m.jpg", "vote_average": 8.2, "adult": false },
            { "id": 604, "title": "The Matrix Reloaded", "poster_path": null, "vote_average": 7.0 }
        ],
        "total_pages": 3,
        "total_results": 44
    })
    .to_string();

    let page = decode_page(&body).expect("page should decode");
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_results, 44);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].poster_path, None);
}

#[test]
fn decode_page_defaults_missing_counters() {
    let page = decode_page(r#"{"results":[],"total_pages":0}"#).expect("page should decode");
    assert_eq!(page.page, 1);
    assert_eq!(page.total_results, 0);
    assert!(page.results.is_empty());
}

#[test]
fn decode_page_rejects_missing_total_pages() {
    let err = decode_page(r#"{"results":[]}"#).expect_err("total_pages is required");
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn decode_detail_joins_genres() {
    let body = serde_json::json!({
        "id": 603,
        "title": "The Matrix",
        "poster_path": "/m.jpg",
        "vote_average": 8.2,
        "overview": "A hacker learns the truth.",
        "release_date": "1999-03-31",
        "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }]
    })
    .to_string();

    let detail = decode_detail(&body).expect("detail should decode");
    assert_eq!(detail.genre_line(), "Action, Science Fiction");
    assert_eq!(detail.image_url(), "https://image.tmdb.org/t/p/w500/m.jpg");
    assert_eq!(detail.release_date.as_deref(), Some("1999-03-31"));
}

#[test]
fn catalog_error_messages_name_the_failure() {
    assert_eq!(CatalogError::Status { status: 502 }.to_string(), "catalog responded with status 502");
    assert_eq!(
        CatalogError::Request("offline".to_owned()).to_string(),
        "catalog request failed: offline"
    );
}
