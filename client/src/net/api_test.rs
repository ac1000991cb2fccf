use super::*;

#[test]
fn popular_params_carry_page_only() {
    assert_eq!(popular_params(3), vec![("page", "3".to_owned())]);
}

#[test]
fn search_params_pass_term_unmodified() {
    assert_eq!(
        search_params(1, "Matrix & Co"),
        vec![("page", "1".to_owned()), ("query", "Matrix & Co".to_owned())]
    );
}

#[test]
fn movie_detail_endpoint_formats_expected_path() {
    assert_eq!(movie_detail_endpoint(603), "/api/movies/603");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_catalog_is_unavailable_outside_the_browser() {
    let err = futures::executor::block_on(HttpCatalog.fetch_popular(1)).expect_err("no browser transport");
    assert_eq!(err, CatalogError::Request("not available on server".to_owned()));
}
