use std::fs;

use abbmock_core::fixtures::FixtureStore;
use abbmock_core::query::KnownQueries;
use tempfile::TempDir;

fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let search = dir.path().join("search");
    fs::create_dir_all(&search).unwrap();
    fs::write(search.join("test_page1.html"), "<html>test results</html>").unwrap();
    fs::write(
        search.join("crime_and_punishment_page1.html"),
        "<html>crime and punishment</html>",
    )
    .unwrap();
    fs::write(search.join("no_results.html"), "<html>no results</html>").unwrap();
    dir
}

#[test]
fn known_query_forms_resolve_to_the_same_file() {
    let dir = fixture_tree();
    let store = FixtureStore::new(dir.path());
    let queries = KnownQueries::default();

    let canonical = store.search_file(&queries, "test", 1);
    assert!(canonical.ends_with("search/test_page1.html"));
    for form in ["TEST", "  test ", "Test"] {
        assert_eq!(store.search_file(&queries, form, 1), canonical);
    }
}

#[test]
fn unknown_query_falls_back_to_no_results() {
    let dir = fixture_tree();
    let store = FixtureStore::new(dir.path());
    let queries = KnownQueries::default();

    let path = store.search_file(&queries, "unknown_book_xyz", 1);
    assert!(path.ends_with("search/no_results.html"));
}

#[test]
fn missing_page_file_falls_back_to_no_results() {
    let dir = fixture_tree();
    let store = FixtureStore::new(dir.path());
    let queries = KnownQueries::default();

    // "holy bible" is a known query but has no captured pages.
    assert!(store
        .search_file(&queries, "holy bible", 1)
        .ends_with("search/no_results.html"));
    // A known query with page 1 captured but not page 7.
    assert!(store
        .search_file(&queries, "test", 7)
        .ends_with("search/no_results.html"));
}

#[test]
fn detail_file_requires_the_fixture_on_disk() {
    let dir = fixture_tree();
    let store = FixtureStore::new(dir.path());
    assert_eq!(store.detail_file(), None);

    let detail = dir.path().join("detail");
    fs::create_dir_all(&detail).unwrap();
    fs::write(
        detail.join("crime_and_punishment_detail.html"),
        "<html>detail</html>",
    )
    .unwrap();
    let path = store.detail_file().unwrap();
    assert!(path.ends_with("detail/crime_and_punishment_detail.html"));
}
