//! Catalog loading and the title → URL map.

use docsearch::{CatalogError, Document, DocumentCatalog};

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = DocumentCatalog::builtin();
    assert_eq!(catalog.len(), 7);
    assert!(catalog.validate().is_ok());
    assert_eq!(catalog.title_to_url().len(), 7);
}

#[test]
fn test_builtin_urls() {
    let urls = DocumentCatalog::builtin().title_to_url();
    assert_eq!(urls.resolve("Rule DSL"), Some("/fs2-gtfs/documentation/rules/dsl/"));
    assert_eq!(urls.resolve("Documentation"), Some("/fs2-gtfs/documentation/"));
    assert_eq!(urls.resolve("rule dsl"), None);
}

#[test]
fn test_duplicate_title_is_rejected_and_later_url_wins() {
    let catalog = DocumentCatalog::new(vec![
        Document::new("Same", "/first", "a"),
        Document::new("Same", "/second", "b"),
    ]);
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::DuplicateTitle { ref title }) if title == "Same"
    ));
    assert_eq!(catalog.title_to_url().resolve("Same"), Some("/second"));
}

#[test]
fn test_malformed_json() {
    let err = DocumentCatalog::from_json("[{\"title\": 3}]").unwrap_err();
    assert!(matches!(err, CatalogError::Malformed { .. }));
    assert!(err.to_string().contains("catalog"));
}
