//! Ranking over the built-in catalog and small fixtures.

use crate::common::{gtfs_pair_catalog, numbered_catalog};
use docsearch::{Bm25Engine, DocumentCatalog, LazyIndex, QueryProcessor, TextIndex};

fn run(catalog: &DocumentCatalog, query: &str) -> Vec<(String, Option<String>)> {
    let mut index = LazyIndex::new(Bm25Engine::default());
    let built = index.ensure_index(catalog);
    QueryProcessor::default()
        .run_query(&built, query)
        .into_iter()
        .map(|r| (r.name, r.url))
        .collect()
}

#[test]
fn test_reading_ranks_read_page_first() {
    let results = run(&gtfs_pair_catalog(), "reading");
    assert_eq!(
        results[0],
        ("Reading from a GTFS file".to_string(), Some("/doc/read".to_string()))
    );
}

#[test]
fn test_builtin_reading_and_writing() {
    let catalog = DocumentCatalog::builtin();
    let reading = run(&catalog, "reading");
    assert_eq!(reading[0].0, "Reading from a GTFS file");
    assert_eq!(
        reading[0].1.as_deref(),
        Some("/fs2-gtfs/documentation/file/reading/")
    );

    let writing = run(&catalog, "writing");
    assert_eq!(writing[0].0, "Writing to a GTFS file");
}

#[test]
fn test_builtin_every_hit_resolves() {
    let catalog = DocumentCatalog::builtin();
    for query in ["gtfs", "rule", "model", "file"] {
        for (name, url) in run(&catalog, query) {
            assert!(url.is_some(), "{} did not resolve", name);
        }
    }
}

#[test]
fn test_scores_descend() {
    let catalog = DocumentCatalog::builtin();
    let mut index = LazyIndex::new(Bm25Engine::default());
    let built = index.ensure_index(&catalog);
    let hits = built.index.search("gtfs file");
    assert!(!hits.is_empty());
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let results = run(&numbered_catalog(4), "gtfs");
    let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Doc 0", "Doc 1", "Doc 2", "Doc 3"]);
}

#[test]
fn test_case_and_diacritics_are_folded() {
    let catalog = DocumentCatalog::from_json(
        r#"[{"title": "Café", "url": "/cafe", "content": "The Café serves coffee"}]"#,
    )
    .expect("valid catalog");
    assert_eq!(run(&catalog, "CAFE").len(), 1);
    assert_eq!(run(&catalog, "café").len(), 1);
}
