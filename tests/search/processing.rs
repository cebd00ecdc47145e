//! Raw input to engine query, observed through a recording index.

use crate::common::gtfs_pair_catalog;
use docsearch::testing::RecordingIndex;
use docsearch::{
    Bm25Engine, BuiltIndex, DocumentCatalog, LazyIndex, QueryOptions, QueryProcessor, WildcardMode,
};

fn recording(refs: Vec<&str>) -> BuiltIndex<RecordingIndex> {
    BuiltIndex {
        index: RecordingIndex::with_refs(refs),
        urls: gtfs_pair_catalog().title_to_url(),
    }
}

fn processor(wildcard: WildcardMode) -> QueryProcessor {
    QueryProcessor::new(QueryOptions { wildcard })
}

#[test]
fn test_empty_and_blank_never_reach_index() {
    let built = recording(vec!["Reading from a GTFS file"]);
    let processor = QueryProcessor::default();
    for input in ["", " ", "\t\n", "   \u{3000}  "] {
        assert!(processor.run_query(&built, input).is_empty());
    }
    assert!(built.index.queries().is_empty());
}

#[test]
fn test_input_is_tokenized_and_rejoined() {
    let built = recording(vec![]);
    QueryProcessor::default().run_query(&built, "  gtfs   file\treading ");
    assert_eq!(built.index.queries(), vec!["gtfs file reading"]);
}

#[test]
fn test_trailing_wildcard_mode() {
    let built = recording(vec![]);
    processor(WildcardMode::Trailing).run_query(&built, "rea gtfs~1 +file");
    assert_eq!(built.index.queries(), vec!["rea* gtfs~1 +file"]);
}

#[test]
fn test_both_wildcard_mode() {
    let built = recording(vec![]);
    processor(WildcardMode::Both).run_query(&built, "ead wri*");
    assert_eq!(built.index.queries(), vec!["*ead* wri*"]);
}

#[test]
fn test_hits_pass_through_in_engine_order() {
    let built = recording(vec!["Writing to a GTFS file", "Unknown page", "Reading from a GTFS file"]);
    let results = QueryProcessor::default().run_query(&built, "anything");
    let pairs: Vec<(&str, Option<&str>)> = results
        .iter()
        .map(|r| (r.name.as_str(), r.url.as_deref()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Writing to a GTFS file", Some("/doc/write")),
            ("Unknown page", None),
            ("Reading from a GTFS file", Some("/doc/read")),
        ]
    );
}

fn builtin_names(wildcard: WildcardMode, input: &str) -> Vec<String> {
    let catalog = DocumentCatalog::builtin();
    let mut index = LazyIndex::new(Bm25Engine::default());
    let built = index.ensure_index(&catalog);
    processor(wildcard)
        .run_query(&built, input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[test]
fn test_wildcard_modes_keep_whole_word_matches() {
    for word in ["reading", "writing", "files"] {
        let plain = builtin_names(WildcardMode::None, word);
        assert!(!plain.is_empty(), "{word}");
        for mode in [WildcardMode::Trailing, WildcardMode::Both] {
            let expanded = builtin_names(mode, word);
            for name in &plain {
                assert!(expanded.contains(name), "{word} {mode:?} lost {name}");
            }
        }
    }
}

#[test]
fn test_trailing_wildcard_still_completes_prefixes() {
    let names = builtin_names(WildcardMode::Trailing, "rea");
    assert!(names.iter().any(|n| n == "Reading from a GTFS file"));
}

#[test]
fn test_stop_word_wildcard_matches_nothing() {
    assert!(builtin_names(WildcardMode::Trailing, "the").is_empty());
    assert!(builtin_names(WildcardMode::Both, "the").is_empty());
    assert_eq!(
        builtin_names(WildcardMode::Trailing, "the writing"),
        builtin_names(WildcardMode::Trailing, "writing")
    );
}
