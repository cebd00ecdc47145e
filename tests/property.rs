//! Property-based tests using proptest.
//!
//! Randomly generated queries, catalogs and key sequences against the
//! invariants of the query path and the widget.

mod common;

use common::{numbered_catalog, opened_with_query, rendered_ids, TYPED};
use docsearch::testing::{CountingEngine, RecordingIndex};
use docsearch::widget::render::render;
use docsearch::{
    Bm25Engine, BuiltIndex, Document, DocumentCatalog, EventTarget, HeadlessSurface, IndexEngine,
    Key, LazyIndex, QueryOptions, QueryProcessor, SearchResult, SearchSurface, TextIndex,
    WildcardMode,
};
use proptest::prelude::*;
use std::rc::Rc;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// Free-form input including query syntax and odd whitespace.
fn raw_input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z +\\-*~^0-9\\t\\n]{0,24}").unwrap()
}

fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \\t\\n\\r]{0,8}").unwrap()
}

fn wildcard_strategy() -> impl Strategy<Value = WildcardMode> {
    prop::sample::select(vec![WildcardMode::None, WildcardMode::Trailing, WildcardMode::Both])
}

fn catalog_strategy() -> impl Strategy<Value = DocumentCatalog> {
    prop::collection::vec(prop::collection::vec(word_strategy(), 1..12), 1..8).prop_map(|docs| {
        DocumentCatalog::new(
            docs.into_iter()
                .enumerate()
                .map(|(i, words)| Document::new(format!("Doc {}", i), format!("/d/{}", i), words.join(" ")))
                .collect(),
        )
    })
}

fn results_strategy() -> impl Strategy<Value = Vec<SearchResult>> {
    prop::collection::vec(
        (word_strategy(), prop::option::of(word_strategy())).prop_map(|(name, url)| SearchResult {
            name,
            url: url.map(|u| format!("/{}", u)),
        }),
        0..10,
    )
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop::sample::select(vec![Key::ArrowDown, Key::ArrowUp, Key::Other(65)])
}

// ============================================================================
// QUERY PROCESSING
// ============================================================================

proptest! {
    /// Blank input returns nothing and never touches the index.
    #[test]
    fn prop_blank_input_short_circuits(input in blank_strategy(), mode in wildcard_strategy()) {
        let built = BuiltIndex {
            index: RecordingIndex::with_refs(vec!["Doc 0"]),
            urls: numbered_catalog(1).title_to_url(),
        };
        let results = QueryProcessor::new(QueryOptions { wildcard: mode }).run_query(&built, &input);
        prop_assert!(results.is_empty());
        prop_assert!(built.index.queries().is_empty());
    }

    /// Whatever reaches the index is non-empty and has no surrounding or doubled whitespace.
    #[test]
    fn prop_forwarded_query_is_never_empty(input in raw_input_strategy(), mode in wildcard_strategy()) {
        let built = BuiltIndex {
            index: RecordingIndex::with_refs(vec![]),
            urls: numbered_catalog(1).title_to_url(),
        };
        QueryProcessor::new(QueryOptions { wildcard: mode }).run_query(&built, &input);
        for query in built.index.queries() {
            prop_assert!(!query.is_empty());
            prop_assert_eq!(query.trim(), query.as_str());
            prop_assert!(!query.contains("  "));
        }
    }

    /// The engine never panics on arbitrary query syntax, and only returns
    /// catalog titles in non-increasing score order.
    #[test]
    fn prop_engine_hits_are_catalog_titles(catalog in catalog_strategy(), query in raw_input_strategy()) {
        let index = Bm25Engine::default().build(catalog.entries());
        let hits = index.search(&query);
        let urls = catalog.title_to_url();
        for hit in &hits {
            prop_assert!(urls.resolve(&hit.reference).is_some());
            prop_assert!(!hit.score.is_nan());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// A document containing a word is found by that word.
    #[test]
    fn prop_indexed_word_is_found(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let doc = pick.get(catalog.entries());
        let word = doc.content.split(' ').next().unwrap_or_default().to_string();
        prop_assume!(!docsearch::engine::is_stop_word(&word));
        let index = Bm25Engine::default().build(catalog.entries());
        let refs: Vec<String> = index.search(&word).into_iter().map(|h| h.reference).collect();
        prop_assert!(refs.contains(&doc.title));
    }
}

// ============================================================================
// INDEX BUILDER
// ============================================================================

proptest! {
    /// However many times ensure_index runs, the engine builds once and the
    /// same shared index comes back.
    #[test]
    fn prop_index_builds_once(catalog in catalog_strategy(), calls in 1usize..6) {
        let engine = CountingEngine::default();
        let builds = engine.builds();
        let mut index = LazyIndex::new(engine);
        let first = index.ensure_index(&catalog);
        for _ in 1..calls {
            let again = index.ensure_index(&catalog);
            prop_assert!(Rc::ptr_eq(&first, &again));
        }
        prop_assert_eq!(builds.get(), 1);
    }
}

// ============================================================================
// WIDGET
// ============================================================================

proptest! {
    /// Rendering the same results twice yields the same list.
    #[test]
    fn prop_render_is_idempotent(results in results_strategy()) {
        let mut surface = HeadlessSurface::default();
        surface.show();
        render(&mut surface, &results);
        let first = surface.items().to_vec();
        render(&mut surface, &results);
        prop_assert_eq!(surface.items(), first.as_slice());
        prop_assert_eq!(first.len(), results.len());
        for (i, item) in first.iter().enumerate() {
            prop_assert_eq!(&item.id, &format!("result-{}", i));
        }
    }

    /// Arrow keys never move focus outside `result-0 ..= result-(n-1)`.
    #[test]
    fn prop_navigation_stays_in_bounds(
        n in 0usize..6,
        keys in prop::collection::vec(key_strategy(), 0..30),
    ) {
        let mut widget = opened_with_query(numbered_catalog(n.max(1)), if n == 0 { "nomatch" } else { "gtfs" });
        let rendered = rendered_ids(&widget).len();
        for key in keys {
            let target = widget.surface().focus();
            widget.key_down(key, target);
            match widget.surface().focus() {
                EventTarget::Result(i) => prop_assert!(i < rendered),
                EventTarget::SearchBar => {}
                EventTarget::Elsewhere => prop_assert!(false, "focus left the widget"),
            }
        }
    }

    /// Typing the same query again re-renders identically.
    #[test]
    fn prop_requery_is_stable(n in 1usize..8) {
        let mut widget = opened_with_query(numbered_catalog(n), "gtfs");
        let before = rendered_ids(&widget);
        widget.key_up(TYPED, EventTarget::SearchBar, "gtfs");
        prop_assert_eq!(rendered_ids(&widget), before);
    }
}
