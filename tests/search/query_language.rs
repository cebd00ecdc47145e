//! Presence, wildcard, fuzzy and boost clauses against a small corpus.

use docsearch::{Bm25Engine, Document, IndexEngine, InvertedIndex, TextIndex};

fn corpus() -> InvertedIndex {
    Bm25Engine::default().build(&[
        Document::new("Agencies", "/agency", "An agency operates routes in the feed."),
        Document::new("Routes", "/routes", "Routes group trips that share a route name."),
        Document::new("Calendar", "/calendar", "The calendar lists service dates for trips and routes."),
    ])
}

fn refs(index: &InvertedIndex, query: &str) -> Vec<String> {
    index.search(query).into_iter().map(|h| h.reference).collect()
}

#[test]
fn test_plain_terms_are_or() {
    let index = corpus();
    let hits = refs(&index, "agency calendar");
    assert!(hits.contains(&"Agencies".to_string()));
    assert!(hits.contains(&"Calendar".to_string()));
    assert!(!hits.contains(&"Routes".to_string()));
}

#[test]
fn test_required_clause_filters() {
    let index = corpus();
    assert_eq!(refs(&index, "+trips +service"), vec!["Calendar"]);
}

#[test]
fn test_prohibited_clause_excludes() {
    let index = corpus();
    let hits = refs(&index, "routes -agency");
    assert!(!hits.contains(&"Agencies".to_string()));
    assert!(hits.contains(&"Routes".to_string()));
}

#[test]
fn test_only_prohibited_returns_nothing() {
    assert!(corpus().search("-agency").is_empty());
}

#[test]
fn test_trailing_wildcard() {
    assert_eq!(refs(&corpus(), "calend*"), vec!["Calendar"]);
}

#[test]
fn test_fuzzy_term() {
    assert_eq!(refs(&corpus(), "agenci~1").first().map(String::as_str), Some("Agencies"));
    assert!(refs(&corpus(), "agxxxy").is_empty());
}

#[test]
fn test_boost_reorders() {
    let index = corpus();
    let plain = refs(&index, "agency service");
    let boosted = refs(&index, "agency service^10");
    assert_eq!(boosted[0], "Calendar");
    assert_eq!(plain.len(), boosted.len());
}

#[test]
fn test_malformed_modifiers_never_fail() {
    let index = corpus();
    for query in ["~", "^", "route~x", "route^", "+", "-", "***", "route~~2"] {
        let _ = index.search(query);
    }
    assert_eq!(refs(&index, "calendar^abc"), vec!["Calendar"]);
}

#[test]
fn test_stop_words_only_is_empty() {
    assert!(corpus().search("the and of").is_empty());
}
