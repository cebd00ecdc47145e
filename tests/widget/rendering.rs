//! What ends up in the dropdown list.

use crate::common::{gtfs_pair_catalog, numbered_catalog, opened_with_query, rendered_ids, TYPED};
use docsearch::testing::RecordingEngine;
use docsearch::{DocumentCatalog, EventTarget, HeadlessSurface, QueryOptions, SearchConfig, SearchWidget};

#[test]
fn test_empty_query_renders_zero_children() {
    let widget = opened_with_query(gtfs_pair_catalog(), "");
    assert!(widget.surface().items().is_empty());
    assert_eq!(widget.surface().to_html(), "");
}

#[test]
fn test_whitespace_query_clears_previous_results() {
    let mut widget = opened_with_query(gtfs_pair_catalog(), "gtfs");
    assert_eq!(widget.surface().items().len(), 2);
    widget.key_up(TYPED, EventTarget::SearchBar, "   ");
    assert!(widget.surface().items().is_empty());
}

#[test]
fn test_reading_renders_link_to_read_page() {
    let widget = opened_with_query(gtfs_pair_catalog(), "reading");
    let first = &widget.surface().items()[0];
    assert_eq!(first.id, "result-0");
    assert_eq!(first.name, "Reading from a GTFS file");
    assert_eq!(first.url.as_deref(), Some("/doc/read"));
    assert!(widget.surface().to_html().starts_with(
        "<li id=\"result-0\" class=\"dropdown-item\"><a href=\"/doc/read\" title=\"Reading from a GTFS file\""
    ));
}

#[test]
fn test_same_query_twice_renders_same_ids() {
    let mut widget = opened_with_query(numbered_catalog(5), "gtfs");
    let first = rendered_ids(&widget);
    widget.key_up(TYPED, EventTarget::SearchBar, "gtfs");
    assert_eq!(rendered_ids(&widget), first);
    assert_eq!(first, vec!["result-0", "result-1", "result-2", "result-3", "result-4"]);
}

#[test]
fn test_later_query_replaces_earlier() {
    let mut widget = opened_with_query(gtfs_pair_catalog(), "gtfs");
    widget.key_up(TYPED, EventTarget::SearchBar, "writing");
    let names: Vec<&str> = widget
        .surface()
        .items()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names[0], "Writing to a GTFS file");
    assert!(names.len() <= 2);
}

#[test]
fn test_titles_are_escaped_in_markup() {
    let catalog = DocumentCatalog::from_json(
        r#"[{"title": "<script>alert(1)</script>", "url": "/x", "content": "payload page"}]"#,
    )
    .expect("valid catalog");
    let widget = opened_with_query(catalog, "payload");
    let html = widget.surface().to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_custom_widget_config_changes_ids() {
    let config = SearchConfig::from_json(r#"{"widget": {"resultIdPrefix": "hit-"}}"#)
        .expect("valid config");
    let surface = HeadlessSurface::new(config.widget.clone());
    let mut widget = SearchWidget::with_config(surface, gtfs_pair_catalog(), &config);
    widget.toggle(EventTarget::SearchBar);
    widget.key_up(TYPED, EventTarget::SearchBar, "gtfs");
    assert_eq!(rendered_ids(&widget), vec!["hit-0", "hit-1"]);
}

#[test]
fn test_blank_key_up_never_reaches_index() {
    let mut widget = SearchWidget::new(
        HeadlessSurface::default(),
        gtfs_pair_catalog(),
        RecordingEngine,
        QueryOptions::default(),
    );
    widget.toggle(EventTarget::SearchBar);
    widget.key_up(TYPED, EventTarget::SearchBar, "  ");
    widget.key_up(TYPED, EventTarget::SearchBar, " gtfs ");
    let queries = widget
        .index()
        .get()
        .map(|built| built.index.queries())
        .unwrap_or_default();
    assert_eq!(queries, vec!["gtfs"]);
    assert_eq!(widget.surface().items().len(), 2);
}
