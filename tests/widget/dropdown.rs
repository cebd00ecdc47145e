//! Open/close transitions and the listeners that follow them.

use crate::common::{gtfs_pair_catalog, widget_over, CountingEngine, TYPED};
use docsearch::{
    EventTarget, HeadlessSurface, Listener, QueryOptions, SearchSurface, SearchWidget, Visibility,
};

#[test]
fn test_toggle_then_outside_click_closes_once() {
    let mut widget = widget_over(gtfs_pair_catalog());
    assert_eq!(widget.visibility(), Visibility::Closed);
    assert!(!widget.index().is_built());

    widget.toggle(EventTarget::SearchBar);
    assert!(widget.index().is_built());
    assert_eq!(widget.visibility(), Visibility::Open);
    assert!(widget.surface().is_shown());
    assert!(widget.surface().is_attached(Listener::Click));

    assert!(widget.click(EventTarget::Elsewhere));
    assert_eq!(widget.visibility(), Visibility::Closed);
    assert!(!widget.surface().is_shown());
    assert!(!widget.surface().is_attached(Listener::Click));

    // Listener is gone, and even if dispatched again nothing changes
    let mutations = widget.surface().mutations();
    assert!(!widget.click(EventTarget::Elsewhere));
    assert_eq!(widget.visibility(), Visibility::Closed);
    assert_eq!(widget.surface().mutations(), mutations);
}

#[test]
fn test_close_leaves_key_listeners_attached() {
    let mut widget = widget_over(gtfs_pair_catalog());
    widget.toggle(EventTarget::SearchBar);
    widget.click(EventTarget::Elsewhere);

    assert_eq!(
        widget.surface().attached(),
        vec![Listener::KeyDown, Listener::KeyUp]
    );
}

#[test]
fn test_key_up_while_closed_renders_nothing() {
    let mut widget = widget_over(gtfs_pair_catalog());
    widget.toggle(EventTarget::SearchBar);
    widget.click(EventTarget::Elsewhere);

    widget.key_up(TYPED, EventTarget::SearchBar, "reading");
    assert!(widget.surface().items().is_empty());
}

#[test]
fn test_click_on_search_bar_keeps_dropdown_open() {
    let mut widget = widget_over(gtfs_pair_catalog());
    widget.toggle(EventTarget::SearchBar);
    assert!(!widget.click(EventTarget::SearchBar));
    assert_eq!(widget.visibility(), Visibility::Open);
}

#[test]
fn test_click_on_result_closes() {
    let mut widget = widget_over(gtfs_pair_catalog());
    widget.toggle(EventTarget::SearchBar);
    assert!(widget.click(EventTarget::Result(0)));
    assert_eq!(widget.visibility(), Visibility::Closed);
}

#[test]
fn test_retoggle_reopens_and_builds_once() {
    let engine = CountingEngine::default();
    let builds = engine.builds();
    let mut widget = SearchWidget::new(
        HeadlessSurface::default(),
        gtfs_pair_catalog(),
        engine,
        QueryOptions::default(),
    );

    widget.toggle(EventTarget::SearchBar);
    let first = widget.index().get();
    widget.click(EventTarget::Elsewhere);
    widget.toggle(EventTarget::SearchBar);
    widget.toggle(EventTarget::SearchBar);

    assert_eq!(builds.get(), 1);
    assert_eq!(widget.visibility(), Visibility::Open);
    assert_eq!(widget.surface().attached(), Listener::ALL.to_vec());
    let second = widget.index().get();
    assert!(matches!((first, second), (Some(a), Some(b)) if std::rc::Rc::ptr_eq(&a, &b)));
}

#[test]
fn test_toggle_without_container_still_builds_index() {
    let mut widget = SearchWidget::with_config(
        HeadlessSurface::without_container(),
        gtfs_pair_catalog(),
        &Default::default(),
    );
    widget.toggle(EventTarget::SearchBar);
    assert!(widget.index().is_built());
    assert_eq!(widget.visibility(), Visibility::Closed);
    assert!(widget.surface().attached().is_empty());
    let results = widget.search("reading");
    assert_eq!(results[0].name, "Reading from a GTFS file");
    assert!(widget.surface().items().is_empty());
}
