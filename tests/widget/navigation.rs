//! Arrow keys and Escape, dispatched wherever focus currently is.

use crate::common::{numbered_catalog, opened_with_query, press, widget_over};
use docsearch::{EventTarget, Key, Listener, Visibility};

#[test]
fn test_down_down_up_up_walks_and_clamps() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    assert_eq!(widget.surface().items().len(), 3);
    assert_eq!(widget.surface().focus(), EventTarget::SearchBar);

    assert!(press(&mut widget, Key::ArrowDown));
    assert_eq!(widget.surface().focus(), EventTarget::Result(0));

    assert!(press(&mut widget, Key::ArrowDown));
    assert_eq!(widget.surface().focus(), EventTarget::Result(1));

    assert!(press(&mut widget, Key::ArrowUp));
    assert_eq!(widget.surface().focus(), EventTarget::Result(0));

    // Floor: consumed, but focus stays on the first result
    assert!(press(&mut widget, Key::ArrowUp));
    assert_eq!(widget.surface().focus(), EventTarget::Result(0));
}

#[test]
fn test_down_past_last_result_stays() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    for _ in 0..6 {
        press(&mut widget, Key::ArrowDown);
    }
    assert_eq!(widget.surface().focus(), EventTarget::Result(2));
}

#[test]
fn test_down_with_no_results_keeps_focus_in_input() {
    let mut widget = opened_with_query(numbered_catalog(3), "nothingmatches");
    assert!(widget.surface().items().is_empty());
    assert!(press(&mut widget, Key::ArrowDown));
    assert_eq!(widget.surface().focus(), EventTarget::SearchBar);
}

#[test]
fn test_escape_from_result_closes() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    press(&mut widget, Key::ArrowDown);
    assert!(press(&mut widget, Key::Escape));
    assert_eq!(widget.visibility(), Visibility::Closed);
    assert!(!widget.surface().is_attached(Listener::Click));
}

#[test]
fn test_escape_from_input_closes() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    assert!(press(&mut widget, Key::Escape));
    assert_eq!(widget.visibility(), Visibility::Closed);
}

#[test]
fn test_keys_outside_widget_are_not_consumed() {
    let mut widget = widget_over(numbered_catalog(3));
    widget.toggle(EventTarget::SearchBar);
    for key in [Key::ArrowDown, Key::ArrowUp, Key::Escape, Key::Other(13)] {
        assert!(!widget.key_down(key, EventTarget::Elsewhere));
    }
    assert_eq!(widget.visibility(), Visibility::Open);
}

#[test]
fn test_other_keys_in_input_are_not_consumed() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    assert!(!press(&mut widget, Key::Other(65)));
    assert_eq!(widget.surface().focus(), EventTarget::SearchBar);
}

#[test]
fn test_retyping_after_navigation_rerenders() {
    let mut widget = opened_with_query(numbered_catalog(3), "gtfs");
    press(&mut widget, Key::ArrowDown);
    widget.surface_mut().focus_search_bar();
    widget.key_up(Key::Other(83), EventTarget::SearchBar, "gtfs page");
    assert_eq!(widget.surface().focus(), EventTarget::SearchBar);
    assert_eq!(widget.surface().items().len(), 3);
}
