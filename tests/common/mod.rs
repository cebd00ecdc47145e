//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsearch::{DocumentCatalog, EventTarget, HeadlessSurface, Key, SearchConfig, SearchWidget};

pub use docsearch::testing::{gtfs_pair_catalog, numbered_catalog, CountingEngine};

/// Any key that is not Down, Up or Escape.
pub const TYPED: Key = Key::Other(71);

pub type Widget = SearchWidget<HeadlessSurface>;

pub fn widget_over(catalog: DocumentCatalog) -> Widget {
    SearchWidget::with_config(HeadlessSurface::default(), catalog, &SearchConfig::default())
}

/// Opened widget with `query` typed into the search box.
pub fn opened_with_query(catalog: DocumentCatalog, query: &str) -> Widget {
    let mut widget = widget_over(catalog);
    widget.toggle(EventTarget::SearchBar);
    widget.key_up(TYPED, EventTarget::SearchBar, query);
    widget
}

/// Press `key` wherever focus currently is, like a browser would dispatch it.
pub fn press(widget: &mut Widget, key: Key) -> bool {
    let target = widget.surface().focus();
    widget.key_down(key, target)
}

pub fn rendered_names(widget: &Widget) -> Vec<String> {
    widget
        .surface()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

pub fn rendered_ids(widget: &Widget) -> Vec<String> {
    widget
        .surface()
        .items()
        .iter()
        .map(|item| item.id.clone())
        .collect()
}
