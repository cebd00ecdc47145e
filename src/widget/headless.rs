// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory `SearchSurface`.
//!
//! Models just enough of the page to drive the widget without a browser: one
//! container with an open flag, the rendered list, which element has focus,
//! and the set of document listeners. Used by the tests and by the CLI's
//! `render` command.

use super::surface::{EventTarget, Listener, SearchSurface};
use crate::config::WidgetConfig;
use crate::utils::escape_html;
use std::collections::BTreeSet;

/// One `<li>` in the headless dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    config: WidgetConfig,
    container: bool,
    shown: bool,
    items: Vec<RenderedItem>,
    focus: EventTarget,
    listeners: BTreeSet<Listener>,
    mutations: usize,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl HeadlessSurface {
    /// A page with a closed dropdown and focus in the search input.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            container: true,
            shown: false,
            items: Vec::new(),
            focus: EventTarget::SearchBar,
            listeners: BTreeSet::new(),
            mutations: 0,
        }
    }

    /// A page whose markup lacks the dropdown container.
    pub fn without_container() -> Self {
        Self {
            container: false,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn focus(&self) -> EventTarget {
        self.focus
    }

    pub fn focus_search_bar(&mut self) {
        self.focus = EventTarget::SearchBar;
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn attached(&self) -> Vec<Listener> {
        self.listeners.iter().copied().collect()
    }

    /// Count of DOM writes (show, hide, clear, append), for no-op assertions.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    /// The dropdown list as the browser binding would build it.
    pub fn to_html(&self) -> String {
        let c = &self.config;
        self.items
            .iter()
            .map(|item| {
                let name = escape_html(&item.name);
                let href = item
                    .url
                    .as_deref()
                    .map(|url| format!(" href=\"{}\"", escape_html(url)))
                    .unwrap_or_default();
                format!(
                    "<li id=\"{}\" class=\"{}\"><a{} title=\"{}\" class=\"{}\"><span class=\"{}\">{}</span></a></li>",
                    item.id, c.item_class, href, name, c.link_class, c.text_class, name
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SearchSurface for HeadlessSurface {
    fn has_container(&self) -> bool {
        self.container
    }

    fn is_shown(&self) -> bool {
        self.container && self.shown
    }

    fn show(&mut self) {
        if self.container {
            self.shown = true;
            self.mutations += 1;
        }
    }

    fn hide(&mut self) {
        if self.container {
            self.shown = false;
            self.mutations += 1;
        }
    }

    fn clear_results(&mut self) {
        self.items.clear();
        self.mutations += 1;
        // Removing the focused element drops focus to the page body
        if matches!(self.focus, EventTarget::Result(_)) {
            self.focus = EventTarget::Elsewhere;
        }
    }

    fn append_result(&mut self, index: usize, name: &str, url: Option<&str>) {
        self.items.push(RenderedItem {
            id: self.config.result_id(index),
            name: name.to_string(),
            url: url.map(str::to_string),
        });
        self.mutations += 1;
    }

    fn focus_result(&mut self, index: usize) -> bool {
        let id = self.config.result_id(index);
        if self.items.iter().any(|item| item.id == id) {
            self.focus = EventTarget::Result(index);
            true
        } else {
            false
        }
    }

    fn attach(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    fn detach(&mut self, listener: Listener) {
        self.listeners.remove(&listener);
    }
}
