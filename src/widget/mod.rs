// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search dropdown: event entry points wired to the index, the query
//! processor, and the page.
//!
//! ```text
//! toggle ──▶ dropdown.close_on_click ─▶ LazyIndex::ensure_index ─▶ dropdown.open
//! keyup  ──▶ QueryProcessor::run_query ─▶ render
//! keydown ─▶ navigate ─▶ focus_result | dropdown.close
//! click  ──▶ dropdown.close_on_click
//! ```
//!
//! Every handler runs to completion synchronously. A later key-up simply
//! replaces whatever the previous one rendered.

pub mod dropdown;
pub mod headless;
pub mod navigation;
pub mod render;
pub mod surface;

use crate::catalog::DocumentCatalog;
use crate::config::{QueryOptions, SearchConfig};
use crate::engine::{Bm25Engine, IndexEngine};
use crate::index_builder::LazyIndex;
use crate::query::QueryProcessor;
use crate::types::SearchResult;
use dropdown::{DropdownController, Visibility};
use navigation::{apply_focus, navigate, Navigation};
use surface::{EventTarget, Key, SearchSurface};

pub struct SearchWidget<S: SearchSurface, E: IndexEngine = Bm25Engine> {
    surface: S,
    catalog: DocumentCatalog,
    index: LazyIndex<E>,
    dropdown: DropdownController,
    processor: QueryProcessor,
}

impl<S: SearchSurface> SearchWidget<S, Bm25Engine> {
    pub fn with_config(surface: S, catalog: DocumentCatalog, config: &SearchConfig) -> Self {
        Self::new(
            surface,
            catalog,
            Bm25Engine::new(config.engine.clone()),
            config.query.clone(),
        )
    }
}

impl<S: SearchSurface, E: IndexEngine> SearchWidget<S, E> {
    pub fn new(surface: S, catalog: DocumentCatalog, engine: E, query: QueryOptions) -> Self {
        Self {
            surface,
            catalog,
            index: LazyIndex::new(engine),
            dropdown: DropdownController::default(),
            processor: QueryProcessor::new(query),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn catalog(&self) -> &DocumentCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &LazyIndex<E> {
        &self.index
    }

    pub fn visibility(&self) -> Visibility {
        self.dropdown.visibility()
    }

    /// The search box was clicked.
    ///
    /// Runs the click-close logic with the toggle's own target first, then
    /// builds the index if needed and opens. Toggling while open therefore
    /// re-opens (a refresh) instead of closing.
    pub fn toggle(&mut self, target: EventTarget) {
        self.dropdown.close_on_click(&mut self.surface, target);
        if !self.index.is_built() {
            self.index.ensure_index(&self.catalog);
        }
        self.dropdown.open(&mut self.surface);
    }

    /// A click anywhere on the document. Returns whether the dropdown closed.
    pub fn click(&mut self, target: EventTarget) -> bool {
        self.dropdown.close_on_click(&mut self.surface, target)
    }

    /// Returns whether the event was consumed and must have its default
    /// action and propagation suppressed.
    pub fn key_down(&mut self, key: Key, target: EventTarget) -> bool {
        let navigation = navigate(key, target);
        match navigation {
            Navigation::Close => {
                self.dropdown.close(&mut self.surface);
            }
            Navigation::Focus(_) => {
                apply_focus(&mut self.surface, navigation);
            }
            Navigation::Stay | Navigation::Ignored => {}
        }
        navigation.is_consumed()
    }

    /// Search-on-type. Only keys released in the search input, other than the
    /// navigation keys, run a query. Returns whether a query ran.
    pub fn key_up(&mut self, key: Key, target: EventTarget, input: &str) -> bool {
        if target != EventTarget::SearchBar || key.is_navigation() {
            return false;
        }
        self.search(input);
        true
    }

    /// Run `input` and render the results. Before the index exists this
    /// renders nothing and returns nothing.
    pub fn search(&mut self, input: &str) -> Vec<SearchResult> {
        let Some(built) = self.index.get() else {
            return Vec::new();
        };
        let results = self.processor.run_query(&built, input);
        render::render(&mut self.surface, &results);
        results
    }
}
