// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, build-once construction of the search index.
//!
//! Nothing is indexed at page load. The first time the dropdown opens,
//! `LazyIndex::ensure_index` builds the engine index and the title → URL map
//! together; every later call hands back the same pair.
//!
//! # Invariants
//!
//! - **BUILD_ONCE**: the engine's `build` runs at most once per `LazyIndex`.
//! - **STABLE_REFERENCE**: after the first call, every call returns a clone of
//!   the same `Rc` (`Rc::ptr_eq` holds).
//!
//! The state lives behind `&mut self`, so the check-then-build sequence cannot
//! interleave with another caller. A multi-threaded host would need a
//! `Building` state and a lock; the browser's single event loop does not.

use crate::catalog::{DocumentCatalog, TitleToUrlMap};
use crate::engine::{IndexEngine, TextIndex};
use std::fmt;
use std::rc::Rc;
use tracing::info;

/// The index and the URL map, built and kept together.
pub struct BuiltIndex<I> {
    pub index: I,
    pub urls: TitleToUrlMap,
}

impl<I> fmt::Debug for BuiltIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltIndex")
            .field("urls", &self.urls.len())
            .finish_non_exhaustive()
    }
}

enum IndexState<I> {
    NotBuilt,
    Built(Rc<BuiltIndex<I>>),
}

/// Owns the engine and the "is the index built?" sentinel.
pub struct LazyIndex<E: IndexEngine> {
    engine: E,
    state: IndexState<E::Index>,
}

impl<E: IndexEngine> LazyIndex<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: IndexState::NotBuilt,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, IndexState::Built(_))
    }

    /// The built pair, if `ensure_index` has run.
    pub fn get(&self) -> Option<Rc<BuiltIndex<E::Index>>> {
        match &self.state {
            IndexState::Built(built) => Some(Rc::clone(built)),
            IndexState::NotBuilt => None,
        }
    }

    /// Build on first call, return the memoized pair afterwards.
    ///
    /// The cost of the first call is proportional to the total content size of
    /// the catalog and completes synchronously.
    pub fn ensure_index(&mut self, catalog: &DocumentCatalog) -> Rc<BuiltIndex<E::Index>> {
        if let IndexState::Built(built) = &self.state {
            return Rc::clone(built);
        }

        info!(docs = catalog.len(), "Building search index...");
        let index = self.engine.build(catalog.entries());
        let urls = catalog.title_to_url();
        info!(
            docs = catalog.len(),
            terms = index.vocabulary_size(),
            "Search index built."
        );

        let built = Rc::new(BuiltIndex { index, urls });
        self.state = IndexState::Built(Rc::clone(&built));
        built
    }
}

impl<E: IndexEngine + Default> Default for LazyIndex<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}
