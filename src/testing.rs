// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::catalog::DocumentCatalog;
use crate::engine::{Bm25Engine, IndexEngine, InvertedIndex, TextIndex};
use crate::types::{Document, Hit};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Two-page catalog with short URLs, for ranking and resolution checks.
pub fn gtfs_pair_catalog() -> DocumentCatalog {
    DocumentCatalog::new(vec![
        Document::new(
            "Reading from a GTFS file",
            "/doc/read",
            "Reading from a GTFS file. The read namespace streams entities when reading \
             routes, stops and trips from the file.",
        ),
        Document::new(
            "Writing to a GTFS file",
            "/doc/write",
            "Writing to a GTFS file. Similarly to reading, the write namespace exposes pipes \
             for writing routes and stops.",
        ),
    ])
}

/// Catalog of `n` documents titled `Doc 0..n`, each mentioning "gtfs".
pub fn numbered_catalog(n: usize) -> DocumentCatalog {
    DocumentCatalog::new(
        (0..n)
            .map(|i| {
                Document::new(
                    format!("Doc {}", i),
                    format!("/doc/{}", i),
                    format!("gtfs page number {}", i),
                )
            })
            .collect(),
    )
}

/// `Bm25Engine` that counts how many times `build` ran.
#[derive(Debug, Default)]
pub struct CountingEngine {
    inner: Bm25Engine,
    builds: Rc<Cell<usize>>,
}

impl CountingEngine {
    /// Shared counter, still readable after the engine moves into a widget.
    pub fn builds(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.builds)
    }
}

impl IndexEngine for CountingEngine {
    type Index = InvertedIndex;

    fn build(&self, docs: &[Document]) -> InvertedIndex {
        self.builds.set(self.builds.get() + 1);
        self.inner.build(docs)
    }
}

/// Index that records every query it receives.
///
/// Built from documents it matches a query token as a case-insensitive
/// substring of the content, in catalog order. Built from fixed refs it
/// returns those refs for every query.
#[derive(Debug, Default)]
pub struct RecordingIndex {
    docs: Vec<Document>,
    fixed: Option<Vec<String>>,
    queries: RefCell<Vec<String>>,
}

impl RecordingIndex {
    pub fn new(docs: &[Document]) -> Self {
        Self {
            docs: docs.to_vec(),
            ..Self::default()
        }
    }

    pub fn with_refs(refs: Vec<&str>) -> Self {
        Self {
            fixed: Some(refs.into_iter().map(str::to_string).collect()),
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl TextIndex for RecordingIndex {
    fn search(&self, query: &str) -> Vec<Hit> {
        self.queries.borrow_mut().push(query.to_string());
        if let Some(refs) = &self.fixed {
            return refs
                .iter()
                .map(|r| Hit {
                    reference: r.clone(),
                    score: 1.0,
                })
                .collect();
        }
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        self.docs
            .iter()
            .filter(|doc| {
                let content = doc.content.to_lowercase();
                tokens.iter().any(|t| content.contains(t.as_str()))
            })
            .map(|doc| Hit {
                reference: doc.title.clone(),
                score: 1.0,
            })
            .collect()
    }
}

/// Engine producing `RecordingIndex`, for widget tests that inspect queries.
#[derive(Debug, Default)]
pub struct RecordingEngine;

impl IndexEngine for RecordingEngine {
    type Index = RecordingIndex;

    fn build(&self, docs: &[Document]) -> RecordingIndex {
        RecordingIndex::new(docs)
    }
}
