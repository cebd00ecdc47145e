// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full-text engine behind the search box.
//!
//! The widget only needs two operations from an engine: build an index from the
//! catalog, and run a query string against it to get ranked references. Those
//! are the `IndexEngine` and `TextIndex` traits. Relevance is entirely the
//! engine's business; nothing downstream re-sorts or filters hits.
//!
//! `Bm25Engine` is the engine the crate ships:
//!
//! ```text
//! Document.content ──▶ pipeline::Analyzer ──▶ inverted::InvertedIndex
//!                                                     │
//! query string ──▶ query::parse_query ──▶ resolve ────┴──▶ BM25 ──▶ Vec<Hit>
//! ```

mod inverted;
mod levenshtein;
mod pipeline;
mod query;

pub use inverted::{InvertedIndex, Posting, PostingList, EXPANDED_TERM_WEIGHT};
pub use levenshtein::levenshtein_within;
pub use pipeline::{is_stop_word, Analyzer};
pub use query::{parse_query, wildcard_match, Clause, Presence, MAX_EDIT_DISTANCE};

use crate::types::{Document, Hit};
use serde::{Deserialize, Serialize};

/// BM25 term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.2;

/// BM25 document-length normalization.
pub const DEFAULT_B: f64 = 0.75;

/// A queryable index. Hits come back in relevance order.
pub trait TextIndex {
    fn search(&self, query: &str) -> Vec<Hit>;

    /// Number of distinct terms, for build diagnostics. Engines that don't
    /// track a vocabulary report zero.
    fn vocabulary_size(&self) -> usize {
        0
    }
}

/// Builds a `TextIndex` from the catalog's documents.
pub trait IndexEngine {
    type Index: TextIndex;

    fn build(&self, docs: &[Document]) -> Self::Index;
}

/// Engine tuning, deserialized from the `engine` section of `SearchConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Term-frequency saturation (default: 1.2)
    pub k1: f64,
    /// Length normalization (default: 0.75)
    pub b: f64,
    /// Apply the English stemmer (default: true)
    pub stemming: bool,
    /// Drop English stop words (default: true)
    pub stop_words: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            stemming: true,
            stop_words: true,
        }
    }
}

/// Stemmed, stop-word-filtered BM25 over document content, keyed by title.
#[derive(Debug, Clone, Default)]
pub struct Bm25Engine {
    options: EngineOptions,
}

impl Bm25Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

impl IndexEngine for Bm25Engine {
    type Index = InvertedIndex;

    fn build(&self, docs: &[Document]) -> InvertedIndex {
        InvertedIndex::build(docs, &self.options)
    }
}
