// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From what the user typed to what the dropdown shows.
//!
//! ```text
//! raw input ──▶ tokens ──▶ expand (WildcardMode) ──▶ join ──▶ index.search
//!                                                                 │
//!        Vec<SearchResult> ◀── resolve ref through TitleToUrlMap ◀┘
//! ```
//!
//! The empty query never reaches the index: most engines read it as "match
//! everything", which would fill the dropdown with the whole catalog. Hits are
//! passed through in engine order with no cap.

use crate::config::{QueryOptions, WildcardMode};
use crate::engine::TextIndex;
use crate::index_builder::BuiltIndex;
use crate::types::SearchResult;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct QueryProcessor {
    options: QueryOptions,
}

impl QueryProcessor {
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Rewrite raw input into the string sent to the engine.
    ///
    /// Returns `None` when the input holds no tokens, including
    /// whitespace-only input.
    pub fn normalize_query(&self, raw: &str) -> Option<String> {
        let tokens: Vec<String> = raw
            .split_whitespace()
            .map(|token| expand_token(token, self.options.wildcard))
            .collect();
        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join(" "))
        }
    }

    pub fn run_query<I: TextIndex>(&self, built: &BuiltIndex<I>, raw: &str) -> Vec<SearchResult> {
        let Some(query) = self.normalize_query(raw) else {
            return Vec::new();
        };

        let results: Vec<SearchResult> = built
            .index
            .search(&query)
            .into_iter()
            .map(|hit| SearchResult {
                url: built.urls.resolve(&hit.reference).map(str::to_string),
                name: hit.reference,
            })
            .collect();

        debug!(query = %query, results = results.len(), "Ran search query");
        results
    }
}

/// Tokens that already carry query syntax are left alone in every mode.
fn expand_token(token: &str, mode: WildcardMode) -> String {
    let has_syntax = token.contains(['*', '~', '^']) || token.starts_with(['+', '-']);
    match mode {
        _ if has_syntax => token.to_string(),
        WildcardMode::None => token.to_string(),
        WildcardMode::Trailing => format!("{}*", token),
        WildcardMode::Both => format!("*{}*", token),
    }
}
