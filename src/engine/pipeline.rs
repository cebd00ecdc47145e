// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: the same pipeline runs over document content at build time
//! and over plain query terms at search time, so both sides land on the same
//! vocabulary.
//!
//! ```text
//! "Reading from a GTFS-file!"
//!   → normalize       "reading from a gtfs-file!"
//!   → split (ws, -)   ["reading", "from", "a", "gtfs", "file!"]
//!   → trim edges      ["reading", "from", "a", "gtfs", "file"]
//!   → stop words      ["reading", "gtfs", "file"]
//!   → stem            ["read", "gtfs", "file"]
//! ```

use super::EngineOptions;
use crate::utils::normalize;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// English stop words loaded from data/stop_words.txt, one per line.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("../../data/stop_words.txt")
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
});

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split normalized text into raw tokens on whitespace and hyphens.
fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .map(trim_token)
        .filter(|t| !t.is_empty())
}

/// Strip leading and trailing non-alphanumeric characters.
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// The analysis pipeline, configured once per index.
pub struct Analyzer {
    stemmer: Option<Stemmer>,
    stop_words: bool,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("stemming", &self.stemmer.is_some())
            .field("stop_words", &self.stop_words)
            .finish()
    }
}

impl Analyzer {
    pub fn new(options: &EngineOptions) -> Self {
        Self {
            stemmer: options
                .stemming
                .then(|| Stemmer::create(Algorithm::English)),
            stop_words: options.stop_words,
        }
    }

    /// Run the full pipeline over a block of text.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        split_tokens(&normalized)
            .filter_map(|token| self.finish_token(token))
            .collect()
    }

    /// Stop-word filter and stem one already-normalized, trimmed token.
    fn finish_token(&self, token: &str) -> Option<String> {
        if self.stop_words && is_stop_word(token) {
            return None;
        }
        let term = match &self.stemmer {
            Some(stemmer) => stemmer.stem(token).into_owned(),
            None => token.to_string(),
        };
        (!term.is_empty()).then_some(term)
    }
}
