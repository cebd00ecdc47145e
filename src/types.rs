// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that move between the catalog, the engine, and the dropdown.
//!
//! A `Document` is what the site ships at build time. A `Hit` is what the
//! engine hands back: a bare reference (the document title) and a score. A
//! `SearchResult` is the display projection the dropdown renders, created fresh
//! on every keystroke and thrown away on the next one.

use serde::{Deserialize, Serialize};

/// A searchable page of the documentation site.
///
/// `title` doubles as the engine reference key, so titles must be unique
/// within a catalog. That is a data precondition and is not checked on the
/// widget path; see `DocumentCatalog::validate` for the offline check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// One ranked match from the full-text engine.
///
/// Order within a result list is relevance order as decided by the engine.
/// Consumers never re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Engine reference, always a document title.
    #[serde(rename = "ref")]
    pub reference: String,
    pub score: f64,
}

/// What the dropdown shows for one hit.
///
/// `url` is `None` when the reference did not resolve through the
/// title-to-URL map. The result is still shown, just without a link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub url: Option<String>,
}
