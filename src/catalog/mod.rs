// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed set of searchable documents and the title → URL lookup.
//!
//! The catalog is data, not logic: it is decided when the site is generated and
//! never changes while a page is open. Everything downstream (the engine, the
//! URL map, the dropdown) treats it as read-only.
//!
//! # Invariants
//!
//! - **STABLE_ORDER**: `entries()` always yields documents in catalog order.
//! - **UNIQUE_TITLES**: titles are unique. This is a precondition of the data,
//!   not something the widget path checks. `validate()` exists for tooling.

mod builtin;

use crate::types::Document;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Compile-time document record, borrowed from the binary's read-only data.
pub(crate) struct StaticDocument {
    pub(crate) title: &'static str,
    pub(crate) url: &'static str,
    pub(crate) content: &'static str,
}

/// Why a catalog failed validation or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two documents share a title, so one of them can never be resolved.
    DuplicateTitle { title: String },
    /// A document has an empty title and cannot serve as a reference.
    EmptyTitle { position: usize },
    /// The JSON payload did not describe a list of documents.
    Malformed { message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateTitle { title } => {
                write!(f, "Duplicate document title: {:?}", title)
            }
            CatalogError::EmptyTitle { position } => {
                write!(f, "Document at position {} has an empty title", position)
            }
            CatalogError::Malformed { message } => write!(f, "Malformed catalog: {}", message),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The ordered, immutable list of documents a page can search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCatalog {
    docs: Vec<Document>,
}

impl DocumentCatalog {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    /// The catalog compiled into this crate (the fs2-gtfs documentation pages).
    pub fn builtin() -> Self {
        let docs = builtin::DOCUMENTS
            .iter()
            .map(|d| Document::new(d.title, d.url, d.content))
            .collect();
        Self { docs }
    }

    /// Parse a JSON array of `{title, url, content}` objects.
    ///
    /// Does not validate titles; call `validate()` for that.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let docs: Vec<Document> = serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
            message: e.to_string(),
        })?;
        Ok(Self { docs })
    }

    pub fn entries(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Derive the title → URL lookup.
    ///
    /// If two documents share a title the later one wins, which is why
    /// duplicate titles are a data error.
    pub fn title_to_url(&self) -> TitleToUrlMap {
        let urls = self
            .docs
            .iter()
            .map(|doc| (doc.title.clone(), doc.url.clone()))
            .collect();
        TitleToUrlMap { urls }
    }

    /// Offline check for the catalog preconditions. Not called on the widget path.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.docs.len());
        for (position, doc) in self.docs.iter().enumerate() {
            if doc.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { position });
            }
            if !seen.insert(doc.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: doc.title.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Resolves a bare engine reference (a title) back to a navigable URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleToUrlMap {
    urls: HashMap<String, String>,
}

impl TitleToUrlMap {
    pub fn resolve(&self, title: &str) -> Option<&str> {
        self.urls.get(title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
