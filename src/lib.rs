//! Client-side keyword search for a static documentation site.
//!
//! A search box with a results dropdown. The index is built lazily the first
//! time the dropdown opens, queries run on every key-up, and the arrow keys
//! walk the results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌─────────────┐
//! │  catalog    │────▶│ index_builder  │────▶│   query     │
//! │ (Document,  │     │ (LazyIndex,    │     │ (Query-     │
//! │ TitleToUrl) │     │  BuiltIndex)   │     │  Processor) │
//! └─────────────┘     └────────────────┘     └─────────────┘
//!        │                    │                     │
//!        │             ┌──────┴──────┐              ▼
//!        │             │   engine    │     ┌─────────────────┐
//!        │             │ (BM25 over  │     │     widget      │
//!        └────────────▶│  inverted)  │     │ render, navigate│
//!                      └─────────────┘     │ dropdown        │
//!                                          └────────┬────────┘
//!                                                   │ SearchSurface
//!                                  ┌────────────────┴───────────────┐
//!                                  ▼                                ▼
//!                        wasm::DomSurface                 HeadlessSurface
//!                        (web-sys, feature "wasm")        (tests, CLI)
//! ```
//!
//! # Usage
//!
//! ```
//! use docsearch::{DocumentCatalog, EventTarget, HeadlessSurface, Key, SearchConfig, SearchWidget};
//!
//! let mut widget = SearchWidget::with_config(
//!     HeadlessSurface::default(),
//!     DocumentCatalog::builtin(),
//!     &SearchConfig::default(),
//! );
//! widget.toggle(EventTarget::SearchBar);
//! widget.key_up(Key::Other(71), EventTarget::SearchBar, "reading");
//! assert_eq!(widget.surface().items()[0].name, "Reading from a GTFS file");
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod index_builder;
pub mod query;
pub mod testing;
mod types;
mod utils;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{CatalogError, DocumentCatalog, TitleToUrlMap};
pub use config::{QueryOptions, SearchConfig, WidgetConfig, WildcardMode};
pub use engine::{Bm25Engine, EngineOptions, IndexEngine, InvertedIndex, TextIndex};
pub use index_builder::{BuiltIndex, LazyIndex};
pub use query::QueryProcessor;
pub use types::{Document, Hit, SearchResult};
pub use utils::{escape_html, normalize};
pub use widget::dropdown::{DropdownController, Visibility};
pub use widget::headless::{HeadlessSurface, RenderedItem};
pub use widget::navigation::{navigate, Navigation};
pub use widget::surface::{EventTarget, Key, Listener, SearchSurface};
pub use widget::SearchWidget;
