// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every section is `#[serde(default)]`, so a page (or a `--config` file) only
//! names what it changes. The defaults reproduce the markup of the generated
//! documentation site.

use crate::engine::EngineOptions;
use serde::{Deserialize, Serialize};

/// Top-level configuration passed to `mount` or read by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub widget: WidgetConfig,
    pub query: QueryOptions,
    pub engine: EngineOptions,
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Element ids and CSS classes the widget reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Id of the text input (default: "search-bar")
    pub search_bar_id: String,
    /// Id suffix of the dropdown wrapper (default: "search-dropdown")
    pub dropdown_id: String,
    /// Class of the results container inside the wrapper (default: "dropdown-content")
    pub content_class: String,
    /// Class toggled on the container while open (default: "show")
    pub open_class: String,
    /// Id prefix of rendered result items (default: "result-")
    pub result_id_prefix: String,
    pub item_class: String,
    pub link_class: String,
    pub text_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            search_bar_id: "search-bar".to_string(),
            dropdown_id: "search-dropdown".to_string(),
            content_class: "dropdown-content".to_string(),
            open_class: "show".to_string(),
            result_id_prefix: "result-".to_string(),
            item_class: "dropdown-item".to_string(),
            link_class: "dropdown-item-link".to_string(),
            text_class: "dropdown-item-link-text".to_string(),
        }
    }
}

impl WidgetConfig {
    /// `result-<index>`, the join key between rendering and navigation.
    pub fn result_id(&self, index: usize) -> String {
        format!("{}{}", self.result_id_prefix, index)
    }

    /// Inverse of `result_id`. `None` for foreign ids or a non-numeric suffix.
    pub fn parse_result_id(&self, id: &str) -> Option<usize> {
        id.strip_prefix(self.result_id_prefix.as_str())?.parse().ok()
    }
}

/// How each typed token is rewritten before it reaches the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WildcardMode {
    /// Tokens pass through unchanged.
    #[default]
    None,
    /// `tok` → `tok*`, so partially typed words match.
    Trailing,
    /// `tok` → `*tok*`
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    pub wildcard: WildcardMode,
}
