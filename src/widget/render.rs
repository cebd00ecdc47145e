// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Makes the dropdown list match the latest results, exactly.
//!
//! Always a full replace: clear, then append `result-0 .. result-(n-1)` in
//! order. Result sets are small and rebuilt on every keystroke, so diffing
//! would buy nothing. The `result-<i>` ids are what navigation walks.

use super::surface::SearchSurface;
use crate::types::SearchResult;

/// Replace the rendered list. A no-op unless the container exists and is shown.
pub fn render<S: SearchSurface>(surface: &mut S, results: &[SearchResult]) {
    if !(surface.has_container() && surface.is_shown()) {
        return;
    }
    surface.clear_results();
    for (index, result) in results.iter().enumerate() {
        surface.append_result(index, &result.name, result.url.as_deref());
    }
}
