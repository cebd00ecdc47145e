// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arrow-key movement through the rendered results.
//!
//! Focus state lives in the page, not here: the event target says where focus
//! is, and this module only decides where it should go. Moves are clamped, never
//! wrapped. Down past the last result does nothing (the surface refuses to focus
//! a missing item), and Up from `result-0` stays put rather than returning to
//! the input.

use super::surface::{EventTarget, Key, SearchSurface};

/// What a key-down asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Not a navigation key, or focus is outside the widget. Event untouched.
    Ignored,
    /// Consumed, but focus does not move.
    Stay,
    /// Consumed; try to focus result `i`.
    Focus(usize),
    /// Consumed; close the dropdown.
    Close,
}

impl Navigation {
    /// Consumed events get `preventDefault` and `stopPropagation`.
    pub fn is_consumed(self) -> bool {
        !matches!(self, Navigation::Ignored)
    }
}

pub fn navigate(key: Key, target: EventTarget) -> Navigation {
    if !target.is_search_bar_or_result() {
        return Navigation::Ignored;
    }
    match (key, target) {
        (Key::ArrowDown, EventTarget::SearchBar) => Navigation::Focus(0),
        (Key::ArrowDown, EventTarget::Result(i)) => {
            i.checked_add(1).map_or(Navigation::Stay, Navigation::Focus)
        }
        (Key::ArrowUp, EventTarget::Result(i)) if i > 0 => Navigation::Focus(i - 1),
        (Key::ArrowUp, _) => Navigation::Stay,
        (Key::Escape, _) => Navigation::Close,
        _ => Navigation::Ignored,
    }
}

/// Apply a focus move. Returns whether focus actually changed.
pub fn apply_focus<S: SearchSurface>(surface: &mut S, navigation: Navigation) -> bool {
    match navigation {
        Navigation::Focus(index) => surface.focus_result(index),
        _ => false,
    }
}
