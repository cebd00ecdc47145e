// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The page as the widget sees it.
//!
//! Rendering, navigation and the dropdown never touch a DOM directly. They
//! speak to a `SearchSurface`, which the browser binding implements over
//! web-sys and `HeadlessSurface` implements in memory.

/// Keys the widget reacts to, decoded from `KeyboardEvent.keyCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Escape,
    Other(u32),
}

impl Key {
    pub const ARROW_DOWN_CODE: u32 = 40;
    pub const ARROW_UP_CODE: u32 = 38;
    pub const ESCAPE_CODE: u32 = 27;

    pub fn from_code(code: u32) -> Self {
        match code {
            Self::ARROW_DOWN_CODE => Key::ArrowDown,
            Self::ARROW_UP_CODE => Key::ArrowUp,
            Self::ESCAPE_CODE => Key::Escape,
            other => Key::Other(other),
        }
    }

    /// Down, Up and Escape belong to navigation and never trigger a search.
    pub fn is_navigation(self) -> bool {
        !matches!(self, Key::Other(_))
    }
}

/// Where an event landed, resolved from the event target's ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The search text input.
    SearchBar,
    /// The link inside rendered result `i`.
    Result(usize),
    /// Anything else on the page.
    Elsewhere,
}

impl EventTarget {
    pub fn is_search_bar_or_result(self) -> bool {
        matches!(self, EventTarget::SearchBar | EventTarget::Result(_))
    }
}

/// Document-level listeners the widget registers while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Listener {
    Click,
    KeyDown,
    KeyUp,
}

impl Listener {
    pub const ALL: [Listener; 3] = [Listener::Click, Listener::KeyDown, Listener::KeyUp];

    pub fn event_name(self) -> &'static str {
        match self {
            Listener::Click => "click",
            Listener::KeyDown => "keydown",
            Listener::KeyUp => "keyup",
        }
    }
}

/// Operations the widget performs on the page. None of them may fail: a
/// missing element turns the operation into a no-op.
pub trait SearchSurface {
    /// The dropdown results container exists on the page.
    fn has_container(&self) -> bool;

    /// The container currently carries the open class.
    fn is_shown(&self) -> bool;

    fn show(&mut self);

    fn hide(&mut self);

    /// Remove every rendered result.
    fn clear_results(&mut self);

    /// Append result `index` with its label and, when resolved, its link.
    fn append_result(&mut self, index: usize, name: &str, url: Option<&str>);

    /// Focus result `index`. Returns false, changing nothing, if it is not rendered.
    fn focus_result(&mut self, index: usize) -> bool;

    /// Register a document listener. Registering twice is a no-op.
    fn attach(&mut self, listener: Listener);

    /// Deregister a document listener. Deregistering an absent one is a no-op.
    fn detach(&mut self, listener: Listener);
}
