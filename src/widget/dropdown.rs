// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dropdown visibility and the document listeners tied to it.
//!
//! ```text
//!            open(): show + attach click, keydown, keyup
//!   Closed ───────────────────────────────────────────────▶ Open
//!          ◀───────────────────────────────────────────────
//!            close(): hide + detach click only
//! ```
//!
//! Close leaves the keydown/keyup listeners attached. While closed they are
//! harmless: key-up renders nothing because the container is hidden. Re-opening
//! attaches them again, which the surface treats as a no-op.

use super::surface::{EventTarget, Listener, SearchSurface};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct DropdownController {
    visibility: Visibility,
}

impl DropdownController {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Show the container and register the three document listeners.
    ///
    /// Without a container there is nothing to show and nothing is attached.
    pub fn open<S: SearchSurface>(&mut self, surface: &mut S) -> bool {
        if !surface.has_container() {
            return false;
        }
        if !surface.is_shown() {
            surface.show();
        }
        for listener in Listener::ALL {
            surface.attach(listener);
        }
        self.visibility = Visibility::Open;
        debug!("Search dropdown opened");
        true
    }

    /// Hide the container and deregister the click listener.
    ///
    /// Returns whether anything was visible to close.
    pub fn close<S: SearchSurface>(&mut self, surface: &mut S) -> bool {
        let visible = surface.has_container() && surface.is_shown();
        self.visibility = Visibility::Closed;
        if !visible {
            return false;
        }
        surface.hide();
        surface.detach(Listener::Click);
        debug!("Search dropdown closed");
        true
    }

    /// Click handler: clicks on the search input itself never close.
    pub fn close_on_click<S: SearchSurface>(&mut self, surface: &mut S, target: EventTarget) -> bool {
        if target == EventTarget::SearchBar {
            return false;
        }
        self.close(surface)
    }
}
