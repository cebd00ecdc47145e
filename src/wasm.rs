// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly binding: the widget over a real DOM.
//!
//! `mount()` finds the search input, wires its click to `toggle`, and hands the
//! widget a `DomSurface` that adds and removes the document-level click,
//! keydown and keyup listeners on demand. Each listener closure holds only a
//! `Weak` reference to the widget, so dropping the `SearchHandle` frees
//! everything.
//!
//! ```js
//! import init, { mount } from "./docsearch.js";
//! await init();
//! const search = mount({ widget: { searchBarId: "search-bar" } });
//! ```

use crate::catalog::DocumentCatalog;
use crate::config::{SearchConfig, WidgetConfig};
use crate::widget::navigation::navigate;
use crate::widget::surface::{EventTarget, Key, Listener, SearchSurface};
use crate::widget::SearchWidget;
use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::io;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

type DomWidget = SearchWidget<DomSurface>;
type Handler = Closure<dyn FnMut(Event)>;

// =============================================================================
// LOGGING
// =============================================================================

/// Buffers one formatted event and forwards it to `console.log` on drop.
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        }
    }
}

/// No clock on wasm32-unknown-unknown, so no timestamps.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter { buf: Vec::new() })
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

// =============================================================================
// DOM SURFACE
// =============================================================================

/// The document listeners, created once so add/remove always see the same
/// function objects.
struct DomListeners {
    click: Handler,
    key_down: Handler,
    key_up: Handler,
}

impl DomListeners {
    fn get(&self, listener: Listener) -> &Function {
        let handler = match listener {
            Listener::Click => &self.click,
            Listener::KeyDown => &self.key_down,
            Listener::KeyUp => &self.key_up,
        };
        handler.as_ref().unchecked_ref()
    }
}

pub struct DomSurface {
    document: Document,
    config: WidgetConfig,
    listeners: Option<DomListeners>,
}

impl DomSurface {
    fn new(document: Document, config: WidgetConfig) -> Self {
        Self {
            document,
            config,
            listeners: None,
        }
    }

    fn install(&mut self, listeners: DomListeners) {
        self.listeners = Some(listeners);
    }

    /// `div[id$='search-dropdown'] > .dropdown-content`
    fn container(&self) -> Option<Element> {
        let selector = format!(
            "div[id$='{}'] > .{}",
            self.config.dropdown_id, self.config.content_class
        );
        self.document.query_selector(&selector).ok().flatten()
    }

    fn build_item(&self, index: usize, name: &str, url: Option<&str>) -> Result<Element, JsValue> {
        let c = &self.config;
        let item = self.document.create_element("li")?;
        item.set_attribute("class", &c.item_class)?;
        item.set_attribute("id", &c.result_id(index))?;

        let link = self.document.create_element("a")?;
        link.set_attribute("title", name)?;
        if let Some(url) = url {
            link.set_attribute("href", url)?;
        }
        link.set_attribute("class", &c.link_class)?;

        let text = self.document.create_element("span")?;
        text.set_attribute("class", &c.text_class)?;
        text.set_text_content(Some(name));

        link.append_child(&text)?;
        item.append_child(&link)?;
        Ok(item)
    }
}

impl SearchSurface for DomSurface {
    fn has_container(&self) -> bool {
        self.container().is_some()
    }

    fn is_shown(&self) -> bool {
        self.container()
            .is_some_and(|el| el.class_list().contains(&self.config.open_class))
    }

    fn show(&mut self) {
        if let Some(el) = self.container() {
            let _ = el.class_list().add_1(&self.config.open_class);
        }
    }

    fn hide(&mut self) {
        if let Some(el) = self.container() {
            let _ = el.class_list().remove_1(&self.config.open_class);
        }
    }

    fn clear_results(&mut self) {
        if let Some(el) = self.container() {
            while let Some(child) = el.first_child() {
                let _ = el.remove_child(&child);
            }
        }
    }

    fn append_result(&mut self, index: usize, name: &str, url: Option<&str>) {
        let Some(container) = self.container() else {
            return;
        };
        if let Ok(item) = self.build_item(index, name, url) {
            let _ = container.append_child(&item);
        }
    }

    fn focus_result(&mut self, index: usize) -> bool {
        let link = self
            .document
            .get_element_by_id(&self.config.result_id(index))
            .and_then(|item| item.first_element_child())
            .and_then(|link| link.dyn_into::<HtmlElement>().ok());
        match link {
            Some(link) => link.focus().is_ok(),
            None => false,
        }
    }

    fn attach(&mut self, listener: Listener) {
        if let Some(listeners) = &self.listeners {
            let _ = self.document.add_event_listener_with_callback(
                listener.event_name(),
                listeners.get(listener),
            );
        }
    }

    fn detach(&mut self, listener: Listener) {
        if let Some(listeners) = &self.listeners {
            let _ = self.document.remove_event_listener_with_callback(
                listener.event_name(),
                listeners.get(listener),
            );
        }
    }
}

// =============================================================================
// EVENT DECODING
// =============================================================================

fn resolve_target(event: &Event, config: &WidgetConfig) -> EventTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return EventTarget::Elsewhere;
    };
    if element.id() == config.search_bar_id {
        return EventTarget::SearchBar;
    }
    element
        .parent_element()
        .and_then(|parent| config.parse_result_id(&parent.id()))
        .map_or(EventTarget::Elsewhere, EventTarget::Result)
}

#[allow(deprecated)]
fn decode_key(event: &Event) -> Option<Key> {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|e| Key::from_code(e.key_code()))
}

/// Run `f` on the widget if it is still alive and not already borrowed by an
/// outer handler.
fn with_widget(widget: &Weak<RefCell<DomWidget>>, f: impl FnOnce(&mut DomWidget)) {
    if let Some(widget) = widget.upgrade() {
        if let Ok(mut widget) = widget.try_borrow_mut() {
            f(&mut widget);
        }
    }
}

fn handler(widget: &Rc<RefCell<DomWidget>>, config: &WidgetConfig, listener: Listener) -> Handler {
    let widget = Rc::downgrade(widget);
    let config = config.clone();
    Closure::new(move |event: Event| {
        let target = resolve_target(&event, &config);
        match listener {
            Listener::Click => with_widget(&widget, |w| {
                w.click(target);
            }),
            Listener::KeyDown => {
                let Some(key) = decode_key(&event) else {
                    return;
                };
                if navigate(key, target).is_consumed() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                with_widget(&widget, |w| {
                    w.key_down(key, target);
                });
            }
            Listener::KeyUp => {
                let Some(key) = decode_key(&event) else {
                    return;
                };
                let input = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
                with_widget(&widget, |w| {
                    w.key_up(key, target, &input);
                });
            }
        }
    })
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// A mounted search widget. Dropping it removes every listener it added.
#[wasm_bindgen]
pub struct SearchHandle {
    widget: Rc<RefCell<DomWidget>>,
    search_bar: Element,
    toggle: Handler,
}

#[wasm_bindgen]
impl SearchHandle {
    /// Open the dropdown as if the search box had been clicked.
    pub fn toggle(&self) {
        if let Ok(mut widget) = self.widget.try_borrow_mut() {
            widget.toggle(EventTarget::SearchBar);
        }
    }

    /// Run a query, render it, and return the results as `{name, url}` objects.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = match self.widget.try_borrow_mut() {
            Ok(mut widget) => widget.search(query),
            Err(_) => Vec::new(),
        };
        to_value(&results).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen(js_name = "isOpen")]
    pub fn is_open(&self) -> bool {
        self.widget
            .try_borrow()
            .map(|w| w.visibility() == crate::Visibility::Open)
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = "isIndexBuilt")]
    pub fn is_index_built(&self) -> bool {
        self.widget
            .try_borrow()
            .map(|w| w.index().is_built())
            .unwrap_or(false)
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        let _ = self
            .search_bar
            .remove_event_listener_with_callback("click", self.toggle.as_ref().unchecked_ref::<Function>());
        if let Ok(mut widget) = self.widget.try_borrow_mut() {
            for listener in Listener::ALL {
                widget.surface_mut().detach(listener);
            }
        }
    }
}

/// Mount the widget on the current page.
///
/// `config` is an optional partial `SearchConfig` object; omitted fields keep
/// their defaults.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<SearchHandle, JsValue> {
    init_logging();

    let config: SearchConfig = if config.is_undefined() || config.is_null() {
        SearchConfig::default()
    } else {
        from_value(config).map_err(|e| format!("Invalid search config: {}", e))?
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let search_bar = document
        .get_element_by_id(&config.widget.search_bar_id)
        .ok_or_else(|| format!("Search bar #{} not found", config.widget.search_bar_id))?;

    let surface = DomSurface::new(document, config.widget.clone());
    let widget = Rc::new(RefCell::new(SearchWidget::with_config(
        surface,
        DocumentCatalog::builtin(),
        &config,
    )));

    let listeners = DomListeners {
        click: handler(&widget, &config.widget, Listener::Click),
        key_down: handler(&widget, &config.widget, Listener::KeyDown),
        key_up: handler(&widget, &config.widget, Listener::KeyUp),
    };
    widget.borrow_mut().surface_mut().install(listeners);

    let toggle: Handler = {
        let weak = Rc::downgrade(&widget);
        let widget_config = config.widget.clone();
        Closure::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            let target = resolve_target(&event, &widget_config);
            with_widget(&weak, |w| w.toggle(target));
        })
    };
    search_bar.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref::<Function>())?;

    Ok(SearchHandle {
        widget,
        search_bar,
        toggle,
    })
}
