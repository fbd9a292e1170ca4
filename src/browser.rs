//! Browser host: web-sys backed [`Dom`] and [`PreferenceStore`], plus the
//! event-listener wiring that feeds [`PageBehaviors`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm start function installs the behaviors immediately, then runs the
//! ready phase on `DOMContentLoaded` (or right away when the document has
//! already been parsed, which is the common case for an async wasm load).
//! All listeners share one `Rc<RefCell<Host>>` and live for the page's
//! lifetime, so their closures are leaked with `Closure::forget`.
//!
//! Every web-sys failure is logged at warn level and otherwise ignored.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollToOptions, Storage, Window,
};

use crate::config::PageConfig;
use crate::dom::{ButtonSpec, Dom, Glyph, Selector};
use crate::page::{Outcome, PageBehaviors, PageEvent};
use crate::reveal::Intersection;
use crate::storage::{PreferenceStore, StorageError};

/// Id of the optional `<script type="application/json">` config block.
const CONFIG_ELEMENT_ID: &str = "theme-config";

// =============================================================
// Dom
// =============================================================

/// The live document of the current window.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to `window`'s document, if it has one.
    #[must_use]
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn set_inline_style(node: &Element, property: &str, value: &str) {
    let Some(el) = node.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style {property}={value} rejected: {err:?}");
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        match self.document.query_selector_all(&selector.to_css()) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::warn!("query {selector} failed: {err:?}");
                Vec::new()
            }
        }
    }

    fn query_within(&self, scope: &Element, selector: &Selector) -> Vec<Element> {
        match scope.query_selector_all(&selector.to_css()) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::warn!("scoped query {selector} failed: {err:?}");
                Vec::new()
            }
        }
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn previous_element_sibling(&self, node: &Element) -> Option<Element> {
        node.previous_element_sibling()
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            log::warn!("add class {class} failed: {err:?}");
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            log::warn!("remove class {class} failed: {err:?}");
        }
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        set_inline_style(node, property, value);
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            log::warn!("append child failed: {err:?}");
        }
    }

    fn create_button(&mut self, spec: &ButtonSpec) -> Option<Element> {
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(err) => {
                log::warn!("create {} button failed: {err:?}", spec.class);
                return None;
            }
        };
        button.set_class_name(spec.class);
        button.set_inner_html(&spec.glyph.html());
        if let Some(el) = button.dyn_ref::<HtmlElement>() {
            el.style().set_css_text(&spec.css);
        }
        let body = self.document.body()?;
        if let Err(err) = body.append_child(&button) {
            log::warn!("insert {} button failed: {err:?}", spec.class);
            return None;
        }
        Some(button)
    }

    fn set_glyph(&mut self, node: &Element, glyph: Glyph) {
        node.set_inner_html(&glyph.html());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root()?.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let Some(root) = self.root() else {
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            log::warn!("set root {name} failed: {err:?}");
        }
    }

    fn set_root_style_property(&mut self, name: &str, value: &str) {
        if let Some(root) = self.root() {
            set_inline_style(&root, name, value);
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("read scroll offset failed: {err:?}");
                0.0
            }
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

// =============================================================
// Storage
// =============================================================

/// `window.localStorage`, when the browser grants it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("read {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = &self.storage else {
            return Err(StorageError::Unavailable);
        };
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

// =============================================================
// Wiring
// =============================================================

struct Host {
    dom: WebDom,
    store: LocalStore,
    page: PageBehaviors<Element>,
    // Held for the page's lifetime; never disconnected.
    _reveal_observer: Option<IntersectionObserver>,
}

type SharedHost = Rc<RefCell<Host>>;

impl Host {
    fn dispatch(&mut self, event: PageEvent<Element>) -> Outcome {
        self.page.handle(&mut self.dom, &mut self.store, event)
    }
}

/// Register `handler` for `kind` on `target` for the rest of the page's life.
fn listen<F>(target: &EventTarget, kind: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
        log::warn!("listen for {kind} failed: {err:?}");
    }
    callback.forget();
}

/// Forward DOM events on `target` to the page as `make(event)`.
fn forward<F>(host: &SharedHost, target: &EventTarget, kind: &str, make: F)
where
    F: Fn(&Event) -> PageEvent<Element> + 'static,
{
    let host = Rc::clone(host);
    listen(target, kind, move |event| {
        let Ok(mut host) = host.try_borrow_mut() else {
            log::debug!("re-entrant {} ignored", event.type_());
            return;
        };
        if host.dispatch(make(&event)).prevent_default {
            event.prevent_default();
        }
    });
}

fn read_config(dom: &WebDom) -> PageConfig {
    let Some(raw) = dom.element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            PageConfig::default()
        }
    }
}

/// Listeners for the controls, links and cards found by install.
fn wire_install_phase(host: &SharedHost, window: &Window) -> Option<IntersectionObserver> {
    let guard = host.borrow();
    let page = &guard.page;
    let dom = &guard.dom;

    if let Some(button) = page.nav().button() {
        forward(host, button, "click", |_| PageEvent::MenuButtonClicked);
    }
    for link in page.nav_links(dom) {
        forward(host, &link, "click", |_| PageEvent::NavLinkClicked);
    }
    if let Some(control) = page.back_to_top() {
        forward(host, control.button(), "click", |_| PageEvent::BackToTopClicked);
    }
    if let Some(toggle) = page.theme() {
        forward(host, toggle.button(), "click", |_| PageEvent::ThemeToggleClicked);
    }
    for card in page.hover_targets(dom) {
        let entered = card.clone();
        forward(host, &card, "mouseenter", move |_| PageEvent::PointerEntered(entered.clone()));
        let left = card.clone();
        forward(host, &card, "mouseleave", move |_| PageEvent::PointerLeft(left.clone()));
    }
    forward(host, window, "scroll", |_| PageEvent::Scrolled);

    observe_reveal(host, page.reveal().targets(), page.config())
}

fn observe_reveal(host: &SharedHost, targets: &[Element], config: &PageConfig) -> Option<IntersectionObserver> {
    let shared = Rc::clone(host);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .filter_map(|value| {
                let entry = value.dyn_ref::<IntersectionObserverEntry>()?;
                Some(Intersection { target: entry.target(), is_intersecting: entry.is_intersecting() })
            })
            .collect::<Vec<_>>();
        let Ok(mut host) = shared.try_borrow_mut() else {
            return;
        };
        host.dispatch(PageEvent::Intersected(batch));
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal observer unavailable: {err:?}");
            return None;
        }
    };
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Some(observer)
}

/// Ready phase, then anchor interception. Runs once per host.
fn run_ready(host: &SharedHost) {
    let anchors = {
        let Ok(mut guard) = host.try_borrow_mut() else {
            return;
        };
        let state = &mut *guard;
        if !state.page.on_ready(&mut state.dom) {
            return;
        }
        state.page.anchor_links(&state.dom)
    };
    for anchor in anchors {
        let link = anchor.clone();
        forward(host, &anchor, "click", move |_| PageEvent::AnchorClicked {
            href: link.get_attribute("href").unwrap_or_default(),
        });
    }
}

/// Install, wire and run the ready phase against the fully parsed document.
fn boot(window: &Window) {
    let Some(mut dom) = WebDom::new(window.clone()) else {
        return;
    };
    let store = LocalStore::new(window);
    let config = read_config(&dom);
    let page = PageBehaviors::install(&mut dom, &store, config);

    let host = Rc::new(RefCell::new(Host { dom, store, page, _reveal_observer: None }));
    let observer = wire_install_phase(&host, window);
    {
        let mut guard = host.borrow_mut();
        let state = &mut *guard;
        if observer.is_none() {
            state.page.reveal_all(&mut state.dom);
        }
        state._reveal_observer = observer;
    }
    run_ready(&host);
}

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {err}")));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let deferred = window.clone();
        listen(&document, "DOMContentLoaded", move |_| boot(&deferred));
    } else {
        boot(&window);
    }
}
