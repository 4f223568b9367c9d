//! Browser Platform - web-sys binding for the controller
//!
//! Everything host-specific lives here: the [`WebDom`] port over the real
//! document, element resolution at boot, event listener wiring, the
//! intersection observer behind reveals, and the timer/frame scheduling that
//! drives the self-rescheduling loops (typewriter, hero typing, flights).
//!
//! Listener closures are `Closure::wrap` + `forget`: they live for the page
//! lifetime and are never detached, so leaking them to the JS side is the
//! intended ownership model. One-shot continuations use `Closure::once_into_js`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Node,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::controller::{ClickOutcome, FrameOutcome, PageController, PageHandles};
use crate::port::DomPort;
use crate::state::flight::LANDING_MS;
use crate::state::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::state::typewriter::{HERO_START_DELAY_MS, START_DELAY_MS};
use crate::types::ControllerConfig;

type SharedController = Rc<RefCell<PageController<WebDom>>>;

// =============================================================================
// BOOT ERRORS
// =============================================================================

/// Failures that prevent the controller from booting at all. Missing page
/// elements are not boot errors; they degrade individual features.
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no global window in this environment")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}

// =============================================================================
// WEB DOM PORT
// =============================================================================

/// [`DomPort`] over the live document.
#[derive(Clone)]
pub struct WebDom {
    window: Window,
}

impl WebDom {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl DomPort for WebDom {
    type Handle = HtmlElement;

    fn add_class(&self, el: &HtmlElement, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &HtmlElement, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn set_style(&self, el: &HtmlElement, property: &str, value: &str) {
        let _ = el.style().set_property(property, value);
    }

    fn set_text(&self, el: &HtmlElement, text: &str) {
        el.set_text_content(Some(text));
    }

    fn text(&self, el: &HtmlElement) -> String {
        el.text_content().unwrap_or_default()
    }

    fn offset_top(&self, el: &HtmlElement) -> f64 {
        el.offset_top() as f64
    }

    fn offset_height(&self, el: &HtmlElement) -> f64 {
        el.offset_height() as f64
    }

    fn scroll_y(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn scroll_to_smooth(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn inject_ripple(&self, target: &HtmlElement) -> Option<HtmlElement> {
        let document = self.window.document()?;
        let ripple = document.create_element("div").ok()?;
        ripple.set_class_name("landing-ripple");
        target.append_child(&ripple).ok()?;
        ripple.dyn_into::<HtmlElement>().ok()
    }

    fn remove_node(&self, el: &HtmlElement) {
        el.remove();
    }

    fn push_hash(&self, hash: &str) {
        if let Ok(history) = self.window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(hash));
        }
    }
}

// =============================================================================
// ELEMENT RESOLUTION
// =============================================================================

fn as_html(el: Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(as_html)
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Resolve the element contract once. Every slot tolerates absence.
fn resolve_handles(document: &Document) -> PageHandles<HtmlElement> {
    let nav_links = query_all(document, ".nav-link")
        .into_iter()
        .filter_map(|el| el.get_attribute("href").map(|href| (href, el)))
        .collect();
    let sections = query_all(document, "section[id]")
        .into_iter()
        .map(|el| (el.id(), el))
        .collect();

    PageHandles {
        navbar: document.get_element_by_id("navbar").and_then(as_html),
        body: document.body(),
        nav_toggle: query(document, ".nav-toggle"),
        nav_menu: query(document, ".nav-menu"),
        nav_links,
        sections,
        orbs: query_all(document, ".gradient-orb"),
        reveals: query_all(document, ".reveal"),
        role_cycler: document.get_element_by_id("role-cycler").and_then(as_html),
        hero_subtitle: query(document, ".hero-subtitle"),
    }
}

// =============================================================================
// SCHEDULING
// =============================================================================

fn set_timeout(window: &Window, delay_ms: i32, callback: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(callback);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

fn request_frame(window: &Window, callback: impl FnOnce(f64) + 'static) {
    let cb = Closure::once_into_js(callback);
    let _ = window.request_animation_frame(cb.unchecked_ref());
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Self-rescheduling role cycler chain; stops when the controller returns
/// `None` (element absent or effect disabled).
fn schedule_typewriter(ctrl: SharedController, window: Window, delay_ms: i32) {
    let w = window.clone();
    set_timeout(&window, delay_ms, move || {
        let next = ctrl.borrow_mut().typewriter_tick();
        if let Some(next) = next {
            schedule_typewriter(ctrl, w, next as i32);
        }
    });
}

/// One-shot hero typing chain.
fn schedule_hero(ctrl: SharedController, window: Window, delay_ms: i32) {
    let w = window.clone();
    set_timeout(&window, delay_ms, move || {
        let next = ctrl.borrow_mut().hero_tick();
        if let Some(next) = next {
            schedule_hero(ctrl, w, next as i32);
        }
    });
}

/// Frame loop for one flight generation; a superseded generation reports
/// `Stale` and the loop dies with it.
fn drive_flight(ctrl: SharedController, window: Window, generation: u64) {
    let w = window.clone();
    request_frame(&window, move |timestamp| {
        if ctrl.borrow_mut().flight_frame(generation, timestamp) == FrameOutcome::Continue {
            drive_flight(ctrl, w, generation);
        }
    });
}

/// Deadline timer armed at flight start: lands, then clears the landing.
fn arm_flight_deadline(
    ctrl: SharedController,
    window: Window,
    generation: u64,
    duration_ms: f64,
) {
    let w = window.clone();
    set_timeout(&window, duration_ms as i32, move || {
        if let Some(token) = ctrl.borrow_mut().flight_deadline(generation) {
            let c = ctrl.clone();
            set_timeout(&w, LANDING_MS as i32, move || {
                c.borrow_mut().clear_landing(token);
            });
        }
    });
}

// =============================================================================
// EVENT WIRING
// =============================================================================

fn contains(container: &Option<HtmlElement>, node: &Option<Node>) -> bool {
    matches!(
        (container, node),
        (Some(container), Some(node)) if container.contains(Some(node))
    )
}

fn on_anchor_click(
    ctrl: &SharedController,
    window: &Window,
    document: &Document,
    event: &MouseEvent,
    anchor: &HtmlElement,
) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    if !href.starts_with('#') {
        return;
    }
    event.prevent_default();

    let target = href
        .get(1..)
        .filter(|id| !id.is_empty())
        .and_then(|id| document.get_element_by_id(id))
        .and_then(as_html);

    let outcome = ctrl.borrow_mut().anchor_click(&href, target.as_ref());
    if let ClickOutcome::FlightStarted {
        generation,
        duration_ms,
    } = outcome
    {
        drive_flight(ctrl.clone(), window.clone(), generation);
        arm_flight_deadline(ctrl.clone(), window.clone(), generation, duration_ms);
    }
}

fn wire_listeners(ctrl: &SharedController, window: &Window, document: &Document) {
    // One scroll listener feeds all three throttled effects.
    {
        let c = ctrl.clone();
        let w = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            c.borrow_mut().on_scroll(now_ms(&w));
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mobile nav toggle.
    if let Some(toggle) = query(document, ".nav-toggle") {
        let c = ctrl.clone();
        let closure = Closure::wrap(Box::new(move || {
            c.borrow_mut().toggle_nav();
        }) as Box<dyn FnMut()>);
        let _ = toggle
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Every in-page anchor gets the smooth-scroll handler (nav links and CTA
    // buttons alike).
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let c = ctrl.clone();
        let w = window.clone();
        let d = document.clone();
        let a = anchor.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            on_anchor_click(&c, &w, &d, &event, &a);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = anchor
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Outside-click dismissal.
    {
        let c = ctrl.clone();
        let menu = query(document, ".nav-menu");
        let toggle = query(document, ".nav-toggle");
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let in_menu = contains(&menu, &node);
            let in_toggle = contains(&toggle, &node);
            c.borrow_mut().on_document_click(in_menu, in_toggle);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Escape dismissal.
    {
        let c = ctrl.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                c.borrow_mut().on_escape();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// =============================================================================
// REVEAL OBSERVER
// =============================================================================

fn wire_reveal_observer(ctrl: &SharedController, reveal_els: Vec<HtmlElement>) {
    if reveal_els.is_empty() {
        return;
    }

    let els = reveal_els.clone();
    let c = ctrl.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target: JsValue = entry.target().into();
                if let Some(index) = els
                    .iter()
                    .position(|el| AsRef::<JsValue>::as_ref(el) == &target)
                {
                    c.borrow_mut().reveal(index);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        for el in &reveal_els {
            observer.observe(el);
        }
    }
    callback.forget();
}

// =============================================================================
// BOOT
// =============================================================================

fn init_page(window: &Window, document: &Document, config: ControllerConfig) {
    let handles = resolve_handles(document);
    let reveal_els = handles.reveals.clone();

    let ctrl: SharedController = Rc::new(RefCell::new(PageController::new(
        WebDom::new(window.clone()),
        config,
        handles,
    )));
    ctrl.borrow_mut().init();

    wire_listeners(&ctrl, window, document);
    wire_reveal_observer(&ctrl, reveal_els);

    schedule_typewriter(ctrl.clone(), window.clone(), START_DELAY_MS as i32);
    schedule_hero(ctrl.clone(), window.clone(), HERO_START_DELAY_MS as i32);

    log::debug!("listeners wired, observer armed");
}

/// Boot the controller against the live page, waiting for `DOMContentLoaded`
/// if the document is still loading.
pub fn boot(config: ControllerConfig) -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    // A second boot (hot reload) just reuses the installed logger.
    let _ = console_log::init_with_level(log::Level::Info);

    if document.ready_state() == "loading" {
        let w = window.clone();
        let d = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            init_page(&w, &d, config.clone());
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        init_page(&window, &document, config);
    }
    Ok(())
}
