//! `web-sys` glue: DOM elements as surfaces, `setTimeout` as a timer source,
//! selector lookups, and page-lifetime event listeners.
//!
//! DOM calls that can fail return `Result<_, JsValue>`. None of those
//! failures are actionable for a decorative page, so they are logged at
//! `warn` and the affected behavior degrades instead of propagating.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use interact::schedule::{Task, Timers};
use interact::surface::{ClassSurface, TextSurface};
use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

/// A DOM element usable as a text or class surface.
#[derive(Clone, Debug)]
pub struct DomElement(pub Element);

impl TextSurface for DomElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl ClassSurface for DomElement {
    fn set_class(&self, class: &str, on: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, on) {
            log::warn!("failed to set class `{class}` on <{}>: {err:?}", self.0.tag_name());
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// [`Timers`] backed by `window.setTimeout`. Timers are never cleared from
/// JavaScript; chains stop through their cancel token instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// First element matching `selector`, or `None` (logged) for an invalid
/// selector.
pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {err:?}");
            None
        }
    }
}

/// Elements from a `querySelectorAll` result, in document order.
pub fn elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let list = match result {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector `{selector}`: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(node) => {
                log::debug!("`{selector}` matched non-element node {}", node.node_name());
                None
            }
        })
        .collect()
}

/// Current vertical scroll offset of the page.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_else(|err| {
        log::warn!("scrollY unavailable: {err:?}");
        0.0
    })
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for `{event}`: {err:?}");
        return;
    }
    closure.forget();
}

/// Coalesces bursts of requests into one run per animation frame.
#[derive(Clone, Debug, Default)]
pub struct FrameThrottle {
    pending: Rc<Cell<bool>>,
}

impl FrameThrottle {
    /// Run `task` on the next animation frame unless a run is already
    /// pending. Falls back to running immediately if the frame request fails.
    pub fn request(&self, window: &Window, task: Rc<dyn Fn()>) {
        if self.pending.get() {
            return;
        }
        self.pending.set(true);

        let pending = Rc::clone(&self.pending);
        let task_for_frame = Rc::clone(&task);
        let callback = Closure::once_into_js(move |_ts: f64| {
            pending.set(false);
            task_for_frame();
        });
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref::<Function>()) {
            log::warn!("requestAnimationFrame failed, running inline: {err:?}");
            self.pending.set(false);
            task();
        }
    }
}
