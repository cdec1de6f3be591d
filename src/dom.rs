use crate::core::SetupError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> SetupError {
    SetupError::Js(format!("{:?}", e))
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Attach for the lifetime of the page.
    pub fn forever(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        std::mem::forget(Self::new(target, event, handler));
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Documents and elements both answer selector queries.
pub trait Queryable {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue>;
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue>;
}

impl Queryable for web::Document {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Queryable for web::Element {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &impl Queryable, selector: &str) -> Vec<web::Element> {
    let list = match root.select_all(selector) {
        Ok(l) => l,
        Err(_) => return Vec::new(),
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(root: &impl Queryable, selector: &str) -> Option<web::Element> {
    root.select(selector).ok().flatten()
}

/// Like `query` but reports a missing element as a setup error.
pub fn require(root: &impl Queryable, selector: &'static str) -> Result<web::Element, SetupError> {
    query(root, selector).ok_or(SetupError::MissingElement(selector))
}

#[inline]
pub fn set_css_var(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

#[inline]
pub fn remove_css_var(el: &web::Element, name: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().remove_property(name);
    }
}

#[inline]
pub fn focus(el: &web::Element) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.focus();
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// The event target as an `Element`, if it is one.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// `(scroll_y, scrollable document height, viewport height)`.
pub fn scroll_metrics(window: &web::Window) -> (f64, f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let (_, viewport_h) = viewport_size(window);
    let scroll_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(0.0);
    (scroll_y, scroll_height, viewport_h)
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Whether the global object exposes a constructor named `name`.
pub fn supports(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

/// `setTimeout` with an owned one-shot closure. The returned handle clears
/// the timer when dropped unless it already fired.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> Result<Self, SetupError> {
        let window = web::window().ok_or(SetupError::MissingElement("window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// `setInterval` counterpart of [`Timeout`]; cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, handler: impl FnMut() + 'static) -> Result<Self, SetupError> {
        let window = web::window().ok_or(SetupError::MissingElement("window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Computed value of a CSS property (custom properties included); empty when
/// unavailable.
pub fn computed_style(window: &web::Window, el: &web::Element, property: &str) -> String {
    window
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|s| s.get_property_value(property).ok())
        .unwrap_or_default()
}

/// Rendered elements only: not `display: none` nor `visibility: hidden`.
pub fn is_rendered(window: &web::Window, el: &web::Element) -> bool {
    computed_style(window, el, "display") != "none"
        && computed_style(window, el, "visibility") != "hidden"
}
