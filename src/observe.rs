use crate::core::SetupError;
use crate::dom::{self, js_err};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An `IntersectionObserver` whose callback lives as long as the handle.
/// Dropping it disconnects the observer.
pub struct Visibility {
    observer: web::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Visibility {
    /// `handler` receives each entry with its observer so it can unobserve.
    /// Fails with `Unsupported` when the browser has no IntersectionObserver.
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut handler: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
    ) -> Result<Self, SetupError> {
        let window = web::window().ok_or(SetupError::MissingElement("window"))?;
        if !dom::supports(&window, "IntersectionObserver") {
            return Err(SetupError::Unsupported("IntersectionObserver"));
        }
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                        handler(&entry, &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    pub fn observe(&self, el: &web::Element) {
        self.observer.observe(el);
    }
}

impl Drop for Visibility {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
