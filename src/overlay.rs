use crate::constants::TOAST_VISIBLE_MS;
use crate::core::SetupError;
use crate::dom::{self, js_err, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const TOAST_ID: &str = "toast";

/// Whether a transient notification reports success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Success => "is-success",
            Tone::Error => "is-error",
        }
    }
}

/// A single live-region notification reused for every message.
#[derive(Clone)]
pub struct Toast {
    el: web::Element,
    hide: Rc<RefCell<Option<Timeout>>>,
}

impl Toast {
    /// Reuse `#toast` if the page has one, otherwise append it to the body.
    pub fn attach(document: &web::Document) -> Result<Self, SetupError> {
        let el = match document.get_element_by_id(TOAST_ID) {
            Some(el) => el,
            None => {
                let body = document.body().ok_or(SetupError::MissingElement("body"))?;
                let el = document.create_element("div").map_err(js_err)?;
                el.set_id(TOAST_ID);
                el.set_class_name("toast");
                _ = el.set_attribute("role", "status");
                _ = el.set_attribute("aria-live", "polite");
                _ = body.append_child(&el);
                el
            }
        };
        Ok(Self {
            el,
            hide: Rc::new(RefCell::new(None)),
        })
    }

    pub fn show(&self, message: &str, tone: Tone) {
        self.el.set_text_content(Some(message));
        dom::set_class(&self.el, Tone::Success.class(), tone == Tone::Success);
        dom::set_class(&self.el, Tone::Error.class(), tone == Tone::Error);
        dom::set_class(&self.el, "is-visible", true);

        let el = self.el.clone();
        // replacing the handle clears any hide still pending from a previous message
        *self.hide.borrow_mut() = Timeout::new(TOAST_VISIBLE_MS, move || {
            dom::set_class(&el, "is-visible", false);
        })
        .ok();
    }
}
