use crate::constants::{TOAST_COPIED, TOAST_COPY_FAILED};
use crate::core::SetupError;
use crate::dom::{self, js_err, Listener};
use crate::overlay::{Toast, Tone};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const COPY_SELECTOR: &str = "[data-copy], [data-copy-target]";

/// Copy-to-clipboard buttons with a success/failure toast. Failures are
/// reported once; there is no retry.
pub struct CopyButtons {
    _listeners: Vec<Listener>,
}

impl CopyButtons {
    pub fn setup(document: &web::Document) -> Result<Self, SetupError> {
        let buttons = dom::query_all(document, COPY_SELECTOR);
        if buttons.is_empty() {
            return Err(SetupError::MissingElement(COPY_SELECTOR));
        }
        let toast = Toast::attach(document)?;

        let listeners = buttons
            .iter()
            .map(|button| {
                let btn = button.clone();
                let doc = document.clone();
                let toast = toast.clone();
                Listener::new(button, "click", move |ev| {
                    ev.prevent_default();
                    let text = copy_text(&doc, &btn);
                    let toast = toast.clone();
                    spawn_local(async move {
                        let result = match text {
                            Some(t) => write_text(&t).await,
                            None => Err(SetupError::MissingElement("copy source")),
                        };
                        match result {
                            Ok(()) => toast.show(TOAST_COPIED, Tone::Success),
                            Err(e) => {
                                e.report("copy");
                                toast.show(TOAST_COPY_FAILED, Tone::Error);
                            }
                        }
                    });
                })
            })
            .collect();
        Ok(Self {
            _listeners: listeners,
        })
    }
}

/// `data-copy` wins; otherwise the trimmed text of `data-copy-target`.
fn copy_text(document: &web::Document, button: &web::Element) -> Option<String> {
    if let Some(text) = button.get_attribute("data-copy").filter(|t| !t.is_empty()) {
        return Some(text);
    }
    let selector = button.get_attribute("data-copy-target")?;
    let target = dom::query(document, &selector)?;
    let text = match target.dyn_ref::<web::HtmlInputElement>() {
        Some(input) => input.value(),
        None => target.text_content().unwrap_or_default(),
    };
    let text = text.trim().to_owned();
    (!text.is_empty()).then_some(text)
}

/// `navigator.clipboard.writeText`, looked up dynamically so browsers and
/// insecure contexts without the async clipboard fail softly.
async fn write_text(text: &str) -> Result<(), SetupError> {
    let window = web::window().ok_or(SetupError::MissingElement("window"))?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_err)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(SetupError::Unsupported("clipboard"));
    }
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_err)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| SetupError::Unsupported("clipboard.writeText"))?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_err)?
        .dyn_into::<js_sys::Promise>()
        .map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}
