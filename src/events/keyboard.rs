use crate::core::ModalKey;
use crate::dialogs::{SharedModals, WebModalDom};
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the open modal; Tab/Shift+Tab cycle inside it.
pub fn wire_modal_keys(
    document: &web::Document,
    manager: &SharedModals,
    modal_dom: &WebModalDom,
) -> Listener {
    let manager = manager.clone();
    let mut md = modal_dom.clone();
    Listener::new(document, "keydown", move |ev| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let key = ModalKey::from_key(&kev.key(), kev.shift_key());
        if key == ModalKey::Other {
            return;
        }
        if manager.borrow_mut().handle_key(&mut md, key) {
            kev.prevent_default();
        }
    })
}
