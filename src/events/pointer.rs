use crate::dialogs::{SharedModals, WebModalDom, BACKDROP_SELECTOR};
use crate::dom::{self, Listener};
use web_sys as web;

const TRIGGER_SELECTOR: &str = "[data-modal-target]";
const DISMISS_SELECTOR: &str = "[data-dismiss-modal]";

/// Triggers open their target modal, dismiss controls close their enclosing
/// modal, and a click on the backdrop itself (not the dialog) closes it.
pub fn wire_modal_clicks(
    document: &web::Document,
    modals: &[web::Element],
    manager: &SharedModals,
    modal_dom: &WebModalDom,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    for trigger in dom::query_all(document, TRIGGER_SELECTOR) {
        let Some(target_selector) = trigger.get_attribute("data-modal-target") else {
            continue;
        };
        let manager = manager.clone();
        let mut md = modal_dom.clone();
        let doc = document.clone();
        let trig = trigger.clone();
        listeners.push(Listener::new(&trigger, "click", move |_| {
            let Some(modal) = dom::query(&doc, &target_selector) else {
                log::debug!("[modal] no modal matches {}", target_selector);
                return;
            };
            manager.borrow_mut().open(&mut md, &modal, Some(trig.clone()));
        }));
    }

    for button in dom::query_all(document, DISMISS_SELECTOR) {
        let manager = manager.clone();
        let mut md = modal_dom.clone();
        let btn = button.clone();
        listeners.push(Listener::new(&button, "click", move |_| {
            if let Ok(Some(modal)) = btn.closest(BACKDROP_SELECTOR) {
                manager.borrow_mut().close(&mut md, &modal);
            }
        }));
    }

    for modal in modals {
        let manager = manager.clone();
        let mut md = modal_dom.clone();
        let backdrop = modal.clone();
        listeners.push(Listener::new(modal, "click", move |ev| {
            if let Some(target) = dom::event_element(&ev) {
                manager.borrow_mut().backdrop_click(&mut md, &backdrop, &target);
            }
        }));
    }

    listeners
}
