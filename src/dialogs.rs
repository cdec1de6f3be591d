use crate::constants::FOCUSABLE_SELECTOR;
use crate::core::{ModalDom, ModalManager, SetupError};
use crate::dom::{self, Listener};
use crate::events;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const BACKDROP_SELECTOR: &str = ".modal-backdrop";
const DIALOG_SELECTOR: &str = ".modal-dialog";
const OPEN_CLASS: &str = "active";
const BODY_LOCK_CLASS: &str = "modal-open";

pub type SharedModals = Rc<RefCell<ModalManager<web::Element>>>;

/// `ModalDom` over the live document.
#[derive(Clone)]
pub struct WebModalDom {
    document: web::Document,
}

impl WebModalDom {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
        }
    }
}

impl ModalDom for WebModalDom {
    type Node = web::Element;

    fn set_open(&mut self, modal: &web::Element, open: bool) {
        dom::set_class(modal, OPEN_CLASS, open);
        _ = modal.set_attribute("aria-hidden", if open { "false" } else { "true" });
    }

    fn set_page_locked(&mut self, locked: bool) {
        if let Some(body) = self.document.body() {
            dom::set_class(&body, BODY_LOCK_CLASS, locked);
        }
    }

    fn focusables(&self, modal: &web::Element) -> Vec<web::Element> {
        dom::query_all(modal, FOCUSABLE_SELECTOR)
    }

    fn dialog(&self, modal: &web::Element) -> Option<web::Element> {
        dom::query(modal, DIALOG_SELECTOR)
    }

    fn focus(&mut self, node: &web::Element) {
        dom::focus(node);
    }

    fn active_element(&self) -> Option<web::Element> {
        self.document.active_element()
    }

    fn is_connected(&self, node: &web::Element) -> bool {
        node.is_connected()
    }
}

/// Modal dialogs wired to their triggers, dismiss controls, backdrops and
/// the keyboard.
pub struct ModalSystem {
    manager: SharedModals,
    dom: WebModalDom,
    _listeners: Vec<Listener>,
}

impl ModalSystem {
    pub fn setup(document: &web::Document) -> Result<Self, SetupError> {
        let modals = dom::query_all(document, BACKDROP_SELECTOR);
        if modals.is_empty() {
            return Err(SetupError::MissingElement(BACKDROP_SELECTOR));
        }
        let manager: SharedModals = Rc::new(RefCell::new(ModalManager::new()));
        let dom = WebModalDom::new(document);

        let mut listeners = events::wire_modal_clicks(document, &modals, &manager, &dom);
        listeners.push(events::wire_modal_keys(document, &manager, &dom));
        log::info!("[modal] wired {} modal(s)", modals.len());

        Ok(Self {
            manager,
            dom,
            _listeners: listeners,
        })
    }

    pub fn is_open(&self) -> bool {
        self.manager.borrow().is_open()
    }

    /// Close whichever modal is open; used on teardown.
    pub fn close_all(&self) {
        let mut dom = self.dom.clone();
        self.manager.borrow_mut().close_active(&mut dom);
    }
}
