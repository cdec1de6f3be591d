// Host-side tests for modal open/close and the focus trap.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod modal {
    include!("../src/core/modal.rs");
}

use modal::*;
use std::collections::{HashMap, HashSet};

const PAGE_BUTTON: u32 = 1;
const OTHER_BUTTON: u32 = 2;
const MODAL_A: u32 = 10;
const MODAL_B: u32 = 20;
const EMPTY_MODAL: u32 = 30;

/// Elements are plain ids; each modal lists its focusables and dialog.
struct MockDom {
    open: HashSet<u32>,
    locked: bool,
    focused: Option<u32>,
    focusables: HashMap<u32, Vec<u32>>,
    dialogs: HashMap<u32, u32>,
    detached: HashSet<u32>,
}

impl MockDom {
    fn new() -> Self {
        let mut focusables = HashMap::new();
        focusables.insert(MODAL_A, vec![11, 12, 13]);
        focusables.insert(MODAL_B, vec![21]);
        focusables.insert(EMPTY_MODAL, vec![]);
        let mut dialogs = HashMap::new();
        dialogs.insert(MODAL_A, 19);
        dialogs.insert(MODAL_B, 29);
        dialogs.insert(EMPTY_MODAL, 39);
        Self {
            open: HashSet::new(),
            locked: false,
            focused: Some(PAGE_BUTTON),
            focusables,
            dialogs,
            detached: HashSet::new(),
        }
    }
}

impl ModalDom for MockDom {
    type Node = u32;

    fn set_open(&mut self, modal: &u32, open: bool) {
        if open {
            self.open.insert(*modal);
        } else {
            self.open.remove(modal);
        }
    }

    fn set_page_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn focusables(&self, modal: &u32) -> Vec<u32> {
        self.focusables.get(modal).cloned().unwrap_or_default()
    }

    fn dialog(&self, modal: &u32) -> Option<u32> {
        self.dialogs.get(modal).copied()
    }

    fn focus(&mut self, node: &u32) {
        self.focused = Some(*node);
    }

    fn active_element(&self) -> Option<u32> {
        self.focused
    }

    fn is_connected(&self, node: &u32) -> bool {
        !self.detached.contains(node)
    }
}

fn opened(modal: u32) -> (ModalManager<u32>, MockDom) {
    let mut dom = MockDom::new();
    let mut m = ModalManager::new();
    m.open(&mut dom, &modal, Some(PAGE_BUTTON));
    (m, dom)
}

#[test]
fn open_focuses_first_focusable_and_locks_page() {
    let (m, dom) = opened(MODAL_A);
    assert_eq!(m.active(), Some(&MODAL_A));
    assert!(dom.open.contains(&MODAL_A));
    assert!(dom.locked);
    assert_eq!(dom.focused, Some(11));
}

#[test]
fn open_without_focusables_focuses_dialog() {
    let (_, dom) = opened(EMPTY_MODAL);
    assert_eq!(dom.focused, Some(39));
}

#[test]
fn close_restores_focus_to_trigger() {
    let (mut m, mut dom) = opened(MODAL_A);
    assert!(m.close(&mut dom, &MODAL_A));
    assert!(!m.is_open());
    assert!(dom.open.is_empty());
    assert!(!dom.locked);
    assert_eq!(dom.focused, Some(PAGE_BUTTON));
}

#[test]
fn close_skips_focus_restore_for_detached_trigger() {
    let (mut m, mut dom) = opened(MODAL_A);
    dom.detached.insert(PAGE_BUTTON);
    m.close(&mut dom, &MODAL_A);
    assert_eq!(dom.focused, Some(11));
}

#[test]
fn closing_an_inactive_modal_is_a_no_op() {
    let (mut m, mut dom) = opened(MODAL_A);
    assert!(!m.close(&mut dom, &MODAL_B));
    assert_eq!(m.active(), Some(&MODAL_A));
    assert!(dom.locked);

    let mut fresh = ModalManager::<u32>::new();
    assert!(!fresh.close(&mut dom, &MODAL_A));
    assert!(!fresh.close_active(&mut dom));
}

#[test]
fn opening_a_second_modal_closes_the_first() {
    let (mut m, mut dom) = opened(MODAL_A);
    m.open(&mut dom, &MODAL_B, Some(OTHER_BUTTON));
    assert_eq!(m.active(), Some(&MODAL_B));
    assert!(!dom.open.contains(&MODAL_A));
    assert!(dom.open.contains(&MODAL_B));
    assert!(dom.locked);
    assert_eq!(dom.focused, Some(21));

    m.close(&mut dom, &MODAL_B);
    assert!(dom.open.is_empty());
    assert!(!dom.locked);
    assert_eq!(dom.focused, Some(OTHER_BUTTON));
}

#[test]
fn escape_closes_and_prevents_default() {
    let (mut m, mut dom) = opened(MODAL_A);
    assert!(m.handle_key(&mut dom, ModalKey::Escape));
    assert!(!m.is_open());
    assert_eq!(dom.focused, Some(PAGE_BUTTON));
}

#[test]
fn keys_are_ignored_without_an_open_modal() {
    let mut dom = MockDom::new();
    let mut m = ModalManager::<u32>::new();
    assert!(!m.handle_key(&mut dom, ModalKey::Escape));
    assert!(!m.handle_key(&mut dom, ModalKey::Tab { shift: false }));
    assert_eq!(dom.focused, Some(PAGE_BUTTON));
}

#[test]
fn tab_wraps_from_last_to_first() {
    let (mut m, mut dom) = opened(MODAL_A);
    dom.focused = Some(13);
    assert!(m.handle_key(&mut dom, ModalKey::Tab { shift: false }));
    assert_eq!(dom.focused, Some(11));
}

#[test]
fn shift_tab_wraps_from_first_to_last() {
    let (mut m, mut dom) = opened(MODAL_A);
    assert!(m.handle_key(&mut dom, ModalKey::Tab { shift: true }));
    assert_eq!(dom.focused, Some(13));
}

#[test]
fn tab_in_the_middle_is_left_to_the_browser() {
    let (mut m, mut dom) = opened(MODAL_A);
    dom.focused = Some(12);
    assert!(!m.handle_key(&mut dom, ModalKey::Tab { shift: false }));
    assert!(!m.handle_key(&mut dom, ModalKey::Tab { shift: true }));
    assert_eq!(dom.focused, Some(12));
}

#[test]
fn tab_with_no_focusables_keeps_focus_on_dialog() {
    let (mut m, mut dom) = opened(EMPTY_MODAL);
    dom.focused = Some(PAGE_BUTTON);
    assert!(m.handle_key(&mut dom, ModalKey::Tab { shift: false }));
    assert_eq!(dom.focused, Some(39));
}

#[test]
fn single_focusable_cycles_onto_itself() {
    let (mut m, mut dom) = opened(MODAL_B);
    assert!(m.handle_key(&mut dom, ModalKey::Tab { shift: false }));
    assert_eq!(dom.focused, Some(21));
    assert!(m.handle_key(&mut dom, ModalKey::Tab { shift: true }));
    assert_eq!(dom.focused, Some(21));
}

#[test]
fn escaped_focus_is_pulled_back_in() {
    assert_eq!(trap_tab(&[11, 12, 13], Some(&PAGE_BUTTON), false), TabTarget::Index(0));
    assert_eq!(trap_tab(&[11, 12, 13], Some(&PAGE_BUTTON), true), TabTarget::Index(2));
    assert_eq!(trap_tab::<u32>(&[], None, false), TabTarget::Dialog);
    assert_eq!(trap_tab(&[11, 12], None, false), TabTarget::Native);
}

#[test]
fn backdrop_click_only_closes_on_the_backdrop_itself() {
    let (mut m, mut dom) = opened(MODAL_A);
    assert!(!m.backdrop_click(&mut dom, &MODAL_A, &19));
    assert!(m.is_open());
    assert!(m.backdrop_click(&mut dom, &MODAL_A, &MODAL_A));
    assert!(!m.is_open());
}

#[test]
fn key_names_map_to_modal_keys() {
    assert_eq!(ModalKey::from_key("Escape", false), ModalKey::Escape);
    assert_eq!(ModalKey::from_key("Esc", true), ModalKey::Escape);
    assert_eq!(ModalKey::from_key("Tab", true), ModalKey::Tab { shift: true });
    assert_eq!(ModalKey::from_key("Enter", false), ModalKey::Other);
}
