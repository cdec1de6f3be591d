/// DOM operations the modal manager needs.
///
/// `Node` is an element handle; equality means "same element".
pub trait ModalDom {
    type Node: Clone + PartialEq;

    /// Toggle the visible/`aria-hidden` state of a modal backdrop.
    fn set_open(&mut self, modal: &Self::Node, open: bool);
    /// Toggle the page-level scroll lock.
    fn set_page_locked(&mut self, locked: bool);
    /// Focusable descendants in document order.
    fn focusables(&self, modal: &Self::Node) -> Vec<Self::Node>;
    /// The dialog container inside the backdrop, if any.
    fn dialog(&self, modal: &Self::Node) -> Option<Self::Node>;
    fn focus(&mut self, node: &Self::Node);
    fn active_element(&self) -> Option<Self::Node>;
    /// Whether the node is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;
}

/// Keyboard input relevant to an open modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl ModalKey {
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => ModalKey::Escape,
            "Tab" => ModalKey::Tab { shift },
            _ => ModalKey::Other,
        }
    }
}

/// Where focus should go for a Tab press inside the trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabTarget {
    /// Let the browser move focus normally.
    Native,
    /// Focus the focusable at this index.
    Index(usize),
    /// No focusables: keep focus on the dialog container.
    Dialog,
}

/// Pure focus-trap decision: wrap first<->last, otherwise defer to the browser.
pub fn trap_tab<N: PartialEq>(focusables: &[N], active: Option<&N>, shift: bool) -> TabTarget {
    let (first, last) = match (focusables.first(), focusables.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return TabTarget::Dialog,
    };
    match (shift, active) {
        (true, Some(a)) if a == first => TabTarget::Index(focusables.len() - 1),
        (false, Some(a)) if a == last => TabTarget::Index(0),
        // focus already escaped the modal (e.g. clicked on the page behind)
        (_, Some(a)) if !focusables.contains(a) => {
            TabTarget::Index(if shift { focusables.len() - 1 } else { 0 })
        }
        _ => TabTarget::Native,
    }
}

/// Tracks the single open modal and the element to hand focus back to.
#[derive(Debug)]
pub struct ModalManager<N> {
    active: Option<N>,
    return_focus: Option<N>,
}

impl<N> Default for ModalManager<N> {
    fn default() -> Self {
        Self {
            active: None,
            return_focus: None,
        }
    }
}

impl<N: Clone + PartialEq> ModalManager<N> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Option<&N> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open `modal`, remembering `trigger` for focus restoration.
    ///
    /// An already-open different modal is closed first, without restoring
    /// focus, so DOM state and the tracked reference never disagree.
    pub fn open<D: ModalDom<Node = N>>(&mut self, dom: &mut D, modal: &N, trigger: Option<N>) {
        if let Some(prev) = self.active.take() {
            if &prev != modal {
                dom.set_open(&prev, false);
            }
        }
        self.return_focus = trigger;
        self.active = Some(modal.clone());
        dom.set_open(modal, true);
        dom.set_page_locked(true);

        let focusables = dom.focusables(modal);
        if let Some(first) = focusables.first() {
            dom.focus(first);
        } else if let Some(dialog) = dom.dialog(modal) {
            dom.focus(&dialog);
        }
    }

    /// Close `modal` if it is the active one; otherwise a no-op.
    /// Returns whether anything changed.
    pub fn close<D: ModalDom<Node = N>>(&mut self, dom: &mut D, modal: &N) -> bool {
        if self.active.as_ref() != Some(modal) {
            return false;
        }
        self.active = None;
        dom.set_open(modal, false);
        dom.set_page_locked(false);
        if let Some(trigger) = self.return_focus.take() {
            if dom.is_connected(&trigger) {
                dom.focus(&trigger);
            }
        }
        true
    }

    pub fn close_active<D: ModalDom<Node = N>>(&mut self, dom: &mut D) -> bool {
        match self.active.clone() {
            Some(modal) => self.close(dom, &modal),
            None => false,
        }
    }

    /// A click landed on `modal`'s backdrop; `target` is the event target.
    pub fn backdrop_click<D: ModalDom<Node = N>>(&mut self, dom: &mut D, modal: &N, target: &N) -> bool {
        if target != modal {
            return false;
        }
        self.close(dom, modal)
    }

    /// Handle a keydown while a modal may be open. Returns `true` when the
    /// event's default action must be prevented.
    pub fn handle_key<D: ModalDom<Node = N>>(&mut self, dom: &mut D, key: ModalKey) -> bool {
        let modal = match &self.active {
            Some(m) => m.clone(),
            None => return false,
        };
        match key {
            ModalKey::Escape => {
                self.close(dom, &modal);
                true
            }
            ModalKey::Tab { shift } => {
                let focusables = dom.focusables(&modal);
                let active = dom.active_element();
                match trap_tab(&focusables, active.as_ref(), shift) {
                    TabTarget::Native => false,
                    TabTarget::Index(i) => {
                        dom.focus(&focusables[i]);
                        true
                    }
                    TabTarget::Dialog => {
                        if let Some(dialog) = dom.dialog(&modal) {
                            dom.focus(&dialog);
                        }
                        true
                    }
                }
            }
            ModalKey::Other => false,
        }
    }
}
