use crate::core::{FrameHost, FrameId, FrameKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A reusable `requestAnimationFrame` callback.
///
/// The closure lives in a shared slot so the handler can schedule itself
/// again. Call `clear` on teardown to break the reference cycle.
#[derive(Clone, Default)]
pub struct FrameCallback {
    slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameCallback {
    pub fn set(&self, handler: impl FnMut(f64) + 'static) {
        *self.slot.borrow_mut() = Some(Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64)>));
    }

    pub fn request(&self) -> Option<FrameId> {
        let window = web::window()?;
        let slot = self.slot.borrow();
        let closure = slot.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    /// Must not be called from inside the handler itself.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[inline]
pub fn cancel_frame(id: FrameId) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(id);
    }
}

/// Frame host for the background scheduler: one callback per frame kind.
#[derive(Clone, Default)]
pub struct RafHost {
    pub tick: FrameCallback,
    pub resize: FrameCallback,
}

impl FrameHost for RafHost {
    fn request_frame(&mut self, kind: FrameKind) -> Option<FrameId> {
        match kind {
            FrameKind::Tick => self.tick.request(),
            FrameKind::Resize => self.resize.request(),
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        cancel_frame(id);
    }
}

/// Coalesces any number of `schedule` calls into one callback per frame.
#[derive(Clone, Default)]
pub struct CoalescedFrame {
    callback: FrameCallback,
    pending: Rc<Cell<Option<FrameId>>>,
}

impl CoalescedFrame {
    pub fn new(mut handler: impl FnMut(f64) + 'static) -> Self {
        let frame = Self::default();
        let pending = frame.pending.clone();
        frame.callback.set(move |ts| {
            pending.set(None);
            handler(ts);
        });
        frame
    }

    pub fn schedule(&self) {
        if self.pending.get().is_none() {
            self.pending.set(self.callback.request());
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            cancel_frame(id);
        }
    }

    pub fn clear(&self) {
        self.cancel();
        self.callback.clear();
    }
}

/// Run `step` every frame until it returns `false` or the loop is stopped.
#[derive(Clone, Default)]
pub struct AnimationLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<FrameId>>>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let anim = Self::default();
        let pending = anim.pending.clone();
        let callback = anim.callback.clone();
        anim.callback.set(move |ts| {
            pending.set(None);
            if step(ts) {
                pending.set(callback.request());
            }
        });
        anim.pending.set(anim.callback.request());
        anim
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            cancel_frame(id);
        }
        self.callback.clear();
    }
}
