use crate::core::constants::{VIGNETTE_CLEAR, VIGNETTE_EDGE, VIGNETTE_INNER, VIGNETTE_OUTER};
use crate::core::{
    scroll_progress, BackgroundConfig, FrameAction, FrameClock, ParticleField, PointerState,
    RenderScheduler, ScrollState, SetupError, Sprite, Viewport,
};
use crate::dom::{self, Listener};
use crate::frame::RafHost;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "bg-canvas";
const FALLBACK_CLASS: &str = "bg-fallback";
const HEARTBEAT_MS: f64 = 2000.0;

/// Everything the frame callbacks mutate.
struct BackgroundState {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    pointer: PointerState,
    scroll: ScrollState,
    scheduler: RenderScheduler,
    host: RafHost,
    viewport: Viewport,
    clock: FrameClock,
    heartbeat_bucket: i64,
}

impl BackgroundState {
    /// Re-measure the viewport and resize the backing store.
    fn resize_canvas(&mut self, window: &web::Window) {
        let (w, h) = dom::viewport_size(window);
        self.viewport = Viewport::new(w, h, window.device_pixel_ratio(), self.field.config().dpr_cap);
        let (bw, bh) = self.viewport.backing_size();
        if self.canvas.width() != bw || self.canvas.height() != bh {
            self.canvas.set_width(bw);
            self.canvas.set_height(bh);
        }
        let dpr = self.viewport.dpr;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.field.resize(w as f32, h as f32);
        self.pointer.clamp_to(w as f32, h as f32);
    }

    /// Smooth inputs, step physics, then paint. Order matters: the simulator
    /// must see this frame's smoothed pointer and scroll.
    fn draw_frame(&mut self, now_ms: f64) {
        let dt = self.clock.advance(now_ms);
        let t = (now_ms * 0.001) as f32;

        self.pointer.smooth();
        self.scroll.smooth();
        self.field.step(dt, &self.pointer);

        self.paint_backdrop();
        let scroll = self.scroll.current;
        for sprite in self.field.sprites(t, scroll) {
            let rgb = self.field.tint_rgb(sprite.tint);
            paint_sprite(&self.ctx, &sprite, rgb);
        }
        self.paint_vignette();
    }

    fn paint_backdrop(&self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let palette = &self.field.config().palette;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = gradient.add_color_stop(0.0, palette.bg_top);
        _ = gradient.add_color_stop(1.0, palette.bg_bottom);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn paint_vignette(&self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let Ok(vignette) = self.ctx.create_radial_gradient(
            w * 0.5,
            h * 0.5,
            w.min(h) * VIGNETTE_INNER,
            w * 0.5,
            h * 0.5,
            w.max(h) * VIGNETTE_OUTER,
        ) else {
            return;
        };
        _ = vignette.add_color_stop(0.0, VIGNETTE_CLEAR);
        _ = vignette.add_color_stop(1.0, VIGNETTE_EDGE);
        self.ctx.set_fill_style_canvas_gradient(&vignette);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn heartbeat(&mut self, now_ms: f64) {
        let bucket = (now_ms / HEARTBEAT_MS).floor() as i64;
        if bucket != self.heartbeat_bucket {
            self.heartbeat_bucket = bucket;
            log::debug!("[bg] tick {:.2}", now_ms * 0.001);
        }
    }

    fn apply(&mut self, action: FrameAction) {
        if action == FrameAction::DrawStatic {
            self.clock.reset();
            self.draw_frame(now_ms());
        }
    }

    fn update_scroll(&mut self, window: &web::Window) {
        let (y, height, viewport_h) = dom::scroll_metrics(window);
        self.scroll.set_target(scroll_progress(y, height, viewport_h));
    }
}

fn paint_sprite(ctx: &web::CanvasRenderingContext2d, s: &Sprite, rgb: &str) {
    let (x, y) = (s.x as f64, s.y as f64);
    let glow_r = s.glow_radius as f64;
    if let Ok(glow) = ctx.create_radial_gradient(x, y, 0.0, x, y, glow_r) {
        _ = glow.add_color_stop(0.0, &format!("rgba({}, {})", rgb, s.glow_alpha));
        _ = glow.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        _ = ctx.arc(x, y, glow_r, 0.0, TAU);
        ctx.fill();
    }

    ctx.set_fill_style_str(&format!("rgba({}, {})", rgb, s.disc_alpha));
    ctx.begin_path();
    _ = ctx.arc(x, y, s.disc_radius as f64, 0.0, TAU);
    ctx.fill();
}

#[inline]
fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// The reactive particle canvas behind the page.
pub struct ReactiveBackground {
    state: Rc<RefCell<BackgroundState>>,
    _listeners: Vec<Listener>,
}

impl ReactiveBackground {
    /// Set up the canvas, draw one static frame and start the loop if the page
    /// is visible and motion is allowed.
    ///
    /// Without a 2D context the document gets the `bg-fallback` class and the
    /// canvas is hidden, leaving the CSS gradient in place.
    pub fn setup(
        document: &web::Document,
        config: BackgroundConfig,
        reduced_motion: bool,
        fine_pointer: bool,
    ) -> Result<Self, SetupError> {
        let window = web::window().ok_or(SetupError::MissingElement("window"))?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or(SetupError::MissingElement("#bg-canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| SetupError::MissingElement("#bg-canvas"))?;
        let root = document
            .document_element()
            .ok_or(SetupError::MissingElement("html"))?;

        let ctx = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        {
            Some(ctx) => ctx,
            None => {
                _ = root.class_list().add_1(FALLBACK_CLASS);
                _ = canvas.style().set_property("display", "none");
                return Err(SetupError::Unsupported("canvas 2d context"));
            }
        };
        _ = root.class_list().remove_1(FALLBACK_CLASS);
        dom::set_css_var(&root, "--bg-overlay-opacity", &config.overlay_opacity.to_string());

        let (w, h) = dom::viewport_size(&window);
        let viewport = Viewport::new(w, h, window.device_pixel_ratio(), config.dpr_cap);
        let mut field = ParticleField::new(config, w as f32, h as f32, &mut rand::thread_rng());
        field.attraction_enabled = fine_pointer;

        let state = Rc::new(RefCell::new(BackgroundState {
            canvas,
            ctx,
            field,
            pointer: PointerState::centered(w as f32, h as f32),
            scroll: ScrollState::default(),
            scheduler: RenderScheduler::new(document.hidden(), reduced_motion),
            host: RafHost::default(),
            viewport,
            clock: FrameClock::default(),
            heartbeat_bucket: -1,
        }));
        wire_frames(&state);

        {
            let mut s = state.borrow_mut();
            s.resize_canvas(&window);
            let s = &mut *s;
            let action = s.scheduler.draw_static(&mut s.host);
            s.apply(action);
            s.update_scroll(&window);
            s.scheduler.resume(&mut s.host);
        }

        let listeners = wire_listeners(&state, &window, document, fine_pointer);
        log::info!(
            "[bg] particles={} dpr={:.2} running={}",
            state.borrow().field.particles().len(),
            viewport.dpr,
            state.borrow().scheduler.pending_tick().is_some()
        );
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Reduced-motion preference changed.
    pub fn set_reduced_motion(&self, reduced: bool) {
        let mut s = self.state.borrow_mut();
        let s = &mut *s;
        let action = s.scheduler.set_reduced_motion(reduced, &mut s.host);
        s.apply(action);
    }
}

impl Drop for ReactiveBackground {
    fn drop(&mut self) {
        let mut s = self.state.borrow_mut();
        let s = &mut *s;
        s.scheduler.shutdown(&mut s.host);
        s.host.tick.clear();
        s.host.resize.clear();
    }
}

fn wire_frames(state: &Rc<RefCell<BackgroundState>>) {
    let s = state.borrow();

    let weak: Weak<RefCell<BackgroundState>> = Rc::downgrade(state);
    s.host.tick.set(move |ts| {
        let Some(state) = weak.upgrade() else { return };
        let mut s = state.borrow_mut();
        let s = &mut *s;
        if s.scheduler.on_tick(&mut s.host) {
            s.heartbeat(ts);
            s.draw_frame(ts);
        }
    });

    let weak = Rc::downgrade(state);
    s.host.resize.set(move |_ts| {
        let Some(state) = weak.upgrade() else { return };
        let Some(window) = web::window() else { return };
        let mut s = state.borrow_mut();
        let s = &mut *s;
        let action = s.scheduler.on_resize_frame(&mut s.host);
        s.resize_canvas(&window);
        s.apply(action);
        s.scheduler.resume(&mut s.host);
    });
}

fn wire_listeners(
    state: &Rc<RefCell<BackgroundState>>,
    window: &web::Window,
    document: &web::Document,
    fine_pointer: bool,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let st = state.clone();
    listeners.push(Listener::new(window, "resize", move |_| {
        let mut s = st.borrow_mut();
        let s = &mut *s;
        s.scheduler.request_resize(&mut s.host);
    }));

    let st = state.clone();
    let doc = document.clone();
    listeners.push(Listener::new(document, "visibilitychange", move |_| {
        let mut s = st.borrow_mut();
        let s = &mut *s;
        let action = s.scheduler.set_hidden(doc.hidden(), &mut s.host);
        s.apply(action);
    }));

    let st = state.clone();
    let win = window.clone();
    listeners.push(Listener::new(window, "scroll", move |_| {
        st.borrow_mut().update_scroll(&win);
    }));

    if fine_pointer {
        let st = state.clone();
        listeners.push(Listener::new(window, "pointermove", move |ev| {
            if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
                st.borrow_mut()
                    .pointer
                    .move_to(pe.client_x() as f32, pe.client_y() as f32);
            }
        }));
        for event in ["pointerleave", "blur"] {
            let st = state.clone();
            listeners.push(Listener::new(window, event, move |_| {
                let mut s = st.borrow_mut();
                let (w, h) = (s.viewport.width as f32, s.viewport.height as f32);
                s.pointer.release(w, h);
            }));
        }
    }

    listeners
}
