use super::constants::{FRAME_MS_60FPS, MAX_FRAME_DT};
use glam::Vec2;

// Per-frame smoothing factors. Not time-scaled: the loop assumes a roughly
// constant frame rate.
pub const POINTER_SMOOTHING: f32 = 0.14;
pub const SCROLL_SMOOTHING: f32 = 0.08;

/// Smoothed pointer used for particle attraction.
///
/// Event handlers only write `target`/`active`; `smooth` runs once per frame
/// before the simulator reads `pos`, so bursts of pointer events collapse into
/// a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub target: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn centered(width: f32, height: f32) -> Self {
        let c = Vec2::new(width * 0.5, height * 0.5);
        Self {
            pos: c,
            target: c,
            active: false,
        }
    }

    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.active = true;
        self.target = Vec2::new(x, y);
    }

    /// Pointer left the viewport (or the window lost focus).
    #[inline]
    pub fn release(&mut self, width: f32, height: f32) {
        self.active = false;
        self.target = Vec2::new(width * 0.5, height * 0.5);
    }

    #[inline]
    pub fn smooth(&mut self) {
        self.pos += (self.target - self.pos) * POINTER_SMOOTHING;
    }

    /// Keep the smoothed position inside a resized viewport and stop any
    /// in-flight easing.
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.min(width);
        self.pos.y = self.pos.y.min(height);
        self.target = self.pos;
    }
}

/// Scroll progress in [-0.5, 0.5] plus its smoothed follower.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
}

impl ScrollState {
    #[inline]
    pub fn set_target(&mut self, progress: f32) {
        self.target = progress;
    }

    #[inline]
    pub fn smooth(&mut self) {
        self.current += (self.target - self.current) * SCROLL_SMOOTHING;
    }
}

/// Normalized scroll offset centred on zero; 0 when nothing scrolls.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable - 0.5) as f32
}

/// Converts animation-frame timestamps into a 60fps-normalized step.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Returns the step for `now_ms`. The first call after construction or
    /// `reset` yields 0 so a resumed loop does not jump.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = ((now_ms - last) / FRAME_MS_60FPS) as f32;
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// CSS viewport size and the device pixel ratio actually used for the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64, dpr_cap: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            dpr: dpr.min(dpr_cap),
        }
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).round().max(1.0) as u32;
        let h = (self.height * self.dpr).round().max(1.0) as u32;
        (w, h)
    }
}
