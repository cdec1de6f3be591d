// Reactive particle background tuning.

// Population and motion
pub const PARTICLE_COUNT: usize = 110;
pub const SPEED: f32 = 0.28; // base drift in CSS px per 60fps frame
pub const SPEED_LIMIT_FACTOR: f32 = 2.8; // max speed as a multiple of SPEED
pub const DRIFT_MIN: f32 = 0.85;
pub const DRIFT_MAX: f32 = 1.2;
pub const DAMPING: f32 = 0.994; // per-frame multiplicative velocity decay

// Sizing
pub const RADIUS_MIN: f32 = 0.9;
pub const RADIUS_MAX: f32 = 2.6;
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_MAX: f32 = 1.0;
pub const WRAP_MARGIN: f32 = 28.0; // off-canvas band before a particle re-enters

// Opacity and twinkle
pub const ALPHA_MIN: f32 = 0.22;
pub const ALPHA_MAX: f32 = 0.72;
pub const TWINKLE_MIN: f32 = 0.4;
pub const TWINKLE_MAX: f32 = 1.6;
pub const TWINKLE_BASE: f32 = 0.6;
pub const TWINKLE_SPAN: f32 = 0.4;

// Glow and disc rendering
pub const GLOW_RADIUS_BASE: f32 = 2.6;
pub const GLOW_RADIUS_DEPTH: f32 = 1.3;
pub const GLOW_ALPHA: f32 = 0.22;
pub const DISC_ALPHA: f32 = 0.9;
pub const DISC_ALPHA_MAX: f32 = 0.88;

// Pointer attraction
pub const ATTRACT_RADIUS: f32 = 220.0;
pub const ATTRACT_STRENGTH: f32 = 0.018;
pub const ATTRACT_GAIN: f32 = 12.0; // velocity impulse per unit of force
pub const ATTRACT_MIN_DIST_SQ: f32 = 1.0; // skip degenerate distances

// Scroll parallax
pub const SCROLL_PARALLAX: f32 = 26.0;

// Canvas
pub const OVERLAY_OPACITY: f32 = 0.16;
pub const DPR_CAP: f64 = 1.75;

// Frame timing
pub const FRAME_MS_60FPS: f64 = 16.6667;
pub const MAX_FRAME_DT: f32 = 2.1; // absorb hitches up to ~2 dropped frames

// Palette (particle tints are "r,g,b" triples spliced into rgba())
pub const BG_TOP: &str = "#0B0F14";
pub const BG_BOTTOM: &str = "#121826";
pub const PARTICLE_TINT_A: &str = "46,230,198";
pub const PARTICLE_TINT_B: &str = "141,125,202";

// Vignette drawn over the particles
pub const VIGNETTE_INNER: f64 = 0.24; // fraction of min(w, h)
pub const VIGNETTE_OUTER: f64 = 0.78; // fraction of max(w, h)
pub const VIGNETTE_CLEAR: &str = "rgba(3, 8, 18, 0)";
pub const VIGNETTE_EDGE: &str = "rgba(2, 4, 10, 0.52)";
