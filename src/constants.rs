/// Page effect tuning constants.
///
/// Timings are in milliseconds, strengths are unitless multipliers applied to
/// normalized pointer/scroll offsets, and selectors match the page markup.
// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// Header
pub const HEADER_SCROLLED_AFTER_PX: f64 = 24.0;

// Rotating hero word
pub const ROTATE_INTERVAL_MS: i32 = 1500;
pub const ROTATE_FADE_MS: i32 = 320;

// Counters
pub const COUNTER_DURATION_MS: f64 = 3600.0;

// Parallax cubes
pub const PARALLAX_POINTER_STRENGTH: f32 = 1.2;
pub const PARALLAX_SCROLL_STRENGTH: f32 = 0.8;
pub const PARALLAX_TILT_STRENGTH: f32 = 0.28;

// Timeline rail (fractions of the viewport height)
pub const TIMELINE_START: f64 = 0.85;
pub const TIMELINE_END: f64 = 0.2;
pub const TIMELINE_DOT_TOP_DEFAULT: f64 = 24.0;
pub const TIMELINE_DOT_SIZE_DEFAULT: f64 = 10.0;
pub const TIMELINE_DOT_SLACK: f64 = 0.2; // fraction of the dot size counted as reached
pub const TIMELINE_ACTIVE_THRESHOLD: f64 = 0.45;

// Cursor follower
pub const CURSOR_DOT_SMOOTHING: f32 = 0.2;
pub const CURSOR_RING_SMOOTHING: f32 = 0.1;

// Service card spotlight/tilt
pub const CARD_SPOT_REST: (&str, &str) = ("50%", "14%");
pub const CARD_TILT_X_DEG: f32 = 4.0;
pub const CARD_TILT_Y_DEG: f32 = 7.0;

// Clipboard toast
pub const TOAST_VISIBLE_MS: i32 = 2200;
pub const TOAST_COPIED: &str = "Copiato negli appunti";
pub const TOAST_COPY_FAILED: &str = "Impossibile copiare";

// Accordion toggle labels
pub const ACCORDION_OPEN_LABEL: &str = "Dettagli";
pub const ACCORDION_CLOSE_LABEL: &str = "Chiudi";

// Media queries
pub const MQ_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
pub const MQ_FINE_POINTER: &str = "(pointer: fine)";
pub const MQ_HOVER: &str = "(hover: hover)";
pub const MQ_NARROW: &str = "(max-width: 720px)";
pub const MQ_COARSE: &str = "(hover: none), (pointer: coarse)";

// Selectors
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";
pub const INTERACTIVE_SELECTOR: &str = "a, button, img, input, textarea, select";
