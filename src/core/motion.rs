// Small numeric helpers behind the page effects. Everything here is pure so
// the DOM modules stay thin.
use crate::constants::*;
use glam::Vec2;

// ---------------- Counters ----------------

#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Format like `toLocaleString("it-IT")` with a fixed number of decimals:
/// `.` groups thousands and `,` separates decimals.
pub fn format_it(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let negative = value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push(',');
        out.push_str(f);
    }
    out
}

/// Round to `decimals` places with ties away from zero, as locale formatting
/// does. `format!` alone rounds ties to even.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    if decimals > 15 {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Leading number of `s`, like JavaScript's `parseFloat`: `"24.5px"` is 24.5,
/// `"1.5rem"` is 1.5, `"px"` is `None`.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Parsed `data-*` attributes of an animated counter.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub start: f64,
    pub target: f64,
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
    pub duration_ms: f64,
}

impl CounterSpec {
    /// `attr` looks up a `data-*` attribute by its suffix (e.g. `"target"`).
    /// Returns `None` when the target is missing or not a number.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let target = attr("target").and_then(|s| parse_float(&s))?;
        if !target.is_finite() {
            return None;
        }
        Some(Self {
            target,
            ..Self::display(&attr)
        })
    }

    /// Start text for any counter, including one whose target is unusable.
    pub fn initial_text(attr: impl Fn(&str) -> Option<String>) -> String {
        let spec = Self::display(&attr);
        spec.render(spec.start)
    }

    fn display(attr: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            start: attr("start")
                .and_then(|s| parse_float(&s))
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
            target: 0.0,
            prefix: attr("prefix").unwrap_or_default(),
            suffix: attr("suffix").unwrap_or_default(),
            decimals: attr("decimals")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(0),
            duration_ms: attr("duration")
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|d| d.is_finite())
                .unwrap_or(COUNTER_DURATION_MS),
        }
    }

    /// Value after `elapsed_ms` and whether the animation is finished. The
    /// final value is exactly `target`.
    pub fn value_at(&self, elapsed_ms: f64) -> (f64, bool) {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return (self.target, true);
        }
        let eased = ease_out_cubic(progress);
        (self.start + (self.target - self.start) * eased, false)
    }

    pub fn render(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, format_it(value, self.decimals), self.suffix)
    }
}

/// Text a counter shows when a session starts, plus the animation to run if
/// it has not been counted yet. Counters count once per page; a later
/// session shows the final value.
pub fn counter_entry(
    attr: impl Fn(&str) -> Option<String>,
    animated: bool,
) -> (String, Option<CounterSpec>) {
    match CounterSpec::from_attrs(&attr) {
        None => (CounterSpec::initial_text(attr), None),
        Some(spec) if animated => (spec.render(spec.target), None),
        Some(spec) => (spec.render(spec.start), Some(spec)),
    }
}

// ---------------- Rotating word ----------------

/// Parse a `data-rotate` value: a JSON array or a comma-separated list.
/// Words are trimmed, empties dropped and duplicates removed (first wins).
pub fn parse_words(value: &str) -> Vec<String> {
    let raw: Vec<String> = match serde_json::from_str::<serde_json::Value>(value) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(_) => value.split(',').map(str::to_owned).collect(),
    };
    let mut words: Vec<String> = Vec::with_capacity(raw.len());
    for w in raw {
        let w = w.trim();
        if !w.is_empty() && !words.iter().any(|seen| seen == w) {
            words.push(w.to_owned());
        }
    }
    words
}

/// Rotation through a word list. Every interval tick begins a fade and each
/// fade lands on its own next word, so fades never cancel one another even
/// when the interval is shorter than the fade.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCycle {
    words: Vec<String>,
    index: usize,
    in_flight: usize,
}

impl WordCycle {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            index: 0,
            in_flight: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fades begun but not yet landed.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn begin_fade(&mut self) {
        self.in_flight += 1;
    }

    /// A fade finished: advance and return the word to show.
    pub fn land(&mut self) -> Option<&str> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.words.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }

    /// Drop fade bookkeeping; the word stays where it is.
    pub fn reset_fades(&mut self) {
        self.in_flight = 0;
    }
}

/// Parse a non-negative millisecond attribute, falling back to `default`.
pub fn parse_ms(value: Option<&str>, default: i32) -> Option<i32> {
    match value {
        None => Some(default),
        Some(s) => s.trim().parse::<i32>().ok().filter(|v| *v >= 0),
    }
}

// ---------------- Parallax cubes ----------------

/// CSS offsets for one `[data-depth]` element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxTransform {
    pub x: f32,
    pub y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Pointer position relative to the viewport centre, in [-0.5, 0.5].
#[inline]
pub fn centered_offset(client: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        client / extent - 0.5
    } else {
        0.0
    }
}

pub fn parallax_transform(pointer: Vec2, scroll: f32, depth: f32, tilt: bool) -> ParallaxTransform {
    let offset = pointer * PARALLAX_POINTER_STRENGTH;
    let combined_y = offset.y + scroll * PARALLAX_SCROLL_STRENGTH;
    let (rotate_x, rotate_y) = if tilt {
        (
            -(offset.y * depth) * PARALLAX_TILT_STRENGTH,
            (offset.x * depth) * PARALLAX_TILT_STRENGTH,
        )
    } else {
        (0.0, 0.0)
    };
    ParallaxTransform {
        x: offset.x * depth,
        y: combined_y * depth,
        rotate_x,
        rotate_y,
    }
}

// ---------------- Timeline rail ----------------

/// Fill fraction of the rail for a timeline whose bounding box starts at
/// `top` with `height`, in a viewport `viewport_h` tall. `None` when the
/// timeline has no height yet.
pub fn timeline_progress(top: f64, height: f64, viewport_h: f64) -> Option<f64> {
    if height <= 0.0 {
        return None;
    }
    let start = viewport_h * TIMELINE_START;
    let end = viewport_h * TIMELINE_END;
    let total = height + start - end;
    if total <= 0.0 {
        return Some(0.0);
    }
    Some(((start - top) / total).clamp(0.0, 1.0))
}

/// Cached layout of the rail and its step markers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineLayout {
    pub rail_height: f64,
    pub dot_size: f64,
    pub step_offsets: Vec<f64>,
}

impl TimelineLayout {
    /// `step_tops` are each step's `offsetTop`; `rail_offset` is the rail's top
    /// relative to the timeline.
    pub fn measure(
        rail_height: f64,
        rail_offset: f64,
        dot_top: Option<f64>,
        dot_size: Option<f64>,
        step_tops: &[f64],
    ) -> Self {
        let dot_top = dot_top.filter(|v| *v != 0.0 && v.is_finite()).unwrap_or(TIMELINE_DOT_TOP_DEFAULT);
        let dot_size = dot_size.filter(|v| *v != 0.0 && v.is_finite()).unwrap_or(TIMELINE_DOT_SIZE_DEFAULT);
        let dot_center = dot_top + dot_size / 2.0;
        Self {
            rail_height,
            dot_size,
            step_offsets: step_tops.iter().map(|t| t + dot_center - rail_offset).collect(),
        }
    }

    /// Whether each step's marker has been reached at `progress`.
    pub fn completed(&self, progress: f64) -> Vec<bool> {
        let filled = self.rail_height * progress;
        let slack = self.dot_size * TIMELINE_DOT_SLACK;
        self.step_offsets.iter().map(|o| filled >= o - slack).collect()
    }
}

/// `scaleY(...)` value for the active rail.
#[inline]
pub fn rail_transform(progress: f64) -> String {
    format!("scaleY({:.3})", progress)
}

// ---------------- Cursor follower ----------------

/// A point easing toward a target by a fixed fraction per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub pos: Vec2,
    pub smoothing: f32,
}

impl Follower {
    pub fn new(pos: Vec2, smoothing: f32) -> Self {
        Self { pos, smoothing }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos = self.pos.lerp(target, self.smoothing);
        self.pos
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%)",
            self.pos.x, self.pos.y
        )
    }
}

// ---------------- Service card spotlight ----------------

/// Spotlight position (percent) and tilt (degrees) for a pointer inside a
/// card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSpot {
    pub spot_x: f32,
    pub spot_y: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl CardSpot {
    /// `rel` is the pointer position relative to the card's top-left corner,
    /// `size` the card size. `None` for a zero-sized card.
    pub fn from_pointer(rel: Vec2, size: Vec2) -> Option<Self> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        let p = (rel / size).clamp(Vec2::ZERO, Vec2::ONE);
        Some(Self {
            spot_x: p.x * 100.0,
            spot_y: p.y * 100.0,
            tilt_x: (0.5 - p.y) * CARD_TILT_X_DEG,
            tilt_y: (p.x - 0.5) * CARD_TILT_Y_DEG,
        })
    }

    /// CSS custom property values in `--service-spot-x/y`, `--service-tilt-x/y`
    /// order.
    pub fn css_values(&self) -> [String; 4] {
        [
            format!("{:.1}%", self.spot_x),
            format!("{:.1}%", self.spot_y),
            format!("{:.2}deg", self.tilt_x),
            format!("{:.2}deg", self.tilt_y),
        ]
    }
}
