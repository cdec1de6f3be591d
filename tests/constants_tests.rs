// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_COUNT > 0);
    assert!(DRIFT_MIN > 0.0 && DRIFT_MIN < DRIFT_MAX);
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!(DEPTH_MIN > 0.0 && DEPTH_MAX <= 1.0 && DEPTH_MIN < DEPTH_MAX);
    assert!(ALPHA_MIN > 0.0 && ALPHA_MAX <= 1.0 && ALPHA_MIN < ALPHA_MAX);
    assert!(TWINKLE_MIN > 0.0 && TWINKLE_MIN < TWINKLE_MAX);
    assert!(WRAP_MARGIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_stays_stable() {
    // damping must decay, and the ceiling must sit above the fastest spawn
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(SPEED_LIMIT_FACTOR > DRIFT_MAX);
    assert!(ATTRACT_RADIUS * ATTRACT_RADIUS > ATTRACT_MIN_DIST_SQ);
    assert!(MAX_FRAME_DT >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn twinkle_stays_positive_and_bounded() {
    assert!(TWINKLE_BASE - TWINKLE_SPAN > 0.0);
    assert!(TWINKLE_BASE + TWINKLE_SPAN <= 1.0 + f32::EPSILON);
    assert!(DISC_ALPHA_MAX <= DISC_ALPHA);
    assert!(GLOW_ALPHA < DISC_ALPHA);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_limits_are_sane() {
    assert!(DPR_CAP >= 1.0);
    assert!(OVERLAY_OPACITY > 0.0 && OVERLAY_OPACITY < 1.0);
    assert!(VIGNETTE_INNER < VIGNETTE_OUTER);
    for tint in [PARTICLE_TINT_A, PARTICLE_TINT_B] {
        let parts: Vec<u8> = tint.split(',').filter_map(|c| c.trim().parse().ok()).collect();
        assert_eq!(parts.len(), 3, "{} is not an r,g,b triple", tint);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_timings_are_consistent() {
    assert!(ROTATE_FADE_MS < ROTATE_INTERVAL_MS);
    assert!(COUNTER_DURATION_MS > 0.0);
    assert!(TOAST_VISIBLE_MS > 0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(TIMELINE_ACTIVE_THRESHOLD > 0.0 && TIMELINE_ACTIVE_THRESHOLD < 1.0);
    assert!(TIMELINE_END < TIMELINE_START);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_ring_lags_the_dot() {
    assert!(CURSOR_RING_SMOOTHING < CURSOR_DOT_SMOOTHING);
    assert!(CURSOR_DOT_SMOOTHING > 0.0 && CURSOR_DOT_SMOOTHING < 1.0);
}
