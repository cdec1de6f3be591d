// Host-side tests for the page effect helpers (counters, rotator, parallax,
// timeline, cursor, service cards).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use glam::Vec2;
use motion::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn ease_out_cubic_endpoints_and_midpoint() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
}

#[test]
fn italian_number_format() {
    assert_eq!(format_it(0.0, 0), "0");
    assert_eq!(format_it(950.0, 0), "950");
    assert_eq!(format_it(1500.0, 0), "1.500");
    assert_eq!(format_it(1234567.891, 2), "1.234.567,89");
    assert_eq!(format_it(12.0, 1), "12,0");
    assert_eq!(format_it(-1500.0, 0), "-1.500");
    // rounds to zero: no stray minus sign
    assert_eq!(format_it(-0.001, 1), "0,0");
}

#[test]
fn counter_reads_data_attributes() {
    let spec = CounterSpec::from_attrs(attrs(&[
        ("target", "98.5"),
        ("start", "10"),
        ("prefix", "~"),
        ("suffix", "%"),
        ("decimals", "1"),
        ("duration", "1000"),
    ]))
    .expect("valid counter");
    assert_eq!(spec.start, 10.0);
    assert_eq!(spec.target, 98.5);
    assert_eq!(spec.duration_ms, 1000.0);
    assert_eq!(spec.render(spec.start), "~10,0%");
    assert_eq!(spec.render(spec.target), "~98,5%");
}

#[test]
fn counter_defaults_and_rejects_bad_targets() {
    let spec = CounterSpec::from_attrs(attrs(&[("target", "250")])).expect("valid counter");
    assert_eq!(spec.start, 0.0);
    assert_eq!(spec.decimals, 0);
    assert_eq!(spec.duration_ms, constants::COUNTER_DURATION_MS);
    assert_eq!(spec.render(250.0), "250");

    assert!(CounterSpec::from_attrs(attrs(&[])).is_none());
    assert!(CounterSpec::from_attrs(attrs(&[("target", "lots")])).is_none());

    let bad_start = CounterSpec::from_attrs(attrs(&[("target", "5"), ("start", "x")]))
        .expect("valid counter");
    assert_eq!(bad_start.start, 0.0);
}

#[test]
fn counter_eases_and_lands_exactly_on_target() {
    let spec = CounterSpec::from_attrs(attrs(&[("target", "250")])).expect("valid counter");
    assert_eq!(spec.value_at(0.0), (0.0, false));
    let (mid, done) = spec.value_at(1800.0);
    assert!(!done);
    assert!((mid - 218.75).abs() < 1e-9);
    assert_eq!(spec.value_at(3600.0), (250.0, true));
    assert_eq!(spec.value_at(99_999.0), (250.0, true));
}

#[test]
fn counter_with_zero_duration_finishes_at_once() {
    let spec = CounterSpec::from_attrs(attrs(&[("target", "7"), ("duration", "0")]))
        .expect("valid counter");
    assert_eq!(spec.value_at(0.0), (7.0, true));
}

#[test]
fn words_from_json_array() {
    assert_eq!(
        parse_words(r#"["siti", " app ", "siti", "", "brand"]"#),
        vec!["siti", "app", "brand"]
    );
    assert_eq!(parse_words(r#"[1, "due"]"#), vec!["1", "due"]);
}

#[test]
fn words_from_comma_list() {
    assert_eq!(parse_words("siti, app ,,siti"), vec!["siti", "app"]);
    assert_eq!(parse_words("solo"), vec!["solo"]);
    assert!(parse_words("").is_empty());
}

#[test]
fn non_array_json_yields_no_words() {
    assert!(parse_words(r#"{"a": 1}"#).is_empty());
    assert!(parse_words("42").is_empty());
}

#[test]
fn millisecond_attributes() {
    assert_eq!(parse_ms(None, 1500), Some(1500));
    assert_eq!(parse_ms(Some(" 200 "), 1500), Some(200));
    assert_eq!(parse_ms(Some("0"), 1500), Some(0));
    assert_eq!(parse_ms(Some("-5"), 1500), None);
    assert_eq!(parse_ms(Some("soon"), 1500), None);
}

#[test]
fn parallax_combines_pointer_scroll_and_depth() {
    let t = parallax_transform(Vec2::new(0.5, -0.25), 0.1, 10.0, true);
    assert!((t.x - 6.0).abs() < 1e-4);
    assert!((t.y - -2.2).abs() < 1e-4);
    assert!((t.rotate_x - 0.84).abs() < 1e-4);
    assert!((t.rotate_y - 1.68).abs() < 1e-4);

    let flat = parallax_transform(Vec2::new(0.5, -0.25), 0.1, 10.0, false);
    assert_eq!((flat.rotate_x, flat.rotate_y), (0.0, 0.0));
    assert_eq!(flat.x, t.x);

    assert_eq!(parallax_transform(Vec2::ZERO, 0.0, 3.0, true), ParallaxTransform::default());
}

#[test]
fn centered_offset_guards_empty_extent() {
    assert_eq!(centered_offset(200.0, 800.0), -0.25);
    assert_eq!(centered_offset(800.0, 800.0), 0.5);
    assert_eq!(centered_offset(10.0, 0.0), 0.0);
}

#[test]
fn timeline_progress_spans_entry_to_exit() {
    // 1000px viewport: starts at 850, ends when the bottom passes 200
    assert_eq!(timeline_progress(900.0, 350.0, 1000.0), Some(0.0));
    assert_eq!(timeline_progress(850.0, 350.0, 1000.0), Some(0.0));
    let mid = timeline_progress(350.0, 350.0, 1000.0).expect("has height");
    assert!((mid - 0.5).abs() < 1e-12);
    assert_eq!(timeline_progress(-500.0, 350.0, 1000.0), Some(1.0));
    assert_eq!(timeline_progress(0.0, 0.0, 1000.0), None);
}

#[test]
fn timeline_layout_marks_reached_steps() {
    let layout = TimelineLayout::measure(400.0, 10.0, None, None, &[0.0, 100.0, 200.0]);
    assert_eq!(layout.dot_size, 10.0);
    assert_eq!(layout.step_offsets, vec![19.0, 119.0, 219.0]);
    assert_eq!(layout.completed(0.0), vec![false, false, false]);
    assert_eq!(layout.completed(0.5), vec![true, true, false]);
    assert_eq!(layout.completed(1.0), vec![true, true, true]);

    let custom = TimelineLayout::measure(400.0, 0.0, Some(10.0), Some(20.0), &[0.0]);
    assert_eq!(custom.step_offsets, vec![20.0]);
    let zeroed = TimelineLayout::measure(400.0, 0.0, Some(0.0), Some(0.0), &[0.0]);
    assert_eq!(zeroed.step_offsets, vec![29.0]);
}

#[test]
fn rail_transform_uses_three_decimals() {
    assert_eq!(rail_transform(0.5), "scaleY(0.500)");
    assert_eq!(rail_transform(1.0), "scaleY(1.000)");
}

#[test]
fn follower_eases_toward_target() {
    let mut f = Follower::new(Vec2::ZERO, 0.2);
    let pos = f.step(Vec2::new(10.0, 0.0));
    assert!((pos.x - 2.0).abs() < 1e-6);
    assert_eq!(f.css_transform(), "translate3d(2px, 0px, 0) translate(-50%, -50%)");

    let mut slow = Follower::new(Vec2::ZERO, 0.1);
    slow.step(Vec2::new(10.0, 0.0));
    assert!(slow.pos.x < f.pos.x);
}

#[test]
fn card_spot_from_pointer() {
    let spot = CardSpot::from_pointer(Vec2::new(50.0, 25.0), Vec2::new(200.0, 100.0))
        .expect("sized card");
    assert_eq!(spot.css_values(), ["25.0%", "25.0%", "1.00deg", "-1.75deg"]);

    let outside = CardSpot::from_pointer(Vec2::new(-10.0, 500.0), Vec2::new(200.0, 100.0))
        .expect("sized card");
    assert_eq!(outside.spot_x, 0.0);
    assert_eq!(outside.spot_y, 100.0);
    assert_eq!(outside.tilt_x, -2.0);
    assert_eq!(outside.tilt_y, -3.5);

    assert!(CardSpot::from_pointer(Vec2::new(1.0, 1.0), Vec2::new(0.0, 100.0)).is_none());
}

#[test]
fn italian_format_rounds_ties_away_from_zero() {
    assert_eq!(format_it(2.5, 0), "3");
    assert_eq!(format_it(12.5, 0), "13");
    assert_eq!(format_it(0.125, 2), "0,13");
    assert_eq!(format_it(-2.5, 0), "-3");
    assert_eq!(format_it(1499.5, 0), "1.500");
}

#[test]
fn leading_number_like_parse_float() {
    assert_eq!(parse_float("24px"), Some(24.0));
    assert_eq!(parse_float(" 24.5px  "), Some(24.5));
    assert_eq!(parse_float("1.5rem"), Some(1.5));
    assert_eq!(parse_float(".5em"), Some(0.5));
    assert_eq!(parse_float("-3e2x"), Some(-300.0));
    assert_eq!(parse_float("7e"), Some(7.0));
    assert_eq!(parse_float("98%"), Some(98.0));
    assert_eq!(parse_float("px"), None);
    assert_eq!(parse_float("."), None);
    assert_eq!(parse_float(""), None);
}

#[test]
fn timeline_dot_styles_accept_units() {
    let layout = TimelineLayout::measure(
        400.0,
        0.0,
        parse_float("16px"),
        parse_float("1.5rem"),
        &[0.0],
    );
    assert_eq!(layout.dot_size, 1.5);
    assert_eq!(layout.step_offsets, vec![16.75]);
}

#[test]
fn counter_with_unusable_target_still_shows_its_start() {
    let (text, spec) = counter_entry(
        attrs(&[("target", "lots"), ("start", "5"), ("suffix", "+"), ("decimals", "1")]),
        false,
    );
    assert_eq!(text, "5,0+");
    assert!(spec.is_none());

    let (bare, _) = counter_entry(attrs(&[]), false);
    assert_eq!(bare, "0");
}

#[test]
fn counted_counters_show_their_target_on_a_later_session() {
    let counter = [("target", "250"), ("start", "10"), ("suffix", "%")];
    let (first, spec) = counter_entry(attrs(&counter), false);
    assert_eq!(first, "10%");
    assert_eq!(spec.map(|s| s.target), Some(250.0));

    let (again, spec) = counter_entry(attrs(&counter), true);
    assert_eq!(again, "250%");
    assert!(spec.is_none());
}

#[test]
fn word_cycle_advances_once_per_landed_fade() {
    let mut cycle = WordCycle::new(vec!["siti".into(), "app".into(), "brand".into()]);
    assert_eq!(cycle.current(), Some("siti"));
    assert_eq!(cycle.in_flight(), 0);

    cycle.begin_fade();
    assert_eq!(cycle.land(), Some("app"));
    cycle.begin_fade();
    assert_eq!(cycle.land(), Some("brand"));
    cycle.begin_fade();
    assert_eq!(cycle.land(), Some("siti"));
    assert_eq!(cycle.in_flight(), 0);
}

#[test]
fn overlapping_fades_each_advance_the_word() {
    // 200ms ticks against a 320ms fade: ticks at 200, 400, 600 and fades
    // landing at 520, 720, 920 interleave
    let mut cycle = WordCycle::new(vec!["a".into(), "b".into(), "c".into()]);
    cycle.begin_fade();
    cycle.begin_fade();
    assert_eq!(cycle.in_flight(), 2);
    assert_eq!(cycle.land(), Some("b"));
    cycle.begin_fade();
    assert_eq!(cycle.in_flight(), 2);
    assert_eq!(cycle.land(), Some("c"));
    assert_eq!(cycle.land(), Some("a"));
    assert_eq!(cycle.in_flight(), 0);

    cycle.begin_fade();
    cycle.reset_fades();
    assert_eq!(cycle.in_flight(), 0);
    assert_eq!(cycle.current(), Some("a"));
}

#[test]
fn empty_word_cycle_never_lands() {
    let mut cycle = WordCycle::new(Vec::new());
    assert!(cycle.is_empty());
    assert_eq!(cycle.current(), None);
    cycle.begin_fade();
    assert_eq!(cycle.land(), None);
    assert_eq!(cycle.in_flight(), 0);
}
