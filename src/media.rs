use crate::constants::{MQ_COARSE, MQ_FINE_POINTER, MQ_HOVER, MQ_NARROW, MQ_REDUCED_MOTION};
use crate::core::Capabilities;
use crate::dom::{self, Listener};
use web_sys as web;

const QUERIES: [&str; 5] = [MQ_REDUCED_MOTION, MQ_FINE_POINTER, MQ_HOVER, MQ_NARROW, MQ_COARSE];

pub fn detect(window: &web::Window) -> Capabilities {
    Capabilities {
        reduced_motion: dom::media_matches(window, MQ_REDUCED_MOTION),
        fine_pointer: dom::media_matches(window, MQ_FINE_POINTER),
        can_hover: dom::media_matches(window, MQ_HOVER),
        narrow_viewport: dom::media_matches(window, MQ_NARROW),
        coarse_pointer: dom::media_matches(window, MQ_COARSE),
    }
}

/// Call `on_change` with fresh capabilities whenever any watched media query
/// flips. Browsers without `MediaQueryList` events just never call back.
pub fn watch(window: &web::Window, on_change: impl Fn(Capabilities) + Clone + 'static) -> Vec<Listener> {
    QUERIES
        .iter()
        .filter_map(|q| window.match_media(q).ok().flatten())
        .map(|mql| {
            let window = window.clone();
            let on_change = on_change.clone();
            Listener::new(&mql, "change", move |_| on_change(detect(&window)))
        })
        .collect()
}
