use crate::constants::{ROTATE_FADE_MS, ROTATE_INTERVAL_MS};
use crate::core::motion::{parse_ms, parse_words, WordCycle};
use crate::core::{Capabilities, Effect, SetupError};
use crate::dom::{self, Interval, Timeout};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use web_sys as web;

struct Rotation {
    cycle: WordCycle,
    /// Oldest first; all share one delay so they land in order.
    fades: VecDeque<Timeout>,
}

/// Cycles the hero's `[data-rotate]` word with a short fade between words.
pub struct RotatingWord {
    document: web::Document,
    el: Option<web::Element>,
    interval: Option<Interval>,
    rotation: Option<Rc<RefCell<Rotation>>>,
}

impl RotatingWord {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            el: None,
            interval: None,
            rotation: None,
        }
    }
}

fn tick(el: &web::Element, rotation: &Rc<RefCell<Rotation>>) {
    let weak: Weak<RefCell<Rotation>> = Rc::downgrade(rotation);
    let mut r = rotation.borrow_mut();
    // forget timeouts that already fired, never one still pending
    let landed = r.fades.len().saturating_sub(r.cycle.in_flight());
    r.fades.drain(..landed).for_each(drop);

    dom::set_class(el, "is-fading", true);
    let target = el.clone();
    let fade = Timeout::new(ROTATE_FADE_MS, move || {
        let Some(rotation) = weak.upgrade() else {
            return;
        };
        let mut r = rotation.borrow_mut();
        if let Some(word) = r.cycle.land() {
            target.set_text_content(Some(word));
        }
        dom::set_class(&target, "is-fading", false);
    });
    if let Ok(fade) = fade {
        r.cycle.begin_fade();
        r.fades.push_back(fade);
    }
}

impl Effect for RotatingWord {
    fn name(&self) -> &'static str {
        "rotator"
    }

    fn start(&mut self, caps: &Capabilities) -> Result<(), SetupError> {
        let el = dom::require(&self.document, "[data-rotate]")?;
        let cycle = WordCycle::new(parse_words(&el.get_attribute("data-rotate").unwrap_or_default()));
        let Some(first) = cycle.current() else {
            return Ok(());
        };
        el.set_text_content(Some(first));
        self.el = Some(el.clone());

        let interval = parse_ms(el.get_attribute("data-interval").as_deref(), ROTATE_INTERVAL_MS)
            .unwrap_or(0);
        if !caps.allows_motion() || cycle.len() < 2 || interval <= 0 {
            return Ok(());
        }

        let rotation = Rc::new(RefCell::new(Rotation {
            cycle,
            fades: VecDeque::new(),
        }));
        let shared = rotation.clone();
        self.interval = Some(Interval::new(interval, move || tick(&el, &shared))?);
        self.rotation = Some(rotation);
        Ok(())
    }

    fn stop(&mut self) {
        self.interval.take();
        if let Some(rotation) = self.rotation.take() {
            let mut r = rotation.borrow_mut();
            r.fades.clear();
            r.cycle.reset_fades();
        }
        if let Some(el) = self.el.take() {
            dom::set_class(&el, "is-fading", false);
        }
    }
}
