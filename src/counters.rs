use crate::core::motion::{counter_entry, CounterSpec};
use crate::core::SetupError;
use crate::dom;
use crate::frame::AnimationLoop;
use web_sys as web;

const COUNTER_SELECTOR: &str = ".metric-value[data-target]";

struct Counter {
    el: web::Element,
    spec: CounterSpec,
    done: bool,
}

/// Count metric values up from their start to their target, once per page.
pub struct Counters {
    anim: Option<AnimationLoop>,
}

impl Counters {
    pub fn setup(document: &web::Document) -> Result<Self, SetupError> {
        let elements = dom::query_all(document, COUNTER_SELECTOR);
        if elements.is_empty() {
            return Err(SetupError::MissingElement(COUNTER_SELECTOR));
        }

        let mut counters: Vec<Counter> = Vec::new();
        for el in elements {
            let animated = el.get_attribute("data-animated").as_deref() == Some("true");
            let (text, spec) =
                counter_entry(|name| el.get_attribute(&format!("data-{}", name)), animated);
            el.set_text_content(Some(&text));
            let Some(spec) = spec else {
                continue;
            };
            _ = el.set_attribute("data-animated", "true");
            counters.push(Counter {
                el,
                spec,
                done: false,
            });
        }
        if counters.is_empty() {
            return Ok(Self { anim: None });
        }
        log::debug!("[fx] animating {} counters", counters.len());

        let mut started: Option<f64> = None;
        let anim = AnimationLoop::start(move |ts| {
            let t0 = *started.get_or_insert(ts);
            let mut pending = false;
            for c in counters.iter_mut().filter(|c| !c.done) {
                let (value, done) = c.spec.value_at(ts - t0);
                c.el.set_text_content(Some(&c.spec.render(value)));
                c.done = done;
                pending |= !done;
            }
            pending
        });
        Ok(Self { anim: Some(anim) })
    }
}

impl Drop for Counters {
    fn drop(&mut self) {
        if let Some(anim) = self.anim.take() {
            anim.stop();
        }
    }
}
