use crate::core::motion::{parse_float, rail_transform, timeline_progress, TimelineLayout};
use crate::core::{Capabilities, Effect, SetupError};
use crate::dom::{self, Listener};
use crate::frame::CoalescedFrame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Parts {
    timeline: web::Element,
    rail: web::Element,
    active_rail: web::Element,
    steps: Vec<web::Element>,
}

impl Parts {
    fn find(document: &web::Document) -> Result<Self, SetupError> {
        let section = dom::require(document, "#process")?;
        Ok(Self {
            timeline: dom::require(&section, ".timeline")?,
            rail: dom::require(&section, ".timeline-rail")?,
            active_rail: dom::require(&section, ".timeline-rail-active")?,
            steps: dom::query_all(&section, ".timeline-item"),
        })
    }

    fn measure(&self, window: &web::Window) -> TimelineLayout {
        let timeline_rect = self.timeline.get_bounding_client_rect();
        let rail_rect = self.rail.get_bounding_client_rect();
        let rail_height = if rail_rect.height() > 0.0 {
            rail_rect.height()
        } else {
            self.rail
                .dyn_ref::<web::HtmlElement>()
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0)
        };
        let css_px = |name: &str| parse_float(&dom::computed_style(window, &self.timeline, name));
        let step_tops: Vec<f64> = self
            .steps
            .iter()
            .map(|s| {
                s.dyn_ref::<web::HtmlElement>()
                    .map(|h| h.offset_top() as f64)
                    .unwrap_or(0.0)
            })
            .collect();
        TimelineLayout::measure(
            rail_height,
            rail_rect.top() - timeline_rect.top(),
            css_px("--dot-top"),
            css_px("--dot-size"),
            &step_tops,
        )
    }

    fn set_transform(&self, value: &str) {
        if let Some(html) = self.active_rail.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("transform", value);
        }
    }
}

struct Running {
    frame: CoalescedFrame,
    _listeners: Vec<Listener>,
}

/// Fills the process rail as the section scrolls past and marks reached steps.
pub struct TimelineProgress {
    window: web::Window,
    document: web::Document,
    running: Option<Running>,
}

impl TimelineProgress {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
            running: None,
        }
    }
}

impl Effect for TimelineProgress {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn start(&mut self, caps: &Capabilities) -> Result<(), SetupError> {
        let parts = Parts::find(&self.document)?;
        if !caps.allows_motion() {
            parts.set_transform(&rail_transform(1.0));
            parts.steps.iter().for_each(|s| dom::set_class(s, "is-complete", true));
            return Ok(());
        }

        let parts = Rc::new(parts);
        let layout = Rc::new(RefCell::new(parts.measure(&self.window)));

        let frame = CoalescedFrame::new({
            let window = self.window.clone();
            let parts = parts.clone();
            let layout = layout.clone();
            move |_| {
                let rect = parts.timeline.get_bounding_client_rect();
                let (_, vh) = dom::viewport_size(&window);
                let Some(progress) = timeline_progress(rect.top(), rect.height(), vh) else {
                    return;
                };
                let stale = {
                    let l = layout.borrow();
                    l.rail_height == 0.0 || l.step_offsets.len() != parts.steps.len()
                };
                if stale {
                    *layout.borrow_mut() = parts.measure(&window);
                }
                parts.set_transform(&rail_transform(progress));
                let done = layout.borrow().completed(progress);
                for (step, complete) in parts.steps.iter().zip(done) {
                    dom::set_class(step, "is-complete", complete);
                }
            }
        });

        let listeners = vec![
            Listener::new(&self.window, "scroll", {
                let frame = frame.clone();
                move |_| frame.schedule()
            }),
            Listener::new(&self.window, "resize", {
                let window = self.window.clone();
                let frame = frame.clone();
                move |_| {
                    *layout.borrow_mut() = parts.measure(&window);
                    frame.schedule();
                }
            }),
        ];
        frame.schedule();
        self.running = Some(Running {
            frame,
            _listeners: listeners,
        });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.frame.clear();
        }
    }
}
