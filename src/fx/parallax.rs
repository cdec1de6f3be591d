use crate::core::motion::{centered_offset, parallax_transform};
use crate::core::{scroll_progress, Capabilities, Effect, SetupError};
use crate::dom::{self, Listener};
use crate::frame::CoalescedFrame;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PROPERTIES: [&str; 4] = [
    "--parallax-x",
    "--parallax-y",
    "--parallax-rotate-x",
    "--parallax-rotate-y",
];

#[derive(Clone, Copy, Default)]
struct ParallaxInput {
    pointer: Vec2,
    scroll: f32,
}

struct Layer {
    el: web::Element,
    depth: f32,
    tilt: bool,
}

struct Running {
    layers: Rc<Vec<Layer>>,
    frame: CoalescedFrame,
    _listeners: Vec<Listener>,
}

/// Background cubes drifting with pointer and scroll, scaled by `data-depth`.
pub struct Parallax {
    window: web::Window,
    document: web::Document,
    running: Option<Running>,
}

impl Parallax {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
            running: None,
        }
    }
}

impl Effect for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn enabled(&self, caps: &Capabilities) -> bool {
        caps.allows_motion()
    }

    fn start(&mut self, _caps: &Capabilities) -> Result<(), SetupError> {
        let layers: Vec<Layer> = dom::query_all(&self.document, "[data-depth]")
            .into_iter()
            .filter(|el| dom::is_rendered(&self.window, el))
            .filter_map(|el| {
                let depth = el.get_attribute("data-depth")?.trim().parse::<f32>().ok()?;
                let tilt = el.get_attribute("data-tilt").as_deref() != Some("false");
                depth.is_finite().then_some(Layer { el, depth, tilt })
            })
            .collect();
        if layers.is_empty() {
            return Err(SetupError::MissingElement("[data-depth]"));
        }
        let layers = Rc::new(layers);
        let input = Rc::new(RefCell::new(ParallaxInput::default()));

        let frame = CoalescedFrame::new({
            let layers = layers.clone();
            let input = input.clone();
            move |_| {
                let input = *input.borrow();
                for layer in layers.iter() {
                    let t = parallax_transform(input.pointer, input.scroll, layer.depth, layer.tilt);
                    dom::set_css_var(&layer.el, PROPERTIES[0], &format!("{}px", t.x));
                    dom::set_css_var(&layer.el, PROPERTIES[1], &format!("{}px", t.y));
                    dom::set_css_var(&layer.el, PROPERTIES[2], &format!("{}deg", t.rotate_x));
                    dom::set_css_var(&layer.el, PROPERTIES[3], &format!("{}deg", t.rotate_y));
                }
            }
        });

        let update_scroll = {
            let window = self.window.clone();
            let input = input.clone();
            let frame = frame.clone();
            move || {
                let (y, height, vh) = dom::scroll_metrics(&window);
                input.borrow_mut().scroll = scroll_progress(y, height, vh);
                frame.schedule();
            }
        };
        let reset = {
            let input = input.clone();
            let frame = frame.clone();
            move |_: web::Event| {
                input.borrow_mut().pointer = Vec2::ZERO;
                frame.schedule();
            }
        };

        let mut listeners = vec![Listener::new(&self.window, "pointermove", {
            let window = self.window.clone();
            let input = input.clone();
            let frame = frame.clone();
            move |ev| {
                let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
                    return;
                };
                let (w, h) = dom::viewport_size(&window);
                input.borrow_mut().pointer = Vec2::new(
                    centered_offset(pev.client_x() as f32, w as f32),
                    centered_offset(pev.client_y() as f32, h as f32),
                );
                frame.schedule();
            }
        })];
        for event in ["pointerup", "pointercancel", "blur"] {
            listeners.push(Listener::new(&self.window, event, reset.clone()));
        }
        if let Some(body) = self.document.body() {
            listeners.push(Listener::new(&body, "pointerleave", reset));
        }
        listeners.push(Listener::new(&self.window, "scroll", {
            let update_scroll = update_scroll.clone();
            move |_| update_scroll()
        }));

        update_scroll();
        self.running = Some(Running {
            layers,
            frame,
            _listeners: listeners,
        });
        Ok(())
    }

    fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        running.frame.clear();
        for layer in running.layers.iter() {
            for prop in PROPERTIES {
                dom::remove_css_var(&layer.el, prop);
            }
        }
    }
}
