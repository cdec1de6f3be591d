use crate::constants::{CURSOR_DOT_SMOOTHING, CURSOR_RING_SMOOTHING, INTERACTIVE_SELECTOR};
use crate::core::motion::Follower;
use crate::core::{Capabilities, Effect, SetupError};
use crate::dom::{self, js_err, Listener};
use crate::frame::AnimationLoop;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_interactive(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn set_transform(el: &web::Element, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("transform", value);
    }
}

struct Running {
    layer: web::Element,
    anim: AnimationLoop,
    _listeners: Vec<Listener>,
}

/// A dot and a lagging ring that trail the mouse.
pub struct CursorFollower {
    window: web::Window,
    document: web::Document,
    running: Option<Running>,
}

impl CursorFollower {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
            running: None,
        }
    }

    fn build_layer(&self) -> Result<(web::Element, web::Element, web::Element), SetupError> {
        let body = self.document.body().ok_or(SetupError::MissingElement("body"))?;
        let layer = self.document.create_element("div").map_err(js_err)?;
        layer.set_class_name("cursor-layer");
        _ = layer.set_attribute("aria-hidden", "true");
        let dot = self.document.create_element("div").map_err(js_err)?;
        dot.set_class_name("cursor-dot");
        let ring = self.document.create_element("div").map_err(js_err)?;
        ring.set_class_name("cursor-ring");
        _ = layer.append_child(&dot);
        _ = layer.append_child(&ring);
        _ = body.append_child(&layer);
        Ok((layer, dot, ring))
    }
}

impl Effect for CursorFollower {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn enabled(&self, caps: &Capabilities) -> bool {
        caps.hover_fine() && caps.allows_motion()
    }

    fn start(&mut self, _caps: &Capabilities) -> Result<(), SetupError> {
        let (layer, dot, ring) = self.build_layer()?;
        let (w, h) = dom::viewport_size(&self.window);
        let center = Vec2::new(w as f32, h as f32) * 0.5;
        let mouse = Rc::new(Cell::new(center));
        let followers = Rc::new(RefCell::new((
            Follower::new(center, CURSOR_DOT_SMOOTHING),
            Follower::new(center, CURSOR_RING_SMOOTHING),
        )));
        let visible = Rc::new(Cell::new(false));
        let hovering = Rc::new(Cell::new(false));

        {
            let (d, r) = &*followers.borrow();
            set_transform(&dot, &d.css_transform());
            set_transform(&ring, &r.css_transform());
        }
        let anim = AnimationLoop::start({
            let mouse = mouse.clone();
            move |_| {
                let target = mouse.get();
                let (d, r) = &mut *followers.borrow_mut();
                d.step(target);
                r.step(target);
                set_transform(&dot, &d.css_transform());
                set_transform(&ring, &r.css_transform());
                true
            }
        });

        let set_hover = {
            let layer = layer.clone();
            let hovering = hovering.clone();
            move |on: bool| {
                if hovering.replace(on) != on {
                    dom::set_class(&layer, "is-hovering", on);
                }
            }
        };
        let leave = {
            let layer = layer.clone();
            let visible = visible.clone();
            let set_hover = set_hover.clone();
            move |_: web::Event| {
                dom::set_class(&layer, "is-visible", false);
                visible.set(false);
                set_hover(false);
            }
        };

        let mut listeners = vec![
            Listener::new(&self.window, "mousemove", {
                let layer = layer.clone();
                move |ev| {
                    let Some(mev) = ev.dyn_ref::<web::MouseEvent>() else {
                        return;
                    };
                    mouse.set(Vec2::new(mev.client_x() as f32, mev.client_y() as f32));
                    if !visible.replace(true) {
                        dom::set_class(&layer, "is-visible", true);
                    }
                }
            }),
            Listener::new(&self.document, "mouseover", {
                let set_hover = set_hover.clone();
                move |ev| {
                    if is_interactive(ev.target()) {
                        set_hover(true);
                    }
                }
            }),
            Listener::new(&self.document, "mouseout", move |ev| {
                if !is_interactive(ev.target()) {
                    return;
                }
                let related = ev.dyn_ref::<web::MouseEvent>().and_then(|m| m.related_target());
                if is_interactive(related) {
                    return;
                }
                set_hover(false);
            }),
            Listener::new(&self.window, "blur", leave.clone()),
        ];
        if let Some(body) = self.document.body() {
            listeners.push(Listener::new(&body, "mouseleave", leave));
        }

        self.running = Some(Running {
            layer,
            anim,
            _listeners: listeners,
        });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.anim.stop();
            running.layer.remove();
        }
    }
}
