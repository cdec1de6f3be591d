use crate::constants::{ACCORDION_CLOSE_LABEL, ACCORDION_OPEN_LABEL, CARD_SPOT_REST};
use crate::core::motion::CardSpot;
use crate::core::{Capabilities, Effect, SetupError};
use crate::dom::{self, Listener};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_SELECTOR: &str = ".service-card";
const SPOT_PROPERTIES: [&str; 4] = [
    "--service-spot-x",
    "--service-spot-y",
    "--service-tilt-x",
    "--service-tilt-y",
];

fn cards(document: &web::Document) -> Result<Vec<web::Element>, SetupError> {
    let cards = dom::query_all(document, CARD_SELECTOR);
    if cards.is_empty() {
        return Err(SetupError::MissingElement(CARD_SELECTOR));
    }
    Ok(cards)
}

/// Collapsible service details on small or touch screens.
pub struct ServiceAccordions {
    document: web::Document,
    listeners: Vec<Listener>,
}

impl ServiceAccordions {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            listeners: Vec::new(),
        }
    }
}

impl Effect for ServiceAccordions {
    fn name(&self) -> &'static str {
        "accordions"
    }

    fn start(&mut self, caps: &Capabilities) -> Result<(), SetupError> {
        let collapse = caps.collapse_accordions();
        for card in cards(&self.document)? {
            let (Some(toggle), Some(details)) = (
                dom::query(&card, ".service-toggle"),
                dom::query(&card, ".service-details"),
            ) else {
                continue;
            };

            _ = toggle.set_attribute("aria-expanded", "false");
            if !collapse {
                dom::set_class(&card, "is-open", false);
                _ = details.remove_attribute("aria-hidden");
                continue;
            }
            _ = details.set_attribute("aria-hidden", "true");
            toggle.set_text_content(Some(ACCORDION_OPEN_LABEL));

            let toggle_el = toggle.clone();
            self.listeners.push(Listener::new(&toggle, "click", move |_| {
                let open = card.class_list().toggle("is-open").unwrap_or(false);
                _ = toggle_el.set_attribute("aria-expanded", if open { "true" } else { "false" });
                _ = details.set_attribute("aria-hidden", if open { "false" } else { "true" });
                toggle_el.set_text_content(Some(if open {
                    ACCORDION_CLOSE_LABEL
                } else {
                    ACCORDION_OPEN_LABEL
                }));
            }));
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.listeners.clear();
    }
}

/// Pointer-tracking spotlight and tilt on service cards.
pub struct CardSpotlight {
    document: web::Document,
    cards: Vec<web::Element>,
    listeners: Vec<Listener>,
}

impl CardSpotlight {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            cards: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

fn rest(card: &web::Element) {
    dom::set_css_var(card, SPOT_PROPERTIES[0], CARD_SPOT_REST.0);
    dom::set_css_var(card, SPOT_PROPERTIES[1], CARD_SPOT_REST.1);
    dom::set_css_var(card, SPOT_PROPERTIES[2], "0deg");
    dom::set_css_var(card, SPOT_PROPERTIES[3], "0deg");
}

impl Effect for CardSpotlight {
    fn name(&self) -> &'static str {
        "card-spotlight"
    }

    fn enabled(&self, caps: &Capabilities) -> bool {
        caps.hover_fine() && caps.allows_motion()
    }

    fn start(&mut self, _caps: &Capabilities) -> Result<(), SetupError> {
        self.cards = cards(&self.document)?;
        for card in &self.cards {
            rest(card);
            let el = card.clone();
            self.listeners.push(Listener::new(card, "pointermove", move |ev| {
                let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                let rel = Vec2::new(
                    (pev.client_x() as f64 - rect.left()) as f32,
                    (pev.client_y() as f64 - rect.top()) as f32,
                );
                let size = Vec2::new(rect.width() as f32, rect.height() as f32);
                if let Some(spot) = CardSpot::from_pointer(rel, size) {
                    for (prop, value) in SPOT_PROPERTIES.iter().zip(spot.css_values()) {
                        dom::set_css_var(&el, prop, &value);
                    }
                }
            }));
            for event in ["pointerleave", "pointercancel", "pointerup"] {
                let el = card.clone();
                self.listeners.push(Listener::new(card, event, move |_| rest(&el)));
            }
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.listeners.clear();
        for card in self.cards.drain(..) {
            for prop in SPOT_PROPERTIES {
                dom::remove_css_var(&card, prop);
            }
        }
    }
}
