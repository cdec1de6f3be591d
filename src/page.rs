use crate::constants::{HEADER_SCROLLED_AFTER_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, TIMELINE_ACTIVE_THRESHOLD};
use crate::core::motion::{format_it, parse_float, CounterSpec};
use crate::core::SetupError;
use crate::dom::{self, js_err, Listener};
use crate::frame::CoalescedFrame;
use crate::observe::Visibility;
use web_sys as web;

/// Fade `.reveal` elements in the first time they scroll into view.
pub fn reveal_on_scroll(document: &web::Document) -> Result<Option<Visibility>, SetupError> {
    let targets = dom::query_all(document, ".reveal");
    if targets.is_empty() {
        return Err(SetupError::MissingElement(".reveal"));
    }
    let observer = Visibility::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |entry, observer| {
        if entry.is_intersecting() {
            let el = entry.target();
            dom::set_class(&el, "visible", true);
            observer.unobserve(&el);
        }
    });
    match observer {
        Ok(observer) => {
            targets.iter().for_each(|el| observer.observe(el));
            Ok(Some(observer))
        }
        Err(SetupError::Unsupported(_)) => {
            targets.iter().for_each(|el| dom::set_class(el, "visible", true));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Highlight the timeline step currently in view.
pub fn highlight_timeline_steps(document: &web::Document) -> Result<Option<Visibility>, SetupError> {
    let items = dom::query_all(document, "#process .timeline-item");
    if items.is_empty() {
        return Err(SetupError::MissingElement("#process .timeline-item"));
    }
    match Visibility::new(TIMELINE_ACTIVE_THRESHOLD, None, |entry, _| {
        dom::set_class(&entry.target(), "is-active", entry.is_intersecting());
    }) {
        Ok(observer) => {
            items.iter().for_each(|el| observer.observe(el));
            Ok(Some(observer))
        }
        Err(SetupError::Unsupported(_)) => {
            items.iter().for_each(|el| dom::set_class(el, "is-active", true));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Mobile navigation toggle.
pub struct NavMenu {
    _listeners: Vec<Listener>,
}

impl NavMenu {
    pub fn setup(document: &web::Document) -> Result<Self, SetupError> {
        let toggle = dom::require(document, ".menu-toggle")?;
        let links = dom::require(document, ".nav-links")?;

        let mut listeners = Vec::new();
        {
            let toggle_el = toggle.clone();
            let links = links.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                let open = links.class_list().toggle("open").unwrap_or(false);
                set_menu_open(&toggle_el, &links, open);
            }));
        }
        for link in dom::query_all(&links, "a") {
            let toggle = toggle.clone();
            let links = links.clone();
            listeners.push(Listener::new(&link, "click", move |_| {
                set_menu_open(&toggle, &links, false);
            }));
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn set_menu_open(toggle: &web::Element, links: &web::Element, open: bool) {
    dom::set_class(links, "open", open);
    dom::set_class(toggle, "open", open);
    _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

/// Adds `is-scrolled` to the header once the page leaves the top.
pub struct HeaderState {
    frame: CoalescedFrame,
    _listeners: Vec<Listener>,
}

impl HeaderState {
    pub fn setup(window: &web::Window, document: &web::Document) -> Result<Self, SetupError> {
        let header = dom::require(document, ".header")?;
        let update = {
            let window = window.clone();
            move || {
                let y = window.scroll_y().unwrap_or(0.0);
                dom::set_class(&header, "is-scrolled", y > HEADER_SCROLLED_AFTER_PX);
            }
        };
        update();

        let frame = CoalescedFrame::new({
            let update = update.clone();
            move |_| update()
        });
        let listeners = vec![
            Listener::new(window, "scroll", {
                let frame = frame.clone();
                move |_| frame.schedule()
            }),
            Listener::new(window, "resize", move |_| update()),
        ];
        Ok(Self {
            frame,
            _listeners: listeners,
        })
    }
}

impl Drop for HeaderState {
    fn drop(&mut self) {
        self.frame.clear();
    }
}

pub fn fill_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Mirror the metric list into the compact `.metrics-inline` strip.
pub fn fill_inline_metrics(document: &web::Document) -> Result<(), SetupError> {
    let strip = dom::require(document, ".metrics-inline")?;
    strip.set_text_content(Some(""));

    for item in dom::query_all(document, ".metrics li") {
        let Some(value) = dom::query(&item, ".metric-value") else {
            continue;
        };
        let Some(label) =
            dom::query(&item, ".metric-label-short").or_else(|| dom::query(&item, ".metric-label"))
        else {
            continue;
        };

        let item_span = document.create_element("span").map_err(js_err)?;
        item_span.set_class_name("metrics-inline-item");
        let value_span = document.create_element("span").map_err(js_err)?;
        value_span.set_class_name("metrics-inline-value");
        value_span.set_text_content(Some(&inline_value(&value)));
        let label_span = document.create_element("span").map_err(js_err)?;
        label_span.set_class_name("metrics-inline-label");
        label_span.set_text_content(Some(label.text_content().unwrap_or_default().trim()));

        _ = item_span.append_child(&value_span);
        _ = item_span.append_child(&document.create_text_node(" "));
        _ = item_span.append_child(&label_span);
        _ = strip.append_child(&item_span);
    }
    Ok(())
}

fn inline_value(value: &web::Element) -> String {
    let text = value.text_content().unwrap_or_default();
    match CounterSpec::from_attrs(|name| value.get_attribute(&format!("data-{}", name))) {
        Some(spec) => spec.render(spec.target),
        None => match parse_float(&text) {
            Some(v) if v.is_finite() => format_it(v, 0),
            _ => text.trim().to_owned(),
        },
    }
}
