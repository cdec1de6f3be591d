use crate::background::ReactiveBackground;
use crate::clipboard::CopyButtons;
use crate::core::{guard, BackgroundConfig, Capabilities, Supervisor};
use crate::counters::Counters;
use crate::dialogs::ModalSystem;
use crate::dom::Listener;
use crate::fx;
use crate::media;
use crate::observe::Visibility;
use crate::page::{self, HeaderState, NavMenu};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page wired up. Dropping it detaches listeners, cancels
/// frames and stops every effect.
pub struct UiSession {
    background: Option<Rc<ReactiveBackground>>,
    modals: Option<ModalSystem>,
    supervisor: Rc<RefCell<Supervisor>>,
    _reveal: Option<Visibility>,
    _steps: Option<Visibility>,
    _nav: Option<NavMenu>,
    _header: Option<HeaderState>,
    _counters: Option<Counters>,
    _copy: Option<CopyButtons>,
    _media: Vec<Listener>,
}

impl UiSession {
    pub fn start(window: &web::Window, document: &web::Document) -> Self {
        let caps = media::detect(window);
        log::info!("[fx] capabilities: {:?}", caps);

        let background = guard(
            "bg",
            ReactiveBackground::setup(
                document,
                BackgroundConfig::default(),
                caps.reduced_motion,
                caps.hover_fine(),
            ),
        )
        .map(Rc::new);
        let modals = guard("modal", ModalSystem::setup(document));

        let reveal = guard("reveal", page::reveal_on_scroll(document)).flatten();
        let steps = guard("timeline", page::highlight_timeline_steps(document)).flatten();
        let nav = guard("nav", NavMenu::setup(document));
        let header = guard("header", HeaderState::setup(window, document));
        page::fill_footer_year(document);
        let counters = guard("counters", Counters::setup(document));
        guard("metrics", page::fill_inline_metrics(document));
        let copy = guard("copy", CopyButtons::setup(document));

        let supervisor = Rc::new(RefCell::new(Supervisor::new(caps)));
        {
            let mut sup = supervisor.borrow_mut();
            sup.register(Box::new(fx::RotatingWord::new(document)));
            sup.register(Box::new(fx::Parallax::new(window, document)));
            sup.register(Box::new(fx::TimelineProgress::new(window, document)));
            sup.register(Box::new(fx::ProjectVideos::new(document)));
            sup.register(Box::new(fx::CursorFollower::new(window, document)));
            sup.register(Box::new(fx::ServiceAccordions::new(document)));
            sup.register(Box::new(fx::CardSpotlight::new(document)));
            log::info!("[fx] running: {:?}", sup.running());
        }

        let media = media::watch(window, {
            let supervisor = Rc::downgrade(&supervisor);
            let background = background.as_ref().map(Rc::downgrade);
            move |caps: Capabilities| {
                if let Some(bg) = background.as_ref().and_then(|w| w.upgrade()) {
                    bg.set_reduced_motion(caps.reduced_motion);
                }
                if let Some(sup) = supervisor.upgrade() {
                    sup.borrow_mut().update(caps);
                }
            }
        });

        Self {
            background,
            modals,
            supervisor,
            _reveal: reveal,
            _steps: steps,
            _nav: nav,
            _header: header,
            _counters: counters,
            _copy: copy,
            _media: media,
        }
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }
}

impl Drop for UiSession {
    fn drop(&mut self) {
        if let Some(modals) = self.modals.as_ref().filter(|m| m.is_open()) {
            modals.close_all();
        }
        self.supervisor.borrow_mut().shutdown();
    }
}
