use crate::core::motion::parse_ms;
use crate::core::{Capabilities, Effect, SetupError};
use crate::dom::{self, Listener, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type Replay = Rc<RefCell<Option<Timeout>>>;

/// Start playback; autoplay refusals are expected and ignored.
fn play_quietly(video: &web::HtmlMediaElement) {
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            _ = JsFuture::from(promise).await;
        });
    }
}

/// Muted looping thumbnails on project cards, plus `data-loop-pause` videos
/// that rest between loops.
pub struct ProjectVideos {
    document: web::Document,
    replays: Vec<Replay>,
    listeners: Vec<Listener>,
}

impl ProjectVideos {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            replays: Vec::new(),
            listeners: Vec::new(),
        }
    }

    fn wire_loop_pause(&mut self, video: &web::HtmlMediaElement, pause_ms: i32) -> Replay {
        let replay: Replay = Rc::new(RefCell::new(None));
        self.listeners.push(Listener::new(video, "ended", {
            let video = video.clone();
            let replay = replay.clone();
            move |_| {
                video.set_current_time(0.0);
                let v = video.clone();
                *replay.borrow_mut() = Timeout::new(pause_ms, move || play_quietly(&v)).ok();
            }
        }));
        self.listeners.push(Listener::new(video, "play", {
            let replay = replay.clone();
            move |_| {
                replay.borrow_mut().take();
            }
        }));
        self.listeners.push(Listener::new(video, "pause", {
            let video = video.clone();
            let replay = replay.clone();
            move |_| {
                if !video.ended() {
                    replay.borrow_mut().take();
                }
            }
        }));
        replay
    }
}

impl Effect for ProjectVideos {
    fn name(&self) -> &'static str {
        "videos"
    }

    fn start(&mut self, caps: &Capabilities) -> Result<(), SetupError> {
        let thumbs = dom::query_all(&self.document, ".card-thumb video");
        let looping = dom::query_all(&self.document, "video[data-loop-pause]");
        if thumbs.is_empty() && looping.is_empty() {
            return Err(SetupError::MissingElement("video"));
        }

        let mut replays = Vec::new();
        for el in &looping {
            let Some(video) = el.dyn_ref::<web::HtmlMediaElement>() else {
                continue;
            };
            let Some(pause_ms) = parse_ms(el.get_attribute("data-loop-pause").as_deref(), 0) else {
                continue;
            };
            let replay = self.wire_loop_pause(video, pause_ms);
            replays.push((el.clone(), replay));
        }

        for el in &thumbs {
            let Some(video) = el.dyn_ref::<web::HtmlMediaElement>() else {
                continue;
            };
            let forced = el.has_attribute("data-force-autoplay");
            video.set_muted(true);
            video.set_autoplay(true);
            video.set_loop(true);
            for attr in ["muted", "autoplay", "loop", "playsinline"] {
                if !el.has_attribute(attr) {
                    _ = el.set_attribute(attr, "");
                }
            }

            if caps.reduced_motion && !forced {
                if let Some((_, replay)) = replays.iter().find(|(v, _)| v == el) {
                    replay.borrow_mut().take();
                }
                _ = video.pause();
                continue;
            }
            play_quietly(video);
        }
        self.replays = replays.into_iter().map(|(_, r)| r).collect();
        Ok(())
    }

    fn stop(&mut self) {
        self.listeners.clear();
        for replay in self.replays.drain(..) {
            replay.borrow_mut().take();
        }
    }
}
