#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod clipboard;
mod constants;
mod core;
mod counters;
mod dialogs;
mod dom;
mod events;
mod frame;
mod fx;
mod media;
mod observe;
mod overlay;
mod page;
mod session;

use session::UiSession;

thread_local! {
    static SESSION: RefCell<Option<UiSession>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the page wiring down. `restart` wires it up again.
#[wasm_bindgen]
pub fn shutdown() {
    if SESSION.with(|s| s.borrow_mut().take()).is_some() {
        log::info!("session stopped");
    }
}

/// Rebuild the session against the current document, e.g. after `shutdown`
/// or after the page swapped its markup.
#[wasm_bindgen]
pub fn restart() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("restart error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        dom_ready(&document).await?;
    }

    // replacing a previous session drops it first
    SESSION.with(|s| s.borrow_mut().take());
    let session = UiSession::start(&window, &document);
    log::info!("session ready (background: {})", session.has_background());
    SESSION.with(|s| *s.borrow_mut() = Some(session));
    Ok(())
}

/// Resolves on `DOMContentLoaded`.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    let target = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::Listener::forever(&target, "DOMContentLoaded", move |_| {
            _ = resolve.call0(&JsValue::NULL);
        });
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
