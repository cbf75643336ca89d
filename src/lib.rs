#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod marquee;
mod nav;
mod overlay;
mod reveal;

use frame::{Page, RafScheduler};

thread_local! {
    // Set once by `init`; read by the functions exported to inline page handlers.
    static PAGE: RefCell<Option<(web::Document, Rc<RefCell<Page>>)>> = const { RefCell::new(None) };
}

fn with_page(f: impl FnOnce(&web::Document, &Rc<RefCell<Page>>)) {
    let current = PAGE.with(|p| p.borrow().clone());
    match current {
        Some((document, page)) => f(&document, &page),
        None => log::warn!("page not initialized yet"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await;

    let page = Rc::new(RefCell::new(Page::new()));

    let strips = marquee::setup(&document, &page);
    overlay::setup(&document, &page);
    if let Err(e) = reveal::setup(&document) {
        // Content stays visible without the entrance animation.
        log::warn!("[reveal] disabled: {:?}", e);
    }
    nav::setup(&document, &page);
    events::wire_escape_closes_overlays(page.clone());
    log::info!(
        "[init] marquees={} overlays={}",
        strips,
        page.borrow().overlays.len()
    );

    PAGE.with(|p| *p.borrow_mut() = Some((document.clone(), page.clone())));
    frame::start_loops(&RafScheduler, document, page);
    Ok(())
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    with_page(|doc, page| overlay::open(doc, page, id));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    with_page(|doc, page| overlay::close(doc, page, id));
}

#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(src: &str, event: Option<web::Event>) {
    with_page(|doc, page| overlay::open_lightbox(doc, page, src, event.as_ref()));
}

#[wasm_bindgen(js_name = closeLightbox)]
pub fn close_lightbox() {
    with_page(|doc, page| overlay::close(doc, page, constants::LIGHTBOX_ID));
}

#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    with_page(|doc, _| nav::scroll_to_section(doc, id));
}

/// Halt the marquee loop. Strips freeze in place; overlays and nav tracking
/// keep running.
#[wasm_bindgen(js_name = stopAnimations)]
pub fn stop_animations() {
    with_page(|_, page| page.borrow_mut().stop_marquees());
}
