use crate::marquee::DomTrack;
use crate::nav;
use crate::overlay;
use folio_core::constants::{NAV_HIGHLIGHT_DEBOUNCE, NAV_SHADOW_DEBOUNCE};
use folio_core::{
    Debouncer, FrameCallback, FrameHandle, FrameScheduler, MarqueeRegistry, NavTracker,
    OverlaySet,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::SECTION_IDS;

/// All mutable page state, shared by event listeners and the frame loop.
pub struct Page {
    pub marquees: MarqueeRegistry<DomTrack>,
    pub overlays: OverlaySet,
    pub nav: NavTracker,
    pub nav_highlight: Debouncer,
    pub nav_shadow: Debouncer,
    pub marquee_loop: Option<FrameHandle>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            marquees: MarqueeRegistry::new(),
            overlays: OverlaySet::new(),
            nav: NavTracker::new(SECTION_IDS),
            nav_highlight: Debouncer::new(NAV_HIGHLIGHT_DEBOUNCE),
            nav_shadow: Debouncer::new(NAV_SHADOW_DEBOUNCE),
            marquee_loop: None,
        }
    }

    /// Freeze every strip where it is. Overlays and nav keep running on the
    /// page loop.
    pub fn stop_marquees(&mut self) {
        if let Some(handle) = self.marquee_loop.take() {
            handle.stop();
        }
        self.marquees.cancel_remeasure();
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// One display frame for everything except the marquees.
pub fn frame(document: &web::Document, page: &Rc<RefCell<Page>>, now: Instant) {
    let (overlay_effects, highlight, shadow) = {
        let mut p = page.borrow_mut();
        let effects = p.overlays.frame();
        let highlight = p.nav_highlight.poll(now);
        let shadow = p.nav_shadow.poll(now);
        (effects, highlight, shadow)
    }; // release page before touching the DOM
    overlay::apply_batch(document, page, &overlay_effects);
    if highlight {
        nav::update_desktop_highlight(document);
    }
    if shadow {
        nav::update_nav_shadow(document);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-driven scheduler.
pub struct RafScheduler;

fn request_next(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

impl FrameScheduler for RafScheduler {
    fn run_each_frame(&self, mut frame: FrameCallback) -> FrameHandle {
        let handle = FrameHandle::new();
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let stop = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if stop.is_stopped() {
                log::info!("[frame] loop stopped");
                return;
            }
            frame(Instant::now());
            request_next(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_next(&tick);
        handle
    }
}

/// Start the page loop and, separately, the marquee loop so the strips can
/// be stopped on their own.
pub fn start_loops(scheduler: &impl FrameScheduler, document: web::Document, page: Rc<RefCell<Page>>) {
    let page_tick = page.clone();
    // Runs for the lifetime of the page.
    let _ = scheduler.run_each_frame(Box::new(move |now| {
        frame(&document, &page_tick, now);
    }));
    let strips = page.clone();
    let handle = scheduler.run_each_frame(Box::new(move |now| {
        strips.borrow_mut().marquees.frame(now);
    }));
    page.borrow_mut().marquee_loop = Some(handle);
}
