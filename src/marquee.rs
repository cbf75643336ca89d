use crate::constants::{ATTR_DIRECTION, ATTR_SPEED, MARQUEE_TRACK_SELECTOR, MARQUEE_VIEWPORT_SELECTOR};
use crate::dom;
use crate::events;
use crate::frame::Page;
use folio_core::{MarqueeConfig, TrackSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.marquee-track` element whose content has been duplicated once.
pub struct DomTrack {
    track: web::HtmlElement,
}

impl DomTrack {
    /// Append a deep clone of every child so the strip can loop seamlessly.
    pub fn duplicate(track: web::HtmlElement) -> Self {
        let children = track.children();
        let originals: Vec<web::Element> =
            (0..children.length()).filter_map(|i| children.item(i)).collect();
        for child in &originals {
            if let Ok(copy) = child.clone_node_with_deep(true) {
                _ = track.append_child(&copy);
            }
        }
        Self { track }
    }
}

impl TrackSurface for DomTrack {
    fn cycle_width(&self) -> f64 {
        self.track.scroll_width() as f64 / 2.0
    }

    fn set_offset(&mut self, offset_px: f64) {
        _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX({}px)", offset_px));
    }
}

/// Register every marquee viewport on the page and wire its input.
pub fn setup(document: &web::Document, page: &Rc<RefCell<Page>>) -> usize {
    let mut count = 0;
    for viewport in dom::query_all_doc(document, MARQUEE_VIEWPORT_SELECTOR) {
        let track = match viewport
            .query_selector(MARQUEE_TRACK_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            Some(t) => t,
            None => {
                log::warn!("[marquee] viewport without {}; skipped", MARQUEE_TRACK_SELECTOR);
                continue;
            }
        };
        let config = MarqueeConfig::from_attributes(
            viewport.get_attribute(ATTR_SPEED).as_deref(),
            viewport.get_attribute(ATTR_DIRECTION).as_deref(),
        );
        let id = page
            .borrow_mut()
            .marquees
            .add(config, DomTrack::duplicate(track));
        events::wire_marquee_input(&viewport, id, page.clone());
        count += 1;
    }
    if count > 0 {
        events::wire_resize(page.clone());
    }
    count
}
