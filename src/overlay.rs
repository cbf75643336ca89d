use crate::constants::{
    CLASS_BODY_MODAL_OPEN, CLASS_OPEN, CLASS_VISIBLE, LIGHTBOX_ID, LIGHTBOX_IMAGE_ID, MODAL_IDS,
};
use crate::dom;
use crate::frame::Page;
use crate::reveal;
use folio_core::constants::WORKFLOW_OPEN_DELAY_MS;
use folio_core::{OverlayEffect, OverlayKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register the page's modals and lightbox and wire backdrop clicks and
/// transition ends. Overlays missing from the markup are skipped.
pub fn setup(document: &web::Document, page: &Rc<RefCell<Page>>) {
    let ids = MODAL_IDS
        .iter()
        .map(|id| (*id, OverlayKind::Modal))
        .chain(std::iter::once((LIGHTBOX_ID, OverlayKind::Lightbox)));
    for (id, kind) in ids {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[overlay] #{} not found", id);
            continue;
        };
        page.borrow_mut().overlays.register(id, kind);

        let p = page.clone();
        let doc = document.clone();
        let backdrop = el.clone();
        dom::listen(el.as_ref(), "click", false, move |ev: web::MouseEvent| {
            if dom::event_targets(&ev, &backdrop) {
                close(&doc, &p, id);
            }
        });

        let p = page.clone();
        let doc = document.clone();
        let target = el.clone();
        dom::listen(el.as_ref(), "transitionend", false, move |ev: web::TransitionEvent| {
            if !dom::event_targets(&ev, &target) {
                return;
            }
            let effect = p
                .borrow_mut()
                .overlays
                .get_mut(id)
                .and_then(|o| o.on_transition_end(&ev.property_name()));
            if let Some(effect) = effect {
                apply(&doc, &p, id, effect);
            }
        });
    }
}

pub fn open(document: &web::Document, page: &Rc<RefCell<Page>>, id: &str) {
    let effect = page.borrow_mut().overlays.get_mut(id).and_then(|o| o.open());
    match effect {
        Some(effect) => apply(document, page, id, effect),
        None if page.borrow().overlays.get(id).is_none() => {
            log::warn!("[overlay] open: unknown overlay {}", id)
        }
        None => {}
    }
}

pub fn close(document: &web::Document, page: &Rc<RefCell<Page>>, id: &str) {
    let effect = page.borrow_mut().overlays.get_mut(id).and_then(|o| o.close());
    if let Some(effect) = effect {
        apply(document, page, id, effect);
    }
}

/// Show `src` in the lightbox. The triggering event, if any, is cancelled
/// so a wrapping link neither navigates nor bubbles.
pub fn open_lightbox(
    document: &web::Document,
    page: &Rc<RefCell<Page>>,
    src: &str,
    event: Option<&web::Event>,
) {
    if let Some(ev) = event {
        ev.stop_propagation();
        ev.prevent_default();
    }
    if let Some(img) = lightbox_image(document) {
        img.set_src(src);
    }
    open(document, page, LIGHTBOX_ID);
}

fn lightbox_image(document: &web::Document) -> Option<web::HtmlImageElement> {
    document
        .get_element_by_id(LIGHTBOX_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
}

/// Apply effects produced by the overlay set, identified by index.
pub fn apply_batch(
    document: &web::Document,
    page: &Rc<RefCell<Page>>,
    batch: &[(usize, OverlayEffect)],
) {
    for (index, effect) in batch {
        let id = page.borrow().overlays.id(*index).map(str::to_owned);
        if let Some(id) = id {
            apply(document, page, &id, *effect);
        }
    }
}

pub fn apply(document: &web::Document, page: &Rc<RefCell<Page>>, id: &str, effect: OverlayEffect) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let (kind, modal_visible) = {
        let p = page.borrow();
        let Some(kind) = p.overlays.get(id).map(|o| o.kind()) else {
            return;
        };
        (kind, p.overlays.any_modal_visible())
    };
    let body = document.body();
    let cl = el.class_list();
    match effect {
        OverlayEffect::Show => {
            _ = cl.add_1(CLASS_VISIBLE);
            if kind == OverlayKind::Modal {
                if let Some(b) = &body {
                    _ = b.class_list().add_1(CLASS_BODY_MODAL_OPEN);
                }
                let modal = el.clone();
                dom::set_timeout(WORKFLOW_OPEN_DELAY_MS, move || {
                    reveal::animate_workflow_nodes(&modal);
                });
            }
        }
        OverlayEffect::Reveal => {
            _ = cl.add_1(CLASS_OPEN);
        }
        OverlayEffect::BeginClose => {
            _ = cl.remove_1(CLASS_OPEN);
        }
        OverlayEffect::Hide => {
            _ = cl.remove_1(CLASS_OPEN);
            _ = cl.remove_1(CLASS_VISIBLE);
            match kind {
                OverlayKind::Modal if !modal_visible => {
                    if let Some(b) = &body {
                        _ = b.class_list().remove_1(CLASS_BODY_MODAL_OPEN);
                    }
                }
                OverlayKind::Modal => {}
                OverlayKind::Lightbox => {
                    if let Some(img) = lightbox_image(document) {
                        img.set_src("");
                    }
                }
            }
        }
    }
    log::debug!("[overlay] {} {:?}", id, effect);
}
