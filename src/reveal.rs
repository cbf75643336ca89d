use crate::constants::{
    CARD_TRANSITION, CLASS_REVEALED, REVEAL_ITEM_SELECTOR, REVEAL_SECTION_SELECTOR,
    SKILL_TAG_GLOW, SKILL_TAG_SELECTOR, WORKFLOW_NODE_SELECTOR, WORKFLOW_NODE_TRANSITION,
};
use crate::dom;
use folio_core::constants::{
    CARD_OFFSET_Y_PX, CARD_REVEAL_THRESHOLD, SECTION_REVEAL_ROOT_MARGIN, SECTION_REVEAL_THRESHOLD,
    WORKFLOW_NODE_OFFSET_Y_PX,
};
use folio_core::{card_delays, workflow_node_delays, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn hide_for_entrance(el: &web::Element, offset_y: f64, transition: &str) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", &format!("translateY({}px)", offset_y));
    dom::set_style(el, "transition", transition);
}

fn enter(el: &web::Element) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
}

/// Observe `targets` and call `on_enter` the first time each one
/// intersects the viewport.
fn observe_once(
    targets: Vec<web::Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let seen = Rc::new(RefCell::new(RevealTracker::new()));
    let targets = Rc::new(targets);
    let targets_cb = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let Some(index) = targets_cb.iter().position(|t| {
                    let a: &JsValue = t.as_ref();
                    let b: &JsValue = el.as_ref();
                    a == b
                }) else {
                    continue;
                };
                observer.unobserve(&el);
                if seen.borrow_mut().reveal(index as u32) {
                    on_enter(&el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for t in targets.iter() {
        observer.observe(t);
    }
    callback.forget();
    Ok(())
}

/// Glow on skill tags while hovered.
fn wire_skill_glow(document: &web::Document) {
    for tag in dom::query_all_doc(document, SKILL_TAG_SELECTOR) {
        let on = tag.clone();
        dom::listen(tag.as_ref(), "mouseenter", false, move |_: web::MouseEvent| {
            dom::set_style(&on, "box-shadow", SKILL_TAG_GLOW);
        });
        let off = tag.clone();
        dom::listen(tag.as_ref(), "mouseleave", false, move |_: web::MouseEvent| {
            dom::set_style(&off, "box-shadow", "");
        });
    }
}

/// Section reveal, staggered card entrance and skill tag hover glow.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    wire_skill_glow(document);
    let sections = dom::query_all_doc(document, REVEAL_SECTION_SELECTOR);
    log::info!("[reveal] {} sections", sections.len());

    observe_once(
        sections.clone(),
        SECTION_REVEAL_THRESHOLD,
        Some(SECTION_REVEAL_ROOT_MARGIN),
        |el| {
            _ = el.class_list().add_1(CLASS_REVEALED);
        },
    )?;

    for section in &sections {
        for item in dom::query_all(section, REVEAL_ITEM_SELECTOR) {
            hide_for_entrance(&item, CARD_OFFSET_Y_PX, CARD_TRANSITION);
        }
    }
    observe_once(sections, CARD_REVEAL_THRESHOLD, None, |section| {
        let items = dom::query_all(section, REVEAL_ITEM_SELECTOR);
        let delays = card_delays(items.len());
        for (item, delay) in items.into_iter().zip(delays) {
            let ms = delay.as_millis() as u64;
            dom::set_style(&item, "transition-delay", &format!("{}ms", ms));
            dom::set_timeout(ms, move || enter(&item));
        }
    })
}

/// Staggered entrance of the workflow diagram inside an opened modal.
pub fn animate_workflow_nodes(modal: &web::Element) {
    let nodes = dom::query_all(modal, WORKFLOW_NODE_SELECTOR);
    let delays = workflow_node_delays(nodes.len());
    for (node, delay) in nodes.into_iter().zip(delays) {
        hide_for_entrance(&node, WORKFLOW_NODE_OFFSET_Y_PX, WORKFLOW_NODE_TRANSITION);
        dom::set_timeout(delay.as_millis() as u64, move || enter(&node));
    }
}
