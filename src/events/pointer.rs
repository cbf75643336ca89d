use crate::constants::DRAG_CURSOR;
use crate::dom;
use crate::frame::Page;
use folio_core::MarqueeId;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn set_cursor(viewport: &web::Element, cursor: &str) {
    dom::set_style(viewport, "cursor", cursor);
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

/// Hover, mouse drag and touch drag for one strip.
///
/// Mouse moves and releases are observed on the window so a drag keeps
/// tracking after the pointer leaves the strip.
pub fn wire_marquee_input(viewport: &web::Element, id: MarqueeId, page: Rc<RefCell<Page>>) {
    let target: &web::EventTarget = viewport.as_ref();

    let p = page.clone();
    dom::listen(target, "mouseenter", false, move |_: web::MouseEvent| {
        if let Some(m) = p.borrow_mut().marquees.get_mut(id) {
            m.set_hovered(true);
        }
    });
    let p = page.clone();
    dom::listen(target, "mouseleave", false, move |_: web::MouseEvent| {
        if let Some(m) = p.borrow_mut().marquees.get_mut(id) {
            m.set_hovered(false);
        }
    });

    let p = page.clone();
    let vp = viewport.clone();
    dom::listen(target, "mousedown", false, move |ev: web::MouseEvent| {
        ev.prevent_default();
        if let Some(m) = p.borrow_mut().marquees.get_mut(id) {
            m.begin_drag(ev.client_x() as f64);
        }
        set_cursor(&vp, DRAG_CURSOR);
    });
    let p = page.clone();
    dom::add_window_listener("mousemove", false, move |ev: web::MouseEvent| {
        p.borrow_mut().marquees.drag_to(id, ev.client_x() as f64);
    });
    let p = page.clone();
    let vp = viewport.clone();
    dom::add_window_listener("mouseup", false, move |_: web::MouseEvent| {
        end_drag(&p, id, &vp);
    });

    let p = page.clone();
    dom::listen(target, "touchstart", true, move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            if let Some(m) = p.borrow_mut().marquees.get_mut(id) {
                m.begin_drag(x);
            }
        }
    });
    let p = page.clone();
    dom::listen(target, "touchmove", true, move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            p.borrow_mut().marquees.drag_to(id, x);
        }
    });
    let vp = viewport.clone();
    dom::listen(target, "touchend", false, move |_: web::TouchEvent| {
        end_drag(&page, id, &vp);
    });
}

fn end_drag(page: &Rc<RefCell<Page>>, id: MarqueeId, viewport: &web::Element) {
    let ended = page
        .borrow_mut()
        .marquees
        .get_mut(id)
        .map(|m| m.end_drag())
        .unwrap_or(false);
    if ended {
        set_cursor(viewport, "");
    }
}

/// Window resizes re-measure every strip once things settle.
pub fn wire_resize(page: Rc<RefCell<Page>>) {
    dom::add_window_listener("resize", true, move |_: web::Event| {
        page.borrow_mut().marquees.request_remeasure(Instant::now());
    });
}
