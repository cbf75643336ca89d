use crate::constants::{
    ATTR_SECTION, CLASS_ACTIVE, CLASS_SCROLLED, DESKTOP_NAV_LINK_SELECTOR, MAIN_NAV_ID,
    MOBILE_NAV_ITEM_SELECTOR, MOBILE_NAV_TRACK_ID, NAV_DOT_SELECTOR, SECTION_IDS,
    SECTION_WITH_ID_SELECTOR,
};
use crate::dom;
use crate::frame::Page;
use folio_core::constants::DESKTOP_NAV_TRIGGER_PX;
use folio_core::{
    centered_scroll_left, last_reached, mobile_trigger, nav_is_scrolled, scroll_target_top, Span,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Smooth-scroll so section `id` sits just below the nav bar.
pub fn scroll_to_section(document: &web::Document, id: &str) {
    let Some(section) = document.get_element_by_id(id) else {
        log::warn!("[nav] no section #{}", id);
        return;
    };
    let nav_h = dom::offset_height(document, MAIN_NAV_ID).unwrap_or(0.0);
    let top = section.get_bounding_client_rect().top();
    dom::smooth_scroll_window_to(scroll_target_top(top, dom::page_y_offset(), nav_h));
}

fn section_tops(document: &web::Document) -> Vec<Option<f64>> {
    SECTION_IDS
        .iter()
        .map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| el.get_bounding_client_rect().top())
        })
        .collect()
}

/// Mark mobile item and dot `index` active and center the item in its track.
pub fn apply_mobile_active(document: &web::Document, index: usize) {
    let items = dom::query_all_doc(document, MOBILE_NAV_ITEM_SELECTOR);
    for (i, item) in items.iter().enumerate() {
        _ = item.class_list().toggle_with_force(CLASS_ACTIVE, i == index);
    }
    for (i, dot) in dom::query_all_doc(document, NAV_DOT_SELECTOR).iter().enumerate() {
        _ = dot.class_list().toggle_with_force(CLASS_ACTIVE, i == index);
    }
    let (Some(item), Some(track)) = (items.get(index), document.get_element_by_id(MOBILE_NAV_TRACK_ID))
    else {
        return;
    };
    let tr = track.get_bounding_client_rect();
    let ir = item.get_bounding_client_rect();
    let left = centered_scroll_left(
        track.scroll_left() as f64,
        Span {
            left: tr.left(),
            width: tr.width(),
        },
        Span {
            left: ir.left(),
            width: ir.width(),
        },
    );
    dom::smooth_scroll_element_to_left(&track, left);
}

/// Highlight the desktop link of the last section scrolled past the trigger.
pub fn update_desktop_highlight(document: &web::Document) {
    let links = dom::query_all_doc(document, DESKTOP_NAV_LINK_SELECTOR);
    if links.is_empty() {
        return;
    }
    let sections = dom::query_all_doc(document, SECTION_WITH_ID_SELECTOR);
    let tops: Vec<Option<f64>> = sections
        .iter()
        .map(|s| Some(s.get_bounding_client_rect().top()))
        .collect();
    let current = last_reached(&tops, DESKTOP_NAV_TRIGGER_PX).map(|i| format!("#{}", sections[i].id()));
    for link in &links {
        let active = current.is_some() && link.get_attribute("href") == current;
        _ = link.class_list().toggle_with_force(CLASS_ACTIVE, active);
    }
}

pub fn update_nav_shadow(document: &web::Document) {
    if let Some(nav) = document.get_element_by_id(MAIN_NAV_ID) {
        _ = nav
            .class_list()
            .toggle_with_force(CLASS_SCROLLED, nav_is_scrolled(dom::page_y_offset()));
    }
}

fn refresh_mobile(document: &web::Document, page: &Rc<RefCell<Page>>) {
    let trigger = mobile_trigger(dom::offset_height(document, MAIN_NAV_ID));
    let tops = section_tops(document);
    let changed = page.borrow_mut().nav.on_scroll(Instant::now(), &tops, trigger);
    if let Some(index) = changed {
        apply_mobile_active(document, index);
    }
}

pub fn setup(document: &web::Document, page: &Rc<RefCell<Page>>) {
    for link in dom::query_all_doc(document, DESKTOP_NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(link.as_ref(), "click", false, move |ev: web::MouseEvent| {
            ev.prevent_default();
            scroll_to_section(&doc, href.trim_start_matches('#'));
        });
    }

    for (index, item) in dom::query_all_doc(document, MOBILE_NAV_ITEM_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let doc = document.clone();
        let p = page.clone();
        let target = item.get_attribute(ATTR_SECTION).unwrap_or_default();
        dom::listen(item.as_ref(), "click", false, move |_: web::MouseEvent| {
            let selected = p.borrow_mut().nav.select(index, Instant::now());
            if selected {
                apply_mobile_active(&doc, index);
            }
            scroll_to_section(&doc, &target);
        });
    }

    let doc = document.clone();
    let p = page.clone();
    dom::add_window_listener("scroll", true, move |_: web::Event| {
        {
            let now = Instant::now();
            let mut page = p.borrow_mut();
            page.nav_highlight.trigger(now);
            page.nav_shadow.trigger(now);
        }
        refresh_mobile(&doc, &p);
    });

    refresh_mobile(document, page);
    update_nav_shadow(document);
}
