use crate::dom;
use crate::frame::Page;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Escape closes every modal and the lightbox.
pub fn wire_escape_closes_overlays(page: Rc<RefCell<Page>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let doc = document.clone();
    dom::listen(document.as_ref(), "keydown", false, move |ev: web::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        let batch = page.borrow_mut().overlays.close_all();
        if !batch.is_empty() {
            log::info!("[keys] escape closed {} overlays", batch.len());
        }
        overlay::apply_batch(&doc, &page, &batch);
    });
}
