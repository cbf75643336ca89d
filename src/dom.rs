use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => nodes_to_elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => nodes_to_elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

fn nodes_to_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<web::HtmlElement> {
    el.clone().dyn_into::<web::HtmlElement>().ok()
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = as_html(el) {
        _ = h.style().set_property(property, value);
    }
}

#[inline]
pub fn page_y_offset() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Height of `#id`, if present.
pub fn offset_height(document: &web::Document, id: &str) -> Option<f64> {
    document
        .get_element_by_id(id)
        .and_then(|el| as_html(&el))
        .map(|h| h.offset_height() as f64)
}

pub fn smooth_scroll_window_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn smooth_scroll_element_to_left(el: &web::Element, left: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&opts);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, passive: bool, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_window_listener<E, F>(event: &str, passive: bool, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    if let Some(w) = web::window() {
        listen(w.as_ref(), event, passive, handler);
    }
}

/// One-shot timer.
pub fn set_timeout(delay_ms: u64, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(f);
    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms.min(i32::MAX as u64) as i32,
    );
}

/// `true` if the event fired on `el` itself rather than a descendant.
#[inline]
pub fn event_targets(ev: &web::Event, el: &web::Element) -> bool {
    ev.target()
        .map(|t| {
            let t: &wasm_bindgen::JsValue = t.as_ref();
            let e: &wasm_bindgen::JsValue = el.as_ref();
            t == e
        })
        .unwrap_or(false)
}

/// Resolves once the document has finished parsing.
pub async fn document_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
