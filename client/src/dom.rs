#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a click handler that stays registered for the life of the page.
pub fn on_click(element: &Element, handler: impl Fn(Event) + 'static) {
    let callback = Closure::<dyn Fn(Event)>::new(handler);
    if element
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// Run `init` once the document has been parsed.
pub fn on_ready(document: &Document, init: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        init();
        return;
    }

    let callback = Closure::<dyn FnMut()>::once(init);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

/// Best-effort human readable text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
