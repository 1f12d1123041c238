//! Privacy-friendly usage events via Simple Analytics.
//!
//! Events go through the global `sa_event` function injected by the
//! Simple Analytics `<script>` tag. Every call silently no-ops when the
//! script is absent, whether blocked by the browser or simply not
//! included in a local build.

use wasm_bindgen::{JsCast, JsValue};

/// Record a completed split and how many pages the new document kept.
pub fn track_split(page_count: usize) {
    let metadata = js_sys::Object::new();
    #[allow(clippy::cast_precision_loss)] // page counts are far below 2^52
    let pages = JsValue::from_f64(page_count as f64);
    let _ = js_sys::Reflect::set(&metadata, &JsValue::from_str("pages"), &pages);
    track_event("split_pdf", &metadata);
}

/// Fire one named event with a metadata object.
fn track_event(name: &str, metadata: &js_sys::Object) {
    debug_assert!(
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
        "event names must be lowercase_with_underscores: {name}"
    );

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(candidate) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    let Some(func) = candidate.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let _ = func.call2(&JsValue::NULL, &JsValue::from_str(name), metadata);
}
