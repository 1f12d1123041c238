//! Bindings to the pdf.js rendering library.
//!
//! pdf.js arrives as the global `pdfjsLib` UMD build, loaded by a
//! `<script>` tag in `index.html` before the app starts. The snippet in
//! `pdfjs_bridge.js` wraps the handful of calls pagesift needs behind
//! plain promise-returning functions; document and page proxies cross
//! the boundary as opaque [`JsValue`]s.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/src/pdfjs_bridge.js")]
extern "C" {
    /// Whether the `pdfjsLib` global is present.
    #[wasm_bindgen(js_name = pdfjsAvailable)]
    pub(crate) fn pdfjs_available() -> bool;

    /// Start opening a document. Resolves to a document proxy; rejects
    /// with a pdf.js exception object.
    #[wasm_bindgen(js_name = openDocument)]
    pub(crate) fn open_document(bytes: &[u8]) -> js_sys::Promise;

    /// Page count of an open document proxy.
    #[wasm_bindgen(js_name = pageCount)]
    pub(crate) fn page_count(document: &JsValue) -> u32;

    /// Resolve a 1-based page number to a page proxy.
    #[wasm_bindgen(js_name = getPage)]
    pub(crate) fn get_page(document: &JsValue, page_number: u32) -> js_sys::Promise;

    /// Render a page proxy into `canvas` at the given viewport scale.
    #[wasm_bindgen(js_name = renderPage)]
    pub(crate) fn render_page(
        page: &JsValue,
        canvas: &web_sys::HtmlCanvasElement,
        scale: f64,
    ) -> js_sys::Promise;

    /// Release the worker-side resources held by a document proxy.
    #[wasm_bindgen(js_name = destroyDocument)]
    pub(crate) fn destroy_document(document: &JsValue);

    /// The `name` field of a pdf.js exception, or `""` when absent.
    #[wasm_bindgen(js_name = errorName)]
    pub(crate) fn error_name(error: &JsValue) -> String;

    /// The `message` field of a pdf.js exception, with a stringified
    /// fallback for non-exception rejection values.
    #[wasm_bindgen(js_name = errorMessage)]
    pub(crate) fn error_message(error: &JsValue) -> String;
}
