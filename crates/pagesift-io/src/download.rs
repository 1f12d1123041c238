//! File download via Blob URLs.
//!
//! Dioxus has no built-in file download API, so the exported bytes are
//! wrapped in a `Blob`, given an object URL, and handed to the browser
//! through a programmatic click on a temporary `<a download>` element.
//!
//! Browser-only (`wasm32-unknown-unknown` target).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::BlobPropertyBag;

/// Errors that can occur while triggering a download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Start a download of `bytes` as a file named `filename`.
///
/// Returns as soon as the click is dispatched; the browser takes the
/// download from there.
///
/// # Errors
///
/// [`DownloadError::JsError`] when a DOM or Blob API call fails.
pub fn trigger_download(
    bytes: &[u8],
    filename: &str,
    mime_type: &str,
) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document on window".to_owned()))?;

    // Uint8Array::from copies, so the Blob stays valid independent of
    // WASM linear memory.
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|element| {
            DownloadError::JsError(format!("created element is not an anchor: {element:?}"))
        })?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".to_owned()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup; the download is already under way.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
