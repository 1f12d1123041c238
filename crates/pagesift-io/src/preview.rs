//! Page thumbnail rendering with cooperative cancellation.
//!
//! Every visible page tile owns one render: fetch the page proxy, find
//! the tile's `<canvas>`, draw at [`PREVIEW_SCALE`]. Renders overlap
//! freely and each carries a [`RenderGuard`] that the tile cancels on
//! unmount, so a render whose tile is gone finishes without touching
//! the DOM.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::loader::PdfDocumentHandle;
use crate::pdfjs;

/// Thumbnail viewport scale, half the native page resolution.
/// Thumbnails do not need more, and render cost drops fourfold.
pub const PREVIEW_SCALE: f64 = 0.5;

/// DOM id of the canvas that page `page_number` renders into.
///
/// Only one grid is mounted at a time, so page numbers alone keep the
/// ids unique.
#[must_use]
pub fn canvas_id(page_number: u32) -> String {
    format!("pagesift-page-{page_number}")
}

/// Cooperative cancellation token for one in-flight page render.
///
/// Clones share the flag, so the copy held by a render task observes a
/// cancel issued from component teardown.
#[derive(Debug, Clone, Default)]
pub struct RenderGuard {
    cancelled: Rc<Cell<bool>>,
}

impl RenderGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the render as cancelled.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// A failed preview render. Tiles log these and keep their placeholder;
/// a missing thumbnail never takes the session down.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The target canvas is no longer in the DOM.
    #[error("preview canvas not found in the DOM")]
    CanvasMissing,
    /// A pdf.js call failed.
    #[error("page render failed: {0}")]
    Render(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::Render(pdfjs::error_message(&value))
    }
}

/// Draw page `page_number` of `document` into the canvas with DOM id
/// `canvas_id` at [`PREVIEW_SCALE`].
///
/// Returns `Ok(())` without drawing when `guard` is cancelled; the
/// guard is checked again right before the draw so a tile that
/// unmounted while the page proxy resolved is left alone.
///
/// # Errors
///
/// [`PreviewError`] when the canvas is missing or a pdf.js call fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn render_page_preview(
    document: &PdfDocumentHandle,
    page_number: u32,
    canvas_id: &str,
    guard: &RenderGuard,
) -> Result<(), PreviewError> {
    let page = JsFuture::from(pdfjs::get_page(document.proxy(), page_number)).await?;

    if guard.is_cancelled() {
        return Ok(());
    }

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|dom| dom.get_element_by_id(canvas_id))
        .ok_or(PreviewError::CanvasMissing)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| PreviewError::CanvasMissing)?;

    // Last checkpoint before pixels are written.
    if guard.is_cancelled() {
        return Ok(());
    }
    JsFuture::from(pdfjs::render_page(&page, &canvas, PREVIEW_SCALE)).await?;

    Ok(())
}
