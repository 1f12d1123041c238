//! Document opening via pdf.js.
//!
//! Turns raw uploaded bytes into a [`PdfDocumentHandle`] the preview
//! layer can render from, or a classified [`SessionError`] when the
//! bytes cannot be opened. Non-PDF uploads never reach this module;
//! the upload component rejects them by file name first.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::pdfjs;
use crate::session::SessionError;

/// Exception name pdf.js uses for encrypted documents.
const PASSWORD_EXCEPTION: &str = "PasswordException";

/// An open document held by the rendering library.
///
/// Pairs the opaque pdf.js document proxy with its page count. Shared
/// via [`Rc`] between the session and the page tiles; the worker-side
/// resources are released when the last reference drops.
#[derive(Debug)]
pub struct PdfDocumentHandle {
    proxy: JsValue,
    page_count: u32,
}

impl PdfDocumentHandle {
    /// Number of pages in the document.
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }

    pub(crate) const fn proxy(&self) -> &JsValue {
        &self.proxy
    }

    /// Handle for state machine tests; carries no real document.
    #[cfg(test)]
    pub(crate) const fn stub(page_count: u32) -> Self {
        Self {
            proxy: JsValue::NULL,
            page_count,
        }
    }
}

impl Drop for PdfDocumentHandle {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        pdfjs::destroy_document(&self.proxy);
    }
}

/// Open a PDF from raw bytes.
///
/// # Errors
///
/// [`SessionError::LibraryUnavailable`] when the `pdfjsLib` global is
/// missing, [`SessionError::PasswordProtected`] when the document is
/// encrypted, and [`SessionError::CorruptOrInvalidFormat`] for any
/// other open failure.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn open_document(bytes: &[u8]) -> Result<Rc<PdfDocumentHandle>, SessionError> {
    if !pdfjs::pdfjs_available() {
        return Err(SessionError::LibraryUnavailable);
    }

    let proxy = JsFuture::from(pdfjs::open_document(bytes))
        .await
        .map_err(|err| classify_open_failure(&pdfjs::error_name(&err), pdfjs::error_message(&err)))?;
    let page_count = pdfjs::page_count(&proxy);

    Ok(Rc::new(PdfDocumentHandle { proxy, page_count }))
}

/// Map a pdf.js open rejection onto the session error taxonomy.
fn classify_open_failure(name: &str, message: String) -> SessionError {
    if name == PASSWORD_EXCEPTION {
        SessionError::PasswordProtected
    } else {
        SessionError::CorruptOrInvalidFormat(message)
    }
}
