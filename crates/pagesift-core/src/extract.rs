//! Page extraction into a new PDF document.
//!
//! Takes the original file bytes plus a set of 1-based page numbers and
//! produces the bytes of a new document containing exactly those pages
//! in ascending order. Parsing and serialization are delegated to
//! `lopdf`; this is always a fresh parse of the original bytes, fully
//! independent of whatever the rendering side holds.

use std::collections::BTreeSet;

use lopdf::Document;

/// Errors from [`extract_pages`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The request contained no pages.
    #[error("no pages selected")]
    NoPagesSelected,

    /// A requested page number is outside the document.
    #[error("page {page} does not exist (document has {page_count} pages)")]
    PageOutOfRange {
        /// The offending 1-based page number.
        page: u32,
        /// Page count of the parsed source document.
        page_count: u32,
    },

    /// The source bytes could not be parsed as a PDF.
    #[error("failed to parse source document: {0}")]
    Parse(String),

    /// The new document could not be serialized.
    #[error("failed to serialize new document: {0}")]
    Save(String),
}

/// Build a new PDF containing exactly the requested pages.
///
/// The request is normalized first: duplicates collapse and the output
/// page order is always ascending page number, no matter how the caller
/// ordered the slice. The result is a complete serialized document; on
/// any failure no bytes are produced at all.
///
/// # Errors
///
/// Returns [`ExtractError::NoPagesSelected`] for an empty request,
/// [`ExtractError::PageOutOfRange`] if any page falls outside
/// `[1, page_count]` of the parsed source, [`ExtractError::Parse`] if
/// the source bytes are not a readable PDF, and [`ExtractError::Save`]
/// if serialization fails.
pub fn extract_pages(bytes: &[u8], pages: &[u32]) -> Result<Vec<u8>, ExtractError> {
    // 1. Normalize the request: ascending order, no duplicates.
    let requested: BTreeSet<u32> = pages.iter().copied().collect();
    if requested.is_empty() {
        return Err(ExtractError::NoPagesSelected);
    }

    // 2. Fresh parse of the original bytes. The rendering library's
    //    document handle is never reused here; the two libraries keep
    //    incompatible internal representations.
    let source = Document::load_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;
    let page_count = u32::try_from(source.get_pages().len()).unwrap_or(u32::MAX);

    // 3. Validate the request against this parse's page count.
    for &page in &requested {
        if !(1..=page_count).contains(&page) {
            return Err(ExtractError::PageOutOfRange { page, page_count });
        }
    }

    // 4. Keep exactly the requested pages: delete the complement from a
    //    clone of the parse, highest page first so lower page numbers
    //    stay stable while deleting, then drop every object nothing
    //    references any more.
    let mut destination = source.clone();
    for page in (1..=page_count).rev() {
        if !requested.contains(&page) {
            destination.delete_pages(&[page]);
        }
    }
    destination.prune_objects();
    destination.compress();

    // 5. Serialize.
    let mut buffer = Vec::new();
    destination
        .save_to(&mut buffer)
        .map_err(|e| ExtractError::Save(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Success paths need a real fixture document and live in
    // tests/split_flow.rs; these cover the failures that need none.

    #[test]
    fn empty_request_is_rejected_before_parsing() {
        let result = extract_pages(b"not even a pdf", &[]);
        assert!(matches!(result, Err(ExtractError::NoPagesSelected)));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let result = extract_pages(&[0xFF, 0x00, 0x13], &[1]);
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn empty_bytes_fail_to_parse() {
        let result = extract_pages(&[], &[1]);
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
