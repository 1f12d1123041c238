//! pagesift-core: Pure page selection and extraction logic (sans-IO).
//!
//! Everything here operates on in-memory byte slices and plain state:
//! the selection set with its range-input transitions, and the lopdf
//! page extraction that assembles the downloadable document. This crate
//! has no browser or framework dependencies; all DOM interaction lives
//! in `pagesift-io`.

pub mod extract;
pub mod selection;

pub use extract::{ExtractError, extract_pages};
pub use selection::Selection;

/// Name the exported file after the uploaded one.
///
/// Strips the final extension (the part after the last `.`) and appends
/// `_split.pdf`. A name without an extension, or where stripping would
/// leave nothing, is used as-is.
#[must_use]
pub fn split_file_name(original: &str) -> String {
    let base = match original.rsplit_once('.') {
        Some((base, _)) if !base.is_empty() => base,
        _ => original,
    };
    format!("{base}_split.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_file_name_replaces_extension() {
        assert_eq!(split_file_name("report.pdf"), "report_split.pdf");
        assert_eq!(split_file_name("scan.PDF"), "scan_split.pdf");
    }

    #[test]
    fn split_file_name_strips_only_the_last_extension() {
        assert_eq!(split_file_name("archive.tar.pdf"), "archive.tar_split.pdf");
    }

    #[test]
    fn split_file_name_without_extension_keeps_full_name() {
        assert_eq!(split_file_name("minutes"), "minutes_split.pdf");
    }

    #[test]
    fn split_file_name_keeps_dotfile_style_names() {
        assert_eq!(split_file_name(".pdf"), ".pdf_split.pdf");
    }

    #[test]
    fn split_file_name_preserves_spaces_and_unicode() {
        assert_eq!(
            split_file_name("meeting notes 2024.pdf"),
            "meeting notes 2024_split.pdf"
        );
        assert_eq!(split_file_name("議事録.pdf"), "議事録_split.pdf");
    }
}
