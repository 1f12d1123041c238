//! pagesift-io: Browser I/O and Dioxus component library.
//!
//! Handles document opening through pdf.js, per-page preview rendering
//! with cancellation, the session state machine, Blob downloads, usage
//! analytics, and provides the reusable UI components for the pagesift
//! web application.

pub mod analytics;
pub mod components;
pub mod download;
pub mod loader;
mod pdfjs;
pub mod preview;
pub mod session;

pub use components::{ExportPanel, FileUpload, PageGrid, SelectionControls, is_pdf_file};
pub use loader::{PdfDocumentHandle, open_document};
pub use session::{ExportJob, Phase, Session, SessionError};
