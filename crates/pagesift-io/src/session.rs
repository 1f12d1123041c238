//! Session state machine for the single-document workflow.
//!
//! One [`Session`] value owns everything the app knows: the phase, the
//! uploaded source bytes, the rendering handle, the page selection, and
//! the current error. The root component keeps it in a single signal
//! and every mutation goes through a named transition method, so each
//! transition is one atomic update and no render can observe a
//! half-applied state.
//!
//! Async completions (document open, export) report back with the
//! generation they were started under; a completion whose generation is
//! stale is ignored, which is what lets an upload or reset win a race
//! against a slow load of a large document.

use std::rc::Rc;

use pagesift_core::{ExtractError, Selection, split_file_name};

use crate::download::DownloadError;
use crate::loader::PdfDocumentHandle;

/// Session phases. Exactly one is active at a time and it gates which
/// of the session's data is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No document; waiting for an upload.
    #[default]
    Idle,
    /// A document open is in flight.
    Processing,
    /// Document open; previews, selection, and export are live.
    Ready,
    /// An export is in flight; selection and export controls are
    /// disabled until it settles.
    Splitting,
    /// Terminal for this attempt. [`Session::reset`] is the only way
    /// out.
    Error,
}

/// Everything that can go wrong in a session. The `Display` form is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The offered file does not carry a `.pdf` extension.
    #[error("{0:?} is not a PDF file; only PDF files can be split")]
    InvalidFileType(String),
    /// The document is encrypted and cannot be opened.
    #[error("this PDF is password protected and cannot be opened")]
    PasswordProtected,
    /// The bytes could not be parsed as a PDF.
    #[error("the file could not be read as a PDF: {0}")]
    CorruptOrInvalidFormat(String),
    /// Export was triggered with nothing selected.
    #[error("no pages are selected")]
    NoPagesSelected,
    /// Building or downloading the new document failed.
    #[error("building the new PDF failed: {0}")]
    ExportFailed(String),
    /// The `pdfjsLib` global never appeared.
    #[error("the PDF rendering library failed to load; reload the page and try again")]
    LibraryUnavailable,
}

impl From<ExtractError> for SessionError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::NoPagesSelected => Self::NoPagesSelected,
            other => Self::ExportFailed(other.to_string()),
        }
    }
}

impl From<DownloadError> for SessionError {
    fn from(err: DownloadError) -> Self {
        Self::ExportFailed(err.to_string())
    }
}

/// Everything the export task needs, captured atomically by
/// [`Session::begin_export`]: the source bytes, the pages to keep in
/// ascending order, the download file name, and the generation to
/// report completion under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub bytes: Vec<u8>,
    pub pages: Vec<u32>,
    pub file_name: String,
    pub generation: u64,
}

/// The single state container behind the app.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    file_name: String,
    source_bytes: Vec<u8>,
    document: Option<Rc<PdfDocumentHandle>>,
    selection: Selection,
    error: Option<SessionError>,
    generation: u64,
}

impl Session {
    /// Fresh idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Name of the uploaded file, or `""` outside an attempt.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Name the exported file will download as.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        split_file_name(&self.file_name)
    }

    /// Rendering handle, present in `Ready` and `Splitting` only.
    #[must_use]
    pub const fn document(&self) -> Option<&Rc<PdfDocumentHandle>> {
        self.document.as_ref()
    }

    /// Current page selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current error, present in `Error` only.
    #[must_use]
    pub const fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Generation of the current attempt. Bumped by every transition
    /// that invalidates in-flight work.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Reject an offered file before it reaches the document loader.
    pub fn reject_file(&mut self, name: impl Into<String>) {
        self.clear_attempt();
        self.generation += 1;
        self.phase = Phase::Error;
        self.error = Some(SessionError::InvalidFileType(name.into()));
    }

    /// Accept an upload and enter `Processing`.
    ///
    /// Discards any previous attempt, stores the new source, and
    /// returns the generation the load task must report back under.
    pub fn begin_load(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> u64 {
        self.clear_attempt();
        self.generation += 1;
        self.phase = Phase::Processing;
        self.file_name = name.into();
        self.source_bytes = bytes;
        self.generation
    }

    /// Loader success: enter `Ready` with an empty selection.
    ///
    /// Ignored when `generation` is stale or the phase moved on, so a
    /// load that lost a race against a newer upload or a reset cannot
    /// resurrect old state.
    pub fn document_loaded(&mut self, generation: u64, document: Rc<PdfDocumentHandle>) {
        if generation != self.generation || self.phase != Phase::Processing {
            return;
        }
        self.selection = Selection::new(document.page_count());
        self.document = Some(document);
        self.error = None;
        self.phase = Phase::Ready;
    }

    /// Loader failure: enter `Error`. Stale completions are ignored.
    pub fn load_failed(&mut self, generation: u64, error: SessionError) {
        if generation != self.generation || self.phase != Phase::Processing {
            return;
        }
        self.clear_attempt();
        self.phase = Phase::Error;
        self.error = Some(error);
    }

    /// Toggle one page in the selection. Ignored outside `Ready`.
    pub fn toggle_page(&mut self, page: u32) {
        if self.phase == Phase::Ready {
            self.selection.toggle(page);
        }
    }

    /// Select every page. Ignored outside `Ready`.
    pub fn select_all(&mut self) {
        if self.phase == Phase::Ready {
            self.selection.select_all();
        }
    }

    /// Clear the selection. Ignored outside `Ready`.
    pub fn deselect_all(&mut self) {
        if self.phase == Phase::Ready {
            self.selection.deselect_all();
        }
    }

    /// Update the range "from" field. Ignored outside `Ready`.
    pub fn set_range_from(&mut self, text: impl Into<String>) {
        if self.phase == Phase::Ready {
            self.selection.set_range_from(text);
        }
    }

    /// Update the range "to" field. Ignored outside `Ready`.
    pub fn set_range_to(&mut self, text: impl Into<String>) {
        if self.phase == Phase::Ready {
            self.selection.set_range_to(text);
        }
    }

    /// Apply the range fields to the selection. `true` when they were
    /// valid and consumed.
    pub fn apply_range(&mut self) -> bool {
        self.phase == Phase::Ready && self.selection.add_range()
    }

    /// Start the export: `Ready` to `Splitting`, returning the job the
    /// export task runs with.
    ///
    /// `None` outside `Ready`, which is what makes a second trigger
    /// during an in-flight export a no-op. An empty selection is kept
    /// off this path by the interface; if it arrives anyway the session
    /// surfaces [`SessionError::NoPagesSelected`] instead of exporting
    /// an empty document.
    pub fn begin_export(&mut self) -> Option<ExportJob> {
        if self.phase != Phase::Ready {
            return None;
        }
        if self.selection.is_empty() {
            self.clear_attempt();
            self.phase = Phase::Error;
            self.error = Some(SessionError::NoPagesSelected);
            return None;
        }
        self.phase = Phase::Splitting;
        Some(ExportJob {
            bytes: self.source_bytes.clone(),
            pages: self.selection.sorted_pages(),
            file_name: split_file_name(&self.file_name),
            generation: self.generation,
        })
    }

    /// Export success: back to `Ready` with the selection intact, so
    /// the user can adjust and split again. Stale completions are
    /// ignored.
    pub fn export_finished(&mut self, generation: u64) {
        if generation != self.generation || self.phase != Phase::Splitting {
            return;
        }
        self.phase = Phase::Ready;
    }

    /// Export failure: enter `Error`. Stale completions are ignored.
    pub fn export_failed(&mut self, generation: u64, error: SessionError) {
        if generation != self.generation || self.phase != Phase::Splitting {
            return;
        }
        self.clear_attempt();
        self.phase = Phase::Error;
        self.error = Some(error);
    }

    /// Full reset back to `Idle`, discarding the document, selection,
    /// and error in one update.
    pub fn reset(&mut self) {
        self.clear_attempt();
        self.generation += 1;
        self.phase = Phase::Idle;
    }

    /// Drop source, handle, selection, and error together. Dropping the
    /// handle releases the pdf.js document once the page tiles let go
    /// of their references.
    fn clear_attempt(&mut self) {
        self.file_name.clear();
        self.source_bytes = Vec::new();
        self.document = None;
        self.selection = Selection::default();
        self.error = None;
    }
}
