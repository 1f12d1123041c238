//! Dioxus UI components for pagesift.
//!
//! Provides the PDF upload zone, the selectable page grid, the
//! selection toolbar, and the export panel.

mod export;
mod page_grid;
mod selection_controls;
mod upload;

pub use export::ExportPanel;
pub use page_grid::PageGrid;
pub use selection_controls::SelectionControls;
pub use upload::FileUpload;
pub use upload::is_pdf_file;
