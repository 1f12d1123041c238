//! PDF upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdFileUp;

/// Check whether a file name carries the `.pdf` extension, case
/// insensitively.
///
/// The picker input is already constrained through its `accept`
/// attribute, but dropped files arrive unfiltered; this gate is what
/// keeps non-PDF bytes away from the document loader.
#[must_use]
pub fn is_pdf_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the raw bytes and file name of an accepted PDF.
    on_upload: EventHandler<(Vec<u8>, String)>,
    /// Called with the file name when a non-PDF file is offered.
    on_reject: EventHandler<String>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts a single PDF per interaction. Non-PDF files fire
/// `on_reject` with the offending name and are never read; accepted
/// files are read fully and forwarded through `on_upload` as
/// `(bytes, name)`.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut read_error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the gate and the read live in one place.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !is_pdf_file(&name) {
                props.on_reject.call(name);
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    read_error.set(None);
                    props.on_upload.call((bytes.to_vec(), name));
                }
                Err(e) => {
                    read_error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let border_class = if dragging() {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };

    rsx! {
        div {
            class: "border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref err) = read_error() {
                p { class: "text-[var(--text-error)] mb-2",
                    "{err}"
                }
            }

            p { class: "text-[var(--text-secondary)] mb-3",
                "Drop a PDF here or "
            }

            label {
                class: "inline-flex items-center gap-2 px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded cursor-pointer text-white font-medium transition-colors",
                input {
                    r#type: "file",
                    accept: "application/pdf,.pdf",
                    class: "hidden",
                    onchange: handle_files,
                }
                Icon { icon: LdFileUp, width: 16, height: 16 }
                "Choose File"
            }

            p { class: "text-[var(--muted)] text-sm mt-2",
                "Your file stays in this browser tab; nothing is uploaded to a server."
            }
        }
    }
}
