use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdRotateCcw;
use pagesift_io::{
    ExportPanel, FileUpload, PageGrid, Phase, SelectionControls, Session, analytics, download,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the whole [`Session`] in a single signal. Event handlers call
/// its named transitions and async completions report back under the
/// generation they started with, so every render observes one
/// consistent snapshot of the workflow.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let mut session = use_signal(Session::new);

    // --- Upload handlers ---
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let generation = session.write().begin_load(name, bytes.clone());
        spawn(async move {
            match pagesift_io::open_document(&bytes).await {
                Ok(handle) => session.write().document_loaded(generation, handle),
                Err(err) => session.write().load_failed(generation, err),
            }
        });
    };

    let on_reject = move |name: String| {
        session.write().reject_file(name);
    };

    // --- Export handler ---
    let on_export = move |()| {
        let Some(job) = session.write().begin_export() else {
            return;
        };
        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // "Splitting..." state before the synchronous page
            // extraction blocks the thread.
            gloo_timers::future::TimeoutFuture::new(0).await;

            match pagesift_core::extract_pages(&job.bytes, &job.pages) {
                Ok(bytes) => {
                    match download::trigger_download(&bytes, &job.file_name, "application/pdf") {
                        Ok(()) => {
                            analytics::track_split(job.pages.len());
                            session.write().export_finished(job.generation);
                        }
                        Err(err) => session.write().export_failed(job.generation, err.into()),
                    }
                }
                Err(err) => session.write().export_failed(job.generation, err.into()),
            }
        });
    };

    // --- Snapshot for this render ---
    let read = session.read();
    let phase = read.phase();
    let file_name = read.file_name().to_owned();
    let export_name = read.export_file_name();
    let page_count = read.selection().page_count();
    let selected_count = read.selection().selected_count();
    let selected_pages = read.selection().sorted_pages();
    let range_from = read.selection().range_from().to_owned();
    let range_to = read.selection().range_to().to_owned();
    let document = read.document().map(Rc::clone);
    let error_text = read
        .error()
        .map_or_else(|| String::from("Something went wrong"), ToString::to_string);
    drop(read);

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",
            // Header
            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl title-brand", "pagesift" }
                p { class: "text-[var(--muted)] text-sm",
                    "Pull the pages you need out of a PDF, entirely in your browser"
                }
            }

            // Main content area, one view per phase
            div { class: "flex-1 flex flex-col gap-4 p-6",
                {match phase {
                    Phase::Idle => rsx! {
                        div { class: "flex-1 flex flex-col items-center justify-center gap-6",
                            p { class: "text-[var(--text-placeholder)] text-lg",
                                "Upload a PDF to get started"
                            }
                            div { class: "w-full max-w-xl",
                                FileUpload {
                                    on_upload: on_upload,
                                    on_reject: on_reject,
                                }
                            }
                        }
                    },

                    Phase::Processing => rsx! {
                        div { class: "flex-1 flex items-center justify-center",
                            p { class: "text-[var(--text-secondary)] text-lg animate-pulse",
                                "Reading {file_name}..."
                            }
                        }
                    },

                    Phase::Ready | Phase::Splitting => {
                        let splitting = phase == Phase::Splitting;
                        match document {
                            Some(ref doc) => rsx! {
                                SelectionControls {
                                    selected_count: selected_count,
                                    page_count: page_count,
                                    range_from: range_from.clone(),
                                    range_to: range_to.clone(),
                                    disabled: splitting,
                                    on_select_all: move |()| session.write().select_all(),
                                    on_deselect_all: move |()| session.write().deselect_all(),
                                    on_range_from: move |text| session.write().set_range_from(text),
                                    on_range_to: move |text| session.write().set_range_to(text),
                                    on_add_range: move |()| {
                                        session.write().apply_range();
                                    },
                                }

                                div { class: "flex-1 flex flex-col lg:flex-row gap-6",
                                    // Page grid
                                    div { class: "flex-1 overflow-y-auto",
                                        PageGrid {
                                            document: Rc::clone(doc),
                                            selected: selected_pages.clone(),
                                            disabled: splitting,
                                            on_toggle: move |page| session.write().toggle_page(page),
                                        }
                                    }

                                    // Right sidebar: export + start over
                                    div { class: "lg:w-72 flex-shrink-0 flex flex-col gap-4",
                                        ExportPanel {
                                            selected_count: selected_count,
                                            file_name: export_name.clone(),
                                            splitting: splitting,
                                            on_export: on_export,
                                        }
                                        button {
                                            class: "inline-flex items-center gap-2 px-3 py-1.5 rounded
                                                    bg-[var(--btn-secondary)] hover:bg-[var(--btn-secondary-hover)]
                                                    text-sm text-[var(--text-primary)] transition-colors
                                                    disabled:opacity-50 disabled:cursor-not-allowed self-start",
                                            disabled: splitting,
                                            onclick: move |_| session.write().reset(),
                                            Icon { icon: LdRotateCcw, width: 14, height: 14 }
                                            "Start over"
                                        }

                                        // Swap to another document without
                                        // resetting first.
                                        if !splitting {
                                            div { class: "pt-4 border-t border-[var(--border)]",
                                                FileUpload {
                                                    on_upload: on_upload,
                                                    on_reject: on_reject,
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            // Unreachable: the session only enters Ready
                            // or Splitting with a document present.
                            None => rsx! {},
                        }
                    },

                    Phase::Error => rsx! {
                        div { class: "flex-1 flex flex-col items-center justify-center gap-4",
                            div { class: "bg-[var(--error-bg)] border border-[var(--error-border)] rounded p-4 max-w-xl",
                                p { class: "text-[var(--text-error)]", "{error_text}" }
                            }
                            button {
                                class: "inline-flex items-center gap-2 px-4 py-2 rounded
                                        bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)]
                                        text-white font-medium transition-colors cursor-pointer",
                                onclick: move |_| session.write().reset(),
                                Icon { icon: LdRotateCcw, width: 16, height: 16 }
                                "Start over"
                            }
                        }
                    },
                }}
            }

            // Footer
            footer { class: "px-6 py-3 border-t border-[var(--border)]",
                p { class: "text-[var(--muted)] text-xs",
                    "Your PDF never leaves this tab. Rendering by pdf.js; page extraction in Rust via WebAssembly."
                }
            }
        }
    }
}
