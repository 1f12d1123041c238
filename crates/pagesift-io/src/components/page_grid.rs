//! Responsive grid of selectable page thumbnails.
//!
//! One tile per page of the open document. Each tile owns its preview
//! render: it starts the draw after mount and cancels it through a
//! [`RenderGuard`] when it unmounts, so scrolling away from a large
//! document or resetting mid-render never paints into a dead canvas.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::loader::PdfDocumentHandle;
use crate::preview::{self, RenderGuard};

/// Props for the [`PageGrid`] component.
#[derive(Props, Clone)]
pub struct PageGridProps {
    /// Shared rendering handle for the open document.
    document: Rc<PdfDocumentHandle>,
    /// Selected page numbers in ascending order.
    selected: Vec<u32>,
    /// Disable toggling while an export is in flight.
    disabled: bool,
    /// Callback fired with the page number of a clicked tile.
    on_toggle: EventHandler<u32>,
}

impl PartialEq for PageGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.document, &other.document)
            && self.selected == other.selected
            && self.disabled == other.disabled
    }
}

/// Grid of page tiles for the whole document.
#[component]
pub fn PageGrid(props: PageGridProps) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-3",

            for page in 1..=props.document.page_count() {
                PageTile {
                    key: "{page}",
                    document: Rc::clone(&props.document),
                    page_number: page,
                    selected: props.selected.binary_search(&page).is_ok(),
                    disabled: props.disabled,
                    on_toggle: props.on_toggle,
                }
            }
        }
    }
}

/// Props for a single [`PageTile`].
#[derive(Props, Clone)]
struct PageTileProps {
    document: Rc<PdfDocumentHandle>,
    page_number: u32,
    selected: bool,
    disabled: bool,
    on_toggle: EventHandler<u32>,
}

impl PartialEq for PageTileProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.document, &other.document)
            && self.page_number == other.page_number
            && self.selected == other.selected
            && self.disabled == other.disabled
    }
}

/// One selectable page thumbnail.
///
/// The preview draws into this tile's canvas shortly after mount. A
/// failed render is logged to the console and leaves the placeholder
/// background in place; it never takes the session down.
#[component]
fn PageTile(props: PageTileProps) -> Element {
    let page_number = props.page_number;
    let canvas_id = preview::canvas_id(page_number);

    // One guard per tile instance, cancelled on unmount so an in-flight
    // render stops before its final draw.
    let guard = use_hook(RenderGuard::new);
    {
        let guard = guard.clone();
        use_drop(move || guard.cancel());
    }

    {
        let document = Rc::clone(&props.document);
        let guard = guard.clone();
        let canvas_id = canvas_id.clone();
        use_effect(move || {
            let document = Rc::clone(&document);
            let guard = guard.clone();
            let canvas_id = canvas_id.clone();
            spawn(async move {
                if let Err(err) =
                    preview::render_page_preview(&document, page_number, &canvas_id, &guard).await
                {
                    web_sys::console::warn_1(
                        &format!("preview of page {page_number} failed: {err}").into(),
                    );
                }
            });
        });
    }

    let border = if props.selected {
        "border-2 border-[var(--border-accent)]"
    } else {
        "border border-[var(--border)]"
    };

    rsx! {
        button {
            class: "relative flex flex-col items-center gap-1 p-2 rounded cursor-pointer
                    bg-[var(--surface)] hover:bg-[var(--surface-active)] transition-colors {border}",
            disabled: props.disabled,
            onclick: move |_| props.on_toggle.call(page_number),
            title: "Page {page_number}",
            aria_label: "Toggle page {page_number}",
            "aria-pressed": "{props.selected}",

            div { class: "w-full aspect-[3/4] overflow-hidden rounded bg-[var(--preview-bg)]
                          flex items-center justify-center",
                canvas {
                    id: "{canvas_id}",
                    class: "max-w-full max-h-full",
                }
            }

            if props.selected {
                span { class: "absolute top-1 right-1 w-5 h-5 rounded-full bg-[var(--btn-primary)]
                              text-white text-xs flex items-center justify-center",
                    "✓"
                }
            }

            span { class: "text-xs text-[var(--text-secondary)]",
                "{page_number}"
            }
        }
    }
}
