//! Export panel with the split trigger.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Number of currently selected pages. Zero disables the trigger.
    selected_count: usize,
    /// Name the exported file will download as.
    file_name: String,
    /// Whether an export is currently running.
    splitting: bool,
    /// Callback fired when the user triggers the split.
    on_export: EventHandler<()>,
}

/// Summary line plus the split button.
///
/// The button is disabled with an empty selection and while a split is
/// in flight. The session rejects both cases on its own; the disabled
/// state is the visible affordance.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let disabled = props.splitting || props.selected_count == 0;

    let summary = if props.selected_count == 0 {
        "Select at least one page to split.".to_owned()
    } else if props.selected_count == 1 {
        format!("1 page will be saved as {}", props.file_name)
    } else {
        format!(
            "{} pages will be saved as {}",
            props.selected_count, props.file_name
        )
    };
    let label = if props.splitting {
        "Splitting PDF..."
    } else {
        "Split PDF"
    };

    let enabled_class = "inline-flex items-center gap-2 px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors cursor-pointer";
    let disabled_class = "inline-flex items-center gap-2 px-4 py-2 bg-[var(--btn-disabled)] rounded text-[var(--text-disabled)] cursor-not-allowed";

    rsx! {
        div { class: "space-y-3",
            h3 { class: "text-lg font-semibold text-[var(--text-heading)]", "Export" }

            p { class: "text-sm text-[var(--text-secondary)]", "{summary}" }

            button {
                class: if disabled { disabled_class } else { enabled_class },
                disabled: disabled,
                onclick: move |_| props.on_export.call(()),
                Icon { icon: LdDownload, width: 16, height: 16 }
                "{label}"
            }
        }
    }
}
