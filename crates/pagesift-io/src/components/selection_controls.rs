//! Selection toolbar: bulk actions, the count readout, and range entry.

use dioxus::prelude::*;

/// Props for the [`SelectionControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectionControlsProps {
    /// Number of currently selected pages.
    selected_count: usize,
    /// Total page count of the open document.
    page_count: u32,
    /// Current text of the range "from" field.
    range_from: String,
    /// Current text of the range "to" field.
    range_to: String,
    /// Disable every control while an export is in flight.
    disabled: bool,
    /// Select every page.
    on_select_all: EventHandler<()>,
    /// Clear the selection.
    on_deselect_all: EventHandler<()>,
    /// The "from" field changed.
    on_range_from: EventHandler<String>,
    /// The "to" field changed.
    on_range_to: EventHandler<String>,
    /// Apply the range fields to the selection.
    on_add_range: EventHandler<()>,
}

/// Toolbar shown above the page grid.
///
/// Range entry follows the same rule as the underlying selection: an
/// invalid or out-of-bounds range is silently ignored and the typed
/// text stays in place for correction.
#[component]
pub fn SelectionControls(props: SelectionControlsProps) -> Element {
    let range_incomplete =
        props.range_from.trim().is_empty() || props.range_to.trim().is_empty();

    rsx! {
        div {
            class: "flex flex-wrap items-center gap-3 bg-[var(--surface)] rounded-lg p-3",

            span { class: "text-sm text-[var(--text-secondary)] tabular-nums",
                "{props.selected_count} of {props.page_count} pages selected"
            }

            {render_action_button("Select all", props.disabled, &props.on_select_all)}
            {render_action_button("Deselect all", props.disabled, &props.on_deselect_all)}

            div {
                class: "flex items-center gap-2 ml-auto",

                {render_page_field("range-from", "From", &props.range_from, props.page_count, props.disabled, &props.on_range_from)}
                span { class: "text-[var(--muted)]", "to" }
                {render_page_field("range-to", "To", &props.range_to, props.page_count, props.disabled, &props.on_range_to)}

                button {
                    class: "px-3 py-1.5 rounded bg-[var(--btn-secondary)] hover:bg-[var(--btn-secondary-hover)]
                            text-sm text-[var(--text-primary)] transition-colors disabled:opacity-50
                            disabled:cursor-not-allowed",
                    disabled: props.disabled || range_incomplete,
                    onclick: move |_| props.on_add_range.call(()),
                    "Add range"
                }
            }
        }
    }
}

/// Render one bulk-action button.
fn render_action_button(label: &str, disabled: bool, on_click: &EventHandler<()>) -> Element {
    let label = label.to_string();
    let onclick = {
        let on_click = *on_click;
        move |_| on_click.call(())
    };

    rsx! {
        button {
            class: "px-3 py-1.5 rounded bg-[var(--btn-secondary)] hover:bg-[var(--btn-secondary-hover)]
                    text-sm text-[var(--text-primary)] transition-colors disabled:opacity-50
                    disabled:cursor-not-allowed",
            disabled: disabled,
            onclick: onclick,
            "{label}"
        }
    }
}

/// Render one bounded page-number field.
fn render_page_field(
    id: &str,
    label: &str,
    value: &str,
    page_count: u32,
    disabled: bool,
    on_input: &EventHandler<String>,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let value = value.to_string();
    let oninput = {
        let on_input = *on_input;
        move |evt: FormEvent| on_input.call(evt.value())
    };

    rsx! {
        input {
            id: "{id}",
            r#type: "number",
            min: "1",
            max: "{page_count}",
            value: "{value}",
            placeholder: "{label}",
            aria_label: "{label} page",
            disabled: disabled,
            class: "w-16 px-2 py-1.5 rounded bg-[var(--input-bg)] border border-[var(--border)]
                    text-sm text-[var(--text-primary)] text-center",
            oninput: oninput,
        }
    }
}
