//! Page selection state for a loaded document.
//!
//! [`Selection`] owns the set of selected page numbers, the document's
//! page count, and the two range-input text fields. All transitions are
//! synchronous and pure; the UI layer calls them from event handlers and
//! re-renders from the resulting state.
//!
//! Page numbers are 1-based throughout, matching the labels users see.

use std::collections::BTreeSet;

/// Selected pages plus the pending range-input fields.
///
/// The selected set is a `BTreeSet`, so iteration is always ascending,
/// which is exactly the order the export step needs. The `Default`
/// value is the selection for a zero-page document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    page_count: u32,
    pages: BTreeSet<u32>,
    range_from: String,
    range_to: String,
}

impl Selection {
    /// Create an empty selection for a document with `page_count` pages.
    #[must_use]
    pub const fn new(page_count: u32) -> Self {
        Self {
            page_count,
            pages: BTreeSet::new(),
            range_from: String::new(),
            range_to: String::new(),
        }
    }

    /// Number of pages in the loaded document.
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Whether `page` is currently selected.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// Number of selected pages.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Selected page numbers in ascending order.
    #[must_use]
    pub fn sorted_pages(&self) -> Vec<u32> {
        self.pages.iter().copied().collect()
    }

    /// Current text of the range "from" field.
    #[must_use]
    pub fn range_from(&self) -> &str {
        &self.range_from
    }

    /// Current text of the range "to" field.
    #[must_use]
    pub fn range_to(&self) -> &str {
        &self.range_to
    }

    /// Store the raw text of the range "from" field.
    pub fn set_range_from(&mut self, text: impl Into<String>) {
        self.range_from = text.into();
    }

    /// Store the raw text of the range "to" field.
    pub fn set_range_to(&mut self, text: impl Into<String>) {
        self.range_to = text.into();
    }

    /// Toggle membership of a single page.
    ///
    /// Callers pass page numbers taken from rendered tiles, so they are
    /// in range by construction; that assumption is debug-asserted.
    pub fn toggle(&mut self, page: u32) {
        debug_assert!(
            (1..=self.page_count).contains(&page),
            "toggle of out-of-range page {page} (page count {})",
            self.page_count
        );
        if !self.pages.remove(&page) {
            self.pages.insert(page);
        }
    }

    /// Select every page in the document.
    pub fn select_all(&mut self) {
        self.pages = (1..=self.page_count).collect();
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.pages.clear();
    }

    /// Merge the range described by the two input fields into the selection.
    ///
    /// Both fields must parse as integers (surrounding whitespace is
    /// ignored) with `1 <= from <= to <= page_count`. On any violation
    /// this is a silent no-op returning `false`: neither the selection
    /// nor the field text changes. The UI disables the action while a
    /// field is empty, but the values are typed by hand, so the check
    /// here is authoritative.
    ///
    /// On success the range is unioned into the existing selection (a
    /// range-add never deselects anything), both fields are cleared, and
    /// `true` is returned.
    pub fn add_range(&mut self) -> bool {
        let (Some(from), Some(to)) = (
            parse_page_field(&self.range_from),
            parse_page_field(&self.range_to),
        ) else {
            return false;
        };
        if from < 1 || to > self.page_count || from > to {
            return false;
        }
        self.pages.extend(from..=to);
        self.range_from.clear();
        self.range_to.clear();
        true
    }
}

/// Parse one range field: trimmed, non-negative integer, or `None`.
fn parse_page_field(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// A selection with fields pre-filled, ready for `add_range`.
    fn with_range(page_count: u32, from: &str, to: &str) -> Selection {
        let mut sel = Selection::new(page_count);
        sel.set_range_from(from);
        sel.set_range_to(to);
        sel
    }

    #[test]
    fn new_selection_is_empty() {
        let sel = Selection::new(10);
        assert!(sel.is_empty());
        assert_eq!(sel.selected_count(), 0);
        assert_eq!(sel.page_count(), 10);
    }

    #[test]
    fn toggle_inserts_then_removes() {
        let mut sel = Selection::new(5);
        sel.toggle(3);
        assert!(sel.contains(3));
        sel.toggle(3);
        assert!(!sel.contains(3));
    }

    #[test]
    fn toggle_twice_is_involution() {
        let mut sel = Selection::new(8);
        sel.set_range_from("2");
        sel.set_range_to("6");
        assert!(sel.add_range());
        let before = sel.clone();

        sel.toggle(4);
        sel.toggle(4);
        assert_eq!(sel, before);

        // Also from the not-selected side.
        sel.toggle(8);
        sel.toggle(8);
        assert_eq!(sel, before);
    }

    #[test]
    fn select_all_covers_every_page() {
        let mut sel = Selection::new(6);
        sel.toggle(2);
        sel.select_all();
        assert_eq!(sel.sorted_pages(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn select_all_then_deselect_all_is_empty() {
        let mut sel = Selection::new(12);
        sel.toggle(7);
        sel.select_all();
        sel.deselect_all();
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_on_zero_page_document_is_empty() {
        let mut sel = Selection::new(0);
        sel.select_all();
        assert!(sel.is_empty());
    }

    #[test]
    fn add_range_unions_into_existing_selection() {
        let mut sel = with_range(10, "4", "6");
        sel.toggle(1);
        assert!(sel.add_range());
        assert_eq!(sel.sorted_pages(), vec![1, 4, 5, 6]);
    }

    #[test]
    fn add_range_clears_fields_on_success() {
        let mut sel = with_range(10, "2", "3");
        assert!(sel.add_range());
        assert_eq!(sel.range_from(), "");
        assert_eq!(sel.range_to(), "");
    }

    #[test]
    fn add_range_single_page_when_from_equals_to() {
        let mut sel = with_range(10, "7", "7");
        assert!(sel.add_range());
        assert_eq!(sel.sorted_pages(), vec![7]);
    }

    #[test]
    fn add_range_accepts_full_document_boundaries() {
        let mut sel = with_range(10, "1", "10");
        assert!(sel.add_range());
        assert_eq!(sel.selected_count(), 10);
    }

    #[test]
    fn add_range_trims_whitespace() {
        let mut sel = with_range(10, " 2 ", "\t4");
        assert!(sel.add_range());
        assert_eq!(sel.sorted_pages(), vec![2, 3, 4]);
    }

    #[test]
    fn add_range_is_idempotent() {
        let mut sel = with_range(10, "3", "5");
        assert!(sel.add_range());
        let once = sel.clone();

        // Fields were cleared; re-enter the same range and apply again.
        sel.set_range_from("3");
        sel.set_range_to("5");
        assert!(sel.add_range());
        assert_eq!(sel, once);
    }

    #[test]
    fn add_range_no_op_when_from_greater_than_to() {
        let mut sel = with_range(10, "6", "2");
        assert!(!sel.add_range());
        assert!(sel.is_empty());
        // Field text survives a failed apply.
        assert_eq!(sel.range_from(), "6");
        assert_eq!(sel.range_to(), "2");
    }

    #[test]
    fn add_range_no_op_when_from_is_zero() {
        let mut sel = with_range(10, "0", "4");
        assert!(!sel.add_range());
        assert!(sel.is_empty());
    }

    #[test]
    fn add_range_no_op_when_to_exceeds_page_count() {
        let mut sel = with_range(10, "8", "11");
        assert!(!sel.add_range());
        assert!(sel.is_empty());
    }

    #[test]
    fn add_range_no_op_on_non_numeric_input() {
        for (from, to) in [("abc", "4"), ("2", "x"), ("2.5", "4"), ("-1", "4")] {
            let mut sel = with_range(10, from, to);
            assert!(!sel.add_range(), "expected no-op for ({from:?}, {to:?})");
            assert!(sel.is_empty());
        }
    }

    #[test]
    fn add_range_no_op_on_empty_input() {
        for (from, to) in [("", "4"), ("2", ""), ("", ""), ("  ", "4")] {
            let mut sel = with_range(10, from, to);
            assert!(!sel.add_range(), "expected no-op for ({from:?}, {to:?})");
            assert!(sel.is_empty());
        }
    }

    #[test]
    fn failed_add_range_leaves_existing_selection_untouched() {
        let mut sel = Selection::new(10);
        sel.toggle(2);
        sel.toggle(9);
        let before = sel.clone();

        sel.set_range_from("5");
        sel.set_range_to("99");
        assert!(!sel.add_range());
        assert_eq!(sel.sorted_pages(), before.sorted_pages());
    }

    #[test]
    fn sorted_pages_is_ascending_regardless_of_toggle_order() {
        let mut sel = Selection::new(10);
        for page in [9, 2, 7, 1, 5] {
            sel.toggle(page);
        }
        assert_eq!(sel.sorted_pages(), vec![1, 2, 5, 7, 9]);
    }
}
