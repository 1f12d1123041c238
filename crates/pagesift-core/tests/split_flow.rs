//! Integration tests: build fixture documents with lopdf, run selection
//! and extraction end to end, and verify the output page sequence.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use pagesift_core::{ExtractError, Selection, extract_pages};

/// Build a valid PDF whose page `n` carries a `(Page n)` text marker in
/// its content stream, so output page order can be read back.
fn numbered_pdf(page_count: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for number in 1..=page_count {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {number}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => i64::from(page_count),
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Read back the `(Page n)` markers of `bytes` in document page order.
fn page_markers(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap();
            let text = String::from_utf8_lossy(&content);
            let start = text.find("(Page ").expect("missing page marker") + 1;
            let end = start + text[start..].find(')').unwrap();
            text[start..end].to_string()
        })
        .collect()
}

fn marker_names(pages: &[u32]) -> Vec<String> {
    pages.iter().map(|page| format!("Page {page}")).collect()
}

#[test]
fn extracts_a_single_page() {
    let source = numbered_pdf(5);
    let out = extract_pages(&source, &[3]).unwrap();
    assert_eq!(page_markers(&out), marker_names(&[3]));
}

#[test]
fn output_order_is_ascending_regardless_of_request_order() {
    let source = numbered_pdf(10);
    let out = extract_pages(&source, &[7, 2, 5]).unwrap();
    assert_eq!(page_markers(&out), marker_names(&[2, 5, 7]));
}

#[test]
fn duplicate_page_numbers_collapse() {
    let source = numbered_pdf(5);
    let out = extract_pages(&source, &[2, 2, 4, 2]).unwrap();
    assert_eq!(page_markers(&out), marker_names(&[2, 4]));
}

#[test]
fn full_selection_reproduces_every_page() {
    let source = numbered_pdf(4);
    let out = extract_pages(&source, &[1, 2, 3, 4]).unwrap();
    assert!(out.starts_with(b"%PDF-"), "output is not a PDF");
    assert_eq!(page_markers(&out), marker_names(&[1, 2, 3, 4]));
}

#[test]
fn page_beyond_document_is_rejected() {
    let source = numbered_pdf(5);
    let result = extract_pages(&source, &[6]);
    assert!(matches!(
        result,
        Err(ExtractError::PageOutOfRange {
            page: 6,
            page_count: 5
        })
    ));
}

#[test]
fn page_zero_is_rejected() {
    let source = numbered_pdf(5);
    let result = extract_pages(&source, &[0, 1]);
    assert!(matches!(
        result,
        Err(ExtractError::PageOutOfRange { page: 0, .. })
    ));
}

// The walkthrough from the selection side: range add, a toggle, then
// select-all, exported through the real extractor.
#[test]
fn range_toggle_select_all_export_walkthrough() {
    let source = numbered_pdf(10);
    let mut selection = Selection::new(10);

    selection.set_range_from("3");
    selection.set_range_to("5");
    assert!(selection.add_range());
    assert_eq!(selection.sorted_pages(), vec![3, 4, 5]);

    selection.toggle(3);
    assert_eq!(selection.sorted_pages(), vec![4, 5]);

    selection.select_all();
    assert_eq!(selection.sorted_pages(), (1..=10).collect::<Vec<u32>>());

    let out = extract_pages(&source, &selection.sorted_pages()).unwrap();
    let expected: Vec<u32> = (1..=10).collect();
    assert_eq!(page_markers(&out), marker_names(&expected));
}

proptest! {
    /// Any non-empty subset of any document extracts to exactly that
    /// subset, sorted ascending, one output page per requested page.
    #[test]
    fn extraction_equals_request_sorted_ascending(
        (page_count, request) in (1u32..=12).prop_flat_map(|n| {
            let max_len = usize::try_from(n).unwrap();
            (Just(n), prop::collection::btree_set(1..=n, 1..=max_len))
        })
    ) {
        let source = numbered_pdf(page_count);
        let request: Vec<u32> = request.into_iter().collect();
        let out = extract_pages(&source, &request).unwrap();
        prop_assert_eq!(page_markers(&out), marker_names(&request));
    }
}
