//! Integration tests for the page-by-page parser.

mod common;

use common::{pdf_with_pages, show_line, PdfBuilder};
use lopdf::content::Operation;
use lopdf::Object;
use readpdf::{extract_text_from_bytes, parse_bytes, parse_reader, Error, PdfParser};

#[test]
fn test_page_count_and_version() {
    let parser = PdfParser::from_bytes(&pdf_with_pages(&["a", "b"])).unwrap();

    assert_eq!(parser.page_count(), 2);
    assert_eq!(parser.version(), "1.5");
    assert!(!parser.is_encrypted());
}

#[test]
fn test_pages_iterator_is_ordered_and_sized() {
    let parser = PdfParser::from_bytes(&pdf_with_pages(&["first", "second", "third"])).unwrap();

    let mut pages = parser.pages();
    assert_eq!(pages.len(), 3);

    let first = pages.next().unwrap().unwrap();
    assert_eq!((first.number, first.text.as_str()), (1, "first\n"));
    assert_eq!(pages.len(), 2);

    let rest: Vec<_> = pages.map(|p| p.unwrap().number).collect();
    assert_eq!(rest, vec![2, 3]);
}

#[test]
fn test_parse_collects_document() {
    let doc = parse_bytes(&pdf_with_pages(&["x", "y"])).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.get_page(2).unwrap().text, "y\n");
    assert_eq!(doc.plain_text(), "x\ny\n");
}

#[test]
fn test_parse_reader() {
    let data = pdf_with_pages(&["from a reader"]);
    let doc = parse_reader(std::io::Cursor::new(data)).unwrap();
    assert_eq!(doc.plain_text(), "from a reader\n");
}

#[test]
fn test_extract_text_matches_run_output() {
    let text = extract_text_from_bytes(&pdf_with_pages(&["P1", "P2", "P3", "P4"])).unwrap();
    assert_eq!(text, "P1\nP2\nP3\nP4\n");
}

#[test]
fn test_text_positioning_operators() {
    let ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 700.into()]),
        Operation::new(
            "TJ",
            vec![Object::Array(vec![
                Object::string_literal("Hello"),
                Object::Integer(-300),
                Object::string_literal("world"),
            ])],
        ),
        Operation::new("Td", vec![0.into(), (-14).into()]),
        Operation::new("Tj", vec![Object::string_literal("second line")]),
        Operation::new("ET", vec![]),
    ];
    let pdf = PdfBuilder::new()
        .page_ops(vec![ops, show_line("footer", 40)])
        .build();

    let text = extract_text_from_bytes(&pdf).unwrap();
    assert_eq!(text, "Hello world\nsecond line\nfooter\n");
}

#[test]
fn test_rejects_non_pdf_bytes() {
    assert!(matches!(
        parse_bytes(b"GIF89a not a document"),
        Err(Error::UnknownFormat)
    ));
}
