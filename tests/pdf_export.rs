use docman::config::{FontSettings, PageSettings};
use docman::error::DocError;
use docman::pdf::layout::rows_per_page;
use docman::pdf::{CoreFont, export_to_file, render};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_export_writes_a_pdf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let summary = export_to_file(&path, "Quarterly report\n\nAll good.", &FontSettings::default())
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.bytes, bytes.len());
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"(Quarterly report)"));
    assert!(contains(&bytes, b"(All good.)"));
    assert!(contains(&bytes, b"%%EOF"));
}

#[test]
fn test_blank_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pdf");

    let err = export_to_file(&path, "\n   \n", &FontSettings::default()).unwrap_err();
    assert!(matches!(err, DocError::EmptyContent));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let err = export_to_file(&path, "text", &FontSettings::default()).unwrap_err();
    assert!(matches!(err, DocError::Write { .. }));
}

#[test]
fn test_a4_page_holds_27_rows() {
    assert_eq!(rows_per_page(&PageSettings::default()), 27);

    let content = (1..=60).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let rendered = render(&content, &FontSettings::default()).unwrap();
    assert_eq!(rendered.pages, 3);
}

#[test]
fn test_font_choice_reaches_the_document() {
    for (family, base) in [
        ("Courier", &b"/Courier"[..]),
        ("Times New Roman", b"/Times-Roman"),
        ("DejaVu Sans", b"/Helvetica"),
        ("Some Unknown Face", b"/Helvetica"),
    ] {
        let rendered = render("abc", &FontSettings::new(family, 16)).unwrap();
        assert!(contains(&rendered.bytes, base), "{family}");
        assert!(contains(&rendered.bytes, b"/F1 16 Tf"), "{family}");
    }
    assert_eq!(CoreFont::for_family("Some Unknown Face"), CoreFont::Helvetica);
}

#[test]
fn test_larger_font_needs_more_pages_for_long_lines() {
    let paragraph = "lorem ipsum dolor sit amet ".repeat(200);
    let small = render(&paragraph, &FontSettings::new("Helvetica", 8)).unwrap();
    let large = render(&paragraph, &FontSettings::new("Helvetica", 39)).unwrap();
    assert!(large.pages > small.pages);
}
