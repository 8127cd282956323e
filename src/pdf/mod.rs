//! PDF export of the buffer text in the current base font.
//!
//! Output uses a single base-14 Type1 font with `WinAnsiEncoding`, so nothing
//! is embedded. Style tags are not carried over.

pub mod layout;
pub mod metrics;

use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::config::{FontSettings, PageSettings};
use crate::error::{DocError, Result};
use layout::{MM_PER_PT, PageLayout, layout_pages};
pub use metrics::CoreFont;

const FONT_RESOURCE: Name<'static> = Name(b"F1");

/// Outcome of a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub bytes: usize,
}

/// A rendered PDF document.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Render `content` on A4 pages.
///
/// Returns [`DocError::EmptyContent`] when `content` is blank.
pub fn render(content: &str, font: &FontSettings) -> Result<RenderedPdf> {
    render_with(content, font, &PageSettings::default())
}

/// Render `content` with explicit page geometry.
pub fn render_with(content: &str, font: &FontSettings, page: &PageSettings) -> Result<RenderedPdf> {
    let text = content.trim();
    if text.is_empty() {
        return Err(DocError::EmptyContent);
    }
    let core = CoreFont::for_family(font.family());
    let size = f32::from(font.size());
    let pages = layout_pages(text, core, size, page);
    Ok(RenderedPdf {
        pages: pages.len(),
        bytes: write_document(&pages, core, size, page),
    })
}

/// Render `content` and write it to `path`.
///
/// Nothing is written when `content` is blank.
pub fn export_to_file(path: &Path, content: &str, font: &FontSettings) -> Result<ExportSummary> {
    let rendered = render(content, font)?;
    std::fs::write(path, &rendered.bytes).map_err(|source| DocError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = ExportSummary {
        pages: rendered.pages,
        bytes: rendered.bytes.len(),
    };
    tracing::info!(
        path = %path.display(),
        pages = summary.pages,
        bytes = summary.bytes,
        font = %font.label(),
        "exported PDF"
    );
    Ok(summary)
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

fn write_document(pages: &[PageLayout], font: CoreFont, size: f32, page: &PageSettings) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let font_id = alloc.bump();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(id, _)| *id))
        .count(i32::try_from(page_ids.len()).unwrap_or(i32::MAX));

    let page_height_pt = mm_to_pt(page.height_mm);
    let media_box = Rect::new(0.0, 0.0, mm_to_pt(page.width_mm), page_height_pt);

    for (layout, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        {
            let mut page_writer = pdf.page(*page_id);
            page_writer
                .media_box(media_box)
                .parent(tree_id)
                .contents(*content_id);
            page_writer.resources().fonts().pair(FONT_RESOURCE, font_id);
        }

        let mut content = Content::new();
        content.begin_text();
        content.set_font(FONT_RESOURCE, size);
        for line in &layout.lines {
            let x = mm_to_pt(line.x_mm);
            let y = page_height_pt - mm_to_pt(line.baseline_mm);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
            content.show(Str(&encode_win_ansi(&line.text)));
        }
        content.end_text();
        pdf.stream(*content_id, &content.finish());
    }

    pdf.type1_font(font_id)
        .base_font(Name(font.base_font_name().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

/// Encode text as `WinAnsiEncoding` bytes.
///
/// Tabs become spaces and unrepresentable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => match u8::try_from(u32::from(ch)) {
                Ok(byte) if byte >= 0x20 && !(0x7f..0xa0).contains(&byte) => byte,
                _ => b'?',
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let font = FontSettings::default();
        assert!(matches!(render("", &font), Err(DocError::EmptyContent)));
        assert!(matches!(render(" \n\t\n", &font), Err(DocError::EmptyContent)));
    }

    #[test]
    fn test_render_produces_pdf_with_text() {
        let rendered = render("hello world", &FontSettings::default()).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF-"));
        assert!(contains(&rendered.bytes, b"(hello world)"));
        assert!(contains(&rendered.bytes, b"/Helvetica"));
        assert!(contains(&rendered.bytes, b"/WinAnsiEncoding"));
        assert_eq!(rendered.pages, 1);
    }

    #[test]
    fn test_times_family_uses_times_roman() {
        let font = FontSettings::new("Times", 20);
        let rendered = render("serif text", &font).unwrap();
        assert!(contains(&rendered.bytes, b"/Times-Roman"));
        assert!(contains(&rendered.bytes, b"/F1 20 Tf"));
    }

    #[test]
    fn test_content_is_trimmed_before_layout() {
        let rendered = render("\n\n\nbody\n\n", &FontSettings::default()).unwrap();
        let untrimmed = render("body", &FontSettings::default()).unwrap();
        assert_eq!(rendered.bytes, untrimmed.bytes);
    }

    #[test]
    fn test_many_lines_paginate() {
        let content = vec!["line"; 30].join("\n");
        let rendered = render(&content, &FontSettings::default()).unwrap();
        assert_eq!(rendered.pages, 2);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let summary = export_to_file(&path, "text", &FontSettings::default()).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(summary.bytes, written.len());
        assert_eq!(summary.pages, 1);
    }

    #[test]
    fn test_export_of_blank_buffer_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let err = export_to_file(&path, "   ", &FontSettings::default()).unwrap_err();
        assert!(matches!(err, DocError::EmptyContent));
        assert!(!path.exists());
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("aé€\t"), vec![b'a', 0xe9, 0x80, b' ']);
        assert_eq!(encode_win_ansi("日"), vec![b'?']);
        assert_eq!(encode_win_ansi("\u{7f}"), vec![b'?']);
    }
}
