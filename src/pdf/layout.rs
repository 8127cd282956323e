//! Line wrapping and pagination for PDF export.
//!
//! Each logical line becomes one multi-row cell block. Rows are placed top to
//! bottom and a new page starts before any row that would cross the
//! automatic page-break trigger.

use super::metrics::CoreFont;
use crate::config::PageSettings;
use crate::wrap::wrap_line;

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// One wrapped row positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge of the text, from the left page edge.
    pub x_mm: f32,
    /// Baseline, from the top page edge.
    pub baseline_mm: f32,
}

/// Rows placed on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Wrap and paginate `content` for the given font and page geometry.
///
/// Always yields at least one page.
pub fn layout_pages(
    content: &str,
    font: CoreFont,
    size_pt: f32,
    page: &PageSettings,
) -> Vec<PageLayout> {
    let row_height = page.line_height_mm;
    let size_mm = size_pt * MM_PER_PT;
    let x_mm = page.margin_left_mm + page.cell_padding_mm;
    let max_width = page.text_width_mm();

    let mut pages = vec![PageLayout::default()];
    let mut y = page.margin_top_mm;

    for line in content.split('\n') {
        for row in wrap_line(line, max_width, |ch| font.width_mm(ch, size_pt)) {
            let starts_page = pages.last().is_none_or(|p| p.lines.is_empty());
            if y + row_height > page.break_trigger_mm() && !starts_page {
                pages.push(PageLayout::default());
                y = page.margin_top_mm;
            }
            if let Some(current) = pages.last_mut() {
                current.lines.push(PlacedLine {
                    text: line[row].trim_end().to_string(),
                    x_mm,
                    baseline_mm: y + 0.5 * row_height + 0.3 * size_mm,
                });
            }
            y += row_height;
        }
    }
    pages
}

/// Rows that fit on one page with the given geometry.
pub fn rows_per_page(page: &PageSettings) -> usize {
    let usable = page.break_trigger_mm() - page.margin_top_mm;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = (usable / page.line_height_mm).floor().max(1.0) as usize;
    rows
}
