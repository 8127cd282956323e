//! Read-only print preview window.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::config::FontSettings;
use crate::wrap::wrap_cells;

use super::style;
use super::viewport::Viewport;

/// A snapshot of the buffer text shown word-wrapped in its own window.
///
/// Holds its own copy of the text and font, so later edits to the main
/// buffer do not reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPreview {
    text: String,
    font: FontSettings,
    rows: Vec<String>,
    viewport: Viewport,
}

impl PrintPreview {
    /// Open a preview sized for a `width` x `height` terminal.
    pub fn new(text: String, font: FontSettings, width: u16, height: u16) -> Self {
        let (text_width, text_height) = text_area(width, height);
        let rows = wrap_text(&text, text_width);
        let viewport = Viewport::new(text_width, text_height, rows.len());
        Self {
            text,
            font,
            rows,
            viewport,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn font(&self) -> &FontSettings {
        &self.font
    }

    /// Window title, e.g. `Print Preview · Arial 12pt`.
    pub fn title(&self) -> String {
        format!("Print Preview \u{b7} {}", self.font.label())
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub const fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Rewrap for a new terminal size, keeping the scroll position if valid.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (text_width, text_height) = text_area(width, height);
        if text_width != self.viewport.width() {
            self.rows = wrap_text(&self.text, text_width);
            self.viewport.set_total_rows(self.rows.len());
        }
        self.viewport.resize(text_width, text_height);
    }
}

/// Text area inside the window border, padding and footer.
fn text_area(width: u16, height: u16) -> (u16, u16) {
    (width.saturating_sub(4).max(1), height.saturating_sub(3).max(1))
}

fn wrap_text(text: &str, width: u16) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| {
            let line = line.replace('\t', " ");
            wrap_cells(&line, width)
                .into_iter()
                .map(|range| line[range].trim_end().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn render_preview(preview: &PrintPreview, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(preview.title())
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(style::popup_style());
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let content_height = inner.height.saturating_sub(1);
    let lines: Vec<Line> = preview.rows()[preview.viewport().visible_range()]
        .iter()
        .map(|row| Line::raw(row.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: content_height,
            ..inner
        },
    );

    let footer_area = Rect {
        y: inner.y + content_height,
        height: inner.height.min(1),
        ..inner
    };
    let footer = Line::styled(
        format!(
            "{}%  \u{2502}  arrows/PgUp/PgDn scroll \u{2502} Esc closes",
            preview.viewport().scroll_percent()
        ),
        style::dim_style(),
    );
    frame.render_widget(Paragraph::new(footer), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewport::Scroll;

    #[test]
    fn test_title_names_font() {
        let preview = PrintPreview::new("x".into(), FontSettings::new("Times", 14), 80, 24);
        assert_eq!(preview.title(), "Print Preview \u{b7} Times 14pt");
    }

    #[test]
    fn test_text_is_wrapped_to_window() {
        let text = "alpha beta gamma delta".to_string();
        let preview = PrintPreview::new(text, FontSettings::default(), 15, 10);
        assert_eq!(preview.rows(), ["alpha beta", "gamma delta"]);
    }

    #[test]
    fn test_resize_rewraps() {
        let text = "alpha beta gamma delta".to_string();
        let mut preview = PrintPreview::new(text, FontSettings::default(), 15, 10);
        preview.resize(80, 10);
        assert_eq!(preview.rows().len(), 1);
        assert_eq!(preview.viewport().total_rows(), 1);
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let text = (0..100).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut preview = PrintPreview::new(text, FontSettings::default(), 40, 13);
        preview.viewport_mut().scroll(Scroll::Down(1_000));
        assert_eq!(preview.viewport().offset(), 90);
    }
}
