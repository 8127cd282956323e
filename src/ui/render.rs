use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::{MenuGroup, Model};
use crate::editor::EditorBuffer;

use super::layout::{EDITOR_LEFT_PADDING, ScreenLayout, VisualRow, visual_rows};
use super::preview::render_preview;
use super::{overlays, status, style, toolbar};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    if let Some(preview) = &model.preview {
        frame.render_widget(Clear, area);
        render_preview(preview, frame, area);
        return;
    }

    let layout = ScreenLayout::new(area, model.active_toast().is_some());
    render_menu_bar(frame, layout.menu_bar);
    toolbar::render_toolbar(
        frame,
        layout.toolbar,
        &model.font,
        model.buffer.active_styles(),
    );
    render_editor(model, frame, layout.editor);

    // Render toast if active
    if let Some(toast_area) = layout.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, layout.status);

    overlays::render_overlay(model, frame, area);
}

fn render_menu_bar(frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = MenuGroup::ALL
        .iter()
        .map(|group| Span::raw(format!(" {} ", group.label())))
        .collect();
    spans.push(Span::raw("  (F10)"));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(style::menu_bar_style()),
        area,
    );
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let text_area = Rect {
        x: area.x + EDITOR_LEFT_PADDING.min(area.width),
        width: area.width.saturating_sub(EDITOR_LEFT_PADDING),
        ..area
    };
    let rows = visual_rows(&model.buffer, text_area.width);
    let content: Vec<Line> = rows
        .iter()
        .skip(model.scroll_offset)
        .take(usize::from(area.height))
        .map(|row| editor_row_line(&model.buffer, row))
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), text_area);
}

/// One soft-wrapped row as styled spans: style tags, selection and cursor.
pub fn editor_row_line(buffer: &EditorBuffer, row: &VisualRow) -> Line<'static> {
    let text = buffer.line_at(row.line).unwrap_or_default();
    let segment = text.get(row.start..row.end).unwrap_or_default();
    let first_char = buffer.line_start_char(row.line)
        + text.get(..row.start).map_or(0, |s| s.chars().count());
    let selection = buffer.selection();
    let cursor = buffer.cursor();
    let cursor_char = buffer.char_index(cursor);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (i, ch) in segment.chars().enumerate() {
        let idx = first_char + i;
        let mut cell_style = style::style_for_tags(buffer.tags().styles_at(idx));
        if selection.as_ref().is_some_and(|sel| sel.contains(&idx)) {
            cell_style = cell_style.bg(style::SELECTION_BG);
        }
        if idx == cursor_char {
            cell_style = cell_style.patch(style::cursor_style());
        }
        if cell_style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = cell_style;
        run.push(if ch.is_control() { ' ' } else { ch });
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    // Cursor past the last character of its line
    if row.last_in_line && cursor.line == row.line && cursor.col >= row.end {
        spans.push(Span::styled(" ", style::cursor_style()));
    }
    Line::from(spans)
}
