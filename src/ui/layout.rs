//! Screen regions and soft-wrapped editor rows.
//!
//! Rendering and mouse hit testing both go through these functions so the two
//! always agree on where things are.

use ratatui::layout::Rect;

use crate::editor::{Cursor, EditorBuffer};
use crate::wrap::{cell_width, wrap_cells};

/// Blank columns left of the editor text.
pub const EDITOR_LEFT_PADDING: u16 = 1;

/// The fixed regions of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub menu_bar: Rect,
    pub toolbar: Rect,
    /// Editor pane, including its left padding.
    pub editor: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

impl ScreenLayout {
    /// Split `area` top to bottom into menu bar, toolbar, editor, optional
    /// toast line, and status bar.
    pub fn new(area: Rect, toast_active: bool) -> Self {
        let row = |y: u16| Rect {
            y: area.y + y.min(area.height.saturating_sub(1)),
            height: u16::from(area.height > 0),
            ..area
        };
        let footer_rows = 1 + u16::from(toast_active);
        let editor_top = 2.min(area.height);
        let editor_height = area.height.saturating_sub(editor_top + footer_rows);
        Self {
            menu_bar: row(0),
            toolbar: row(1),
            editor: Rect {
                y: area.y + editor_top,
                height: editor_height,
                ..area
            },
            toast: toast_active.then(|| row(area.height.saturating_sub(2))),
            status: row(area.height.saturating_sub(1)),
        }
    }

    /// The editor pane without its padding.
    pub fn editor_text(&self) -> Rect {
        Rect {
            x: self.editor.x + EDITOR_LEFT_PADDING,
            width: self.editor.width.saturating_sub(EDITOR_LEFT_PADDING),
            ..self.editor
        }
    }
}

/// One screen row of a soft-wrapped buffer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRow {
    /// Buffer line index.
    pub line: usize,
    /// Byte range of the line shown on this row.
    pub start: usize,
    pub end: usize,
    /// Whether this is the final row of its line.
    pub last_in_line: bool,
}

/// Soft-wrap every buffer line to `width` cells.
pub fn visual_rows(buffer: &EditorBuffer, width: u16) -> Vec<VisualRow> {
    let mut rows = Vec::with_capacity(buffer.line_count());
    for line in 0..buffer.line_count() {
        let text = buffer.line_at(line).unwrap_or_default();
        let ranges = wrap_cells(&text, width);
        let count = ranges.len();
        rows.extend(ranges.into_iter().enumerate().map(|(i, range)| VisualRow {
            line,
            start: range.start,
            end: range.end,
            last_in_line: i + 1 == count,
        }));
    }
    rows
}

/// Index of the row showing `cursor`.
pub fn cursor_row(rows: &[VisualRow], cursor: Cursor) -> usize {
    rows.iter()
        .position(|row| {
            row.line == cursor.line
                && cursor.col >= row.start
                && (cursor.col < row.end || row.last_in_line)
        })
        .unwrap_or_else(|| rows.len().saturating_sub(1))
}

/// Buffer position under a screen cell of the editor text area.
///
/// `row_idx` indexes into `rows`, clamped to the last row. `column` is the
/// cell offset from the left edge of the text. Clicking past the end of a
/// row lands at its end.
pub fn position_at(
    rows: &[VisualRow],
    buffer: &EditorBuffer,
    row_idx: usize,
    column: u16,
) -> Option<(usize, usize)> {
    let row = rows.get(row_idx.min(rows.len().checked_sub(1)?))?;
    let text = buffer.line_at(row.line)?;
    let segment = text.get(row.start..row.end)?;

    let target = f32::from(column);
    let mut x = 0.0_f32;
    for (offset, ch) in segment.char_indices() {
        let w = cell_width(ch);
        if target < x + w {
            return Some((row.line, row.start + offset));
        }
        x += w;
    }

    let end = if row.last_in_line {
        row.end
    } else {
        // Stay on this row instead of jumping to the start of the next one.
        segment
            .char_indices()
            .next_back()
            .map_or(row.start, |(offset, _)| row.start + offset)
    };
    Some((row.line, end))
}

/// Largest scroll offset that still fills the pane.
pub fn max_scroll(total_rows: usize, height: u16) -> usize {
    total_rows.saturating_sub(usize::from(height))
}

/// Scroll offset adjusted so `row` is inside a pane `height` rows tall.
pub fn scroll_to_row(offset: usize, row: usize, height: u16) -> usize {
    let height = usize::from(height);
    if height == 0 {
        return row;
    }
    if row < offset {
        row
    } else if row >= offset + height {
        row + 1 - height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout_regions() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.menu_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.toolbar, Rect::new(0, 1, 80, 1));
        assert_eq!(layout.editor, Rect::new(0, 2, 80, 21));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.toast, None);
        assert_eq!(layout.editor_text().x, EDITOR_LEFT_PADDING);
    }

    #[test]
    fn test_toast_takes_a_row_from_the_editor() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.editor.height, 20);
        assert_eq!(layout.toast, Some(Rect::new(0, 22, 80, 1)));
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 10, 1), true);
        assert_eq!(layout.editor.height, 0);
    }

    #[test]
    fn test_visual_rows_wrap_long_lines() {
        let buf = EditorBuffer::from_text("hello big world\nx");
        let rows = visual_rows(&buf, 10);
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].start, rows[0].end, rows[0].last_in_line), (0, 10, false));
        assert_eq!((rows[1].line, rows[1].start, rows[1].last_in_line), (0, 10, true));
        assert_eq!(rows[2].line, 1);
    }

    #[test]
    fn test_cursor_row_at_wrap_boundary_moves_to_next_row() {
        let buf = EditorBuffer::from_text("hello big world");
        let rows = visual_rows(&buf, 10);
        assert_eq!(cursor_row(&rows, Cursor::at(0, 9)), 0);
        assert_eq!(cursor_row(&rows, Cursor::at(0, 10)), 1);
        assert_eq!(cursor_row(&rows, Cursor::at(0, 15)), 1);
    }

    #[test]
    fn test_position_at_maps_cells_to_bytes() {
        let buf = EditorBuffer::from_text("héllo\nab");
        let rows = visual_rows(&buf, 20);
        assert_eq!(position_at(&rows, &buf, 0, 2), Some((0, 3)));
        assert_eq!(position_at(&rows, &buf, 0, 50), Some((0, 6)));
        assert_eq!(position_at(&rows, &buf, 9, 0), Some((1, 0)));
    }

    #[test]
    fn test_position_past_wrapped_row_stays_on_row() {
        let buf = EditorBuffer::from_text("hello big world");
        let rows = visual_rows(&buf, 10);
        assert_eq!(position_at(&rows, &buf, 0, 40), Some((0, 9)));
    }

    #[test]
    fn test_scroll_to_row() {
        assert_eq!(scroll_to_row(0, 5, 10), 0);
        assert_eq!(scroll_to_row(0, 12, 10), 3);
        assert_eq!(scroll_to_row(8, 2, 10), 2);
        assert_eq!(max_scroll(30, 10), 20);
    }
}
