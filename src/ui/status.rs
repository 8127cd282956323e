use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::words::word_count_label;

use super::style;

/// Text of the status bar.
pub fn status_text(model: &Model) -> String {
    let dirty_indicator = if model.buffer.is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let cursor = model.buffer.cursor();
    let column = model
        .buffer
        .line_at(cursor.line)
        .map_or(0, |line| line.get(..cursor.col).map_or(0, |s| s.chars().count()));

    format!(
        " {} \u{2502} {}{} \u{2502} Ln {}, Col {} \u{2502} {}  F1 help  F10 menu",
        word_count_label(model.word_count),
        model.display_name(),
        dirty_indicator,
        cursor.line + 1,
        column + 1,
        model.font.label(),
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status_bar = Paragraph::new(status_text(model)).style(style::status_style());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
