use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Command, FilePicker, FontDialog, Model, Overlay, PathPrompt};

use super::style;

/// Question asked before the buffer is cleared.
pub const CLEAR_QUESTION: &str = "Do you really want to clear the text?";

const MENU_WIDTH: u16 = 40;

/// Where the menu dropdown is drawn. Item `i` sits on row `y + 1 + i`.
pub fn menu_rect(area: Rect, items_len: usize) -> Rect {
    let needed_rows = u16::try_from(items_len).unwrap_or(u16::MAX).saturating_add(2);
    Rect::new(
        area.x + 1.min(area.width),
        area.y + 1.min(area.height),
        MENU_WIDTH.min(area.width.saturating_sub(1)),
        needed_rows.min(area.height.saturating_sub(1)),
    )
}

pub fn render_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    match &model.overlay {
        Some(Overlay::Help) => render_help_overlay(frame, area),
        Some(Overlay::Menu { selected }) => render_menu_overlay(*selected, frame, area),
        Some(Overlay::ConfirmClear) => render_confirm_overlay(frame, area),
        Some(Overlay::Prompt(prompt)) => render_prompt_overlay(prompt, frame, area),
        Some(Overlay::OpenFile(picker)) => render_picker_overlay(picker, frame, area),
        Some(Overlay::Font(dialog)) => render_font_overlay(model, dialog, frame, area),
        None => {}
    }
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(style::popup_style())
}

fn render_menu_overlay(selected: usize, frame: &mut Frame, area: Rect) {
    let items = Command::menu_items();
    let popup = menu_rect(area, items.len());
    let inner_width = usize::from(popup.width.saturating_sub(2));

    let mut previous_group = None;
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, command)| {
            let group = command.menu();
            let group_label = if group == previous_group {
                ""
            } else {
                group.map_or("", |g| g.label())
            };
            previous_group = group;

            let text = format!(
                " {group_label:<7}{:<18}{:>8}",
                command.label(),
                command.shortcut()
            );
            let text = format!("{text:<inner_width$}");
            if idx == selected {
                Line::styled(text, style::highlight_style())
            } else {
                Line::raw(text)
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .style(style::popup_style());
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut previous_group = None;
    for command in Command::menu_items() {
        if command.menu() != previous_group {
            if previous_group.is_some() {
                lines.push(Line::raw(""));
            }
            previous_group = command.menu();
            let title = previous_group.map_or("", |g| g.label());
            lines.push(Line::styled(title, style::section_style()));
        }
        lines.push(Line::raw(format!(
            "  {:<20}{}",
            command.shortcut(),
            command.label()
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("Editing", style::section_style()));
    lines.push(Line::raw("  Arrows, Home/End    Move cursor"));
    lines.push(Line::raw("  Ctrl+Left/Right     Word movement"));
    lines.push(Line::raw("  Ctrl+Home/End       Document start / end"));
    lines.push(Line::raw("  Shift+movement      Extend selection"));
    lines.push(Line::raw("  Mouse drag          Select text"));

    let block = popup_block("Help");
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let content_height = inner.height.saturating_sub(1);
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
    frame.render_widget(
        Paragraph::new(Line::styled("any key closes", style::dim_style())),
        footer_area,
    );
}

fn render_confirm_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(46, 6, area);
    let lines = vec![
        Line::raw(""),
        Line::raw(CLEAR_QUESTION),
        Line::raw(""),
        Line::styled("[y] Yes   [n] No", style::dim_style()),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(popup_block("Clear")),
        popup,
    );
}

fn render_prompt_overlay(prompt: &PathPrompt, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(10).clamp(30, 72);
    let popup = centered_popup_rect(popup_width, 6, area);
    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("File: "),
            Span::raw(prompt.input.clone()),
            Span::styled(" ", style::cursor_style()),
        ]),
        Line::raw(""),
        Line::styled("Enter accept \u{b7} Esc cancel", style::dim_style()),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(prompt.purpose.title())),
        popup,
    );
}

fn render_picker_overlay(picker: &FilePicker, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(10).clamp(30, 72);
    let popup_height = area.height.saturating_sub(4).max(8);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let title = format!("Open \u{b7} {}", picker.dir.display());
    let block = popup_block(&title);
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Reserve 2 rows at bottom for filter and hints
    let list_height = inner.height.saturating_sub(2);
    let lines: Vec<Line> = visible_window(picker.entries.len(), picker.selected, list_height)
        .map(|idx| {
            let entry = &picker.entries[idx];
            let name = if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };
            if idx == picker.selected {
                Line::styled(format!("> {name}"), style::highlight_style())
            } else {
                Line::raw(format!("  {name}"))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: list_height,
            ..inner
        },
    );

    let footer = vec![
        Line::raw(format!("Type: {}", picker.filter.label())),
        Line::styled(
            "Enter open \u{b7} Backspace parent \u{b7} Tab type \u{b7} Esc cancel",
            style::dim_style(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(footer),
        Rect {
            y: inner.y + list_height,
            height: inner.height - list_height,
            ..inner
        },
    );
}

fn render_font_overlay(model: &Model, dialog: &FontDialog, frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(48, area.height.saturating_sub(4).clamp(10, 20), area);
    let block = popup_block("Font");
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let mut lines = vec![Line::from(vec![
        Span::raw("Family: "),
        Span::raw(dialog.query.clone()),
        Span::styled(" ", style::cursor_style()),
    ])];

    // Query line above, size and hint lines below
    let list_height = inner.height.saturating_sub(4);
    let matches = dialog.matches(&model.font_families);
    let selected = dialog.selected.min(matches.len().saturating_sub(1));
    if matches.is_empty() {
        lines.push(Line::styled("  (no matching fonts)", style::dim_style()));
    }
    lines.extend(
        visible_window(matches.len(), selected, list_height).map(|idx| {
            if idx == selected {
                Line::styled(format!("> {}", matches[idx]), style::highlight_style())
            } else {
                Line::raw(format!("  {}", matches[idx]))
            }
        }),
    );
    let list_end = 1 + usize::from(list_height);
    lines.resize(list_end.max(lines.len()), Line::raw(""));

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Size: \u{25c2} {}pt \u{25b8}", dialog.size)));
    lines.push(Line::styled(
        "Up/Down family \u{b7} Left/Right size \u{b7} Enter apply",
        style::dim_style(),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Indices of a list window `height` rows tall that keeps `selected` in view.
fn visible_window(len: usize, selected: usize, height: u16) -> std::ops::Range<usize> {
    let height = usize::from(height);
    let start = selected.saturating_sub(height.saturating_sub(1));
    start.min(len)..(start + height).min(len)
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
