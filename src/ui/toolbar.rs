//! Toolbar row: font selector, size stepper, style toggles and Clear.

use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::config::FontSettings;
use crate::editor::{StyleSet, StyleTag};

use super::style;

/// A clickable toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Font,
    SizeDown,
    SizeUp,
    Style(StyleTag),
    Clear,
}

/// A laid-out toolbar item. Items without a button are plain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    pub button: Option<ToolbarButton>,
    pub label: String,
    pub rect: Rect,
}

/// Lay the toolbar out left to right inside `area`.
///
/// Items that do not fit are dropped.
pub fn toolbar_items(area: Rect, font: &FontSettings) -> Vec<ToolbarItem> {
    let entries = [
        (Some(ToolbarButton::Font), format!(" {} \u{25be} ", font.family())),
        (Some(ToolbarButton::SizeDown), " - ".to_string()),
        (None, format!("{:>2}pt", font.size())),
        (Some(ToolbarButton::SizeUp), " + ".to_string()),
        (Some(ToolbarButton::Style(StyleTag::Bold)), " B ".to_string()),
        (Some(ToolbarButton::Style(StyleTag::Italic)), " I ".to_string()),
        (Some(ToolbarButton::Style(StyleTag::Underline)), " U ".to_string()),
        (Some(ToolbarButton::Clear), " Clear ".to_string()),
    ];

    let right = area.x + area.width;
    let mut x = area.x + 1;
    let mut items = Vec::with_capacity(entries.len());
    for (button, label) in entries {
        let width = u16::try_from(unicode_width::UnicodeWidthStr::width(label.as_str()))
            .unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            break;
        }
        items.push(ToolbarItem {
            button,
            label,
            rect: Rect::new(x, area.y, width, 1),
        });
        x += width + 1;
    }
    items
}

/// The button under a screen cell, if any.
pub fn button_at(area: Rect, font: &FontSettings, column: u16, row: u16) -> Option<ToolbarButton> {
    toolbar_items(area, font)
        .into_iter()
        .find(|item| item.rect.contains(Position::new(column, row)))
        .and_then(|item| item.button)
}

pub fn render_toolbar(frame: &mut Frame, area: Rect, font: &FontSettings, active: StyleSet) {
    frame.render_widget(Paragraph::new("").style(style::toolbar_style()), area);
    for item in toolbar_items(area, font) {
        let item_style = match item.button {
            Some(ToolbarButton::Style(tag)) => {
                style::button_style(active.contains(tag)).patch(style::style_for_tags(only(tag)))
            }
            Some(_) => style::button_style(false),
            None => style::toolbar_style(),
        };
        frame.render_widget(Paragraph::new(item.label).style(item_style), item.rect);
    }
}

fn only(tag: StyleTag) -> StyleSet {
    StyleSet {
        bold: tag == StyleTag::Bold,
        italic: tag == StyleTag::Italic,
        underline: tag == StyleTag::Underline,
    }
}
