//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::editor::StyleSet;

/// Background of selected text.
pub const SELECTION_BG: Color = Color::DarkGray;

/// Map the tags present at a character onto terminal modifiers.
pub fn style_for_tags(tags: StyleSet) -> Style {
    let mut modifiers = Modifier::empty();
    if tags.bold {
        modifiers |= Modifier::BOLD;
    }
    if tags.italic {
        modifiers |= Modifier::ITALIC;
    }
    if tags.underline {
        modifiers |= Modifier::UNDERLINED;
    }
    Style::default().add_modifier(modifiers)
}

/// Style of the character under the cursor.
pub fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

pub fn menu_bar_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

pub fn toolbar_style() -> Style {
    Style::default().bg(Color::Indexed(236)).fg(Color::White)
}

/// Toolbar button, highlighted when its state is on.
pub fn button_style(active: bool) -> Style {
    if active {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else {
        Style::default().bg(Color::Indexed(240)).fg(Color::White)
    }
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn popup_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

/// Highlight for the selected row of a list.
pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tags_have_no_modifiers() {
        assert_eq!(style_for_tags(StyleSet::default()), Style::default());
    }

    #[test]
    fn test_tags_combine_modifiers() {
        let style = style_for_tags(StyleSet {
            bold: true,
            italic: false,
            underline: true,
        });
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!style.add_modifier.contains(Modifier::ITALIC));
    }
}
