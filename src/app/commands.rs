//! The command table.
//!
//! Every user action has one [`Command`] with a stable name. Key bindings,
//! the menu and toolbar clicks all resolve to a command and are dispatched
//! through [`Message::Command`](super::Message::Command).

use crate::editor::StyleTag;

/// Top-level menu a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    File,
    Edit,
    Format,
    Help,
}

impl MenuGroup {
    pub const ALL: [Self; 4] = [Self::File, Self::Edit, Self::Format, Self::Help];

    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Edit => "Edit",
            Self::Format => "Format",
            Self::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Open,
    Save,
    GeneratePdf,
    PrintPreview,
    Exit,
    Font,
    FontLarger,
    FontSmaller,
    Bold,
    Italic,
    Underline,
    Clear,
    SelectAll,
    Undo,
    Redo,
    Help,
    Menu,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Self; 17] = [
        Self::Open,
        Self::Save,
        Self::GeneratePdf,
        Self::PrintPreview,
        Self::Exit,
        Self::Undo,
        Self::Redo,
        Self::SelectAll,
        Self::Clear,
        Self::Font,
        Self::FontLarger,
        Self::FontSmaller,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Help,
        Self::Menu,
    ];

    /// Stable action name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Save => "save",
            Self::GeneratePdf => "generate-pdf",
            Self::PrintPreview => "print-preview",
            Self::Exit => "exit",
            Self::Font => "font",
            Self::FontLarger => "font-larger",
            Self::FontSmaller => "font-smaller",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Clear => "clear",
            Self::SelectAll => "select-all",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Help => "help",
            Self::Menu => "menu",
        }
    }

    /// Look a command up by its action name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Menu entry text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open...",
            Self::Save => "Save...",
            Self::GeneratePdf => "Generate PDF...",
            Self::PrintPreview => "Print Preview",
            Self::Exit => "Exit",
            Self::Font => "Font...",
            Self::FontLarger => "Larger Font",
            Self::FontSmaller => "Smaller Font",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Clear => "Clear",
            Self::SelectAll => "Select All",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Help => "Keyboard Shortcuts",
            Self::Menu => "Menu",
        }
    }

    /// Key binding shown next to the menu entry.
    pub const fn shortcut(self) -> &'static str {
        match self {
            Self::Open => "Ctrl+O",
            Self::Save => "Ctrl+S",
            Self::GeneratePdf => "Ctrl+E",
            Self::PrintPreview => "Ctrl+P",
            Self::Exit => "Ctrl+Q",
            Self::Font => "Ctrl+F",
            Self::FontLarger => "Alt+=",
            Self::FontSmaller => "Alt+-",
            Self::Bold => "Ctrl+B",
            Self::Italic => "Ctrl+T",
            Self::Underline => "Ctrl+U",
            Self::Clear => "Ctrl+L",
            Self::SelectAll => "Ctrl+A",
            Self::Undo => "Ctrl+Z",
            Self::Redo => "Ctrl+Y",
            Self::Help => "F1",
            Self::Menu => "F10",
        }
    }

    /// Menu the command is listed under. `None` for the menu itself.
    pub const fn menu(self) -> Option<MenuGroup> {
        match self {
            Self::Open | Self::Save | Self::GeneratePdf | Self::PrintPreview | Self::Exit => {
                Some(MenuGroup::File)
            }
            Self::Undo | Self::Redo | Self::SelectAll | Self::Clear => Some(MenuGroup::Edit),
            Self::Font
            | Self::FontLarger
            | Self::FontSmaller
            | Self::Bold
            | Self::Italic
            | Self::Underline => Some(MenuGroup::Format),
            Self::Help => Some(MenuGroup::Help),
            Self::Menu => None,
        }
    }

    /// Style tag toggled by this command, if it is a style command.
    pub const fn style_tag(self) -> Option<StyleTag> {
        match self {
            Self::Bold => Some(StyleTag::Bold),
            Self::Italic => Some(StyleTag::Italic),
            Self::Underline => Some(StyleTag::Underline),
            _ => None,
        }
    }

    /// Commands shown in the menu overlay, grouped in menu order.
    pub fn menu_items() -> Vec<Self> {
        MenuGroup::ALL
            .into_iter()
            .flat_map(|group| {
                Self::ALL
                    .into_iter()
                    .filter(move |cmd| cmd.menu() == Some(group))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip_and_are_unique() {
        let mut names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Command::from_name("print"), None);
    }

    #[test]
    fn test_menu_items_are_grouped_in_order() {
        let items = Command::menu_items();
        assert_eq!(items.first(), Some(&Command::Open));
        assert_eq!(items.last(), Some(&Command::Help));
        assert!(!items.contains(&Command::Menu));
        let groups: Vec<MenuGroup> = items.iter().filter_map(|c| c.menu()).collect();
        let mut sorted = groups.clone();
        sorted.sort_by_key(|g| MenuGroup::ALL.iter().position(|x| x == g));
        assert_eq!(groups, sorted);
    }

    #[test]
    fn test_style_commands_map_to_tags() {
        assert_eq!(Command::Bold.style_tag(), Some(StyleTag::Bold));
        assert_eq!(Command::Underline.style_tag(), Some(StyleTag::Underline));
        assert_eq!(Command::Clear.style_tag(), None);
    }
}
