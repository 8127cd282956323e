use crate::app::Model;
use crate::app::commands::Command;
use crate::app::model::{FontDialog, Overlay, PathPrompt, PromptPurpose, ToastLevel};
use crate::config::FontSettings;
use crate::editor::Motion;
use crate::ui::preview::PrintPreview;
use crate::ui::viewport::Scroll;

/// Warning shown when PDF export is requested for a blank buffer.
pub const EMPTY_PDF_WARNING: &str = "No content to generate PDF.";

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Run an entry of the command table
    Command(Command),

    // Editor
    /// Insert a character at the cursor
    EditorInsertChar(char),
    /// Insert pasted text at the cursor
    EditorInsertStr(String),
    /// Delete selection or character before cursor (Backspace)
    EditorDeleteBack,
    /// Delete selection or character at cursor (Delete)
    EditorDeleteForward,
    /// Split line at cursor (Enter)
    EditorSplitLine,
    /// Move the cursor, extending the selection when the flag is set
    EditorMove(Motion, bool),
    /// Move cursor to absolute position (line, col), e.g. from mouse click
    EditorMoveTo(usize, usize),
    /// Extend the selection to (line, col), e.g. from mouse drag
    EditorSelectTo(usize, usize),
    /// Scroll editor viewport up by n rows
    EditorScrollUp(usize),
    /// Scroll editor viewport down by n rows
    EditorScrollDown(usize),

    // Menu
    MenuUp,
    MenuDown,

    /// Answer the clear confirmation
    ConfirmClear(bool),

    // Path prompt
    /// Replace the prompt text
    PromptInput(String),
    /// Accept the prompt (handled in effects)
    PromptSubmit,

    // Open dialog
    PickerUp,
    PickerDown,
    /// Enter the selected directory or open the selected file
    PickerActivate,
    /// Go to the parent directory
    PickerParent,
    /// Switch between text-only and all files
    PickerToggleFilter,

    // Font dialog
    /// Replace the family filter text
    FontQuery(String),
    FontUp,
    FontDown,
    /// Step the pending size by the given amount
    FontSizeStep(i32),
    /// Apply the chosen family and size
    FontApply,

    /// Close the active dialog without doing anything
    CancelOverlay,

    // Print preview
    PreviewScrollUp(usize),
    PreviewScrollDown(usize),
    PreviewPageUp,
    PreviewPageDown,
    PreviewTop,
    PreviewBottom,
    ClosePreview,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    let follow_cursor = !matches!(
        msg,
        Message::EditorScrollUp(_)
            | Message::EditorScrollDown(_)
            | Message::PreviewScrollUp(_)
            | Message::PreviewScrollDown(_)
            | Message::PreviewPageUp
            | Message::PreviewPageDown
            | Message::PreviewTop
            | Message::PreviewBottom
            | Message::Redraw
    );

    match msg {
        Message::Command(command) => dispatch(&mut model, command),

        // Editor
        Message::EditorInsertChar(ch) => model.buffer.insert_char(ch),
        Message::EditorInsertStr(text) => model.buffer.insert_str(&text),
        Message::EditorDeleteBack => {
            model.buffer.delete_back();
        }
        Message::EditorDeleteForward => {
            model.buffer.delete_forward();
        }
        Message::EditorSplitLine => model.buffer.split_line(),
        Message::EditorMove(motion, extend) => model.buffer.apply_motion(motion, extend),
        Message::EditorMoveTo(line, col) => model.buffer.move_to(line, col),
        Message::EditorSelectTo(line, col) => model.buffer.select_to(line, col),
        Message::EditorScrollUp(n) => {
            model.scroll_editor(-isize::try_from(n).unwrap_or(isize::MAX));
        }
        Message::EditorScrollDown(n) => {
            model.scroll_editor(isize::try_from(n).unwrap_or(isize::MAX));
        }

        // Menu
        Message::MenuUp => {
            if let Some(Overlay::Menu { selected }) = &mut model.overlay {
                *selected = selected.saturating_sub(1);
            }
        }
        Message::MenuDown => {
            if let Some(Overlay::Menu { selected }) = &mut model.overlay {
                let max = Command::menu_items().len().saturating_sub(1);
                *selected = (*selected + 1).min(max);
            }
        }

        Message::ConfirmClear(confirmed) => {
            if model.overlay == Some(Overlay::ConfirmClear) {
                model.overlay = None;
                if confirmed {
                    model.buffer.clear_all();
                    model.scroll_offset = 0;
                }
            }
        }

        Message::PromptInput(input) => {
            if let Some(Overlay::Prompt(prompt)) = &mut model.overlay {
                prompt.input = input;
            }
        }
        // Prompt and dialog navigation touch the file system: handled in effects
        Message::PromptSubmit
        | Message::PickerActivate
        | Message::PickerParent
        | Message::PickerToggleFilter
        | Message::Redraw => {}

        Message::PickerUp => {
            if let Some(Overlay::OpenFile(picker)) = &mut model.overlay {
                picker.selected = picker.selected.saturating_sub(1);
            }
        }
        Message::PickerDown => {
            if let Some(Overlay::OpenFile(picker)) = &mut model.overlay {
                picker.selected = (picker.selected + 1).min(picker.entries.len().saturating_sub(1));
            }
        }

        // Font dialog
        Message::FontQuery(query) => {
            if let Some(Overlay::Font(dialog)) = &mut model.overlay {
                dialog.query = query;
                dialog.selected = 0;
            }
        }
        Message::FontUp => {
            if let Some(Overlay::Font(dialog)) = &mut model.overlay {
                dialog.selected = dialog.selected.saturating_sub(1);
            }
        }
        Message::FontDown => {
            if let Some(Overlay::Font(dialog)) = &mut model.overlay {
                let max = dialog.matches(&model.font_families).len().saturating_sub(1);
                dialog.selected = (dialog.selected + 1).min(max);
            }
        }
        Message::FontSizeStep(delta) => {
            if let Some(Overlay::Font(dialog)) = &mut model.overlay {
                dialog.size = model.font.with_size(dialog.size).step_size(delta).size();
            }
        }
        Message::FontApply => apply_font_dialog(&mut model),

        Message::CancelOverlay => model.overlay = None,

        // Print preview
        Message::PreviewScrollUp(n) => scroll_preview(&mut model, Scroll::Up(n)),
        Message::PreviewScrollDown(n) => scroll_preview(&mut model, Scroll::Down(n)),
        Message::PreviewPageUp => scroll_preview(&mut model, Scroll::PageUp),
        Message::PreviewPageDown => scroll_preview(&mut model, Scroll::PageDown),
        Message::PreviewTop => scroll_preview(&mut model, Scroll::Top),
        Message::PreviewBottom => scroll_preview(&mut model, Scroll::Bottom),
        Message::ClosePreview => model.preview = None,

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            if let Some(preview) = &mut model.preview {
                preview.resize(width, height);
            }
        }
    }

    if follow_cursor {
        model.ensure_cursor_visible();
    }
    model.sync_word_count();
    model
}

/// Apply the pure part of a command.
///
/// `Open` only lists a directory, which happens in effects.
fn dispatch(model: &mut Model, command: Command) {
    if matches!(model.overlay, Some(Overlay::Menu { .. })) {
        model.overlay = None;
    }

    match command {
        Command::Open => {}
        Command::Save => {
            model.overlay = Some(Overlay::Prompt(PathPrompt {
                purpose: PromptPurpose::Save,
                input: model.default_save_path(),
            }));
        }
        Command::GeneratePdf => {
            if model.buffer.is_blank() {
                model.show_toast(ToastLevel::Warning, EMPTY_PDF_WARNING);
            } else {
                model.overlay = Some(Overlay::Prompt(PathPrompt {
                    purpose: PromptPurpose::ExportPdf,
                    input: model.default_pdf_path(),
                }));
            }
        }
        Command::PrintPreview => {
            let (width, height) = model.terminal_size;
            model.preview = Some(PrintPreview::new(
                model.buffer.text(),
                model.font.clone(),
                width,
                height,
            ));
        }
        Command::Exit => model.should_quit = true,
        Command::Font => {
            let selected = model
                .font_families
                .iter()
                .position(|family| family.eq_ignore_ascii_case(model.font.family()))
                .unwrap_or(0);
            model.overlay = Some(Overlay::Font(FontDialog {
                query: String::new(),
                selected,
                size: model.font.size(),
            }));
        }
        Command::FontLarger => model.font = model.font.step_size(1),
        Command::FontSmaller => model.font = model.font.step_size(-1),
        Command::Bold | Command::Italic | Command::Underline => {
            if let Some(tag) = command.style_tag() {
                model.buffer.toggle_style(tag);
            }
        }
        Command::Clear => model.overlay = Some(Overlay::ConfirmClear),
        Command::SelectAll => model.buffer.select_all(),
        Command::Undo => {
            model.buffer.undo();
        }
        Command::Redo => {
            model.buffer.redo();
        }
        Command::Help => {
            model.overlay = if model.overlay == Some(Overlay::Help) {
                None
            } else {
                Some(Overlay::Help)
            };
        }
        Command::Menu => model.overlay = Some(Overlay::Menu { selected: 0 }),
    }
}

fn scroll_preview(model: &mut Model, how: Scroll) {
    if let Some(preview) = &mut model.preview {
        preview.viewport_mut().scroll(how);
    }
}

fn apply_font_dialog(model: &mut Model) {
    let applied = match &model.overlay {
        Some(Overlay::Font(dialog)) => {
            let family = dialog
                .chosen(&model.font_families)
                .map_or_else(|| model.font.family().to_string(), String::clone);
            Some(FontSettings::new(family, dialog.size))
        }
        _ => None,
    };
    if let Some(font) = applied {
        model.font = font;
        model.overlay = None;
        let message = format!("Font set to {}", model.font.label());
        model.show_toast(ToastLevel::Info, message);
    }
}
