use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Command, Message, Model, Overlay};
use crate::editor::{Direction, Motion, StyleTag};
use crate::ui::layout::position_at;
use crate::ui::toolbar::{ToolbarButton, button_at};

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) => Self::handle_paste(text, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.preview.is_some() {
            return preview_key(key);
        }

        match &model.overlay {
            Some(Overlay::Help) => Some(Message::CancelOverlay),
            Some(Overlay::Menu { selected }) => menu_key(key, *selected),
            Some(Overlay::ConfirmClear) => confirm_key(key),
            Some(Overlay::Prompt(prompt)) => {
                text_field_key(key, &prompt.input, Message::PromptInput, Message::PromptSubmit)
            }
            Some(Overlay::OpenFile(_)) => picker_key(key),
            Some(Overlay::Font(dialog)) => font_key(key, &dialog.query),
            None => editor_key(key, model),
        }
    }

    pub(super) fn handle_paste(text: &str, model: &Model) -> Option<Message> {
        if model.preview.is_some() {
            return None;
        }
        let single_line = || text.replace(['\r', '\n'], "");
        match &model.overlay {
            Some(Overlay::Prompt(prompt)) => {
                Some(Message::PromptInput(format!("{}{}", prompt.input, single_line())))
            }
            Some(Overlay::Font(dialog)) => {
                Some(Message::FontQuery(format!("{}{}", dialog.query, single_line())))
            }
            Some(_) => None,
            None if text.is_empty() => None,
            None => Some(Message::EditorInsertStr(text.to_string())),
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.preview.is_some() {
            return match mouse.kind {
                MouseEventKind::ScrollDown => Some(Message::PreviewScrollDown(WHEEL_STEP)),
                MouseEventKind::ScrollUp => Some(Message::PreviewScrollUp(WHEEL_STEP)),
                _ => None,
            };
        }

        let pos = Position::new(mouse.column, mouse.row);
        if let Some(overlay) = &model.overlay {
            return overlay_mouse(overlay, mouse.kind, pos, model);
        }

        let layout = model.layout();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if layout.menu_bar.contains(pos) => {
                Some(Message::Command(Command::Menu))
            }
            MouseEventKind::Down(MouseButton::Left) if layout.toolbar.contains(pos) => {
                button_at(layout.toolbar, &model.font, pos.x, pos.y)
                    .map(|button| Message::Command(command_for_button(button)))
            }
            MouseEventKind::Down(MouseButton::Left) => editor_position(model, pos, false)
                .map(|(line, col)| Message::EditorMoveTo(line, col)),
            MouseEventKind::Drag(MouseButton::Left) => editor_position(model, pos, true)
                .map(|(line, col)| Message::EditorSelectTo(line, col)),
            MouseEventKind::ScrollDown => Some(Message::EditorScrollDown(WHEEL_STEP)),
            MouseEventKind::ScrollUp => Some(Message::EditorScrollUp(WHEEL_STEP)),
            _ => None,
        }
    }
}

/// Command bound to a key outside of dialogs.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::F(1) => Some(Command::Help),
        KeyCode::F(10) => Some(Command::Menu),
        KeyCode::Char('=' | '+') if alt && !ctrl => Some(Command::FontLarger),
        KeyCode::Char('-') if alt && !ctrl => Some(Command::FontSmaller),
        KeyCode::Char(c) if ctrl && !alt => match c.to_ascii_lowercase() {
            'o' => Some(Command::Open),
            's' => Some(Command::Save),
            'e' => Some(Command::GeneratePdf),
            'p' => Some(Command::PrintPreview),
            'q' => Some(Command::Exit),
            'f' => Some(Command::Font),
            'b' => Some(Command::Bold),
            't' => Some(Command::Italic),
            'u' => Some(Command::Underline),
            'l' => Some(Command::Clear),
            'a' => Some(Command::SelectAll),
            'z' => Some(Command::Undo),
            'y' => Some(Command::Redo),
            _ => None,
        },
        _ => None,
    }
}

const fn command_for_button(button: ToolbarButton) -> Command {
    match button {
        ToolbarButton::Font => Command::Font,
        ToolbarButton::SizeDown => Command::FontSmaller,
        ToolbarButton::SizeUp => Command::FontLarger,
        ToolbarButton::Style(StyleTag::Bold) => Command::Bold,
        ToolbarButton::Style(StyleTag::Italic) => Command::Italic,
        ToolbarButton::Style(StyleTag::Underline) => Command::Underline,
        ToolbarButton::Clear => Command::Clear,
    }
}

fn editor_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if let Some(command) = command_for_key(key) {
        return Some(Message::Command(command));
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let page = usize::from(model.layout().editor.height.max(1));

    let motion = match key.code {
        KeyCode::Left if ctrl => Some(Motion::WordLeft),
        KeyCode::Right if ctrl => Some(Motion::WordRight),
        KeyCode::Left => Some(Motion::Step(Direction::Left)),
        KeyCode::Right => Some(Motion::Step(Direction::Right)),
        KeyCode::Up => Some(Motion::Step(Direction::Up)),
        KeyCode::Down => Some(Motion::Step(Direction::Down)),
        KeyCode::Home if ctrl => Some(Motion::BufferStart),
        KeyCode::End if ctrl => Some(Motion::BufferEnd),
        KeyCode::Home => Some(Motion::LineStart),
        KeyCode::End => Some(Motion::LineEnd),
        KeyCode::PageUp => Some(Motion::PageUp(page)),
        KeyCode::PageDown => Some(Motion::PageDown(page)),
        _ => None,
    };
    if let Some(motion) = motion {
        return Some(Message::EditorMove(motion, shift));
    }

    match key.code {
        KeyCode::Enter => Some(Message::EditorSplitLine),
        KeyCode::Tab => Some(Message::EditorInsertChar('\t')),
        KeyCode::Backspace => Some(Message::EditorDeleteBack),
        KeyCode::Delete => Some(Message::EditorDeleteForward),
        KeyCode::Char(c) if !ctrl && !alt => Some(Message::EditorInsertChar(c)),
        _ => None,
    }
}

fn preview_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::ClosePreview),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::PreviewScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::PreviewScrollUp(1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::PreviewPageDown),
        KeyCode::PageUp => Some(Message::PreviewPageUp),
        KeyCode::Home => Some(Message::PreviewTop),
        KeyCode::End => Some(Message::PreviewBottom),
        _ => None,
    }
}

fn menu_key(key: KeyEvent, selected: usize) -> Option<Message> {
    match key.code {
        KeyCode::Up => Some(Message::MenuUp),
        KeyCode::Down => Some(Message::MenuDown),
        KeyCode::Enter => Command::menu_items()
            .get(selected)
            .map(|command| Message::Command(*command)),
        KeyCode::Esc | KeyCode::F(10) => Some(Message::CancelOverlay),
        _ => None,
    }
}

fn confirm_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(Message::ConfirmClear(true)),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::ConfirmClear(false)),
        _ => None,
    }
}

fn text_field_key(
    key: KeyEvent,
    current: &str,
    edit: fn(String) -> Message,
    submit: Message,
) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::CancelOverlay),
        KeyCode::Enter => Some(submit),
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop();
            Some(edit(next))
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            let mut next = current.to_string();
            next.push(c);
            Some(edit(next))
        }
        _ => None,
    }
}

fn picker_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up => Some(Message::PickerUp),
        KeyCode::Down => Some(Message::PickerDown),
        KeyCode::Enter | KeyCode::Right => Some(Message::PickerActivate),
        KeyCode::Backspace | KeyCode::Left => Some(Message::PickerParent),
        KeyCode::Tab => Some(Message::PickerToggleFilter),
        KeyCode::Esc => Some(Message::CancelOverlay),
        _ => None,
    }
}

fn font_key(key: KeyEvent, query: &str) -> Option<Message> {
    match key.code {
        KeyCode::Up => Some(Message::FontUp),
        KeyCode::Down => Some(Message::FontDown),
        KeyCode::Left => Some(Message::FontSizeStep(-1)),
        KeyCode::Right => Some(Message::FontSizeStep(1)),
        _ => text_field_key(key, query, Message::FontQuery, Message::FontApply),
    }
}

fn overlay_mouse(
    overlay: &Overlay,
    kind: MouseEventKind,
    pos: Position,
    model: &Model,
) -> Option<Message> {
    match (overlay, kind) {
        (Overlay::Menu { .. }, MouseEventKind::Down(MouseButton::Left)) => {
            let items = Command::menu_items();
            let popup = crate::ui::menu_rect(screen_area(model), items.len());
            if !popup.contains(pos) {
                return Some(Message::CancelOverlay);
            }
            let idx = usize::from(pos.y.checked_sub(popup.y + 1)?);
            items.get(idx).map(|command| Message::Command(*command))
        }
        (Overlay::Menu { .. }, MouseEventKind::ScrollDown) => Some(Message::MenuDown),
        (Overlay::Menu { .. }, MouseEventKind::ScrollUp) => Some(Message::MenuUp),
        (Overlay::OpenFile(_), MouseEventKind::ScrollDown) => Some(Message::PickerDown),
        (Overlay::OpenFile(_), MouseEventKind::ScrollUp) => Some(Message::PickerUp),
        (Overlay::Font(_), MouseEventKind::ScrollDown) => Some(Message::FontDown),
        (Overlay::Font(_), MouseEventKind::ScrollUp) => Some(Message::FontUp),
        _ => None,
    }
}

fn screen_area(model: &Model) -> Rect {
    let (width, height) = model.terminal_size;
    Rect::new(0, 0, width, height)
}

/// Buffer position under a screen cell of the editor.
///
/// With `clamp`, rows above or below the pane map to its first or last row,
/// so a drag past the edge keeps selecting.
fn editor_position(model: &Model, pos: Position, clamp: bool) -> Option<(usize, usize)> {
    let layout = model.layout();
    let text = layout.editor_text();
    if text.height == 0 {
        return None;
    }
    let bottom = text.y + text.height - 1;
    let row = if clamp {
        pos.y.clamp(text.y, bottom)
    } else if layout.editor.contains(pos) {
        pos.y
    } else {
        return None;
    };

    let rows = model.editor_rows();
    let row_idx = model.scroll_offset + usize::from(row - text.y);
    position_at(&rows, &model.buffer, row_idx, pos.x.saturating_sub(text.x))
}
