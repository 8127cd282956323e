use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;

use crate::app::{Command, Message, Model, ToastLevel, update};
use crate::editor::{EditorBuffer, StyleTag};

use super::layout::visual_rows;
use super::toolbar::{ToolbarButton, toolbar_items};
use super::{CLEAR_QUESTION, editor_row_line, render, status_text, style};

fn create_test_model(text: &str) -> Model {
    Model::new(EditorBuffer::from_text(text), (80, 24))
}

fn draw(model: &Model) -> Terminal<TestBackend> {
    let (width, height) = model.terminal_size;
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_main_window_layout() {
    let model = create_test_model("hello world");
    let terminal = draw(&model);

    assert!(row_text(&terminal, 0).contains("File"));
    assert!(row_text(&terminal, 0).contains("Format"));
    assert!(row_text(&terminal, 1).contains("Arial"));
    assert!(row_text(&terminal, 1).contains("12pt"));
    assert!(row_text(&terminal, 2).starts_with(" hello world"));
    assert!(row_text(&terminal, 23).contains("Words: 2"));
}

#[test]
fn test_status_text() {
    let model = create_test_model("one two three");
    assert_eq!(
        status_text(&model),
        " Words: 3 \u{2502} untitled \u{2502} Ln 1, Col 1 \u{2502} Arial 12pt  F1 help  F10 menu"
    );

    let mut model = model.with_file_path(Some("notes/draft.txt".into()));
    model.buffer.move_to_end();
    model.buffer.insert_char('!');
    let text = status_text(&model);
    assert!(text.contains("draft.txt [modified]"));
    assert!(text.contains("Ln 1, Col 15"));
}

#[test]
fn test_word_count_refreshes_on_screen() {
    let model = create_test_model("");
    let model = update(model, Message::EditorInsertStr("a b c d".to_string()));
    let terminal = draw(&model);
    assert!(row_text(&terminal, 23).contains("Words: 4"));
}

#[test]
fn test_tagged_text_is_styled() {
    let model = create_test_model("hello world");
    let model = update(model, Message::EditorMoveTo(0, 6));
    let model = update(model, Message::EditorSelectTo(0, 11));
    let model = update(model, Message::Command(Command::Bold));
    let model = update(model, Message::Command(Command::Italic));
    let model = update(model, Message::EditorMoveTo(0, 0));
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();

    // Editor text starts at column 1 of row 2
    let plain = &buffer[(2, 2)];
    assert!(!plain.modifier.contains(Modifier::BOLD));
    let styled = &buffer[(7, 2)];
    assert!(styled.modifier.contains(Modifier::BOLD));
    assert!(styled.modifier.contains(Modifier::ITALIC));
    assert!(!styled.modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_selection_and_cursor_are_highlighted() {
    let model = create_test_model("hello world");
    let model = update(model, Message::EditorMoveTo(0, 0));
    let model = update(model, Message::EditorSelectTo(0, 3));
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(1, 2)].bg, style::SELECTION_BG);
    assert_eq!(buffer[(3, 2)].bg, style::SELECTION_BG);
    // Cursor sits on the first unselected character
    assert_eq!(buffer[(4, 2)].bg, style::cursor_style().bg.unwrap());
    assert_ne!(buffer[(5, 2)].bg, style::SELECTION_BG);
}

#[test]
fn test_toolbar_shows_active_styles() {
    let model = create_test_model("hello");
    let model = update(model, Message::Command(Command::SelectAll));
    let model = update(model, Message::Command(Command::Underline));
    let active = model.buffer.active_styles();
    assert!(active.underline);
    assert!(!active.bold);

    let terminal = draw(&model);
    let items = toolbar_items(model.layout().toolbar, &model.font);
    let column = |tag| {
        items
            .iter()
            .find(|item| item.button == Some(ToolbarButton::Style(tag)))
            .map(|item| item.rect.x + 1)
            .unwrap()
    };
    let buffer = terminal.backend().buffer();
    let underline = &buffer[(column(StyleTag::Underline), 1)];
    assert_eq!(underline.symbol(), "U");
    assert_eq!(underline.bg, style::button_style(true).bg.unwrap());
    assert_eq!(
        buffer[(column(StyleTag::Bold), 1)].bg,
        style::button_style(false).bg.unwrap()
    );
}

#[test]
fn test_long_lines_are_soft_wrapped() {
    let model = Model::new(
        EditorBuffer::from_text("alpha beta gamma delta epsilon"),
        (20, 10),
    );
    let terminal = draw(&model);
    assert_eq!(row_text(&terminal, 2).trim_end(), " alpha beta gamma");
    assert_eq!(row_text(&terminal, 3).trim_end(), " delta epsilon");
}

#[test]
fn test_tabs_render_as_spaces() {
    let buffer = EditorBuffer::from_text("a\tb");
    let rows = visual_rows(&buffer, 40);
    let line = editor_row_line(&buffer, &rows[0]);
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(text, "a b");
}

#[test]
fn test_cursor_at_line_end_gets_a_cell() {
    let mut buffer = EditorBuffer::from_text("ab");
    buffer.move_to_end();
    let rows = visual_rows(&buffer, 40);
    let line = editor_row_line(&buffer, &rows[0]);
    let last = line.spans.last().unwrap();
    assert_eq!(last.content, " ");
    assert_eq!(last.style, style::cursor_style());
}

#[test]
fn test_toast_row_above_status() {
    let mut model = create_test_model("x");
    model.show_toast(ToastLevel::Warning, "No content to generate PDF.");
    let terminal = draw(&model);
    assert!(row_text(&terminal, 22).starts_with("[warn] No content to generate PDF."));
    assert!(row_text(&terminal, 23).contains("Words: 1"));
}

#[test]
fn test_confirm_clear_dialog() {
    let model = update(create_test_model("x"), Message::Command(Command::Clear));
    let terminal = draw(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains(CLEAR_QUESTION));
    assert!(screen.contains("[y] Yes"));
}

#[test]
fn test_menu_lists_commands_with_shortcuts() {
    let model = update(create_test_model("x"), Message::Command(Command::Menu));
    let terminal = draw(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("Generate PDF..."));
    assert!(screen.contains("Ctrl+E"));
    assert!(screen.contains("Underline"));
}

#[test]
fn test_help_lists_shortcuts() {
    let model = update(create_test_model("x"), Message::Command(Command::Help));
    let terminal = draw(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Ctrl+P"));
    assert!(screen.contains("Print Preview"));
}

#[test]
fn test_prompt_shows_default_path() {
    let model = update(
        create_test_model("x"),
        Message::Command(Command::GeneratePdf),
    );
    let terminal = draw(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("Generate PDF"));
    assert!(screen.contains("File: document.pdf"));
}

#[test]
fn test_font_dialog_lists_families() {
    let model = update(create_test_model("x"), Message::Command(Command::Font));
    let model = update(model, Message::FontSizeStep(3));
    let terminal = draw(&model);
    let screen = screen_text(&terminal);
    assert!(screen.contains("> Arial"));
    assert!(screen.contains("Courier"));
    assert!(screen.contains("Times"));
    assert!(screen.contains("15pt"));
}

#[test]
fn test_print_preview_is_full_screen() {
    let model = create_test_model("first line\nsecond line");
    let model = update(model, Message::Command(Command::FontLarger));
    let model = update(model, Message::Command(Command::PrintPreview));
    let terminal = draw(&model);

    assert!(row_text(&terminal, 0).contains("Print Preview \u{b7} Arial 13pt"));
    assert!(row_text(&terminal, 1).contains("first line"));
    assert!(row_text(&terminal, 2).contains("second line"));
    assert!(!screen_text(&terminal).contains("Words:"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    for (w, h) in [(1, 1), (5, 3), (10, 2), (80, 1)] {
        let mut model = Model::new(EditorBuffer::from_text("hello world"), (w, h));
        model.buffer.select_all();
        model.buffer.toggle_style(StyleTag::Bold);
        model.show_toast(ToastLevel::Info, "hi");
        let _ = draw(&model);
        let model = update(model, Message::Command(Command::Menu));
        let _ = draw(&model);
        let model = update(model, Message::Command(Command::PrintPreview));
        let _ = draw(&model);
    }
}
