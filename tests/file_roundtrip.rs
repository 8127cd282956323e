use docman::editor::EditorBuffer;
use docman::error::DocError;
use docman::files::{read_text, with_default_extension, write_text};

#[test]
fn test_edited_buffer_survives_save_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("letter.txt");

    let mut buffer = EditorBuffer::from_text("Dear team,\n");
    buffer.move_to_end();
    buffer.insert_str("thanks for\tall of it.\n\u{e9}t\u{e9}");
    write_text(&path, &buffer.text()).unwrap();
    buffer.mark_clean();

    let mut reopened = EditorBuffer::empty();
    reopened.replace_all(&read_text(&path).unwrap());
    assert_eq!(reopened.text(), buffer.text());
    assert_eq!(reopened.word_count(), buffer.word_count());
    assert_eq!(reopened.word_count(), 8);
    assert!(!reopened.is_dirty());
}

#[test]
fn test_windows_line_endings_are_normalised_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    std::fs::write(&path, "one\r\ntwo\r\n").unwrap();

    let text = read_text(&path).unwrap();
    assert_eq!(text, "one\ntwo\n");
    assert_eq!(EditorBuffer::from_text(&text).line_count(), 3);
}

#[test]
fn test_style_tags_are_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styled.txt");

    let mut buffer = EditorBuffer::from_text("plain words");
    buffer.select_all();
    buffer.toggle_style(docman::editor::StyleTag::Bold);
    write_text(&path, &buffer.text()).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"plain words");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = read_text(&path).unwrap_err();
    assert!(matches!(&err, DocError::Read { path: p, .. } if p == &path));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_default_extension_is_only_added_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let bare = with_default_extension(&dir.path().join("draft"), "txt");
    let kept = with_default_extension(&dir.path().join("draft.md"), "txt");

    write_text(&bare, "x").unwrap();
    assert!(dir.path().join("draft.txt").exists());
    assert!(kept.ends_with("draft.md"));
}
