use std::ops::Range;

use ropey::Rope;

use super::tags::{StyleSet, StyleTag, StyleTags};

/// Maximum number of undo snapshots retained.
const HISTORY_LIMIT: usize = 500;

/// Line and byte column of the insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    /// Byte offset into the line, always on a char boundary.
    pub col: usize,
    /// Column that Up/Down try to return to.
    col_memory: usize,
}

impl Cursor {
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A cursor motion, optionally extending the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Step(Direction),
    LineStart,
    LineEnd,
    WordLeft,
    WordRight,
    BufferStart,
    BufferEnd,
    /// Move up by the given number of lines.
    PageUp(usize),
    /// Move down by the given number of lines.
    PageDown(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    Typing,
    Deleting,
    Other,
}

#[derive(Clone)]
struct Snapshot {
    rope: Rope,
    tags: StyleTags,
    cursor: Cursor,
}

/// A styled text buffer backed by a rope data structure.
///
/// Holds the text, the cursor and selection anchor, and the per-range style
/// tags. Tags are char-offset intervals that move with edits. Every text
/// mutation bumps [`EditorBuffer::revision`], which the shell uses as its
/// modification event.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    anchor: Option<Cursor>,
    tags: StyleTags,
    dirty: bool,
    revision: u64,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    last_edit: Option<EditKind>,
}

impl EditorBuffer {
    /// Buffer holding `text`, with `\r\n` and lone `\r` read as `\n`.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_newlines(text)),
            cursor: Cursor::new(),
            anchor: None,
            tags: StyleTags::new(),
            dirty: false,
            revision: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last_edit: None,
        }
    }

    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Unsaved text changes exist.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Counter bumped by every text modification.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Style tags applied to the buffer.
    pub const fn tags(&self) -> &StyleTags {
        &self.tags
    }

    /// Number of lines, counting an empty last line after a trailing `\n`.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Char offset of the first character of `line_idx`.
    pub fn line_start_char(&self, line_idx: usize) -> usize {
        self.rope.line_to_char(line_idx.min(self.line_count().saturating_sub(1)))
    }

    /// Text of `line_idx` without its line break.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        (line_idx < self.line_count()).then(|| {
            let mut line = self.rope.line(line_idx).to_string();
            if line.ends_with('\n') {
                line.pop();
            }
            line
        })
    }

    /// Byte length of `line_idx` without its line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Whether the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.rope.chars().all(char::is_whitespace)
    }

    /// Number of whitespace-delimited words in the buffer.
    pub fn word_count(&self) -> usize {
        crate::words::count_words_chars(self.rope.chars())
    }

    // --- Selection ---

    /// The selected char range, if a non-empty selection exists.
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.char_index(self.anchor?);
        let cursor = self.char_index(self.cursor);
        let range = anchor.min(cursor)..anchor.max(cursor);
        (!range.is_empty()).then_some(range)
    }

    /// Whether a non-empty selection exists.
    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Select the whole buffer, leaving the cursor at the end.
    pub fn select_all(&mut self) {
        self.anchor = Some(Cursor::new());
        self.move_to_end();
        self.last_edit = None;
    }

    /// Drop the selection, keeping the cursor where it is.
    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Tags at the start of the selection, or under the cursor.
    pub fn active_styles(&self) -> StyleSet {
        let offset = self
            .selection()
            .map_or_else(|| self.char_index(self.cursor), |range| range.start);
        self.tags.styles_at(offset)
    }

    // --- Styling ---

    /// Toggle `tag` over the current selection.
    ///
    /// Removes the tag when the whole selection already carries it, otherwise
    /// applies it to the whole selection. Returns `None` when nothing is
    /// selected, otherwise whether the tag is now applied. Text is unchanged.
    pub fn toggle_style(&mut self, tag: StyleTag) -> Option<bool> {
        let range = self.selection()?;
        self.checkpoint(EditKind::Other);
        Some(self.tags.toggle(tag, range))
    }

    // --- Editing ---

    /// Insert a character at the cursor position, replacing any selection.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.split_line();
            return;
        }
        self.checkpoint(if ch.is_whitespace() {
            EditKind::Other
        } else {
            EditKind::Typing
        });
        self.remove_selection();
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.tags.on_insert(char_idx, 1);
        self.cursor.set_col(self.cursor.col + ch.len_utf8());
        self.mark_modified();
    }

    /// Insert a string at the cursor position, replacing any selection.
    ///
    /// Carriage-return line endings are normalised to `\n`.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let text = normalize_newlines(s);
        self.checkpoint(EditKind::Other);
        self.remove_selection();
        let char_idx = self.cursor_char_idx();
        let inserted = text.chars().count();
        self.rope.insert(char_idx, &text);
        self.tags.on_insert(char_idx, inserted);
        self.cursor = self.cursor_at_char(char_idx + inserted);
        self.mark_modified();
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        self.checkpoint(EditKind::Other);
        self.remove_selection();
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.tags.on_insert(char_idx, 1);
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.mark_modified();
    }

    /// Delete the selection, or the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.anchor = None;
        let char_idx = self.cursor_char_idx();
        if char_idx == 0 {
            return false;
        }
        self.checkpoint(EditKind::Deleting);
        self.remove_chars(char_idx - 1..char_idx);
        true
    }

    /// Delete the selection, or the character at the cursor (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.anchor = None;
        let char_idx = self.cursor_char_idx();
        if char_idx >= self.len_chars() {
            return false;
        }
        self.checkpoint(EditKind::Deleting);
        self.remove_chars(char_idx..char_idx + 1);
        true
    }

    /// Delete the selected text.
    ///
    /// Returns `true` if a non-empty selection was removed.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        self.checkpoint(EditKind::Other);
        self.remove_selection();
        true
    }

    /// Replace the whole document, e.g. after opening a file.
    ///
    /// Tags and undo history are discarded and the buffer is clean.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_newlines(text));
        self.tags.clear();
        self.cursor = Cursor::new();
        self.anchor = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_edit = None;
        self.revision += 1;
        self.dirty = false;
    }

    /// Delete all content and tags. Undoable.
    pub fn clear_all(&mut self) {
        self.checkpoint(EditKind::Other);
        self.rope = Rope::new();
        self.tags.clear();
        self.cursor = Cursor::new();
        self.anchor = None;
        self.mark_modified();
    }

    // --- History ---

    /// Whether there is an edit to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is an undone edit to reapply.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Revert the last edit or style toggle.
    ///
    /// Returns `true` if anything was undone.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.redo_stack.push(current);
        self.restore(snapshot);
        true
    }

    /// Reapply the last undone edit.
    ///
    /// Returns `true` if anything was redone.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.undo_stack.push(current);
        self.restore(snapshot);
        true
    }

    // --- Movement ---

    /// Apply a motion, extending the selection when `extend` is set.
    pub fn apply_motion(&mut self, motion: Motion, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        match motion {
            Motion::Step(direction) => self.move_cursor(direction),
            Motion::LineStart => self.move_home(),
            Motion::LineEnd => self.move_end(),
            Motion::WordLeft => self.move_word_left(),
            Motion::WordRight => self.move_word_right(),
            Motion::BufferStart => self.move_to_start(),
            Motion::BufferEnd => self.move_to_end(),
            Motion::PageUp(lines) => {
                for _ in 0..lines {
                    self.move_up();
                }
            }
            Motion::PageDown(lines) => {
                for _ in 0..lines {
                    self.move_down();
                }
            }
        }
        self.last_edit = None;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Jump to the start of the word before the cursor.
    ///
    /// At a line start this moves to the end of the previous line.
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.move_end();
            }
            return;
        }
        let line_start = self.line_start_char(self.cursor.line);
        let mut idx = self.cursor_char_idx();
        while idx > line_start && !is_word_char(self.rope.char(idx - 1)) {
            idx -= 1;
        }
        while idx > line_start && is_word_char(self.rope.char(idx - 1)) {
            idx -= 1;
        }
        self.cursor = self.cursor_at_char(idx);
    }

    /// Jump past the current word and the gap after it.
    ///
    /// At a line end this moves to the start of the next line.
    pub fn move_word_right(&mut self) {
        if self.cursor.col >= self.line_len(self.cursor.line) {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.move_home();
            }
            return;
        }
        let line_end = self.line_start_char(self.cursor.line)
            + self.rope.line(self.cursor.line).len_chars();
        let mut idx = self.cursor_char_idx();
        let on_text = |idx: usize| idx < line_end && self.rope.char(idx) != '\n';
        while on_text(idx) && is_word_char(self.rope.char(idx)) {
            idx += 1;
        }
        while on_text(idx) && !is_word_char(self.rope.char(idx)) {
            idx += 1;
        }
        self.cursor = self.cursor_at_char(idx);
    }

    /// Place the cursor, dropping the selection. Out-of-range positions clamp.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.anchor = None;
        self.place_cursor(line, col);
    }

    /// Place the cursor, extending the selection from the current anchor.
    pub fn select_to(&mut self, line: usize, col: usize) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
        self.place_cursor(line, col);
    }

    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.cursor_at_char(self.len_chars());
    }

    /// Char offset of a cursor position.
    pub fn char_index(&self, cursor: Cursor) -> usize {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        let col = cursor.col.min(self.line_len(line));
        self.rope.byte_to_char(self.rope.line_to_byte(line) + col)
    }

    /// Cursor position of a char offset (clamped to the buffer).
    pub fn cursor_at_char(&self, char_idx: usize) -> Cursor {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        let col = self.rope.char_to_byte(char_idx) - self.rope.line_to_byte(line);
        Cursor::at(line, col)
    }

    fn cursor_char_idx(&self) -> usize {
        self.char_index(self.cursor)
    }

    fn place_cursor(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let line_text = self.line_at(self.cursor.line).unwrap_or_default();
        let mut col = col.min(line_text.len());
        while !line_text.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor.set_col(col);
        self.last_edit = None;
    }

    fn remove_selection(&mut self) {
        let selection = self.selection();
        self.anchor = None;
        if let Some(range) = selection {
            self.remove_chars(range);
        }
    }

    /// Remove a char range, leaving the cursor where it started.
    fn remove_chars(&mut self, range: Range<usize>) {
        self.rope.remove(range.clone());
        self.tags.on_delete(range.clone());
        self.cursor = self.cursor_at_char(range.start);
        self.mark_modified();
    }

    const fn mark_modified(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            rope: self.rope.clone(),
            tags: self.tags.clone(),
            cursor: self.cursor,
        }
    }

    /// Swap in a history snapshot. Only a text change marks the buffer dirty.
    fn restore(&mut self, snapshot: Snapshot) {
        let text_changed = self.rope != snapshot.rope;
        self.rope = snapshot.rope;
        self.tags = snapshot.tags;
        self.anchor = None;
        self.last_edit = None;
        self.place_cursor(snapshot.cursor.line, snapshot.cursor.col);
        self.revision += 1;
        if text_changed {
            self.dirty = true;
        }
    }

    /// Record an undo point unless this edit continues the previous one.
    fn checkpoint(&mut self, kind: EditKind) {
        let continues = kind != EditKind::Other && self.last_edit == Some(kind);
        self.last_edit = Some(kind);
        if continues {
            return;
        }
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > HISTORY_LIMIT {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    // Stepping over a line break lands on the neighbouring line.
    fn move_left(&mut self) {
        let idx = self.cursor_char_idx();
        if idx > 0 {
            self.cursor = self.cursor_at_char(idx - 1);
        }
    }

    fn move_right(&mut self) {
        let idx = self.cursor_char_idx();
        if idx < self.len_chars() {
            self.cursor = self.cursor_at_char(idx + 1);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.clamp_to_memory();
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.clamp_to_memory();
        }
    }

    fn clamp_to_memory(&mut self) {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let mut col = self.cursor.col_memory.min(line.len());
        while !line.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor.col = col;
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("chars", &self.rope.len_chars())
            .field("cursor", &self.cursor)
            .field("anchor", &self.anchor)
            .field("dirty", &self.dirty)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
