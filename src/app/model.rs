use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::FontSettings;
use crate::editor::EditorBuffer;
use crate::files::{DirEntry, FileFilter};
use crate::fonts::filter_families;
use crate::ui::layout::{ScreenLayout, VisualRow, cursor_row, max_scroll, scroll_to_row, visual_rows};
use crate::ui::preview::PrintPreview;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// What a path prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Save,
    ExportPdf,
}

impl PromptPurpose {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Save => "Save As",
            Self::ExportPdf => "Generate PDF",
        }
    }

    /// Extension appended when the entered path has none.
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Save => "txt",
            Self::ExportPdf => "pdf",
        }
    }
}

/// A single-line destination path prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub purpose: PromptPurpose,
    pub input: String,
}

/// State of the open-file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePicker {
    pub dir: PathBuf,
    pub entries: Vec<DirEntry>,
    pub selected: usize,
    pub filter: FileFilter,
}

impl FilePicker {
    pub fn selected_entry(&self) -> Option<&DirEntry> {
        self.entries.get(self.selected)
    }
}

/// State of the font dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDialog {
    /// Case-insensitive substring filter over family names.
    pub query: String,
    /// Index into the filtered family list.
    pub selected: usize,
    pub size: u16,
}

impl FontDialog {
    /// Families passing the current filter.
    pub fn matches<'a>(&self, families: &'a [String]) -> Vec<&'a String> {
        filter_families(families, &self.query)
    }

    /// Family under the selection, if any family matches.
    pub fn chosen<'a>(&self, families: &'a [String]) -> Option<&'a String> {
        let matches = self.matches(families);
        matches
            .get(self.selected.min(matches.len().saturating_sub(1)))
            .copied()
    }
}

/// A modal dialog drawn over the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Menu { selected: usize },
    ConfirmClear,
    Prompt(PathPrompt),
    OpenFile(FilePicker),
    Font(FontDialog),
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The document being edited
    pub buffer: EditorBuffer,
    /// Base font for the whole document
    pub font: FontSettings,
    /// Families offered by the font dialog
    pub font_families: Vec<String>,
    /// Where the document was last opened from or saved to
    pub file_path: Option<PathBuf>,
    /// First visible editor row (soft-wrapped rows, not lines)
    pub scroll_offset: usize,
    /// Terminal width and height
    pub terminal_size: (u16, u16),
    /// Cached word count of the buffer
    pub word_count: usize,
    counted_revision: Option<u64>,
    /// Active modal dialog
    pub overlay: Option<Overlay>,
    /// Open print preview window
    pub preview: Option<PrintPreview>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("font", &self.font)
            .field("word_count", &self.word_count)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model around `buffer` with default settings.
    pub fn new(buffer: EditorBuffer, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            buffer,
            font: FontSettings::default(),
            font_families: crate::fonts::with_core_families(Vec::new()),
            file_path: None,
            scroll_offset: 0,
            terminal_size,
            word_count: 0,
            counted_revision: None,
            overlay: None,
            preview: None,
            toast: None,
            should_quit: false,
        };
        model.sync_word_count();
        model
    }

    /// Set the file the buffer was loaded from.
    #[must_use]
    pub fn with_file_path(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Set the families offered by the font dialog.
    #[must_use]
    pub fn with_font_families(mut self, families: Vec<String>) -> Self {
        self.font_families = families;
        self
    }

    /// Recount words if the buffer changed since the last count.
    ///
    /// Returns `true` when a recount happened.
    pub fn sync_word_count(&mut self) -> bool {
        let revision = self.buffer.revision();
        if self.counted_revision == Some(revision) {
            return false;
        }
        self.word_count = self.buffer.word_count();
        self.counted_revision = Some(revision);
        true
    }

    /// Current screen regions.
    pub fn layout(&self) -> ScreenLayout {
        let (width, height) = self.terminal_size;
        ScreenLayout::new(Rect::new(0, 0, width, height), self.toast.is_some())
    }

    /// The buffer soft-wrapped to the editor pane.
    pub fn editor_rows(&self) -> Vec<VisualRow> {
        visual_rows(&self.buffer, self.layout().editor_text().width)
    }

    /// Scroll the editor so the cursor row is visible.
    pub fn ensure_cursor_visible(&mut self) {
        let rows = self.editor_rows();
        let row = cursor_row(&rows, self.buffer.cursor());
        let height = self.layout().editor.height;
        let offset = self.scroll_offset.min(max_scroll(rows.len(), height));
        self.scroll_offset = scroll_to_row(offset, row, height);
    }

    /// Scroll the editor by `delta` rows, staying inside the document.
    pub fn scroll_editor(&mut self, delta: isize) {
        let rows = self.editor_rows().len();
        let max = max_scroll(rows, self.layout().editor.height);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
    }

    /// File name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map_or_else(|| "untitled".to_string(), crate::files::display_name)
    }

    /// Prefilled destination for Save.
    pub fn default_save_path(&self) -> String {
        self.file_path.as_deref().map_or_else(
            || "untitled.txt".to_string(),
            |path| path.display().to_string(),
        )
    }

    /// Prefilled destination for Generate PDF.
    pub fn default_pdf_path(&self) -> String {
        self.file_path.as_deref().map_or_else(
            || "document.pdf".to_string(),
            |path| path.with_extension("pdf").display().to_string(),
        )
    }

    /// Directory the open dialog starts in.
    pub fn start_dir(&self) -> PathBuf {
        self.file_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorBuffer::empty(), (80, 24))
    }
}
