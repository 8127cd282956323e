use std::path::{Path, PathBuf};

use crate::app::{
    App, Command, EMPTY_PDF_WARNING, FilePicker, Message, Model, Overlay, PromptPurpose,
    ToastLevel,
};
use crate::error::DocError;
use crate::files::{self, FileFilter};

/// Toast shown after a successful save.
pub const SAVED_MESSAGE: &str = "File saved successfully.";

impl App {
    /// Run the I/O half of a message after [`update`](super::update) has
    /// applied its pure half.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Command(Command::Open) => {
                let dir = model.start_dir();
                Self::show_directory(model, &dir, FileFilter::default());
            }
            Message::PickerActivate => Self::picker_activate(model),
            Message::PickerParent => {
                if let Some(Overlay::OpenFile(picker)) = &model.overlay {
                    let dir = picker.dir.parent().map(Path::to_path_buf);
                    let filter = picker.filter;
                    if let Some(dir) = dir {
                        Self::show_directory(model, &dir, filter);
                    }
                }
            }
            Message::PickerToggleFilter => {
                if let Some(Overlay::OpenFile(picker)) = &model.overlay {
                    let dir = picker.dir.clone();
                    let filter = picker.filter.toggled();
                    Self::show_directory(model, &dir, filter);
                }
            }
            Message::PromptSubmit => Self::submit_prompt(model),
            _ => {}
        }
        model.sync_word_count();
    }

    /// Load `path` into the buffer, replacing its contents.
    ///
    /// On failure the buffer is left as it was and an error toast is shown.
    pub(super) fn open_file(model: &mut Model, path: &Path) -> Result<(), DocError> {
        match files::read_text(path) {
            Ok(text) => {
                model.buffer.replace_all(&text);
                model.file_path = Some(path.to_path_buf());
                model.scroll_offset = 0;
                model.sync_word_count();
                tracing::info!(
                    path = %path.display(),
                    words = model.word_count,
                    "opened file"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "open failed");
                model.show_toast(ToastLevel::Error, format!("Open failed: {err}"));
                Err(err)
            }
        }
    }

    fn show_directory(model: &mut Model, dir: &Path, filter: FileFilter) {
        match files::list_directory(dir, filter) {
            Ok((dir, entries)) => {
                // Start on the first real entry rather than "..".
                let selected = usize::from(entries.len() > 1);
                model.overlay = Some(Overlay::OpenFile(FilePicker {
                    dir,
                    entries,
                    selected,
                    filter,
                }));
            }
            Err(err) => {
                tracing::error!(dir = %dir.display(), error = %err, "directory listing failed");
                model.show_toast(ToastLevel::Error, format!("Open failed: {err}"));
            }
        }
    }

    fn picker_activate(model: &mut Model) {
        let Some(Overlay::OpenFile(picker)) = &model.overlay else {
            return;
        };
        let Some(entry) = picker.selected_entry().cloned() else {
            return;
        };
        let filter = picker.filter;

        if entry.is_dir {
            Self::show_directory(model, &entry.path, filter);
        } else {
            model.overlay = None;
            let _ = Self::open_file(model, &entry.path);
        }
    }

    fn submit_prompt(model: &mut Model) {
        let prompt = match model.overlay.take() {
            Some(Overlay::Prompt(prompt)) => prompt,
            other => {
                model.overlay = other;
                return;
            }
        };

        let input = prompt.input.trim();
        if input.is_empty() {
            return;
        }
        let path = files::with_default_extension(
            Path::new(input),
            prompt.purpose.default_extension(),
        );

        match prompt.purpose {
            PromptPurpose::Save => Self::save_to(model, path),
            PromptPurpose::ExportPdf => Self::export_pdf(model, &path),
        }
    }

    fn save_to(model: &mut Model, path: PathBuf) {
        let text = model.buffer.text();
        match files::write_text(&path, &text) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = text.len(), "saved file");
                model.buffer.mark_clean();
                model.file_path = Some(path);
                model.show_toast(ToastLevel::Info, SAVED_MESSAGE);
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "save failed");
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
            }
        }
    }

    fn export_pdf(model: &mut Model, path: &Path) {
        match crate::pdf::export_to_file(path, &model.buffer.text(), &model.font) {
            Ok(_) => {
                model.show_toast(
                    ToastLevel::Info,
                    format!("PDF saved as {}", files::display_name(path)),
                );
            }
            Err(DocError::EmptyContent) => {
                model.show_toast(ToastLevel::Warning, EMPTY_PDF_WARNING);
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "PDF export failed");
                model.show_toast(ToastLevel::Error, format!("Export failed: {err}"));
            }
        }
    }
}
