//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod commands;
mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use commands::{Command, MenuGroup};
pub use model::{
    FilePicker, FontDialog, Model, Overlay, PathPrompt, PromptPurpose, ToastLevel,
};
pub use update::{EMPTY_PDF_WARNING, Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    scan_system_fonts: bool,
}

impl App {
    /// Create a new application, optionally opening `file_path` at startup.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            scan_system_fonts: true,
        }
    }

    /// Enable or disable the system font scan for the font dialog.
    ///
    /// Without it the dialog only offers the built-in PDF families.
    #[must_use]
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.scan_system_fonts = enabled;
        self
    }
}
