// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Docman
//!
//! A single-window terminal text editor with light formatting.
//!
//! Docman edits plain text and adds:
//! - Bold, italic and underline styling over selections
//! - A live word count in the status bar
//! - A document font family and size
//! - Print preview and PDF export
//!
//! ## Architecture
//!
//! Docman uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop, state and command table
//! - [`editor`]: Text buffer, cursor, selection and style tags
//! - [`ui`]: Terminal UI components
//! - [`pdf`]: PDF layout and export
//! - [`files`]: Text file access and directory listing
//! - [`fonts`]: Font family enumeration
//! - [`words`]: Word counting
//! - [`wrap`]: Word wrapping shared by the editor, preview and PDF

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod files;
pub mod fonts;
pub mod pdf;
pub mod ui;
pub mod words;
pub mod wrap;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Command, Message, Model};
    pub use crate::config::FontSettings;
    pub use crate::editor::EditorBuffer;
    pub use crate::error::DocError;
    pub use crate::ui::viewport::Viewport;
}
