//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions and soft-wrapped editor rows
//! - [`toolbar`]: Font selector, size stepper and style buttons
//! - [`preview`]: The print preview window
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Theming and colors

pub mod layout;
pub mod preview;
pub mod style;
pub mod toolbar;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use overlays::{CLEAR_QUESTION, menu_rect};
pub use render::{editor_row_line, render};
pub use status::status_text;

#[cfg(test)]
mod tests;
