//! Styled text editing.
//!
//! Provides a rope-backed text buffer with cursor and selection management
//! plus the per-range style tags layered over it.

mod buffer;
mod tags;

pub use buffer::{Cursor, Direction, EditorBuffer, Motion};
pub use tags::{StyleSet, StyleTag, StyleTags};
