//! Scroll window over a list of wrapped rows.
//!
//! Used by the print preview, whose rows are rewrapped whenever the
//! terminal width changes.

use std::ops::Range;

/// A scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up(usize),
    Down(usize),
    /// One window height back, keeping the top row visible.
    PageUp,
    /// One window height forward, keeping the bottom row visible.
    PageDown,
    Top,
    Bottom,
}

/// The visible slice of `total_rows` rows in a `width` x `height` area.
///
/// The offset never points past the last full window.
///
/// ```
/// use docman::ui::viewport::{Scroll, Viewport};
///
/// let mut vp = Viewport::new(80, 24, 100);
/// vp.scroll(Scroll::Down(10));
/// assert_eq!(vp.visible_range(), 10..34);
/// vp.scroll(Scroll::Bottom);
/// assert_eq!(vp.visible_range(), 76..100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_rows: usize,
}

impl Viewport {
    pub const fn new(width: u16, height: u16, total_rows: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_rows,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + usize::from(self.height)).min(self.total_rows);
        self.offset.min(end)..end
    }

    /// Position through the rows, 0 at the top and 100 once the last row is
    /// on screen.
    pub fn scroll_percent(&self) -> u8 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        let percent = self.offset.min(max) * 100 / max;
        u8::try_from(percent).unwrap_or(100)
    }

    pub fn scroll(&mut self, how: Scroll) {
        let page = usize::from(self.height).saturating_sub(1).max(1);
        let target = match how {
            Scroll::Up(n) => self.offset.saturating_sub(n),
            Scroll::Down(n) => self.offset.saturating_add(n),
            Scroll::PageUp => self.offset.saturating_sub(page),
            Scroll::PageDown => self.offset.saturating_add(page),
            Scroll::Top => 0,
            Scroll::Bottom => usize::MAX,
        };
        self.offset = target.min(self.max_offset());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Replace the row count after rewrapping.
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height as usize)
    }
}
