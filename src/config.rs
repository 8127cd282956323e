//! Per-document settings: base font and PDF page geometry.
//!
//! Nothing here is persisted. Every launch starts from the defaults.

use std::ops::RangeInclusive;

/// Family used when nothing else has been chosen.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
/// Base font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 12;
/// Sizes offered by the size selector.
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 8..=39;

/// Base font applied uniformly to the whole buffer.
///
/// Per-range style tags are layered on top of this and never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSettings {
    family: String,
    size: u16,
}

impl FontSettings {
    /// Create settings, clamping the size into [`FONT_SIZE_RANGE`].
    ///
    /// A blank family name falls back to [`DEFAULT_FONT_FAMILY`].
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        let family = family.into();
        let family = if family.trim().is_empty() {
            DEFAULT_FONT_FAMILY.to_string()
        } else {
            family.trim().to_string()
        };
        Self {
            family,
            size: clamp_font_size(size),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Replace the family, keeping the size.
    #[must_use]
    pub fn with_family(&self, family: impl Into<String>) -> Self {
        Self::new(family, self.size)
    }

    /// Replace the size (clamped), keeping the family.
    #[must_use]
    pub fn with_size(&self, size: u16) -> Self {
        Self::new(self.family.clone(), size)
    }

    /// Step the size by `delta`, staying inside [`FONT_SIZE_RANGE`].
    #[must_use]
    pub fn step_size(&self, delta: i32) -> Self {
        let stepped = i32::from(self.size).saturating_add(delta);
        let clamped = stepped.clamp(
            i32::from(*FONT_SIZE_RANGE.start()),
            i32::from(*FONT_SIZE_RANGE.end()),
        );
        self.with_size(u16::try_from(clamped).unwrap_or(DEFAULT_FONT_SIZE))
    }

    /// Short human label, e.g. `Arial 12pt`.
    pub fn label(&self) -> String {
        format!("{} {}pt", self.family, self.size)
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

/// Clamp a font size into [`FONT_SIZE_RANGE`].
pub fn clamp_font_size(size: u16) -> u16 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Page geometry for PDF export, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// Distance from the bottom edge that triggers an automatic page break.
    pub break_margin_mm: f32,
    /// Height of one wrapped cell row.
    pub line_height_mm: f32,
    /// Horizontal padding inside a cell.
    pub cell_padding_mm: f32,
}

impl PageSettings {
    /// Width available to text inside a full-width cell.
    pub fn text_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm - 2.0 * self.cell_padding_mm
    }

    /// Vertical position past which no cell bottom may extend.
    pub fn break_trigger_mm(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }
}

impl Default for PageSettings {
    /// A4 portrait, 1cm margins, 15mm automatic page-break margin.
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_left_mm: 10.0,
            margin_top_mm: 10.0,
            margin_right_mm: 10.0,
            break_margin_mm: 15.0,
            line_height_mm: 10.0,
            cell_padding_mm: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_is_arial_12() {
        let font = FontSettings::default();
        assert_eq!(font.family(), "Arial");
        assert_eq!(font.size(), 12);
        assert_eq!(font.label(), "Arial 12pt");
    }

    #[test]
    fn test_font_size_is_clamped() {
        assert_eq!(FontSettings::new("Courier", 2).size(), 8);
        assert_eq!(FontSettings::new("Courier", 120).size(), 39);
        assert_eq!(FontSettings::new("Courier", 20).size(), 20);
    }

    #[test]
    fn test_blank_family_falls_back_to_default() {
        assert_eq!(FontSettings::new("   ", 12).family(), DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_step_size_stays_in_range() {
        let font = FontSettings::new("Arial", 38);
        assert_eq!(font.step_size(1).size(), 39);
        assert_eq!(font.step_size(1).step_size(1).size(), 39);
        let small = FontSettings::new("Arial", 9);
        assert_eq!(small.step_size(-5).size(), 8);
    }

    #[test]
    fn test_with_family_keeps_size() {
        let font = FontSettings::new("Arial", 20).with_family("Times");
        assert_eq!(font.family(), "Times");
        assert_eq!(font.size(), 20);
    }

    #[test]
    fn test_a4_text_width_and_trigger() {
        let page = PageSettings::default();
        assert!((page.text_width_mm() - 188.0).abs() < f32::EPSILON);
        assert!((page.break_trigger_mm() - 282.0).abs() < f32::EPSILON);
    }
}
