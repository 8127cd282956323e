//! Standard core-font selection and glyph widths.

/// Advance widths for `' '..='~'` in thousandths of an em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const TIMES_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // ' '..'/'
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, // '0'..'9'
    278, 278, 564, 564, 564, 444, 921, // ':'..'@'
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, // 'A'..'M'
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, // 'N'..'Z'
    333, 278, 333, 469, 500, 333, // '['..'`'
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, // 'a'..'m'
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, // 'n'..'z'
    480, 200, 480, 541, // '{'..'~'
];

const COURIER_WIDTH: u16 = 600;

/// One of the base-14 fonts every PDF reader provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreFont {
    Helvetica,
    TimesRoman,
    Courier,
}

impl CoreFont {
    /// Core font matching a family name, if one is close enough.
    pub fn match_family(family: &str) -> Option<Self> {
        let family = family.to_lowercase();
        if family.contains("courier") || family.contains("mono") {
            Some(Self::Courier)
        } else if family.contains("sans") || family.contains("arial") || family.contains("helvetica")
        {
            Some(Self::Helvetica)
        } else if family.contains("times") || family.contains("serif") {
            Some(Self::TimesRoman)
        } else {
            None
        }
    }

    /// Core font for a family name, falling back to Helvetica.
    pub fn for_family(family: &str) -> Self {
        Self::match_family(family).unwrap_or_else(|| {
            tracing::warn!(family, "no core font for family, using Helvetica");
            Self::Helvetica
        })
    }

    /// PDF `BaseFont` name.
    pub const fn base_font_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::TimesRoman => "Times-Roman",
            Self::Courier => "Courier",
        }
    }

    /// Advance width of `ch` in thousandths of an em.
    ///
    /// Characters outside printable ASCII use the width of `o`.
    pub fn char_width(self, ch: char) -> u16 {
        let ch = if ch == '\t' { ' ' } else { ch };
        let table = match self {
            Self::Courier => return COURIER_WIDTH,
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::TimesRoman => &TIMES_WIDTHS,
        };
        let idx = if (' '..='~').contains(&ch) { ch } else { 'o' };
        table[idx as usize - 32]
    }

    /// Advance width of `ch` in millimetres at `size_pt`.
    pub fn width_mm(self, ch: char, size_pt: f32) -> f32 {
        f32::from(self.char_width(ch)) * size_pt / 1000.0 * 25.4 / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_mapping() {
        assert_eq!(CoreFont::for_family("Arial"), CoreFont::Helvetica);
        assert_eq!(CoreFont::for_family("DejaVu Sans"), CoreFont::Helvetica);
        assert_eq!(CoreFont::for_family("Times New Roman"), CoreFont::TimesRoman);
        assert_eq!(CoreFont::for_family("Noto Serif"), CoreFont::TimesRoman);
        assert_eq!(CoreFont::for_family("Courier New"), CoreFont::Courier);
        assert_eq!(CoreFont::for_family("DejaVu Sans Mono"), CoreFont::Courier);
    }

    #[test]
    fn test_unknown_family_falls_back_to_helvetica() {
        assert_eq!(CoreFont::match_family("Comic Neue"), None);
        assert_eq!(CoreFont::for_family("Comic Neue"), CoreFont::Helvetica);
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(CoreFont::Helvetica.char_width(' '), 278);
        assert_eq!(CoreFont::Helvetica.char_width('W'), 944);
        assert_eq!(CoreFont::TimesRoman.char_width('a'), 444);
        assert_eq!(CoreFont::TimesRoman.char_width('~'), 541);
        assert_eq!(CoreFont::Courier.char_width('i'), 600);
    }

    #[test]
    fn test_tab_measures_as_space_and_others_as_o() {
        assert_eq!(CoreFont::Helvetica.char_width('\t'), 278);
        assert_eq!(CoreFont::Helvetica.char_width('é'), 556);
    }

    #[test]
    fn test_width_mm_scales_with_size() {
        let w12 = CoreFont::Courier.width_mm('x', 12.0);
        let w24 = CoreFont::Courier.width_mm('x', 24.0);
        assert!((w24 - 2.0 * w12).abs() < 1e-4);
        assert!((w12 - 2.54).abs() < 1e-4);
    }
}
