//! Greedy word wrapping with a pluggable glyph measure.
//!
//! The same routine lays out terminal rows (measured in cells) and PDF cell
//! rows (measured in millimetres).

use std::ops::Range;

/// Split `line` into byte ranges no wider than `max_width`.
///
/// Breaks after the last space that fits. A word wider than the limit is
/// broken between characters. Spaces may hang past the limit and stay at the
/// end of the row they follow, so every byte of `line` belongs to exactly one
/// range. An empty line yields a single empty range.
pub fn wrap_line<F>(line: &str, max_width: f32, measure: F) -> Vec<Range<usize>>
where
    F: Fn(char) -> f32,
{
    let mut rows = Vec::new();
    let mut start = 0;
    let mut width = 0.0_f32;
    let mut last_break: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        let w = measure(ch);
        if ch == ' ' {
            width += w;
            last_break = Some(idx + 1);
            continue;
        }
        while width + w > max_width && idx > start {
            let cut = match last_break {
                Some(pos) if pos > start && pos <= idx => pos,
                _ => idx,
            };
            rows.push(start..cut);
            start = cut;
            width = line[start..idx].chars().map(&measure).sum();
            last_break = None;
        }
        width += w;
    }
    rows.push(start..line.len());
    rows
}

/// Terminal cell width of a character (control characters count as one).
pub fn cell_width(ch: char) -> f32 {
    let cells = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1).max(1);
    #[allow(clippy::cast_precision_loss)]
    let cells = cells as f32;
    cells
}

/// Wrap `line` for a terminal area `width` cells wide.
pub fn wrap_cells(line: &str, width: u16) -> Vec<Range<usize>> {
    wrap_line(line, f32::from(width.max(1)), cell_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(line: &str, width: u16) -> Vec<&str> {
        wrap_cells(line, width)
            .into_iter()
            .map(|r| &line[r])
            .collect()
    }

    #[test]
    fn test_empty_line_is_one_empty_row() {
        assert_eq!(wrap_cells("", 10), vec![0..0]);
    }

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(pieces("hello", 10), vec!["hello"]);
    }

    #[test]
    fn test_breaks_after_last_fitting_space() {
        assert_eq!(pieces("hello big world", 10), vec!["hello big ", "world"]);
    }

    #[test]
    fn test_long_word_breaks_between_characters() {
        assert_eq!(pieces("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_spaces_hang_instead_of_starting_rows() {
        assert_eq!(pieces("abcd    efgh", 4), vec!["abcd    ", "efgh"]);
    }

    #[test]
    fn test_ranges_cover_whole_line() {
        let line = "the quick brown fox jumps over the lazy dog";
        let rows = wrap_cells(line, 7);
        assert_eq!(rows.first().map(|r| r.start), Some(0));
        assert_eq!(rows.last().map(|r| r.end), Some(line.len()));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_wide_characters_use_two_cells() {
        assert_eq!(pieces("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_fractional_measure() {
        let rows = wrap_line("aa aa aa", 3.0, |_| 0.75);
        let line = "aa aa aa";
        let parts: Vec<&str> = rows.into_iter().map(|r| &line[r]).collect();
        assert_eq!(parts, vec!["aa ", "aa ", "aa"]);
    }
}
