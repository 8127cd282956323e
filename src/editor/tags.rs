use std::ops::Range;

/// A named visual attribute applied to a range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTag {
    Bold,
    Italic,
    Underline,
}

impl StyleTag {
    /// Every tag, in display order.
    pub const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Underline];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
        }
    }

    /// Look a tag up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Bold => 0,
            Self::Italic => 1,
            Self::Underline => 2,
        }
    }
}

/// The set of tags present at a single character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSet {
    pub const fn contains(self, tag: StyleTag) -> bool {
        match tag {
            StyleTag::Bold => self.bold,
            StyleTag::Italic => self.italic,
            StyleTag::Underline => self.underline,
        }
    }

    pub const fn is_plain(self) -> bool {
        !self.bold && !self.italic && !self.underline
    }

    const fn insert(&mut self, tag: StyleTag) {
        match tag {
            StyleTag::Bold => self.bold = true,
            StyleTag::Italic => self.italic = true,
            StyleTag::Underline => self.underline = true,
        }
    }
}

/// Per-tag interval sets over character offsets.
///
/// For every tag the ranges are sorted, non-empty, and neither overlap nor
/// touch; touching ranges are merged on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTags {
    ranges: [Vec<Range<usize>>; 3],
}

impl StyleTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranges currently carrying `tag`.
    pub fn ranges(&self, tag: StyleTag) -> &[Range<usize>] {
        &self.ranges[tag.index()]
    }

    /// Whether no tag is applied anywhere.
    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(Vec::is_empty)
    }

    /// Whether the character at `offset` carries `tag`.
    pub fn contains(&self, tag: StyleTag, offset: usize) -> bool {
        let ranges = self.ranges(tag);
        let idx = ranges.partition_point(|r| r.end <= offset);
        ranges.get(idx).is_some_and(|r| r.start <= offset)
    }

    /// Tags present on the character at `offset`.
    pub fn styles_at(&self, offset: usize) -> StyleSet {
        let mut set = StyleSet::default();
        for tag in StyleTag::ALL {
            if self.contains(tag, offset) {
                set.insert(tag);
            }
        }
        set
    }

    /// Whether every character of a non-empty `range` carries `tag`.
    pub fn is_fully_tagged(&self, tag: StyleTag, range: &Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        let ranges = self.ranges(tag);
        let idx = ranges.partition_point(|r| r.end <= range.start);
        ranges
            .get(idx)
            .is_some_and(|r| r.start <= range.start && r.end >= range.end)
    }

    /// Apply `tag` over `range`, merging with neighbours.
    pub fn add(&mut self, tag: StyleTag, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let ranges = &mut self.ranges[tag.index()];
        // First range that ends at or after the new start (touching counts).
        let first = ranges.partition_point(|r| r.end < range.start);
        // First range that starts strictly after the new end.
        let last = ranges.partition_point(|r| r.start <= range.end);
        let mut merged = range;
        if first < last {
            merged.start = merged.start.min(ranges[first].start);
            merged.end = merged.end.max(ranges[last - 1].end);
        }
        ranges.splice(first..last, std::iter::once(merged));
    }

    /// Remove `tag` from `range`, splitting ranges that straddle it.
    pub fn remove(&mut self, tag: StyleTag, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let ranges = &mut self.ranges[tag.index()];
        let first = ranges.partition_point(|r| r.end <= range.start);
        let last = ranges.partition_point(|r| r.start < range.end);
        if first >= last {
            return;
        }
        let mut kept = Vec::with_capacity(2);
        let head = ranges[first].start..range.start;
        if !head.is_empty() {
            kept.push(head);
        }
        let tail = range.end..ranges[last - 1].end;
        if !tail.is_empty() {
            kept.push(tail);
        }
        ranges.splice(first..last, kept);
    }

    /// Remove `tag` if `range` is fully tagged, otherwise apply it.
    ///
    /// Returns whether the tag is applied afterwards.
    pub fn toggle(&mut self, tag: StyleTag, range: Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        if self.is_fully_tagged(tag, &range) {
            self.remove(tag, range);
            false
        } else {
            self.add(tag, range);
            true
        }
    }

    /// Shift ranges for `len` characters inserted at offset `at`.
    ///
    /// Insertions strictly inside a range extend it. Insertions at a range
    /// boundary leave the new text untagged.
    pub fn on_insert(&mut self, at: usize, len: usize) {
        if len == 0 {
            return;
        }
        for ranges in &mut self.ranges {
            for r in ranges.iter_mut() {
                if r.start >= at {
                    r.start += len;
                    r.end += len;
                } else if r.end > at {
                    r.end += len;
                }
            }
        }
    }

    /// Collapse ranges for the characters in `deleted` being removed.
    pub fn on_delete(&mut self, deleted: Range<usize>) {
        if deleted.is_empty() {
            return;
        }
        let removed = deleted.end - deleted.start;
        let map = |x: usize| {
            if x <= deleted.start {
                x
            } else if x >= deleted.end {
                x - removed
            } else {
                deleted.start
            }
        };
        for ranges in &mut self.ranges {
            let mut collapsed: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
            for r in ranges.drain(..) {
                let mapped = map(r.start)..map(r.end);
                if mapped.is_empty() {
                    continue;
                }
                if let Some(prev) = collapsed.last_mut()
                    && prev.end >= mapped.start
                {
                    prev.end = prev.end.max(mapped.end);
                    continue;
                }
                collapsed.push(mapped);
            }
            *ranges = collapsed;
        }
    }

    /// Drop every tag.
    pub fn clear(&mut self) {
        for ranges in &mut self.ranges {
            ranges.clear();
        }
    }
}
