//! Byte-offset source ranges.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in a source document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Start position (byte offset)
    pub start: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
}

impl TextRange {
    /// Create a new range. An inverted pair is normalized to empty at `start`.
    pub fn new(start: u32, end: u32) -> Self {
        if end < start {
            TextRange { start, end: start }
        } else {
            TextRange { start, end }
        }
    }

    /// An empty range at `offset`.
    pub fn empty(offset: u32) -> Self {
        TextRange {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains_range(&self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Get the range's text from source. Returns `""` when the range does not
    /// fall on valid boundaries of `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.start as usize;
        let end = self.end as usize;
        if end <= source.len()
            && start <= end
            && source.is_char_boundary(start)
            && source.is_char_boundary(end)
        {
            &source[start..end]
        } else {
            ""
        }
    }
}
