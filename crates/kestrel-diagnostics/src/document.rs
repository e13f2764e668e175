//! The immutable line view a scan runs over.
//!
//! All public coordinates in this crate are **character** offsets, while the
//! `regex` crate reports **byte** offsets; [`SourceDocument`] owns that
//! conversion so rules never mix the two.

/// An ordered, 0-indexed sequence of text lines, borrowed from the scanned
/// source for the duration of one scan.
#[derive(Debug)]
pub struct SourceDocument<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceDocument<'a> {
    /// Split `text` into lines. Both `\n` and `\r\n` terminators are handled
    /// by [`str::lines`]; the empty document has zero lines.
    pub fn from_text(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The text of line `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    /// Iterate over the lines from `start` (inclusive) to the end of the
    /// document. Used by rules that do bounded forward lookahead.
    pub fn lines_from(&self, start: usize) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().skip(start).copied()
    }

    /// Character length of line `index` (0 for out-of-bounds lines).
    pub fn char_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |l| l.chars().count())
    }

    /// Convert a byte offset inside line `index` into a character column.
    ///
    /// Out-of-bounds offsets clamp to the line's character length, so ranges
    /// built from regex matches always stay inside the document.
    pub fn byte_to_char_col(&self, index: usize, byte_offset: usize) -> usize {
        match self.line(index) {
            Some(line) => {
                let clamped = byte_offset.min(line.len());
                line.char_indices().take_while(|(b, _)| *b < clamped).count()
            }
            None => 0,
        }
    }
}
