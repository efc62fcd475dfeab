//! Text buffer snapshots and selections.
//!
//! Offsets count characters (Unicode scalar values), not bytes, so a
//! selection never splits a code point.

use std::ops::Range;
use std::sync::Arc;

/// Selected range of a buffer, `start <= end`.
///
/// A caret is a selection with `start == end`. The bounds are only set
/// through [`new`](Self::new) and [`caret`](Self::caret), which keep them
/// ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Create a selection, swapping the bounds if they are inverted.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Collapsed selection at `pos`.
    #[must_use]
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether the selection is a caret.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl From<Range<usize>> for SelectionRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Immutable snapshot of the editor text plus its selection.
///
/// Operations never modify a buffer; they build a new one. Cloning is cheap
/// because the text is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    text: Arc<str>,
    len_chars: usize,
    selection: SelectionRange,
}

impl TextBuffer {
    /// Create a buffer with the caret at the start.
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let len_chars = text.chars().count();
        Self {
            text,
            len_chars,
            selection: SelectionRange::default(),
        }
    }

    /// Replace the selection, clamping both bounds into `[0, len]`.
    #[must_use]
    pub fn with_selection(mut self, selection: impl Into<SelectionRange>) -> Self {
        let selection = selection.into();
        self.selection = SelectionRange::new(
            selection.start.min(self.len_chars),
            selection.end.min(self.len_chars),
        );
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Currently selected text.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        &self.text[self.byte_range(self.selection)]
    }

    /// Byte offset of the character at `char_idx`, or the text length past
    /// the end.
    #[must_use]
    pub fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn byte_range(&self, range: SelectionRange) -> Range<usize> {
        self.byte_offset(range.start)..self.byte_offset(range.end)
    }

    /// New buffer with `range` replaced by `replacement` and the given
    /// selection.
    #[must_use]
    pub fn splice(
        &self,
        range: SelectionRange,
        replacement: &str,
        selection: SelectionRange,
    ) -> Self {
        let bytes = self.byte_range(range);
        let mut text = String::with_capacity(self.text.len() + replacement.len());
        text.push_str(&self.text[..bytes.start]);
        text.push_str(replacement);
        text.push_str(&self.text[bytes.end..]);
        Self::new(text).with_selection(selection)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selection_normalizes_inverted_range() {
        assert_eq!(SelectionRange::new(7, 2), SelectionRange::new(2, 7));
        assert_eq!(SelectionRange::from(3..1).len(), 2);
    }

    #[test]
    fn test_splice_with_reversed_bounds() {
        let buffer = TextBuffer::new("abcdef");
        let range = SelectionRange::new(4, 1);
        assert_eq!((range.start(), range.end()), (1, 4));
        let next = buffer.splice(range, "-", SelectionRange::new(2, 0));
        assert_eq!(next.text(), "a-ef");
        assert_eq!(next.selection(), SelectionRange::new(0, 2));
    }

    #[test]
    fn test_caret() {
        let caret = SelectionRange::caret(4);
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
    }

    #[test]
    fn test_with_selection_clamps() {
        let buffer = TextBuffer::new("abc").with_selection(1..99);
        assert_eq!(buffer.selection(), SelectionRange::new(1, 3));
        assert_eq!(buffer.selected_text(), "bc");
    }

    #[test]
    fn test_selected_text_multibyte() {
        let buffer = TextBuffer::new("héllo wörld").with_selection(6..11);
        assert_eq!(buffer.len_chars(), 11);
        assert_eq!(buffer.selected_text(), "wörld");
    }

    #[test]
    fn test_splice() {
        let buffer = TextBuffer::new("añb").with_selection(1..2);
        let next = buffer.splice(buffer.selection(), "XY", SelectionRange::caret(3));
        assert_eq!(next.text(), "aXYb");
        assert_eq!(next.selection(), SelectionRange::caret(3));
        assert_eq!(buffer.text(), "añb");
    }

    #[test]
    fn test_byte_offset_past_end() {
        let buffer = TextBuffer::new("ü");
        assert_eq!(buffer.byte_offset(0), 0);
        assert_eq!(buffer.byte_offset(1), 2);
        assert_eq!(buffer.byte_offset(5), 2);
    }
}
