//! Selection-preserving text transforms.
//!
//! [`apply`] is a pure function of a buffer and an operation. It is defined for
//! every valid selection, including a caret.

use crate::operation::{Operation, WrapSelection};
use crate::selection::{SelectionRange, TextBuffer};

/// Horizontal rule block inserted at the caret.
pub const HORIZONTAL_RULE: &str = "\n---\n";

/// Apply `operation` to `buffer`, returning the new buffer.
///
/// # Example
///
/// ```
/// use folio_editor::{Operation, SelectionRange, TextBuffer, apply};
///
/// let buffer = TextBuffer::new("hello world").with_selection(0..5);
/// let next = apply(&buffer, &Operation::bold());
/// assert_eq!(next.text(), "**hello** world");
/// assert_eq!(next.selection(), SelectionRange::new(2, 7));
/// ```
#[must_use]
pub fn apply(buffer: &TextBuffer, operation: &Operation) -> TextBuffer {
    let selection = buffer.selection();

    match operation {
        Operation::WrapInline {
            before,
            after,
            select,
        } => {
            let replacement = format!("{before}{}{after}", buffer.selected_text());
            let inner_start = selection.start() + before.chars().count();
            let next = match *select {
                WrapSelection::Wrapped => {
                    SelectionRange::new(inner_start, inner_start + selection.len())
                }
                WrapSelection::InAfter { offset, len } => {
                    let start = inner_start + selection.len() + offset;
                    SelectionRange::new(start, start + len)
                }
            };
            buffer.splice(selection, &replacement, next)
        }
        Operation::Heading(level) => {
            let prefix = level.prefix();
            let caret = selection.start() + prefix.chars().count() + selection.len();
            buffer.splice(
                SelectionRange::caret(selection.start()),
                &prefix,
                SelectionRange::caret(caret),
            )
        }
        Operation::HorizontalRule => replace_selection(buffer, HORIZONTAL_RULE),
        Operation::List(kind) => replace_selection(buffer, &kind.apply(buffer.selected_text())),
        Operation::Image { directive, url } => {
            replace_selection(buffer, &directive.to_markdown(url))
        }
    }
}

/// Replace the selection and put the caret after the replacement.
fn replace_selection(buffer: &TextBuffer, replacement: &str) -> TextBuffer {
    let selection = buffer.selection();
    let caret = selection.start() + replacement.chars().count();
    buffer.splice(selection, replacement, SelectionRange::caret(caret))
}
