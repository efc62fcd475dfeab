//! Render state helpers for the HTML writer.

use std::ops::Range;

use pulldown_cmark::Alignment;

/// Escape text for use in HTML content and attribute values.
///
/// # Example
///
/// ```
/// use folio_renderer::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Source span of the image being written.
///
/// Alt text is sliced from the source rather than rebuilt from inline
/// events, so emphasis markers, code spans, raw HTML and entities inside the
/// description come through exactly as written. Images nest (an image inside
/// alt text is legal markdown), so only the outermost image is rendered.
#[derive(Debug, Default)]
pub(crate) struct ImageState {
    depth: usize,
    open: usize,
    inner_end: Option<usize>,
}

impl ImageState {
    /// Enter an image spanning `range`. Returns true if it is the outermost one.
    pub(crate) fn start(&mut self, range: &Range<usize>) -> bool {
        if self.is_active() {
            self.extend_to(range.end);
        }
        self.depth += 1;
        if self.depth == 1 {
            self.open = range.start;
            self.inner_end = None;
        }
        self.depth == 1
    }

    /// Record an event inside the description ending at `end`.
    pub(crate) fn extend_to(&mut self, end: usize) {
        self.inner_end = Some(self.inner_end.map_or(end, |inner| inner.max(end)));
    }

    /// Leave an image. Returns the raw alt text for the outermost one.
    pub(crate) fn end(&mut self, source: &str) -> Option<String> {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            Some(raw_description(source, self.open, self.inner_end.take()))
        } else {
            None
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.depth > 0
    }
}

/// Text between `![` at `open` and the bracket closing the description.
///
/// The closing bracket is the first `]` after the last inner event. Line
/// breaks become spaces and bracket escapes are removed.
fn raw_description(source: &str, open: usize, inner_end: Option<usize>) -> String {
    let Some(inner_end) = inner_end else {
        return String::new();
    };
    let Some(close) = source
        .get(inner_end..)
        .and_then(|rest| rest.find(']'))
        .map(|offset| inner_end + offset)
    else {
        return String::new();
    };
    let raw = source.get(open + 2..close).unwrap_or_default();
    unescape_brackets(&raw.lines().collect::<Vec<_>>().join(" "))
}

/// Undo `\\`, `\[` and `\]` escapes.
fn unescape_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '\\' | '[' | ']')
        {
            out.push(next);
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Column alignments and position for the table being written.
#[derive(Debug, Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Inline style attribute for the current cell (empty when unaligned).
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}
