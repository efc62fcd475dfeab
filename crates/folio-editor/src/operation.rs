//! Toolbar operations.

use folio_renderer::directive::{Align, ImageDirective};

use crate::error::TransformError;

/// Placeholder link target inserted by [`Operation::link`].
pub const LINK_PLACEHOLDER: &str = "http://";

/// What a wrap operation selects afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapSelection {
    /// The original selected text, between the markers.
    Wrapped,
    /// A range inside the closing marker, in characters from its start.
    InAfter { offset: usize, len: usize },
}

/// Markdown heading level, 1 to 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Validate a heading level.
    pub fn new(level: u8) -> Result<Self, TransformError> {
        if (1..=6).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TransformError::InvalidHeadingLevel(level))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// `#` repeated `level` times plus a space.
    #[must_use]
    pub fn prefix(self) -> String {
        let mut prefix = "#".repeat(usize::from(self.0));
        prefix.push(' ');
        prefix
    }
}

/// List style for [`Operation::List`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`
    Unordered,
    /// `1. item`
    Ordered,
}

impl ListKind {
    fn marker(self, index: usize) -> String {
        match self {
            Self::Unordered => "- ".to_owned(),
            Self::Ordered => format!("{index}. "),
        }
    }

    pub(crate) fn apply(self, text: &str) -> String {
        text.split('\n')
            .enumerate()
            .map(|(i, line)| format!("{}{line}", self.marker(i + 1)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A text transform the editor can apply to a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Surround the selection with markers.
    WrapInline {
        before: String,
        after: String,
        select: WrapSelection,
    },
    /// Insert a heading prefix before the selection.
    Heading(HeadingLevel),
    /// Replace the selection with a horizontal rule block.
    HorizontalRule,
    /// Turn each selected line into a list item.
    List(ListKind),
    /// Replace the selection with a canonical image reference.
    Image { directive: ImageDirective, url: String },
}

impl Operation {
    /// `**selection**`
    #[must_use]
    pub fn bold() -> Self {
        Self::wrap("**", "**")
    }

    /// `*selection*`
    #[must_use]
    pub fn italic() -> Self {
        Self::wrap("*", "*")
    }

    /// `[selection](http://)`, selecting the `http` placeholder.
    #[must_use]
    pub fn link() -> Self {
        Self::WrapInline {
            before: "[".to_owned(),
            after: format!("]({LINK_PLACEHOLDER})"),
            select: WrapSelection::InAfter { offset: 2, len: 4 },
        }
    }

    /// Wrap the selection, keeping the original text selected.
    #[must_use]
    pub fn wrap(before: &str, after: &str) -> Self {
        Self::WrapInline {
            before: before.to_owned(),
            after: after.to_owned(),
            select: WrapSelection::Wrapped,
        }
    }

    /// Heading prefix of the given level.
    pub fn heading(level: u8) -> Result<Self, TransformError> {
        HeadingLevel::new(level).map(Self::Heading)
    }

    /// Insert an image built from dialog values.
    ///
    /// Values are normalized: blank alt text becomes the placeholder, blank
    /// captions become `-` and the scale is clamped.
    #[must_use]
    pub fn image(alt: &str, scale: i64, caption: &str, align: Align, url: &str) -> Self {
        Self::Image {
            directive: ImageDirective::new(alt, scale, caption, align),
            url: url.to_owned(),
        }
    }

    /// Map a toolbar action name to an operation.
    ///
    /// Recognized names: `bold`, `italic`, `link`, `heading` (needs `level`),
    /// `hr`, `ul`, `ol`.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_editor::Operation;
    ///
    /// assert_eq!(Operation::from_name("bold", None).unwrap(), Operation::bold());
    /// assert!(Operation::from_name("heading", Some(9)).is_err());
    /// ```
    pub fn from_name(name: &str, level: Option<u8>) -> Result<Self, TransformError> {
        match name {
            "bold" => Ok(Self::bold()),
            "italic" => Ok(Self::italic()),
            "link" => Ok(Self::link()),
            "heading" => Self::heading(level.ok_or(TransformError::MissingHeadingLevel)?),
            "hr" => Ok(Self::HorizontalRule),
            "ul" => Ok(Self::List(ListKind::Unordered)),
            "ol" => Ok(Self::List(ListKind::Ordered)),
            other => Err(TransformError::UnknownAction(other.to_owned())),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WrapInline { .. } => "wrap",
            Self::Heading(_) => "heading",
            Self::HorizontalRule => "hr",
            Self::List(ListKind::Unordered) => "ul",
            Self::List(ListKind::Ordered) => "ol",
            Self::Image { .. } => "image",
        }
    }
}
