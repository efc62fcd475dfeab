//! Content service error types.

use std::fmt;

/// Semantic error categories for content service calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// The caller may not perform this operation.
    NotAllowed,
    /// The service refused the request (bad file type, missing file, ...).
    Rejected,
    /// The service could not be reached or failed internally.
    Unavailable,
    /// The response could not be decoded.
    Decode,
    /// Other/unknown error category.
    Other,
}

impl fmt::Display for ContentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotAllowed => "Not allowed",
            Self::Rejected => "Rejected",
            Self::Unavailable => "Unavailable",
            Self::Decode => "Decode error",
            Self::Other => "Error",
        })
    }
}

/// Failure reported by a content service call.
///
/// Always distinguishable from success; editor state is never touched when a
/// call fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ContentError {
    /// Semantic error category.
    pub kind: ContentErrorKind,
    /// Message from the service or decoder.
    pub message: String,
}

impl ContentError {
    /// Create an error of the given kind.
    #[must_use]
    pub fn new(kind: ContentErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The caller may not perform this operation.
    #[must_use]
    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(ContentErrorKind::NotAllowed, message)
    }

    /// The service refused the request.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ContentErrorKind::Rejected, message)
    }

    /// The service is unavailable.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ContentErrorKind::Unavailable, message)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ContentErrorKind::Decode, err.to_string())
    }
}
