use folio_content::ContentError;

/// Error building a text operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Heading level outside 1..=6.
    #[error("Heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(u8),
    /// Toolbar action name not recognized.
    #[error("Unknown editor action: {0}")]
    UnknownAction(String),
    /// `heading` action without a level.
    #[error("Heading action requires a level")]
    MissingHeadingLevel,
}

/// Editor session error.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Operation could not be built.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// Content service call failed; the buffer was left untouched.
    #[error("Content service error: {0}")]
    Service(#[from] ContentError),
}
