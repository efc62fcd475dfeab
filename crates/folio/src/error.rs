//! CLI error types.

use folio_config::ConfigError;
use folio_editor::EditorError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Editor(#[from] EditorError),

    #[error("{0}")]
    Validation(String),
}
