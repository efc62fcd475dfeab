//! `folio apply` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_editor::{EditorSession, SelectionRange, TextBuffer};

use super::{RenderOptions, edit_target, finish_edit, read_source};
use crate::error::CliError;

/// Arguments for the apply command.
#[derive(Args)]
pub(crate) struct ApplyArgs {
    /// Toolbar action: bold, italic, link, heading, hr, ul, ol.
    action: String,

    /// Markdown file to edit ("-" for stdin).
    file: PathBuf,

    /// Selection start, in characters.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Selection end, in characters (default: same as start).
    #[arg(long)]
    end: Option<usize>,

    /// Heading level for the heading action (1-6).
    #[arg(long)]
    level: Option<u8>,

    /// Write the result back to FILE instead of stdout.
    #[arg(short, long)]
    in_place: bool,

    #[command(flatten)]
    render: RenderOptions,
}

impl ApplyArgs {
    /// Execute the apply command.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is unknown, configuration fails, or the
    /// file cannot be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let target = edit_target(&self.file, self.in_place)?;
        let source = read_source(&self.file)?;
        let renderer = self.render.renderer()?;

        let selection = SelectionRange::new(self.start, self.end.unwrap_or(self.start));
        let buffer = TextBuffer::new(source).with_selection(selection);
        let mut session = EditorSession::new(buffer, renderer);
        session.run_action(&self.action, self.level)?;

        finish_edit(target, &session)
    }
}
