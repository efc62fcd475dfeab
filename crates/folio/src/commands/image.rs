//! `folio image` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use folio_editor::{EditorSession, ImageRequest, SelectionRange, TextBuffer};
use folio_renderer::directive::Align;

use super::{RenderOptions, edit_target, finish_edit, read_source};
use crate::error::CliError;

/// Image alignment argument.
#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Left,
    Right,
    Center,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Self::Left,
            AlignArg::Right => Self::Right,
            AlignArg::Center => Self::Center,
        }
    }
}

/// Arguments for the image command.
#[derive(Args)]
pub(crate) struct ImageArgs {
    /// Markdown file to edit ("-" for stdin).
    file: PathBuf,

    /// Image URL, inserted as given.
    #[arg(long)]
    url: String,

    /// Alt text (default: placeholder from config).
    #[arg(long, default_value = "")]
    alt: String,

    /// Width in percent of the page, clamped to 10-100.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    scale: i64,

    /// Caption shown below the image.
    #[arg(long, default_value = "")]
    caption: String,

    /// Horizontal placement.
    #[arg(long, value_enum, default_value_t = AlignArg::Center)]
    align: AlignArg,

    /// Insert position, in characters (default: end of file).
    #[arg(long)]
    at: Option<usize>,

    /// Replace text from --at up to this position.
    #[arg(long, requires = "at")]
    to: Option<usize>,

    /// Write the result back to FILE instead of stdout.
    #[arg(short, long)]
    in_place: bool,

    #[command(flatten)]
    render: RenderOptions,
}

impl ImageArgs {
    /// Execute the image command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the file cannot be read or
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let target = edit_target(&self.file, self.in_place)?;
        let source = read_source(&self.file)?;
        let renderer = self.render.renderer()?;

        let request = ImageRequest::new(&self.alt, self.scale, &self.caption, self.align.into());

        let buffer = TextBuffer::new(source);
        let start = self.at.unwrap_or(buffer.len_chars());
        let selection = SelectionRange::new(start, self.to.unwrap_or(start));
        let mut session = EditorSession::new(buffer.with_selection(selection), renderer);
        session.insert_image_url(&request, &self.url);

        finish_edit(target, &session)
    }
}
