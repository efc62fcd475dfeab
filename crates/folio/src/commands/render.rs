//! `folio render` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{RenderOptions, read_source, write_result};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render ("-" for stdin).
    file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the image directives found in the document.
    #[arg(long)]
    images: bool,

    #[command(flatten)]
    render: RenderOptions,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the files cannot be
    /// read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let source = read_source(&self.file)?;
        let renderer = self.render.renderer()?;

        let result = renderer.render(&source);
        write_result(self.output.as_deref(), &format!("{}\n", result.html))?;

        if let Some(path) = &self.output {
            output.success(&format!("Rendered {}", path.display()));
        }
        if self.images {
            output.info(&format!("Images: {}", result.images.len()));
            for (index, directive) in result.images.iter().enumerate() {
                output.detail(&format!("{}. {}", index + 1, directive.to_alt()));
            }
        }

        Ok(())
    }
}
