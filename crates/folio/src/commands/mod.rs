//! CLI command implementations.

pub(crate) mod apply;
pub(crate) mod image;
pub(crate) mod render;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_editor::EditorSession;
use folio_renderer::PreviewRenderer;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use apply::ApplyArgs;
pub(crate) use image::ImageArgs;
pub(crate) use render::RenderArgs;

/// Path argument meaning stdin.
const STDIN: &str = "-";

/// Rendering options shared by all commands.
#[derive(Args)]
pub(crate) struct RenderOptions {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable GFM extensions (default: enabled).
    #[arg(long)]
    gfm: Option<bool>,

    /// Disable GFM extensions.
    #[arg(long, conflicts_with = "gfm")]
    no_gfm: bool,

    /// Directive syntax version, 1 to 3 (overrides config).
    #[arg(long, value_name = "N")]
    directive_version: Option<u8>,

    /// Emit full-size links on figure images (overrides config).
    #[arg(long)]
    full_size_link: Option<bool>,
}

impl RenderOptions {
    /// Load config and build the preview renderer.
    pub(crate) fn renderer(&self) -> Result<PreviewRenderer, CliError> {
        let cli_settings = CliSettings {
            gfm: self.resolve_gfm(),
            directive_version: self.directive_version,
            full_size_link: self.full_size_link,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config.preview_renderer()?)
    }

    /// Resolve `gfm` from --gfm/--no-gfm flags.
    fn resolve_gfm(&self) -> Option<bool> {
        self.no_gfm.then_some(false).or(self.gfm)
    }
}

/// Read markdown from a file, or stdin for `-`.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    if path == Path::new(STDIN) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Write a result to a file, or stdout when no path is given.
pub(crate) fn write_result(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

/// Where an edit command writes its result.
///
/// `--in-place` writes back to the input, which must then be a real file.
pub(crate) fn edit_target(file: &Path, in_place: bool) -> Result<Option<&Path>, CliError> {
    if !in_place {
        return Ok(None);
    }
    if file == Path::new(STDIN) {
        return Err(CliError::Validation(
            "--in-place requires a file path, not stdin".to_owned(),
        ));
    }
    Ok(Some(file))
}

/// Write the edited buffer and report the new selection.
pub(crate) fn finish_edit(target: Option<&Path>, session: &EditorSession) -> Result<(), CliError> {
    let output = Output::new();
    let buffer = session.buffer();
    write_result(target, buffer.text())?;

    if let Some(path) = target {
        output.success(&format!("Updated {}", path.display()));
    }
    let selection = buffer.selection();
    output.detail(&format!("Selection: {}..{}", selection.start(), selection.end()));
    output.detail(&format!("Images: {}", session.preview().images.len()));
    Ok(())
}
