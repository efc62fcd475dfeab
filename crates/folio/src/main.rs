//! Folio CLI - markdown authoring with image layout directives.
//!
//! Provides commands for:
//! - `render`: Render markdown to preview HTML
//! - `apply`: Apply a toolbar action to a selection
//! - `image`: Insert a canonical image directive at a position

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ApplyArgs, ImageArgs, RenderArgs};
use output::Output;

/// Folio - markdown authoring with image layout directives.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to preview HTML.
    Render(RenderArgs),
    /// Apply a toolbar action (bold, italic, link, heading, hr, ul, ol).
    Apply(ApplyArgs),
    /// Insert an image with layout directives.
    Image(ImageArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Apply(args) => args.execute(),
        Commands::Image(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
