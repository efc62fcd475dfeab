//! Image layout directives.
//!
//! Layout hints ride inside standard markdown image alt text as a
//! pipe-delimited suffix, so any markdown converter passes them through
//! untouched:
//!
//! ```text
//! ![<alt> | scale=<10-100> | caption=<text or -> | align=<left|right|center>](<url>)
//! ```
//!
//! # Parsing model
//!
//! 1. [`DirectiveArgs`] splits the alt text into display text and key-value
//!    segments.
//! 2. [`ImageDirective`] interprets the segments it knows, as enabled by
//!    [`DirectiveFeatures`], and falls back to defaults for everything else.
//!
//! Parsing never fails.
//!
//! # Example
//!
//! ```
//! use folio_renderer::directive::{Align, ImageDirective};
//!
//! let directive = ImageDirective::parse("Bridge | scale=60 | align=left | shadow=on");
//! assert_eq!(directive.scale_percent, 60);
//! assert_eq!(directive.align, Align::Left);
//! assert_eq!(ImageDirective::parse(&directive.to_alt()), directive);
//! ```

mod args;
mod features;
mod image;

pub use args::DirectiveArgs;
pub use features::{DirectiveFeatures, LATEST_VERSION, PLACEHOLDER_ALT};
pub use image::{
    Align, Caption, DEFAULT_SCALE, ImageDirective, MAX_SCALE, MIN_SCALE, clamp_scale,
};
