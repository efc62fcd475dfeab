//! Markdown preview renderer with image layout directives.
//!
//! This crate turns editor markdown into preview HTML. Images may carry
//! layout hints in their alt text:
//!
//! ```text
//! ![Harbor | scale=60 | caption=At dusk | align=right](harbor.jpg)
//! ```
//!
//! # Architecture
//!
//! - [`directive`]: parses alt text into an [`ImageDirective`](directive::ImageDirective)
//! - [`Figure`]: lays out an image as a captioned, aligned box
//! - [`HtmlWriter`]: converts pulldown-cmark events to HTML, delegating
//!   images to an [`ImageHandler`]
//! - [`PreviewRenderer`]: wires the three together
//!
//! # Example
//!
//! ```
//! use folio_renderer::PreviewRenderer;
//!
//! let result = PreviewRenderer::new()
//!     .render("# Trip\n\n![Harbor | scale=60 | caption=At dusk | align=right](harbor.jpg)");
//! assert!(result.html.starts_with("<h1>Trip</h1>"));
//! assert!(result.html.contains("<figcaption"));
//! ```

pub mod directive;
mod figure;
mod html;
mod preview;
mod state;
mod util;

pub use figure::{Figure, FloatSide, ImageRef, LayoutMode};
pub use html::{HtmlWriter, ImageHandler, PlainImages};
pub use preview::{PreviewRenderer, RenderResult, render_preview};
pub use state::escape_html;
