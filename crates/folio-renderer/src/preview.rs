//! Markdown preview pipeline.
//!
//! Converts markdown to HTML and replaces every image with a directive-driven
//! [`Figure`].

use pulldown_cmark::Options;

use crate::directive::{DirectiveFeatures, ImageDirective};
use crate::figure::{Figure, ImageRef};
use crate::html::{HtmlWriter, ImageHandler};

/// Result of rendering a preview.
///
/// Produced in one piece so the caller can swap it into view atomically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Directives parsed from each image, in document order.
    pub images: Vec<ImageDirective>,
}

/// Markdown to HTML renderer that lays out images from their directives.
///
/// # Example
///
/// ```
/// use folio_renderer::PreviewRenderer;
///
/// let result = PreviewRenderer::new().render("![Map | scale=50 | align=left](map.png)");
/// assert_eq!(result.images.len(), 1);
/// assert!(result.html.contains("float:left"));
/// assert!(result.html.contains(r#"alt="Map""#));
/// ```
#[derive(Clone, Debug)]
pub struct PreviewRenderer {
    features: DirectiveFeatures,
    gfm: bool,
}

impl PreviewRenderer {
    /// Create a renderer with the latest directive features and GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: DirectiveFeatures::default(),
            gfm: true,
        }
    }

    /// Set the directive features honored when laying out images.
    #[must_use]
    pub fn with_features(mut self, features: DirectiveFeatures) -> Self {
        self.features = features;
        self
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    ///
    /// GFM is enabled by default. When enabled, the parser supports tables,
    /// strikethrough, task lists and definition lists.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Directive features in use.
    #[must_use]
    pub fn features(&self) -> &DirectiveFeatures {
        &self.features
    }

    /// Parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_DEFINITION_LIST
        } else {
            Options::empty()
        }
    }

    /// Render markdown source into preview HTML.
    pub fn render(&self, source: &str) -> RenderResult {
        let mut writer = HtmlWriter::new(FigureImages::new(&self.features));
        let html = writer.write(source, self.parser_options());
        let images = writer.into_handler().directives;

        tracing::debug!(
            source_len = source.len(),
            html_len = html.len(),
            images = images.len(),
            "Rendered preview"
        );

        RenderResult { html, images }
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown with default settings.
///
/// Shorthand for `PreviewRenderer::new().render(source)`.
pub fn render_preview(source: &str) -> RenderResult {
    PreviewRenderer::new().render(source)
}

/// Image handler that replaces images with directive-driven figures.
struct FigureImages<'f> {
    features: &'f DirectiveFeatures,
    directives: Vec<ImageDirective>,
}

impl<'f> FigureImages<'f> {
    fn new(features: &'f DirectiveFeatures) -> Self {
        Self {
            features,
            directives: Vec::new(),
        }
    }
}

impl ImageHandler for FigureImages<'_> {
    fn image(&mut self, src: &str, alt: &str, title: &str, out: &mut String) {
        let directive = ImageDirective::parse_with(alt, self.features);
        Figure::new(&directive, ImageRef::new(src, title))
            .with_full_size_link(self.features.full_size_link)
            .write_html(out);
        self.directives.push(directive);
    }
}
