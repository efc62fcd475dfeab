//! Figure layout for directive-bearing images.
//!
//! Turns an [`ImageDirective`] and the image it belongs to into a captioned,
//! aligned `<figure>` box.

use std::fmt::Write;

use crate::directive::{Align, ImageDirective};
use crate::state::escape_html;

/// Chrome shared by every figure box. `clear:both` keeps a figure from
/// overlapping earlier floated figures.
const BOX_STYLE: &str = "background:#f1f1f1; padding:5px; border:1px solid #ccc; clear:both;";
const IMAGE_STYLE: &str = "width:100%; display:block; height:auto;";
const CAPTION_STYLE: &str = "text-align:center; color:#555; font-size:smaller;";

/// Image reference as found in the markdown source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageRef {
    /// Image URL, unchanged from the source.
    pub src: String,
    /// Optional image title (empty when absent).
    pub title: String,
}

impl ImageRef {
    /// Create an image reference.
    #[must_use]
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
        }
    }
}

/// Side a floated figure sticks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatSide {
    Left,
    Right,
}

/// How a figure box sits in the text flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Floated box, text flows around the opposite side.
    Float(FloatSide),
    /// Horizontally centered block without float.
    Centered,
}

impl From<Align> for LayoutMode {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Self::Float(FloatSide::Left),
            Align::Right => Self::Float(FloatSide::Right),
            Align::Center => Self::Centered,
        }
    }
}

/// A laid-out image figure.
///
/// # Example
///
/// ```
/// use folio_renderer::{Figure, ImageRef, LayoutMode, FloatSide};
/// use folio_renderer::directive::ImageDirective;
///
/// let directive = ImageDirective::parse("Map | scale=40 | align=right | caption=Route");
/// let figure = Figure::new(&directive, ImageRef::new("map.png", ""));
///
/// assert_eq!(figure.mode(), LayoutMode::Float(FloatSide::Right));
/// let html = figure.to_html();
/// assert!(html.contains("float:right; margin:0 0 10px 10px; width:40%;"));
/// assert!(html.contains("<figcaption"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Figure {
    mode: LayoutMode,
    width_percent: u8,
    alt: String,
    caption: Option<String>,
    image: ImageRef,
    full_size_link: bool,
}

impl Figure {
    /// Lay out `image` according to `directive`.
    #[must_use]
    pub fn new(directive: &ImageDirective, image: ImageRef) -> Self {
        Self {
            mode: directive.align.into(),
            width_percent: directive.scale_percent,
            alt: directive.alt_base.clone(),
            caption: directive.caption.as_text().map(str::to_owned),
            image,
            full_size_link: false,
        }
    }

    /// Add `data-fullsrc` pointing at the image source.
    #[must_use]
    pub fn with_full_size_link(mut self, enabled: bool) -> Self {
        self.full_size_link = enabled;
        self
    }

    /// Layout mode selected by the directive alignment.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Box width in percent of the containing block.
    #[must_use]
    pub fn width_percent(&self) -> u8 {
        self.width_percent
    }

    /// Caption text, if the figure has one.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Inline style of the figure box.
    #[must_use]
    pub fn box_style(&self) -> String {
        let width = self.width_percent;
        let placement = match self.mode {
            LayoutMode::Float(FloatSide::Left) => {
                format!("float:left; margin:0 10px 10px 0; width:{width}%;")
            }
            LayoutMode::Float(FloatSide::Right) => {
                format!("float:right; margin:0 0 10px 10px; width:{width}%;")
            }
            LayoutMode::Centered => format!("margin:0 auto; width:{width}%; display:block;"),
        };
        format!("{BOX_STYLE} {placement}")
    }

    /// Write the figure as HTML.
    pub fn write_html(&self, out: &mut String) {
        write!(out, r#"<figure style="{}">"#, self.box_style()).unwrap();

        write!(out, r#"<img src="{}""#, escape_html(&self.image.src)).unwrap();
        if !self.image.title.is_empty() {
            write!(out, r#" title="{}""#, escape_html(&self.image.title)).unwrap();
        }
        write!(out, r#" alt="{}""#, escape_html(&self.alt)).unwrap();
        if self.full_size_link {
            write!(out, r#" data-fullsrc="{}""#, escape_html(&self.image.src)).unwrap();
        }
        write!(out, r#" style="{IMAGE_STYLE}">"#).unwrap();

        if let Some(caption) = &self.caption {
            write!(
                out,
                r#"<figcaption style="{CAPTION_STYLE}">{}</figcaption>"#,
                escape_html(caption)
            )
            .unwrap();
        }

        out.push_str("</figure>");
    }

    /// Render the figure to a new HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn figure(alt: &str) -> Figure {
        Figure::new(&ImageDirective::parse(alt), ImageRef::new("img/a.png", ""))
    }

    #[test]
    fn test_centered_without_caption() {
        assert_eq!(
            figure("Photo").to_html(),
            concat!(
                r#"<figure style="background:#f1f1f1; padding:5px; border:1px solid #ccc; clear:both; "#,
                r#"margin:0 auto; width:100%; display:block;">"#,
                r#"<img src="img/a.png" alt="Photo" style="width:100%; display:block; height:auto;">"#,
                "</figure>"
            )
        );
    }

    #[test]
    fn test_left_float_with_caption() {
        assert_eq!(
            figure("Pic | scale=80 | caption=A caption | align=left").to_html(),
            concat!(
                r#"<figure style="background:#f1f1f1; padding:5px; border:1px solid #ccc; clear:both; "#,
                r#"float:left; margin:0 10px 10px 0; width:80%;">"#,
                r#"<img src="img/a.png" alt="Pic" style="width:100%; display:block; height:auto;">"#,
                r#"<figcaption style="text-align:center; color:#555; font-size:smaller;">A caption</figcaption>"#,
                "</figure>"
            )
        );
    }

    #[test]
    fn test_right_float_margin_on_left() {
        let style = figure("X | align=right | scale=25").box_style();
        assert!(style.ends_with("float:right; margin:0 0 10px 10px; width:25%;"));
    }

    #[test]
    fn test_every_mode_clears_floats() {
        for align in ["left", "right", "center"] {
            let style = figure(&format!("X | align={align}")).box_style();
            assert!(style.contains("clear:both;"), "{align}: {style}");
        }
    }

    #[test]
    fn test_mode_from_align() {
        assert_eq!(LayoutMode::from(Align::Left), LayoutMode::Float(FloatSide::Left));
        assert_eq!(LayoutMode::from(Align::Right), LayoutMode::Float(FloatSide::Right));
        assert_eq!(LayoutMode::from(Align::Center), LayoutMode::Centered);
    }

    #[test]
    fn test_caption_escaped() {
        let html = figure("X | caption=<b>bold</b> & co").to_html();
        assert!(html.contains(">&lt;b&gt;bold&lt;/b&gt; &amp; co</figcaption>"));
    }

    #[test]
    fn test_title_and_full_size_link() {
        let directive = ImageDirective::parse("X");
        let html = Figure::new(&directive, ImageRef::new("a.png?w=1&h=2", "Title"))
            .with_full_size_link(true)
            .to_html();
        assert!(html.contains(
            r#"<img src="a.png?w=1&amp;h=2" title="Title" alt="X" data-fullsrc="a.png?w=1&amp;h=2""#
        ));
    }

    #[test]
    fn test_render_is_idempotent() {
        let a = figure("X | scale=30 | caption=c | align=right");
        let b = figure("X|scale=30|caption=c|align=right");
        assert_eq!(a, b);
        assert_eq!(a.to_html(), b.to_html());
        assert_eq!(a.to_html(), a.to_html());
    }

    #[test]
    fn test_accessors() {
        let figure = figure("X | scale=55 | caption=Note");
        assert_eq!(figure.width_percent(), 55);
        assert_eq!(figure.caption(), Some("Note"));
        assert_eq!(figure.mode(), LayoutMode::Centered);
    }
}
