//! Image layout directive.
//!
//! Parses the layout hints carried in image alt text:
//!
//! ```text
//! ![Harbor | scale=80 | caption=At dusk | align=left](harbor.png)
//! ```
//!
//! Parsing never fails. Malformed or unknown segments fall back to defaults so
//! that text written for newer editors still renders in older ones.

use std::fmt;
use std::num::IntErrorKind;

use super::{DirectiveArgs, DirectiveFeatures, PLACEHOLDER_ALT};

/// Smallest accepted scale, in percent of the containing block.
pub const MIN_SCALE: u8 = 10;
/// Largest accepted scale, in percent of the containing block.
pub const MAX_SCALE: u8 = 100;
/// Scale used when the directive omits or garbles `scale=`.
pub const DEFAULT_SCALE: u8 = 100;

/// Literal written in place of an absent caption.
const NO_CAPTION: &str = "-";

/// Horizontal placement of an image figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Floated to the left, text flows on the right.
    Left,
    /// Floated to the right, text flows on the left.
    Right,
    /// Centered block, no float.
    #[default]
    Center,
}

impl Align {
    /// Parse an alignment value, case-insensitively.
    ///
    /// Unrecognized values map to [`Align::Center`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }

    /// Lowercase name as written in directive syntax.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional figure caption.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Caption {
    /// No caption is rendered.
    #[default]
    None,
    /// Caption text shown below the image.
    Text(String),
}

impl Caption {
    /// Parse a caption value.
    ///
    /// Empty values and the `-` placeholder mean no caption.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == NO_CAPTION {
            Self::None
        } else {
            Self::Text(value.to_owned())
        }
    }

    /// Caption text, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Whether there is no caption.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Caption {
    /// Writes the caption as it appears in directive syntax (`-` when absent).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text().unwrap_or(NO_CAPTION))
    }
}

/// Layout description parsed from image alt text.
///
/// Recomputed from the alt text on every render.
///
/// # Example
///
/// ```
/// use folio_renderer::directive::{Align, Caption, ImageDirective};
///
/// let directive = ImageDirective::parse("Harbor | scale=500 | caption=- | align=RIGHT");
/// assert_eq!(directive.alt_base, "Harbor");
/// assert_eq!(directive.scale_percent, 100);
/// assert_eq!(directive.caption, Caption::None);
/// assert_eq!(directive.align, Align::Right);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDirective {
    /// Display alt text.
    pub alt_base: String,
    /// Figure width in percent of the containing block, within
    /// [`MIN_SCALE`]..=[`MAX_SCALE`].
    pub scale_percent: u8,
    /// Caption rendered below the image.
    pub caption: Caption,
    /// Horizontal placement.
    pub align: Align,
}

impl ImageDirective {
    /// Build a directive from raw dialog values.
    ///
    /// Normalizes the same way parsing does: blank alt text becomes the
    /// placeholder, the scale is clamped, and blank or `-` captions become
    /// [`Caption::None`]. Line breaks are folded into spaces.
    #[must_use]
    pub fn new(alt_base: &str, scale_percent: i64, caption: &str, align: Align) -> Self {
        Self::new_with(alt_base, scale_percent, caption, align, PLACEHOLDER_ALT)
    }

    /// Like [`new`](Self::new), with a custom placeholder for blank alt text.
    #[must_use]
    pub fn new_with(
        alt_base: &str,
        scale_percent: i64,
        caption: &str,
        align: Align,
        placeholder: &str,
    ) -> Self {
        Self {
            alt_base: base_or_placeholder(&single_line(alt_base), placeholder),
            scale_percent: clamp_scale(scale_percent),
            caption: Caption::parse(&single_line(caption)),
            align,
        }
    }

    /// Parse alt text with every directive feature enabled.
    #[must_use]
    pub fn parse(alt: &str) -> Self {
        Self::parse_with(alt, &DirectiveFeatures::default())
    }

    /// Parse alt text, honoring only the keys enabled in `features`.
    #[must_use]
    pub fn parse_with(alt: &str, features: &DirectiveFeatures) -> Self {
        let args = DirectiveArgs::parse(alt);
        let mut directive = Self {
            alt_base: base_or_placeholder(&args.base, &features.placeholder_alt),
            scale_percent: DEFAULT_SCALE,
            caption: Caption::None,
            align: Align::Center,
        };

        for (key, value) in &args.attrs {
            match key.as_str() {
                "scale" if features.scale => directive.scale_percent = parse_scale(value),
                "caption" if features.caption => directive.caption = Caption::parse(value),
                "align" if features.align => directive.align = Align::parse(value),
                _ => {}
            }
        }

        directive
    }

    /// Canonical alt text: `base | scale=S | caption=C | align=A`.
    ///
    /// Every segment is always written, even when it holds the default, so
    /// that [`parse`](Self::parse) restores the same directive.
    #[must_use]
    pub fn to_alt(&self) -> String {
        format!(
            "{} | scale={} | caption={} | align={}",
            self.alt_base, self.scale_percent, self.caption, self.align
        )
    }

    /// Canonical markdown image: `![<alt>](<url>)`.
    ///
    /// Brackets and backslashes in the alt text are backslash-escaped and
    /// line breaks become spaces, so the literal always parses as one image.
    /// The preview reads alt text back with the escapes removed.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_renderer::directive::{Align, ImageDirective};
    ///
    /// let directive = ImageDirective::new("Pic", 80, "A caption", Align::Left);
    /// assert_eq!(
    ///     directive.to_markdown("http://x/y.png"),
    ///     "![Pic | scale=80 | caption=A caption | align=left](http://x/y.png)"
    /// );
    /// ```
    #[must_use]
    pub fn to_markdown(&self, url: &str) -> String {
        let mut alt = String::new();
        for c in single_line(&self.to_alt()).chars() {
            if matches!(c, '\\' | '[' | ']') {
                alt.push('\\');
            }
            alt.push(c);
        }
        format!("![{alt}]({url})")
    }
}

impl Default for ImageDirective {
    fn default() -> Self {
        Self {
            alt_base: PLACEHOLDER_ALT.to_owned(),
            scale_percent: DEFAULT_SCALE,
            caption: Caption::None,
            align: Align::Center,
        }
    }
}

fn base_or_placeholder(base: &str, placeholder: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        placeholder.to_owned()
    } else {
        base.to_owned()
    }
}

fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

/// Clamp a scale into [`MIN_SCALE`]..=[`MAX_SCALE`].
#[must_use]
pub fn clamp_scale(value: i64) -> u8 {
    let clamped = value.clamp(i64::from(MIN_SCALE), i64::from(MAX_SCALE));
    u8::try_from(clamped).unwrap_or(DEFAULT_SCALE)
}

/// Parse a `scale=` value.
///
/// Integers are clamped, integers too large for `i64` saturate to the nearest
/// bound, anything else is the default.
fn parse_scale(value: &str) -> u8 {
    match value.parse::<i64>() {
        Ok(n) => clamp_scale(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => MAX_SCALE,
            IntErrorKind::NegOverflow => MIN_SCALE,
            _ => DEFAULT_SCALE,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_alt_uses_defaults() {
        let directive = ImageDirective::parse("X");
        assert_eq!(directive.alt_base, "X");
        assert_eq!(directive.scale_percent, 100);
        assert_eq!(directive.caption, Caption::None);
        assert_eq!(directive.align, Align::Center);
    }

    #[test]
    fn test_empty_alt_uses_placeholder() {
        assert_eq!(ImageDirective::parse("").alt_base, PLACEHOLDER_ALT);
        assert_eq!(ImageDirective::parse("  | scale=50").alt_base, PLACEHOLDER_ALT);
    }

    #[test]
    fn test_custom_placeholder() {
        let features = DirectiveFeatures::v3().with_placeholder_alt("Obrázok");
        assert_eq!(ImageDirective::parse_with("", &features).alt_base, "Obrázok");
    }

    #[test]
    fn test_full_directive() {
        let directive = ImageDirective::parse("Pic | scale=80 | caption=A caption | align=left");
        assert_eq!(
            directive,
            ImageDirective {
                alt_base: "Pic".to_owned(),
                scale_percent: 80,
                caption: Caption::Text("A caption".to_owned()),
                align: Align::Left,
            }
        );
    }

    #[test]
    fn test_scale_clamped_high() {
        assert_eq!(ImageDirective::parse("X | scale=500").scale_percent, 100);
    }

    #[test]
    fn test_scale_clamped_low() {
        assert_eq!(ImageDirective::parse("X | scale=1").scale_percent, 10);
        assert_eq!(ImageDirective::parse("X | scale=0").scale_percent, 10);
        assert_eq!(ImageDirective::parse("X | scale=-40").scale_percent, 10);
    }

    #[test]
    fn test_scale_non_numeric_is_default() {
        assert_eq!(ImageDirective::parse("X | scale=abc").scale_percent, 100);
        assert_eq!(ImageDirective::parse("X | scale=").scale_percent, 100);
        assert_eq!(ImageDirective::parse("X | scale=50%").scale_percent, 100);
        assert_eq!(ImageDirective::parse("X | scale=12.5").scale_percent, 100);
    }

    #[test]
    fn test_scale_overflow_saturates() {
        assert_eq!(
            ImageDirective::parse("X | scale=99999999999999999999999").scale_percent,
            100
        );
        assert_eq!(
            ImageDirective::parse("X | scale=-99999999999999999999999").scale_percent,
            10
        );
    }

    #[test]
    fn test_scale_bounds_kept() {
        assert_eq!(ImageDirective::parse("X | scale=10").scale_percent, 10);
        assert_eq!(ImageDirective::parse("X | scale=100").scale_percent, 100);
        assert_eq!(ImageDirective::parse("X | scale= 55 ").scale_percent, 55);
    }

    #[test]
    fn test_caption_suppressed() {
        assert_eq!(ImageDirective::parse("X | caption=-").caption, Caption::None);
        assert_eq!(ImageDirective::parse("X | caption=").caption, Caption::None);
        assert_eq!(ImageDirective::parse("X | caption=   ").caption, Caption::None);
    }

    #[test]
    fn test_caption_keeps_spaces_inside() {
        let directive = ImageDirective::parse("X | caption=  Old town, 1910  ");
        assert_eq!(directive.caption.as_text(), Some("Old town, 1910"));
    }

    #[test]
    fn test_align_case_insensitive() {
        assert_eq!(ImageDirective::parse("X | align=Right").align, Align::Right);
        assert_eq!(ImageDirective::parse("X | align=LEFT").align, Align::Left);
    }

    #[test]
    fn test_align_unknown_is_center() {
        assert_eq!(ImageDirective::parse("X | align=justify").align, Align::Center);
        assert_eq!(ImageDirective::parse("X | align=").align, Align::Center);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let directive = ImageDirective::parse("X | border=2 | scale=30 | rotate=90");
        assert_eq!(directive.scale_percent, 30);
        assert_eq!(directive.align, Align::Center);
    }

    #[test]
    fn test_keys_case_sensitive() {
        assert_eq!(ImageDirective::parse("X | SCALE=30").scale_percent, 100);
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let directive = ImageDirective::parse("X | align=left | align=right");
        assert_eq!(directive.align, Align::Right);
    }

    #[test]
    fn test_v1_ignores_caption_and_align() {
        let directive =
            ImageDirective::parse_with("X | scale=40 | caption=c | align=left", &DirectiveFeatures::v1());
        assert_eq!(directive.scale_percent, 40);
        assert_eq!(directive.caption, Caption::None);
        assert_eq!(directive.align, Align::Center);
    }

    #[test]
    fn test_v2_ignores_align() {
        let directive =
            ImageDirective::parse_with("X | caption=c | align=left", &DirectiveFeatures::v2());
        assert_eq!(directive.caption.as_text(), Some("c"));
        assert_eq!(directive.align, Align::Center);
    }

    #[test]
    fn test_to_alt_writes_every_segment() {
        let directive = ImageDirective::parse("X");
        assert_eq!(directive.to_alt(), "X | scale=100 | caption=- | align=center");
    }

    #[test]
    fn test_round_trip_all_domains() {
        let captions = [
            Caption::None,
            Caption::Text("A caption".to_owned()),
            Caption::Text("x=y, with = signs".to_owned()),
            Caption::Text("Náměstí v létě".to_owned()),
        ];
        for scale in MIN_SCALE..=MAX_SCALE {
            for align in [Align::Left, Align::Right, Align::Center] {
                for caption in &captions {
                    let directive = ImageDirective {
                        alt_base: "Pic".to_owned(),
                        scale_percent: scale,
                        caption: caption.clone(),
                        align,
                    };
                    assert_eq!(ImageDirective::parse(&directive.to_alt()), directive);
                }
            }
        }
    }

    #[test]
    fn test_new_normalizes_dialog_values() {
        let directive = ImageDirective::new("  ", 0, "  ", Align::Right);
        assert_eq!(directive.alt_base, PLACEHOLDER_ALT);
        assert_eq!(directive.scale_percent, 10);
        assert_eq!(directive.caption, Caption::None);
        assert_eq!(directive.align, Align::Right);
    }

    #[test]
    fn test_canonical_markdown() {
        let directive = ImageDirective::new("Pic", 80, "A caption", Align::Left);
        assert_eq!(
            directive.to_markdown("http://x/y.png"),
            "![Pic | scale=80 | caption=A caption | align=left](http://x/y.png)"
        );
    }

    #[test]
    fn test_new_folds_line_breaks() {
        let directive = ImageDirective::new("Two\nlines", 50, "a\r\nb", Align::Left);
        assert_eq!(directive.alt_base, "Two lines");
        assert_eq!(directive.caption.as_text(), Some("a b"));
    }

    #[test]
    fn test_new_with_placeholder() {
        let directive = ImageDirective::new_with("", 50, "", Align::Center, "Obrázok");
        assert_eq!(directive.alt_base, "Obrázok");
    }

    #[test]
    fn test_markdown_escapes_brackets() {
        let directive = ImageDirective::new("[draft]", 50, r"a]b\c", Align::Left);
        assert_eq!(
            directive.to_markdown("u.png"),
            r"![\[draft\] | scale=50 | caption=a\]b\\c | align=left](u.png)"
        );
    }

    #[test]
    fn test_markdown_from_literal_with_newline() {
        let directive = ImageDirective {
            caption: Caption::Text("one\ntwo".to_owned()),
            ..ImageDirective::default()
        };
        assert_eq!(
            directive.to_markdown("u.png"),
            "![Image | scale=100 | caption=one two | align=center](u.png)"
        );
    }

    #[test]
    fn test_clamp_scale() {
        assert_eq!(clamp_scale(i64::MIN), 10);
        assert_eq!(clamp_scale(42), 42);
        assert_eq!(clamp_scale(i64::MAX), 100);
    }
}
