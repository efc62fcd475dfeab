//! Versioned directive feature flags.
//!
//! Older editor builds understood only part of the directive syntax. Rather
//! than keeping one parser per build, a single parser consults
//! [`DirectiveFeatures`] to decide which keys it honors.

/// Display text used when an image has no alt text.
pub const PLACEHOLDER_ALT: &str = "Image";

/// Latest directive syntax version.
pub const LATEST_VERSION: u8 = 3;

/// Which directive keys and rendering extras are enabled.
///
/// A disabled key is ignored by the parser, leaving the field at its default.
///
/// | version | `scale` | `caption` | `align` |
/// |---------|---------|-----------|---------|
/// | 1       | yes     | no        | no      |
/// | 2       | yes     | yes       | no      |
/// | 3       | yes     | yes       | yes     |
///
/// `full_size_link` is independent of the version and off by default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveFeatures {
    /// Honor `scale=`.
    pub scale: bool,
    /// Honor `caption=`.
    pub caption: bool,
    /// Honor `align=`.
    pub align: bool,
    /// Emit `data-fullsrc` on figure images so viewers can open the original.
    pub full_size_link: bool,
    /// Display text used when the alt base is empty.
    pub placeholder_alt: String,
}

impl DirectiveFeatures {
    /// Version 1: scale only.
    #[must_use]
    pub fn v1() -> Self {
        Self {
            scale: true,
            caption: false,
            align: false,
            full_size_link: false,
            placeholder_alt: PLACEHOLDER_ALT.to_owned(),
        }
    }

    /// Version 2: scale and caption.
    #[must_use]
    pub fn v2() -> Self {
        Self {
            caption: true,
            ..Self::v1()
        }
    }

    /// Version 3: scale, caption and alignment.
    #[must_use]
    pub fn v3() -> Self {
        Self {
            align: true,
            ..Self::v2()
        }
    }

    /// Features for a syntax version, or `None` if the version is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_renderer::directive::DirectiveFeatures;
    ///
    /// assert_eq!(DirectiveFeatures::for_version(2), Some(DirectiveFeatures::v2()));
    /// assert_eq!(DirectiveFeatures::for_version(9), None);
    /// ```
    #[must_use]
    pub fn for_version(version: u8) -> Option<Self> {
        match version {
            1 => Some(Self::v1()),
            2 => Some(Self::v2()),
            3 => Some(Self::v3()),
            _ => None,
        }
    }

    /// Enable or disable `data-fullsrc` on rendered images.
    #[must_use]
    pub fn with_full_size_link(mut self, enabled: bool) -> Self {
        self.full_size_link = enabled;
        self
    }

    /// Set the placeholder used for empty alt text.
    #[must_use]
    pub fn with_placeholder_alt(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_alt = placeholder.into();
        self
    }
}

impl Default for DirectiveFeatures {
    fn default() -> Self {
        Self::v3()
    }
}
