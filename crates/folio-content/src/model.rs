//! Catalog and upload types exchanged with the content service.

use serde::{Deserialize, Serialize};

use crate::ContentError;

/// Tag identifier.
pub type TagId = u64;

/// File extensions accepted for image upload (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// A page tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub tag_id: TagId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// CSS color used for the tag badge.
    #[serde(default)]
    pub color: String,
}

/// A page in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// URL slug.
    pub slug: String,
    /// Page title.
    pub title: String,
    /// Tags attached to the page.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Page {
    /// Whether the page carries the tag.
    #[must_use]
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|t| t.tag_id == tag_id)
    }
}

/// An image available in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public image URL.
    pub url: String,
    /// Service-side identifier, when the service exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// Result of a successful upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Stable URL of the uploaded image, inserted into markdown as-is.
    pub url: String,
}

/// Image file to upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original filename, used to check the extension.
    pub filename: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Create an upload from a filename and contents.
    #[must_use]
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercase file extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.filename.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_lowercase())
    }

    /// Check the upload against the service's acceptance rules.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] with kind `Rejected` if the filename is empty
    /// or the extension is not an accepted image type.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.filename.is_empty() {
            return Err(ContentError::rejected("No filename"));
        }
        match self.extension() {
            Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ContentError::rejected("File not allowed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_partial_tags() {
        let page: Page =
            serde_json::from_str(r#"{"slug":"home","title":"Home","tags":[{"tag_id":3}]}"#)
                .unwrap();
        assert_eq!(page.tags[0].tag_id, 3);
        assert_eq!(page.tags[0].name, "");
        assert!(page.has_tag(3));
        assert!(!page.has_tag(4));
    }

    #[test]
    fn test_page_without_tags() {
        let page: Page = serde_json::from_str(r#"{"slug":"a","title":"A"}"#).unwrap();
        assert!(page.tags.is_empty());
    }

    #[test]
    fn test_image_ref_skips_missing_public_id() {
        let image = ImageRef {
            url: "https://img/x.png".to_owned(),
            public_id: None,
        };
        assert_eq!(
            serde_json::to_string(&image).unwrap(),
            r#"{"url":"https://img/x.png"}"#
        );
    }

    #[test]
    fn test_extension() {
        assert_eq!(ImageUpload::new("cat.PNG", []).extension(), Some("png".to_owned()));
        assert_eq!(ImageUpload::new("archive.tar.gz", []).extension(), Some("gz".to_owned()));
        assert_eq!(ImageUpload::new("README", []).extension(), None);
        assert_eq!(ImageUpload::new("trailing.", []).extension(), None);
    }

    #[test]
    fn test_validate() {
        assert!(ImageUpload::new("photo.jpeg", [1, 2]).validate().is_ok());
        assert!(ImageUpload::new("anim.GIF", []).validate().is_ok());

        let err = ImageUpload::new("script.js", []).validate().unwrap_err();
        assert_eq!(err.message, "File not allowed");

        let err = ImageUpload::new("", []).validate().unwrap_err();
        assert_eq!(err.message, "No filename");
    }
}
