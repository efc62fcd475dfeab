//! Content service abstraction.
//!
//! [`ContentService`] is the seam between the editor and the backend that
//! stores images, tags and pages. Transports decode responses with
//! [`crate::wire`] and map failures to [`ContentError`].

use crate::error::ContentError;
use crate::model::{ImageRef, ImageUpload, Page, Tag, UploadedImage};

/// Content service consumed by the editor.
///
/// Implementations talk to whatever backend stores images and pages. All
/// calls are request/response; the caller decides when to apply results.
pub trait ContentService: Send + Sync {
    /// Upload an image and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the upload is refused or fails. No
    /// partial result is ever returned.
    fn upload_image(&self, upload: &ImageUpload) -> Result<UploadedImage, ContentError>;

    /// List images available for insertion.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the listing cannot be fetched.
    fn list_images(&self) -> Result<Vec<ImageRef>, ContentError>;

    /// List all tags.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the listing cannot be fetched.
    fn list_tags(&self) -> Result<Vec<Tag>, ContentError>;

    /// List all pages with their tags.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the listing cannot be fetched.
    fn list_pages(&self) -> Result<Vec<Page>, ContentError>;
}
