//! Mock content service for testing.
//!
//! Provides [`MockContentService`] for unit testing without a backend.

use std::sync::RwLock;

use crate::error::ContentError;
use crate::model::{ImageRef, ImageUpload, Page, Tag, UploadedImage};
use crate::service::ContentService;

/// Mock content service for testing.
///
/// Holds catalog data in memory. Uploads succeed with a URL derived from the
/// filename and an upload counter, unless a failure is configured.
///
/// # Example
///
/// ```ignore
/// use folio_content::{ContentService, ImageUpload, MockContentService};
///
/// let service = MockContentService::new().with_base_url("https://cdn.test");
/// let image = service.upload_image(&ImageUpload::new("cat.png", vec![1])).unwrap();
/// assert_eq!(image.url, "https://cdn.test/1-cat.png");
/// ```
#[derive(Debug)]
pub struct MockContentService {
    base_url: String,
    images: RwLock<Vec<ImageRef>>,
    tags: RwLock<Vec<Tag>>,
    pages: RwLock<Vec<Page>>,
    upload_failure: RwLock<Option<ContentError>>,
    uploads: RwLock<Vec<ImageUpload>>,
}

impl Default for MockContentService {
    fn default() -> Self {
        Self {
            base_url: "https://images.test".to_owned(),
            images: RwLock::new(Vec::new()),
            tags: RwLock::new(Vec::new()),
            pages: RwLock::new(Vec::new()),
            upload_failure: RwLock::new(None),
            uploads: RwLock::new(Vec::new()),
        }
    }
}

impl MockContentService {
    /// Create an empty mock service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL prefix for uploaded images.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Add a gallery image.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_image(self, url: impl Into<String>) -> Self {
        self.images.write().unwrap().push(ImageRef {
            url: url.into(),
            public_id: None,
        });
        self
    }

    /// Add a tag.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_tag(self, tag: Tag) -> Self {
        self.tags.write().unwrap().push(tag);
        self
    }

    /// Add a page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    /// Make every subsequent upload fail with `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn fail_uploads(&self, error: ContentError) {
        *self.upload_failure.write().unwrap() = Some(error);
    }

    /// Let uploads succeed again.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn restore_uploads(&self) {
        *self.upload_failure.write().unwrap() = None;
    }

    /// Uploads received so far, including failed ones.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.uploads.read().unwrap().clone()
    }
}

impl ContentService for MockContentService {
    fn upload_image(&self, upload: &ImageUpload) -> Result<UploadedImage, ContentError> {
        let mut uploads = self.uploads.write().unwrap();
        uploads.push(upload.clone());

        if let Some(err) = self.upload_failure.read().unwrap().clone() {
            return Err(err);
        }
        upload.validate()?;

        let url = format!("{}/{}-{}", self.base_url, uploads.len(), upload.filename);
        self.images.write().unwrap().push(ImageRef {
            url: url.clone(),
            public_id: None,
        });
        Ok(UploadedImage { url })
    }

    fn list_images(&self) -> Result<Vec<ImageRef>, ContentError> {
        Ok(self.images.read().unwrap().clone())
    }

    fn list_tags(&self) -> Result<Vec<Tag>, ContentError> {
        Ok(self.tags.read().unwrap().clone())
    }

    fn list_pages(&self) -> Result<Vec<Page>, ContentError> {
        Ok(self.pages.read().unwrap().clone())
    }
}
