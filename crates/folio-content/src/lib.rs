//! Content service contract for the folio editor.
//!
//! The editor only talks to its backend through the [`ContentService`] trait:
//! image upload, gallery listing, tags and pages. This crate holds that trait,
//! the catalog types, the JSON payload decoders and the tag filter used on the
//! page list.
//!
//! # Architecture
//!
//! - [`ContentService`] trait with upload and listing methods
//! - [`wire`] decoders for raw service responses
//! - [`TagFilter`] for And/Or page filtering
//! - [`MockContentService`] for testing (behind `mock` feature flag)

mod error;
mod filter;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod model;
mod service;
pub mod wire;

pub use error::{ContentError, ContentErrorKind};
pub use filter::{FilterMode, TagFilter};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentService;
pub use model::{ALLOWED_IMAGE_EXTENSIONS, ImageRef, ImageUpload, Page, Tag, TagId, UploadedImage};
pub use service::ContentService;
