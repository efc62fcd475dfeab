//! JSON payloads returned by the content service.
//!
//! Responses are decoded here so transports only move bytes.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::model::{ImageRef, Page, Tag, UploadedImage};

/// Upload endpoint response.
///
/// The service answers with either `{"url": ...}` or `{"error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    /// Upload stored.
    Uploaded {
        /// Public URL of the stored image.
        url: String,
    },
    /// Upload refused.
    Failed {
        /// Service message.
        error: String,
    },
}

impl UploadResponse {
    /// Decode a raw upload response.
    ///
    /// # Errors
    ///
    /// Returns a `Decode` error for malformed JSON, and a `Rejected` error
    /// when the service reported a failure or returned an empty URL.
    pub fn decode(body: &str) -> Result<UploadedImage, ContentError> {
        let response: Self = serde_json::from_str(body)?;
        response.into_result()
    }

    /// Convert into the upload outcome.
    ///
    /// # Errors
    ///
    /// Returns a `Rejected` error for failure responses and empty URLs.
    pub fn into_result(self) -> Result<UploadedImage, ContentError> {
        match self {
            Self::Uploaded { url } if url.is_empty() => {
                Err(ContentError::rejected("Upload returned an empty URL"))
            }
            Self::Uploaded { url } => Ok(UploadedImage { url }),
            Self::Failed { error } => {
                tracing::debug!(error = %error, "Upload refused by content service");
                Err(ContentError::rejected(error))
            }
        }
    }
}

/// Gallery listing response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageList {
    /// Images in service order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl ImageList {
    /// Decode a raw gallery listing.
    ///
    /// # Errors
    ///
    /// Returns a `Decode` error for malformed JSON.
    pub fn decode(body: &str) -> Result<Vec<ImageRef>, ContentError> {
        let list: Self = serde_json::from_str(body)?;
        Ok(list.images)
    }
}

/// Decode a raw tag listing (a JSON array of tags).
///
/// # Errors
///
/// Returns a `Decode` error for malformed JSON.
pub fn decode_tags(body: &str) -> Result<Vec<Tag>, ContentError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a raw page listing (a JSON array of pages).
///
/// # Errors
///
/// Returns a `Decode` error for malformed JSON.
pub fn decode_pages(body: &str) -> Result<Vec<Page>, ContentError> {
    Ok(serde_json::from_str(body)?)
}
