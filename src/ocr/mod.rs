//! OCR Layer
//!
//! Provider abstraction for converting a cropped frame region to text.
//! The engine itself is external; recognition may legitimately return an
//! empty string when the region carries no readable text.

use async_trait::async_trait;
use thiserror::Error;

use crate::camera::VideoFrame;

/// OCR provider errors
#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine rejected or failed to process the region
    #[error("ocr recognition failed: {0}")]
    Recognition(String),

    /// The region was unusable (empty crop, bad dimensions)
    #[error("invalid ocr region: {0}")]
    InvalidRegion(String),
}

/// An OCR engine that recognizes text in a cropped frame region.
///
/// `language` is an engine-specific hint (e.g. "eng").
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Recognize text in the region. An empty string is a valid result.
    async fn recognize(&self, region: &VideoFrame, language: &str) -> Result<String, OcrError>;
}
