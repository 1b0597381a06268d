//! Vision Layer
//!
//! Detection data model, the detection-provider abstraction, the class
//! behavior table, and the per-frame overlay plan. The actual object
//! detection model is an external provider; this layer defines the
//! contract and interprets its output.

pub mod classes;
pub mod overlay;

pub use classes::{ClassBehavior, ClassTable};
pub use overlay::{build_overlay, OverlayBox, OverlayStyle};

use async_trait::async_trait;
use thiserror::Error;

use crate::camera::VideoFrame;

/// Detection provider errors
#[derive(Debug, Error)]
pub enum VisionError {
    /// The detection model failed to load
    #[error("detection model failed to load: {0}")]
    ModelLoad(String),

    /// A single inference call failed; non-fatal per frame
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Bounding box in pixel coordinates of the source frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A single object detection for one frame
#[derive(Debug, Clone)]
pub struct Detection {
    /// Class label reported by the provider (e.g. "book", "stop sign")
    pub class: String,
    /// Confidence score in [0, 1]
    pub score: f32,
    /// Bounding box in frame pixel coordinates
    pub bbox: BoundingBox,
}

/// An object detection model producing per-frame detections.
///
/// The provider's own result ordering is preserved downstream; the first
/// element is treated as the top detection.
#[async_trait]
pub trait DetectionProvider: Send {
    /// Load the model. Called once when capture starts; must be safe to
    /// call again after a previous successful load.
    async fn load(&mut self) -> Result<(), VisionError>;

    /// Run inference on a frame
    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, VisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_construction() {
        let detection = Detection {
            class: "book".to_string(),
            score: 0.87,
            bbox: BoundingBox {
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 50.0,
            },
        };
        assert_eq!(detection.class, "book");
        assert!((detection.score - 0.87).abs() < f32::EPSILON);
    }
}
