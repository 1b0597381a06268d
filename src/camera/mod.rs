//! Camera Layer
//!
//! Abstracts the camera device behind traits so the live pipeline can run
//! against any stream source. Acquiring a stream is an asynchronous,
//! permission-gated operation; releasing it must stop the underlying
//! tracks immediately.

pub mod frame;

pub use frame::VideoFrame;

use async_trait::async_trait;
use thiserror::Error;

/// Camera acquisition errors
#[derive(Debug, Error)]
pub enum CameraError {
    /// Permission to use the camera was denied
    #[error("camera access denied")]
    PermissionDenied,

    /// No suitable camera device is available
    #[error("no camera device available")]
    Unavailable,

    /// The stream ended or the device disconnected mid-capture
    #[error("camera stream ended: {0}")]
    StreamEnded(String),
}

/// Camera stream configuration
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Preferred frame width in pixels
    pub ideal_width: u32,
    /// Preferred frame height in pixels
    pub ideal_height: u32,
    /// Prefer a rear-facing camera when multiple devices exist
    pub prefer_rear_facing: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            ideal_width: 1280,
            ideal_height: 720,
            prefer_rear_facing: true,
        }
    }
}

/// A camera device that can produce live streams
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Open a live stream, requesting permission if needed
    async fn open(&self, config: &CameraConfig) -> Result<Box<dyn CameraStream>, CameraError>;
}

/// A live stream of video frames
#[async_trait]
pub trait CameraStream: Send {
    /// Wait for the next frame from the device
    async fn next_frame(&mut self) -> Result<VideoFrame, CameraError>;

    /// Release the underlying tracks. Idempotent.
    fn stop(&mut self);
}
