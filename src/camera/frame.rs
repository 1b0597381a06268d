//! Frame data structures for captured video content

use std::time::Instant;

use image::RgbaImage;

use crate::vision::BoundingBox;

/// A single frame captured from a camera stream
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Timestamp when the frame was captured
    pub timestamp: Instant,
}

impl VideoFrame {
    /// Create a new frame from raw RGBA data
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            timestamp: Instant::now(),
        }
    }

    /// Get frame dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Crop the frame to a detection bounding box.
    ///
    /// Coordinates are floored and clamped to the frame bounds, so a box
    /// partially outside the frame yields the intersecting region. An
    /// empty intersection produces a 0x0 frame.
    pub fn crop(&self, bbox: &BoundingBox) -> VideoFrame {
        let x = (bbox.x.max(0.0).floor() as u32).min(self.width);
        let y = (bbox.y.max(0.0).floor() as u32).min(self.height);
        let width = (bbox.width.max(0.0).floor() as u32).min(self.width - x);
        let height = (bbox.height.max(0.0).floor() as u32).min(self.height - y);

        let image = match RgbaImage::from_raw(self.width, self.height, self.data.clone()) {
            Some(image) => image,
            None => return VideoFrame::new(Vec::new(), 0, 0),
        };

        let region = image::imageops::crop_imm(&image, x, y, width, height).to_image();
        let (width, height) = region.dimensions();
        VideoFrame::new(region.into_raw(), width, height)
    }
}
