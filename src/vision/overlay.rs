//! Per-frame overlay plan
//!
//! Turns a detection list into drawable boxes with labels and a color
//! style. Sensitive classes render in the warning color; everything else
//! is neutral. Rendering itself belongs to the consuming UI layer.

use super::{BoundingBox, ClassTable, Detection};

/// Overlay color style for a detection box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayStyle {
    /// Sensitive class; drawn in the warning color
    Warning,
    /// Ordinary class; drawn in the neutral color
    Neutral,
}

impl OverlayStyle {
    /// RGBA color for this style
    pub fn color(&self) -> (u8, u8, u8, u8) {
        match self {
            OverlayStyle::Warning => (239, 68, 68, 230),
            OverlayStyle::Neutral => (34, 197, 94, 230),
        }
    }
}

/// A single drawable overlay box
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    /// Display label: class name plus rounded confidence percentage
    pub label: String,
    /// Box bounds in frame pixel coordinates
    pub bounds: BoundingBox,
    /// Color style
    pub style: OverlayStyle,
}

/// Build the overlay plan for one frame's detections, preserving the
/// provider's ordering.
pub fn build_overlay(detections: &[Detection], classes: &ClassTable) -> Vec<OverlayBox> {
    detections
        .iter()
        .map(|detection| {
            let style = if classes.behavior(&detection.class).sensitive {
                OverlayStyle::Warning
            } else {
                OverlayStyle::Neutral
            };
            OverlayBox {
                label: format!("{} {}%", detection.class, (detection.score * 100.0).round()),
                bounds: detection.bbox,
                style,
            }
        })
        .collect()
}
