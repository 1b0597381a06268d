//! SmartVision - live camera object detection with OCR read-aloud
//!
//! A toolkit built around a detection-OCR-speech loop: frames from a
//! camera stream are run through an object detection provider, the top
//! detection is opportunistically cropped for OCR, and recognized text
//! can be read aloud. Detection, OCR, speech, and the camera itself are
//! pluggable providers; this crate owns the orchestration.
//!
//! Alongside the live pipeline it ships standalone text utilities
//! (extractive summarization, keyword highlighting) and a translation
//! client with endpoint fallback.

pub mod camera;
pub mod config;
pub mod ocr;
pub mod pipeline;
pub mod speech;
pub mod text;
pub mod translate;
pub mod vision;

pub use camera::{CameraConfig, CameraDevice, CameraStream, VideoFrame};
pub use ocr::OcrProvider;
pub use pipeline::{LivePipeline, PipelineConfig, PipelineEvent, PipelineHandle};
pub use speech::{SpeechProvider, Utterance};
pub use vision::{BoundingBox, ClassTable, Detection, DetectionProvider};
