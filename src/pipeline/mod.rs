//! Detection-OCR-Speech Loop
//!
//! Continuously analyzes a live camera stream: each iteration captures a
//! frame, runs the detection provider, publishes an overlay plan, and
//! opportunistically crops the top detection for OCR. Non-empty OCR text
//! can be read aloud through the speech provider, deduplicated against
//! the last spoken text.
//!
//! Iterations are strictly sequential (the next frame is only requested
//! after the current detection call settles). OCR runs as a background
//! task with a single in-flight guard and a minimum spacing between
//! attempts; its completion is discarded if capture stopped in the
//! meantime.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::camera::{CameraConfig, CameraDevice, CameraError, CameraStream, VideoFrame};
use crate::ocr::OcrProvider;
use crate::speech::{SpeechProvider, Utterance, DEFAULT_PITCH, DEFAULT_RATE};
use crate::vision::{
    build_overlay, ClassTable, Detection, DetectionProvider, OverlayBox, VisionError,
};

/// Minimum spacing between OCR attempts
pub const DEFAULT_OCR_COOLDOWN: Duration = Duration::from_millis(1500);

/// Pipeline errors surfaced to the caller. Per-frame and per-OCR-attempt
/// failures are handled internally and never reach this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Camera stream could not be acquired
    #[error("camera error: {0}")]
    Camera(#[from] CameraError),

    /// Detection model failed to load
    #[error("model load error: {0}")]
    ModelLoad(VisionError),

    /// Capture was already started
    #[error("capture is already running")]
    AlreadyRunning,

    /// The loop was run without a started capture
    #[error("capture is not running")]
    NotRunning,
}

/// Configuration for the live pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Camera stream constraints
    pub camera: CameraConfig,
    /// Minimum spacing between OCR attempts (applies to failures too)
    pub ocr_cooldown: Duration,
    /// Language hint passed to the OCR provider
    pub ocr_language: String,
    /// Whether recognized text is read aloud
    pub speech_enabled: bool,
    /// Language tag for composed utterances
    pub speech_language: String,
    /// Playback rate for composed utterances
    pub speech_rate: f32,
    /// Voice pitch for composed utterances
    pub speech_pitch: f32,
    /// Class behavior table (texty / sensitive flags)
    pub classes: ClassTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            ocr_cooldown: DEFAULT_OCR_COOLDOWN,
            ocr_language: "eng".to_string(),
            speech_enabled: false,
            speech_language: "en-US".to_string(),
            speech_rate: DEFAULT_RATE,
            speech_pitch: DEFAULT_PITCH,
            classes: ClassTable::default(),
        }
    }
}

/// Events published by the pipeline for a consuming UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// Fresh overlay plan for the current frame
    Detections(Vec<OverlayBox>),
    /// Non-empty text recognized inside a detection
    OcrText(String),
    /// An utterance was handed to the speech provider
    Spoken(String),
    /// Capture stopped and transient state was cleared
    Stopped,
}

/// Transient per-session loop state. Mutated by the frame loop and by
/// in-flight OCR tasks, guarded by one mutex.
#[derive(Debug, Default)]
struct LoopState {
    /// Bumped on every stop; OCR completions from an older generation
    /// are discarded
    generation: u64,
    /// Single in-flight OCR guard
    ocr_busy: bool,
    /// Trigger time of the most recent OCR attempt
    last_ocr_at: Option<Instant>,
    /// Last text handed to the speech provider
    last_spoken: Option<String>,
}

/// Cloneable handle for stopping a running pipeline from another task.
///
/// Valid for the capture session it was taken from; take a fresh handle
/// after each `start`.
#[derive(Debug, Clone)]
pub struct PipelineHandle {
    cancel: CancellationToken,
}

impl PipelineHandle {
    /// Request the frame loop to stop. Idempotent.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

/// The live detection pipeline.
///
/// Lifecycle: `start` acquires the camera stream and loads the detection
/// model, `run` drives the frame loop until stopped, `stop` (or dropping
/// the pipeline) releases the camera and clears transient state.
pub struct LivePipeline<D, O, S> {
    detector: D,
    ocr: Arc<O>,
    speech: Arc<S>,
    config: PipelineConfig,
    state: Arc<Mutex<LoopState>>,
    events: mpsc::UnboundedSender<PipelineEvent>,
    stream: Option<Box<dyn CameraStream>>,
    cancel: CancellationToken,
}

impl<D, O, S> LivePipeline<D, O, S>
where
    D: DetectionProvider,
    O: OcrProvider + 'static,
    S: SpeechProvider + 'static,
{
    /// Create a pipeline and the receiving end of its event channel
    pub fn new(
        detector: D,
        ocr: O,
        speech: S,
        config: PipelineConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PipelineEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let pipeline = Self {
            detector,
            ocr: Arc::new(ocr),
            speech: Arc::new(speech),
            config,
            state: Arc::new(Mutex::new(LoopState::default())),
            events,
            stream: None,
            cancel: CancellationToken::new(),
        };
        (pipeline, receiver)
    }

    /// Acquire the camera stream and load the detection model.
    ///
    /// On camera failure the pipeline stays idle. On model load failure
    /// the freshly acquired stream is released before returning.
    pub async fn start(&mut self, camera: &dyn CameraDevice) -> Result<(), PipelineError> {
        if self.stream.is_some() {
            return Err(PipelineError::AlreadyRunning);
        }

        let mut stream = camera.open(&self.config.camera).await?;

        if let Err(e) = self.detector.load().await {
            warn!("detection model failed to load: {}", e);
            stream.stop();
            return Err(PipelineError::ModelLoad(e));
        }

        self.cancel = CancellationToken::new();
        self.stream = Some(stream);
        info!("capture started");
        Ok(())
    }

    /// Cloneable stop handle for the current capture session
    pub fn handle(&self) -> PipelineHandle {
        PipelineHandle {
            cancel: self.cancel.clone(),
        }
    }

    /// Drive the frame loop until stopped or the stream ends.
    ///
    /// Per-frame detection failures are logged and skipped; they never
    /// abort the loop. On exit the camera is released and transient state
    /// cleared, so the pipeline returns to idle.
    pub async fn run(&mut self) -> Result<(), PipelineError> {
        let mut stream = self.stream.take().ok_or(PipelineError::NotRunning)?;
        let cancel = self.cancel.clone();

        loop {
            let frame = tokio::select! {
                _ = cancel.cancelled() => break,
                frame = stream.next_frame() => match frame {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("camera stream ended: {}", e);
                        break;
                    }
                },
            };

            let detections = tokio::select! {
                _ = cancel.cancelled() => break,
                result = self.detector.detect(&frame) => match result {
                    Ok(detections) => detections,
                    Err(e) => {
                        // Non-fatal: skip this frame and keep looping
                        debug!("skipping frame, detection failed: {}", e);
                        continue;
                    }
                },
            };

            let overlay = build_overlay(&detections, &self.config.classes);
            let _ = self.events.send(PipelineEvent::Detections(overlay));

            if let Some(top) = detections.first() {
                self.maybe_start_ocr(top, &frame);
            }
        }

        stream.stop();
        self.finish_session();
        Ok(())
    }

    /// Stop capture and release the camera. Idempotent; safe to call when
    /// already idle. When `run` is active the loop performs its own
    /// teardown after observing the cancellation.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            self.finish_session();
        }
    }

    /// Conditionally kick off a background OCR attempt for the top
    /// detection. Gated on the class being texty, no OCR in flight, and
    /// the cooldown having elapsed since the last attempt.
    fn maybe_start_ocr(&self, top: &Detection, frame: &VideoFrame) {
        if !self.config.classes.behavior(&top.class).texty {
            return;
        }

        let triggered_at = Instant::now();
        let generation = {
            let mut state = self.state.lock();
            if state.ocr_busy {
                return;
            }
            if let Some(last) = state.last_ocr_at {
                if triggered_at.duration_since(last) < self.config.ocr_cooldown {
                    return;
                }
            }
            state.ocr_busy = true;
            state.generation
        };

        let region = frame.crop(&top.bbox);
        let class = top.class.clone();
        let ocr = Arc::clone(&self.ocr);
        let speech = Arc::clone(&self.speech);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let language = self.config.ocr_language.clone();
        let speech_language = self.config.speech_language.clone();
        let speech_enabled = self.config.speech_enabled;
        let speech_rate = self.config.speech_rate;
        let speech_pitch = self.config.speech_pitch;

        tokio::spawn(async move {
            let result = ocr.recognize(&region, &language).await;

            let mut state = state.lock();
            if state.generation != generation {
                // Capture stopped while this call was in flight
                debug!("discarding stale ocr result");
                return;
            }

            // The attempt counts toward the cooldown whether it succeeded
            // or not
            state.ocr_busy = false;
            state.last_ocr_at = Some(triggered_at);

            match result {
                Ok(text) => {
                    let text = text.trim().to_string();
                    if text.is_empty() {
                        return;
                    }
                    let _ = events.send(PipelineEvent::OcrText(text.clone()));
                    if speech_enabled && state.last_spoken.as_deref() != Some(text.as_str()) {
                        let utterance = Utterance::caption(&class, &text, &speech_language)
                            .with_rate(speech_rate)
                            .with_pitch(speech_pitch);
                        speech.speak(utterance);
                        state.last_spoken = Some(text.clone());
                        let _ = events.send(PipelineEvent::Spoken(text));
                    }
                }
                Err(e) => debug!("ocr attempt failed: {}", e),
            }
        });
    }

    /// Clear transient session state and notify consumers. Bumping the
    /// generation invalidates any OCR call still in flight.
    fn finish_session(&mut self) {
        self.speech.cancel();
        {
            let mut state = self.state.lock();
            state.generation = state.generation.wrapping_add(1);
            state.ocr_busy = false;
            state.last_ocr_at = None;
            state.last_spoken = None;
        }
        let _ = self.events.send(PipelineEvent::Stopped);
        info!("capture stopped");
    }
}

impl<D, O, S> Drop for LivePipeline<D, O, S> {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
        // Invalidate any OCR call still in flight
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.ocr_busy = false;
    }
}
