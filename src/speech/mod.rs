//! Speech Layer
//!
//! Provider abstraction for text-to-speech playback plus utterance
//! composition. Playback is fire-and-forget relative to the caller; a
//! provider queues or plays audio on its own and supports cancelling
//! whatever is in progress.

use serde::{Deserialize, Serialize};

/// Default speech rate
pub const DEFAULT_RATE: f32 = 1.0;

/// Default speech pitch
pub const DEFAULT_PITCH: f32 = 1.05;

/// A single utterance handed to the speech provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// BCP 47 language tag hint (e.g. "en-US")
    pub language: String,
    /// Playback rate multiplier
    pub rate: f32,
    /// Voice pitch multiplier
    pub pitch: f32,
}

impl Utterance {
    /// Create an utterance with the default rate and pitch
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }

    /// Compose the caption spoken when OCR finds text inside a detection
    pub fn caption(class: &str, text: &str, language: &str) -> Self {
        Self::new(format!("Detected {}. Label says {}.", class, text), language)
    }

    /// Set the playback rate
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    /// Set the voice pitch
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}

/// A text-to-speech playback facility
pub trait SpeechProvider: Send + Sync {
    /// Queue an utterance for playback. Must not block the caller.
    fn speak(&self, utterance: Utterance);

    /// Cancel any playback in progress
    fn cancel(&self);
}

/// Speech provider that discards every utterance. Used when speech output
/// is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechProvider for NullSpeech {
    fn speak(&self, _utterance: Utterance) {}

    fn cancel(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_composition() {
        let utterance = Utterance::caption("book", "Hello World", "en-US");
        assert_eq!(utterance.text, "Detected book. Label says Hello World.");
        assert_eq!(utterance.language, "en-US");
    }

    #[test]
    fn test_default_rate_and_pitch() {
        let utterance = Utterance::new("hi", "en-US");
        assert!((utterance.rate - 1.0).abs() < f32::EPSILON);
        assert!((utterance.pitch - 1.05).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rate_and_pitch_overrides() {
        let utterance = Utterance::new("hi", "en-US").with_rate(0.8).with_pitch(2.0);
        assert!((utterance.rate - 0.8).abs() < f32::EPSILON);
        assert!((utterance.pitch - 2.0).abs() < f32::EPSILON);
    }
}
