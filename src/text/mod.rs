//! Text Utilities
//!
//! Pure text transformations: extractive summarization and keyword
//! highlighting. Both operate on in-memory strings with no external
//! service involvement.

pub mod highlighter;
pub mod summarizer;

pub use highlighter::{highlight, strip_markup, HighlightResult, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use summarizer::{summarize, MIN_SUMMARY_TOKENS};

use thiserror::Error;

/// Errors for the text utilities
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// Input was empty or whitespace-only
    #[error("no text provided")]
    EmptyInput,

    /// Input has too few words to summarize
    #[error("text too short: {words} words (minimum {minimum})")]
    TooShort { words: usize, minimum: usize },

    /// Highlighting requires both text and a keyword
    #[error("missing input: both text and keyword are required")]
    MissingInput,
}
