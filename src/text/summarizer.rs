//! Extractive text summarization
//!
//! Selects the highest-scoring sentences from the input and re-emits them
//! in document order. Scoring favors length plus a positional bias toward
//! the lead and conclusion sentences.

use std::cmp::Reverse;

use super::TextError;

/// Minimum number of whitespace-separated tokens required for summarization
pub const MIN_SUMMARY_TOKENS: usize = 10;

/// Fraction of the input sentences retained in the summary
const SUMMARY_RATIO: f64 = 0.3;

/// Score bonus for the first sentence of the document
const LEAD_BONUS: usize = 50;

/// Score bonus for the last sentence of the document
const CONCLUSION_BONUS: usize = 25;

/// Produce an extractive summary of `input`.
///
/// Sentences are split on `.`, `!`, and `?`, scored by character length
/// with lead/conclusion bonuses, and the top ~30% (at least one) are kept.
/// Selected sentences are emitted in their original document order, joined
/// with `". "` and terminated with a period.
///
/// Ties in score are broken toward the earlier sentence, so repeated runs
/// over the same input always select the same sentences.
pub fn summarize(input: &str) -> Result<String, TextError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TextError::EmptyInput);
    }

    let words = trimmed.split_whitespace().count();
    if words < MIN_SUMMARY_TOKENS {
        return Err(TextError::TooShort {
            words,
            minimum: MIN_SUMMARY_TOKENS,
        });
    }

    let sentences: Vec<&str> = trimmed
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let target = ((sentences.len() as f64 * SUMMARY_RATIO).ceil() as usize).max(1);

    let scores: Vec<usize> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let mut score = sentence.chars().count();
            if index == 0 {
                score += LEAD_BONUS;
            }
            if index == sentences.len() - 1 {
                score += CONCLUSION_BONUS;
            }
            score
        })
        .collect();

    // Rank by descending score, earlier sentence wins ties
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by_key(|&i| (Reverse(scores[i]), i));

    // Re-order the selection by document position before joining
    let mut selected: Vec<usize> = ranked[..target.min(ranked.len())].to_vec();
    selected.sort_unstable();

    let summary = selected
        .iter()
        .map(|&i| sentences[i])
        .collect::<Vec<_>>()
        .join(". ");

    Ok(format!("{}.", summary))
}
