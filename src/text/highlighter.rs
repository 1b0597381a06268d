//! Keyword highlighting
//!
//! Wraps every case-insensitive occurrence of a keyword in highlight
//! markers and reports the occurrence count. The keyword is matched
//! literally; regex metacharacters carry no special meaning.

use regex::RegexBuilder;

use super::TextError;

/// Opening highlight marker
pub const HIGHLIGHT_OPEN: &str = "<mark>";

/// Closing highlight marker
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Result of a highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    /// Input text with every occurrence wrapped in highlight markers
    pub annotated: String,
    /// Number of non-overlapping occurrences found
    pub matches: usize,
}

/// Highlight every case-insensitive occurrence of `keyword` in `text`.
///
/// Matching is literal and non-overlapping; the original casing of each
/// occurrence is preserved inside the markers.
pub fn highlight(text: &str, keyword: &str) -> Result<HighlightResult, TextError> {
    if text.trim().is_empty() || keyword.trim().is_empty() {
        return Err(TextError::MissingInput);
    }

    // Escaped pattern of a non-empty literal always compiles
    let pattern = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .map_err(|_| TextError::MissingInput)?;

    let matches = pattern.find_iter(text).count();
    let annotated = pattern
        .replace_all(text, format!("{}$0{}", HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE))
        .into_owned();

    Ok(HighlightResult { annotated, matches })
}

/// Remove the highlight markers, recovering the original text.
pub fn strip_markup(text: &str) -> String {
    text.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_substring_occurrences() {
        let result = highlight("The cat sat on the mat", "at").unwrap();
        assert_eq!(result.matches, 3);
        assert_eq!(
            result.annotated,
            "The c<mark>at</mark> s<mark>at</mark> on the m<mark>at</mark>"
        );
    }

    #[test]
    fn test_case_insensitive_preserves_original_casing() {
        let result = highlight("Rust and RUST and rust", "rust").unwrap();
        assert_eq!(result.matches, 3);
        assert_eq!(
            result.annotated,
            "<mark>Rust</mark> and <mark>RUST</mark> and <mark>rust</mark>"
        );
    }

    #[test]
    fn test_missing_inputs_rejected() {
        assert_eq!(highlight("", "foo").unwrap_err(), TextError::MissingInput);
        assert_eq!(highlight("foo", "").unwrap_err(), TextError::MissingInput);
        assert_eq!(highlight("  ", "foo").unwrap_err(), TextError::MissingInput);
        assert_eq!(highlight("foo", " \t").unwrap_err(), TextError::MissingInput);
    }

    #[test]
    fn test_no_matches() {
        let result = highlight("nothing to see", "zebra").unwrap();
        assert_eq!(result.matches, 0);
        assert_eq!(result.annotated, "nothing to see");
    }

    #[test]
    fn test_metacharacters_matched_literally() {
        let result = highlight("price is $5.00 or 5x00", "$5.00").unwrap();
        assert_eq!(result.matches, 1);
        assert_eq!(result.annotated, "price is <mark>$5.00</mark> or 5x00");
    }

    #[test]
    fn test_non_overlapping_matches() {
        let result = highlight("aaaa", "aa").unwrap();
        assert_eq!(result.matches, 2);
    }

    #[test]
    fn test_strip_markup_roundtrip() {
        let text = "The cat sat on the mat";
        let result = highlight(text, "at").unwrap();
        assert_eq!(strip_markup(&result.annotated), text);
    }

    #[test]
    fn test_strip_markup_leaves_plain_text_alone() {
        assert_eq!(strip_markup("no markers here"), "no markers here");
    }
}
