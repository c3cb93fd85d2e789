//! Domain models and business logic for clause analysis.
//!
//! This module contains the core business logic for classifying risky
//! clauses in Terms-of-Service text, rewriting legal jargon into plain
//! language, and producing short summaries.

pub mod risk;
pub mod simplify;
pub mod summary;

pub use risk::{RiskCategory, RiskClassifier, RiskyClause};
pub use simplify::TextSimplifier;
pub use summary::Summarizer;

/// Sentence terminators used for excerpting and summarization.
const SENTENCE_ENDS: &[char] = &['.', '!', '?', '\n'];

/// Largest byte index `<= at` that falls on a char boundary.
pub(crate) fn floor_char_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Smallest byte index `>= at` that falls on a char boundary.
pub(crate) fn ceil_char_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at += 1;
    }
    at
}

/// Extracts the sentence containing `start..end`, clamped to a fixed
/// character window so excerpts stay human-readable even in run-on text.
///
/// `start` and `end` must be char boundaries within `text` (regex match
/// offsets satisfy this).
pub(crate) fn sentence_excerpt(text: &str, start: usize, end: usize) -> String {
    const WINDOW: usize = 160;

    let lo = text[..start]
        .rfind(SENTENCE_ENDS)
        .map(|i| i + 1)
        .unwrap_or(0);
    let lo = lo.max(floor_char_boundary(text, start.saturating_sub(WINDOW)));
    let lo = ceil_char_boundary(text, lo);

    let hi = text[end..]
        .find(SENTENCE_ENDS)
        .map(|i| end + i + 1)
        .unwrap_or(text.len());
    let hi = hi.min(ceil_char_boundary(text, end + WINDOW));

    text[lo..hi].trim().to_string()
}

/// Splits text into trimmed, non-empty sentences.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    text.split_inclusive(SENTENCE_ENDS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_excerpt_bounds() {
        let text = "First sentence. The vendor may terminate your account. Last one.";
        let start = text.find("terminate").unwrap();
        let excerpt = sentence_excerpt(text, start, start + "terminate".len());
        assert_eq!(excerpt, "The vendor may terminate your account.");
    }

    #[test]
    fn test_excerpt_window_clamps_runon_text() {
        let text = "word ".repeat(200);
        let start = text.find("word").unwrap();
        let excerpt = sentence_excerpt(&text, start, start + 4);
        assert!(excerpt.len() <= 360);
    }

    #[test]
    fn test_split_sentences_skips_blanks() {
        let sentences = split_sentences("One.  \n\nTwo! Three?");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_char_boundary_helpers() {
        let text = "naïve";
        // byte 3 is inside the two-byte 'ï'
        assert_eq!(floor_char_boundary(text, 3), 2);
        assert_eq!(ceil_char_boundary(text, 3), 4);
    }
}
