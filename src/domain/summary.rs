//! Bounded-length document summarization.

use super::{floor_char_boundary, split_sentences};

/// Number of sentences kept in a synopsis.
const MAX_SENTENCES: usize = 3;

/// Sentences shorter than this are treated as headings and skipped when
/// longer material is available.
const MIN_SENTENCE_LEN: usize = 40;

/// Hard character budget for the final synopsis.
const CHAR_BUDGET: usize = 600;

/// Derives a short synopsis from full document text.
///
/// Picks the first few substantive sentences and clamps the result to a
/// fixed character budget. Never fails: empty input yields an empty
/// summary.
#[derive(Debug, Clone, Default)]
pub struct Summarizer;

impl Summarizer {
    /// Creates a new summarizer.
    pub fn new() -> Self {
        Self
    }

    /// Produces the synopsis for `text`.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);

        let mut picked: Vec<&str> = sentences
            .iter()
            .filter(|s| s.len() >= MIN_SENTENCE_LEN)
            .take(MAX_SENTENCES)
            .copied()
            .collect();

        // Short documents have no "substantive" sentences; fall back to
        // whatever is there.
        if picked.is_empty() {
            picked = sentences.into_iter().take(MAX_SENTENCES).collect();
        }

        let summary = picked.join(" ");
        if summary.len() <= CHAR_BUDGET {
            return summary;
        }

        let cut = floor_char_boundary(&summary, CHAR_BUDGET);
        format!("{}...", summary[..cut].trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_empty_summary() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize(""), "");
        assert_eq!(summarizer.summarize("   \n  "), "");
    }

    #[test]
    fn test_short_input_survives() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize("Hi."), "Hi.");
    }

    #[test]
    fn test_skips_headings() {
        let summarizer = Summarizer::new();
        let text = "TERMS.\nThis agreement governs your use of the service in every region we operate.";
        let summary = summarizer.summarize(text);
        assert!(summary.starts_with("This agreement governs"));
    }

    #[test]
    fn test_respects_char_budget() {
        let summarizer = Summarizer::new();
        let long_sentence = format!("{} end.", "clause after clause ".repeat(40));
        let text = format!("{s} {s} {s}", s = long_sentence);
        let summary = summarizer.summarize(&text);
        assert!(summary.len() <= CHAR_BUDGET + 3);
        assert!(summary.ends_with("..."));
    }
}
