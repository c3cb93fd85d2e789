//! Plain-language text simplification.
//!
//! Rewrites common legal jargon into everyday wording. The rule set is an
//! immutable, ordered substitution table; swapping the table out changes
//! the rendering without touching the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Jargon-to-plain-language rewriter.
///
/// Guarantees: output is non-empty whenever input is non-empty, and every
/// replacement is a short fixed phrase, so output length stays within a
/// small constant factor of the input.
#[derive(Debug, Clone, Default)]
pub struct TextSimplifier;

impl TextSimplifier {
    /// Creates a new simplifier.
    pub fn new() -> Self {
        Self
    }

    /// Ordered substitution table, compiled once. Multi-word phrases come
    /// before the single words they contain.
    fn rules() -> &'static [(Regex, &'static str)] {
        static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
            [
                (r"(?i)\bindemnify\s+and\s+hold\s+harmless\b", "cover any losses for"),
                (r"(?i)\bhereinafter\s+referred\s+to\s+as\b", "called"),
                (r"(?i)\bnotwithstanding\s+the\s+foregoing\b", "despite the above"),
                (r"(?i)\bfor\s+the\s+avoidance\s+of\s+doubt\b", "to be clear"),
                (r"(?i)\bin\s+the\s+event\s+that\b", "if"),
                (r"(?i)\bin\s+the\s+event\s+of\b", "if there is"),
                (r"(?i)\bpursuant\s+to\b", "under"),
                (r"(?i)\bprior\s+to\b", "before"),
                (r"(?i)\bsubsequent\s+to\b", "after"),
                (r"(?i)\bnotwithstanding\b", "despite"),
                (r"(?i)\bhereinafter\b", "from now on"),
                (r"(?i)\bheretofore\b", "until now"),
                (r"(?i)\bthereof\b", "of it"),
                (r"(?i)\bherein\b", "in this document"),
                (r"(?i)\bindemnify\b", "cover the costs for"),
                (r"(?i)\bterminate\b", "end"),
                (r"(?i)\btermination\b", "ending"),
                (r"(?i)\bcommence\b", "begin"),
                (r"(?i)\bendeavor\b", "try"),
                (r"(?i)\butilize\b", "use"),
                (r"(?i)\bremuneration\b", "payment"),
                (r"(?i)\bforthwith\b", "immediately"),
                (r"(?i)\bshall\b", "will"),
            ]
            .into_iter()
            .map(|(pattern, replacement)| {
                (
                    Regex::new(pattern).expect("valid simplification pattern"),
                    replacement,
                )
            })
            .collect()
        });
        &RULES
    }

    /// Rewrites `text` by applying every substitution rule in order.
    pub fn simplify(&self, text: &str) -> String {
        let mut simplified = text.to_string();
        for (pattern, replacement) in Self::rules() {
            simplified = pattern.replace_all(&simplified, *replacement).into_owned();
        }
        simplified
    }
}
