//! Risky-clause classification.
//!
//! This module encapsulates the business rules for detecting clauses that
//! commonly disadvantage the consumer in Terms-of-Service documents. Each
//! risk category carries a keyword/phrase pattern set; detection is
//! pattern-based, not semantic.

use super::sentence_excerpt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed taxonomy of clause risk categories.
///
/// The derived `Ord` gives maps over categories a stable, locale-independent
/// iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Mandatory Arbitration")]
    Arbitration,
    #[serde(rename = "Liability Limitation")]
    LiabilityLimitation,
    #[serde(rename = "Automatic Renewal")]
    AutoRenewal,
    #[serde(rename = "Data Sharing")]
    DataSharing,
    #[serde(rename = "Unilateral Changes")]
    UnilateralChanges,
    #[serde(rename = "Termination")]
    Termination,
}

impl RiskCategory {
    /// All categories, in canonical order.
    pub const ALL: [RiskCategory; 6] = [
        Self::Arbitration,
        Self::LiabilityLimitation,
        Self::AutoRenewal,
        Self::DataSharing,
        Self::UnilateralChanges,
        Self::Termination,
    ];

    /// Human-readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Arbitration => "Mandatory Arbitration",
            Self::LiabilityLimitation => "Liability Limitation",
            Self::AutoRenewal => "Automatic Renewal",
            Self::DataSharing => "Data Sharing",
            Self::UnilateralChanges => "Unilateral Changes",
            Self::Termination => "Termination",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected risky clause: its category, a human-readable excerpt, and the
/// byte offset of the match in the source text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskyClause {
    #[serde(rename = "type")]
    pub category: RiskCategory,
    pub excerpt: String,
    #[serde(rename = "location")]
    pub offset: usize,
}

/// Pattern-based clause classifier.
///
/// Scans text against the per-category pattern table and emits one
/// [`RiskyClause`] per match, ordered by position of first occurrence.
/// Classification is deterministic: identical input yields byte-identical
/// output across runs.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    /// Creates a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Per-category pattern table, compiled once.
    fn patterns() -> &'static [(RiskCategory, Regex)] {
        static PATTERNS: Lazy<Vec<(RiskCategory, Regex)>> = Lazy::new(|| {
            [
                (
                    RiskCategory::Arbitration,
                    r"(?i)arbitrat(?:ion|e|or)s?|class\s+action\s+waiver|waive[sd]?\s+(?:the|your)\s+right\s+to\s+(?:a\s+)?jury",
                ),
                (
                    RiskCategory::LiabilityLimitation,
                    r"(?i)limitation\s+of\s+liabilit(?:y|ies)|limits?\s+(?:our|its|the\s+company'?s?)\s+liabilit\w*|(?:shall\s+|will\s+)?not\s+be\s+liable|in\s+no\s+event\s+(?:shall|will)|disclaims?\s+(?:all\s+)?warrant\w*",
                ),
                (
                    RiskCategory::AutoRenewal,
                    r"(?i)auto(?:matic(?:ally)?)?[-\s]*renew(?:al|s|ed|ing)?|renews?\s+automatically|unless\s+(?:you\s+)?cancel",
                ),
                (
                    RiskCategory::DataSharing,
                    r"(?i)(?:share|sell|disclose|transfer)\s+(?:your\s+)?(?:personal\s+)?(?:data|information)|(?:with|to)\s+third[-\s]part(?:y|ies)|personal\s+information",
                ),
                (
                    RiskCategory::UnilateralChanges,
                    r"(?i)reserves?\s+the\s+right\s+to\s+(?:modify|change|amend|update)|(?:modify|change|amend|update)\s+(?:these\s+)?terms\s+at\s+any\s+time|at\s+(?:our|its)\s+sole\s+discretion|without\s+(?:prior\s+)?notice",
                ),
                (
                    RiskCategory::Termination,
                    r"(?i)terminat(?:e|ion\s+of|ing)\s+(?:your\s+)?(?:account|access|this\s+agreement|the\s+(?:service|agreement))|suspend\s+(?:your\s+)?(?:account|access)|terminate\s+at\s+any\s+time",
                ),
            ]
            .into_iter()
            .map(|(category, pattern)| {
                (category, Regex::new(pattern).expect("valid clause pattern"))
            })
            .collect()
        });
        &PATTERNS
    }

    /// Scans `text` and returns every detected clause, ordered left to right
    /// by match offset. Categories without matches produce no entries;
    /// zero-filling is the comparison engine's job.
    pub fn classify(&self, text: &str) -> Vec<RiskyClause> {
        let mut clauses = Vec::new();

        for (category, pattern) in Self::patterns() {
            for found in pattern.find_iter(text) {
                clauses.push(RiskyClause {
                    category: *category,
                    excerpt: sentence_excerpt(text, found.start(), found.end()),
                    offset: found.start(),
                });
            }
        }

        // Stable sort keeps the fixed category order for same-offset matches.
        clauses.sort_by_key(|clause| clause.offset);
        clauses
    }
}
