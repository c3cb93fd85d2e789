//! Cross-document comparison: risk-count deltas and lexical similarity.

use super::DocumentAnalysis;
use crate::domain::RiskCategory;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Per-category clause counts for the two compared documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub count_a: usize,
    pub count_b: usize,
}

/// Interpretation banding for a similarity score.
///
/// Thresholds are fixed: above 75 is very similar, above 50 has notable
/// differences, everything else is substantially different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityBand {
    VerySimilar,
    NotableDifferences,
    SubstantiallyDifferent,
}

impl SimilarityBand {
    /// Bands a similarity percentage.
    pub fn from_percent(percent: u8) -> Self {
        if percent > 75 {
            Self::VerySimilar
        } else if percent > 50 {
            Self::NotableDifferences
        } else {
            Self::SubstantiallyDifferent
        }
    }

    /// User-facing interpretation sentence for this band.
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::VerySimilar => {
                "These documents are very similar. The differences are likely minor variations or updates."
            }
            Self::NotableDifferences => {
                "These documents have significant similarities but also contain notable differences."
            }
            Self::SubstantiallyDifferent => {
                "These documents are substantially different from each other."
            }
        }
    }
}

/// Result of comparing two analyzed documents.
///
/// Derived data, recomputed on demand; it references its sources only by
/// display name. Category counts follow the caller's positional convention
/// (first supplied = side A).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    #[serde(rename = "riskComparisonByCategory")]
    pub risk_comparison: BTreeMap<RiskCategory, CategoryCounts>,
    pub text_similarity_percent: u8,
    pub name_a: String,
    pub name_b: String,
}

impl ComparisonResult {
    /// Interpretation band for the similarity score.
    pub fn band(&self) -> SimilarityBand {
        SimilarityBand::from_percent(self.text_similarity_percent)
    }
}

/// Stateless engine computing risk deltas and lexical similarity.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Creates a new comparison engine.
    pub fn new() -> Self {
        Self
    }

    /// Compares two analyses.
    ///
    /// The risk table covers the union of categories present in either
    /// document, zero-filled for the side lacking a category. Similarity is
    /// symmetric; counts swap with argument order.
    pub fn compare(&self, a: &DocumentAnalysis, b: &DocumentAnalysis) -> ComparisonResult {
        let mut risk_comparison: BTreeMap<RiskCategory, CategoryCounts> = BTreeMap::new();

        for clause in &a.risky_clauses {
            risk_comparison.entry(clause.category).or_default().count_a += 1;
        }
        for clause in &b.risky_clauses {
            risk_comparison.entry(clause.category).or_default().count_b += 1;
        }

        ComparisonResult {
            risk_comparison,
            text_similarity_percent: Self::similarity_percent(&a.original_text, &b.original_text),
            name_a: a.file_name.clone(),
            name_b: b.file_name.clone(),
        }
    }

    /// Jaccard-style lexical overlap of two texts, as a rounded percentage.
    ///
    /// Tokens are whitespace-split and lower-cased, then deduplicated into
    /// sets; the score is `100 * |intersection| / |union|`. This is purely
    /// lexical, not semantic: two paraphrased documents with no shared
    /// wording score near 0. Two empty texts score 0.
    pub fn similarity_percent(a: &str, b: &str) -> u8 {
        let words_a: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
        let words_b: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();

        let union = words_a.union(&words_b).count();
        if union == 0 {
            return 0;
        }

        let common = words_a.intersection(&words_b).count();
        ((common as f64 / union as f64) * 100.0).round() as u8
    }
}
