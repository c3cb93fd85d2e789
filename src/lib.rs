//! Terms-of-Service analysis library.
//!
//! This library ingests a Terms-of-Service document (PDF), extracts its
//! text, and produces a plain-language rendering, a set of flagged risky
//! clauses, a short summary, and an optional cross-document comparison.
//!
//! # Features
//!
//! - **Extraction Gating**: unreadable (scanned, encrypted, or corrupted)
//!   PDFs are reported as a structural failure and never reach analysis
//! - **Risk Classification**: keyword/phrase detection across a fixed
//!   taxonomy of clause categories (arbitration, liability limitation,
//!   auto-renewal, data sharing, unilateral changes, termination)
//! - **Simplification**: legal jargon rewritten via a replaceable
//!   substitution table
//! - **Summarization**: bounded-length synopsis of the full text
//! - **Comparison**: per-category risk deltas plus Jaccard-style lexical
//!   similarity between two analyzed documents
//!
//! # Architecture
//!
//! - [`domain`]: Business logic for clause classification, simplification,
//!   and summarization
//! - [`analysis`]: Extraction gating, the pipeline service, document sets,
//!   and the comparison engine
//! - [`error`]: Comprehensive error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use clearterms::{AnalysisService, RawDocument, PDF_MEDIA_TYPE};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = AnalysisService::with_pdf_extractor();
//!
//! let bytes = std::fs::read("terms.pdf")?;
//! let raw = RawDocument::new(bytes, PDF_MEDIA_TYPE, "terms.pdf");
//! let analysis = service.analyze_upload(&raw)?;
//!
//! for clause in &analysis.risky_clauses {
//!     println!("{}: {}", clause.category, clause.excerpt);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Comparing Documents
//!
//! ```
//! use clearterms::{AnalysisService, DocumentSet};
//!
//! let service = AnalysisService::with_pdf_extractor();
//! let mut set = DocumentSet::new();
//!
//! let a = set.add(service.analyze_text("cat dog bird", "a.pdf"));
//! let b = set.add(service.analyze_text("cat dog fish", "b.pdf"));
//!
//! let result = set.compare(a, b).unwrap();
//! assert_eq!(result.text_similarity_percent, 50);
//! ```
//!
//! # Clause Detection
//!
//! ```
//! use clearterms::{RiskCategory, RiskClassifier};
//!
//! let classifier = RiskClassifier::new();
//! let clauses = classifier.classify("All disputes are settled by binding arbitration.");
//! assert_eq!(clauses[0].category, RiskCategory::Arbitration);
//! ```

// Public API
pub mod analysis;
pub mod domain;
pub mod error;

// Re-exports for convenient access
pub use analysis::{
    AnalysisReport, AnalysisService, CategoryCounts, ComparisonEngine, ComparisonResult,
    DocumentAnalysis, DocumentId, DocumentSet, ExtractedText, PdfTextExtractor, RawDocument,
    SimilarityBand, StagedUpload, TextExtractor, MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE,
};
pub use domain::{RiskCategory, RiskClassifier, RiskyClause, Summarizer, TextSimplifier};
pub use error::{AnalyzerError, AnalyzerResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let _service = AnalysisService::with_pdf_extractor();
    }

    #[test]
    fn test_pipeline_over_plain_text() {
        let service = AnalysisService::with_pdf_extractor();
        let analysis = service.analyze_text(
            "We may terminate your account at any time without prior notice.",
            "terms.pdf",
        );

        assert!(!analysis.risky_clauses.is_empty());
        assert!(!analysis.simplified_text.is_empty());
        assert!(!analysis.summary.is_empty());
    }
}
