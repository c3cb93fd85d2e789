//! The per-document analysis pipeline and comparison surface.
//!
//! This module wires the leaf components together: extraction gates
//! everything downstream, then classification, simplification, and
//! summarization run over the same extracted text and merge into one
//! immutable [`DocumentAnalysis`]. [`DocumentSet`] holds analyses for a
//! single caller and serves explicit-pair comparisons.

pub mod compare;
pub mod extract;

pub use compare::{CategoryCounts, ComparisonEngine, ComparisonResult, SimilarityBand};
pub use extract::{ExtractedText, PdfTextExtractor, StagedUpload, TextExtractor};

use crate::domain::{RiskClassifier, RiskyClause, Summarizer, TextSimplifier};
use crate::error::{AnalyzerError, AnalyzerResult};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Maximum accepted upload size (10 MB), enforced before extraction.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The only media type the boundary accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Identifier of an analyzed document, unique per [`AnalysisService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An uploaded document before extraction: raw bytes plus the declared
/// media type and display filename. Transient; exists only for one
/// extraction call.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub file_name: String,
}

impl RawDocument {
    /// Creates a raw document from upload-boundary data.
    pub fn new(
        bytes: Vec<u8>,
        media_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }

    /// Boundary validation, run before any extraction attempt.
    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.media_type != PDF_MEDIA_TYPE {
            return Err(AnalyzerError::UploadRejected {
                reason: "Only PDF files are allowed".to_string(),
            });
        }
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AnalyzerError::UploadRejected {
                reason: format!(
                    "File exceeds the {} MB upload limit",
                    MAX_UPLOAD_BYTES / (1024 * 1024)
                ),
            });
        }
        Ok(())
    }
}

/// Immutable result of analyzing one document.
///
/// Owned by the session that created it; never mutated after construction,
/// only removed from a [`DocumentSet`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub id: DocumentId,
    pub file_name: String,
    pub original_text: String,
    pub simplified_text: String,
    pub risky_clauses: Vec<RiskyClause>,
    pub summary: String,
}

impl DocumentAnalysis {
    /// The JSON success surface returned to callers:
    /// `{ success, fileName, originalText, simplifiedText, riskyClauses, summary }`.
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            success: true,
            file_name: &self.file_name,
            original_text: &self.original_text,
            simplified_text: &self.simplified_text,
            risky_clauses: &self.risky_clauses,
            summary: &self.summary,
        }
    }
}

/// Borrowed success-surface view of a [`DocumentAnalysis`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    pub success: bool,
    pub file_name: &'a str,
    pub original_text: &'a str,
    pub simplified_text: &'a str,
    pub risky_clauses: &'a [RiskyClause],
    pub summary: &'a str,
}

/// Pipeline orchestrator: extract, then classify + simplify + summarize.
///
/// All methods take `&self`; the service is `Send + Sync` and safe to call
/// concurrently across independent documents. Each analysis is an
/// independent value with an id from the service's atomic counter.
pub struct AnalysisService {
    extractor: Box<dyn TextExtractor>,
    classifier: RiskClassifier,
    simplifier: TextSimplifier,
    summarizer: Summarizer,
    next_id: AtomicU64,
}

impl AnalysisService {
    /// Creates a service around the given extractor.
    pub fn new(extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            classifier: RiskClassifier::new(),
            simplifier: TextSimplifier::new(),
            summarizer: Summarizer::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a service with structured PDF extraction.
    pub fn with_pdf_extractor() -> Self {
        Self::new(Box::new(PdfTextExtractor::new()))
    }

    /// Runs the full pipeline over an uploaded document.
    ///
    /// Boundary validation and the extraction gate short-circuit the rest:
    /// no text, no analysis.
    pub fn analyze_upload(&self, raw: &RawDocument) -> AnalyzerResult<DocumentAnalysis> {
        raw.validate()?;
        let extracted = self.extractor.extract(&raw.bytes)?;
        Ok(self.build(extracted.into_text(), raw.file_name.clone()))
    }

    /// Runs the downstream pipeline over text that already cleared
    /// extraction elsewhere (e.g. an OCR stage supplying its own gated
    /// output).
    pub fn analyze_text(
        &self,
        text: impl Into<String>,
        file_name: impl Into<String>,
    ) -> DocumentAnalysis {
        self.build(text.into(), file_name.into())
    }

    /// Raw extraction, exposed for debugging and verification.
    pub fn extract(&self, bytes: &[u8]) -> AnalyzerResult<ExtractedText> {
        self.extractor.extract(bytes)
    }

    fn build(&self, text: String, file_name: String) -> DocumentAnalysis {
        let risky_clauses = self.classifier.classify(&text);
        let simplified_text = self.simplifier.simplify(&text);
        let summary = self.summarizer.summarize(&text);

        DocumentAnalysis {
            id: DocumentId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            file_name,
            original_text: text,
            simplified_text,
            risky_clauses,
            summary,
        }
    }
}

/// Ordered, caller-owned collection of analyses.
///
/// Append/remove only; a comparison takes an explicit pair of ids rather
/// than assuming positions. Concurrent mutation of one set must be
/// serialized by its owner.
#[derive(Debug, Default)]
pub struct DocumentSet {
    docs: Vec<DocumentAnalysis>,
}

impl DocumentSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an analysis, returning its id.
    pub fn add(&mut self, analysis: DocumentAnalysis) -> DocumentId {
        let id = analysis.id;
        self.docs.push(analysis);
        id
    }

    /// Removes the analysis with the given id, if present.
    pub fn remove(&mut self, id: DocumentId) -> Option<DocumentAnalysis> {
        self.docs
            .iter()
            .position(|doc| doc.id == id)
            .map(|index| self.docs.remove(index))
    }

    /// Looks up an analysis by id.
    pub fn get(&self, id: DocumentId) -> Option<&DocumentAnalysis> {
        self.docs.iter().find(|doc| doc.id == id)
    }

    /// Number of documents in the set.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterates over documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentAnalysis> {
        self.docs.iter()
    }

    /// Compares two documents in the set by id.
    ///
    /// Requires at least two documents; unknown ids are a precondition
    /// error, not an internal failure.
    pub fn compare(&self, a: DocumentId, b: DocumentId) -> AnalyzerResult<ComparisonResult> {
        if self.docs.len() < 2 {
            return Err(AnalyzerError::Comparison {
                reason: "at least two documents are required".to_string(),
            });
        }

        let doc_a = self.get(a).ok_or_else(|| AnalyzerError::Comparison {
            reason: format!("no document with id {}", a),
        })?;
        let doc_b = self.get(b).ok_or_else(|| AnalyzerError::Comparison {
            reason: format!("no document with id {}", b),
        })?;

        Ok(ComparisonEngine::new().compare(doc_a, doc_b))
    }
}
