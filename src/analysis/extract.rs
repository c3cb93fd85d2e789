//! Text extraction and the usability gate.
//!
//! Extraction is the first pipeline stage and gates everything downstream:
//! text that fails the usability check never reaches classification. The
//! [`TextExtractor`] trait is the seam where an OCR-backed extractor could
//! plug in later; [`PdfTextExtractor`] is the provided implementation.

use crate::error::{AnalyzerError, AnalyzerResult};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

/// Minimum extracted length (in characters) for text to be usable.
pub const MIN_USABLE_LEN: usize = 100;

/// Literal 4-byte PDF signature. Extracted "text" starting with it means
/// the parser leaked raw container bytes instead of document text.
pub const PDF_SIGNATURE: &str = "%PDF";

/// User-facing reason attached to every unusable-text failure.
pub const UNREADABLE_REASON: &str =
    "Could not extract readable text from this PDF. The file may be scanned, encrypted, or corrupted.";

/// Plain text recovered from a document, with its usability verdict.
///
/// A value of this type can only be constructed through [`ExtractedText::gate`],
/// so `is_likely_binary` is always `false` on the success path: unusable
/// text becomes an [`AnalyzerError::Extraction`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedText {
    text: String,
    is_likely_binary: bool,
}

impl ExtractedText {
    /// Applies the usability gate to candidate text.
    ///
    /// Text is unusable if it is empty, begins with the raw PDF signature,
    /// or is shorter than [`MIN_USABLE_LEN`] characters. Unusable text
    /// yields an extraction failure with the `is_pdf_binary` flag set, and
    /// the pipeline must stop.
    pub fn gate(text: String) -> AnalyzerResult<Self> {
        let unusable = text.is_empty()
            || text.starts_with(PDF_SIGNATURE)
            || text.chars().count() < MIN_USABLE_LEN;

        if unusable {
            return Err(AnalyzerError::Extraction {
                reason: UNREADABLE_REASON.to_string(),
                is_pdf_binary: true,
            });
        }

        Ok(Self {
            text,
            is_likely_binary: false,
        })
    }

    /// The extracted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the extracted text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text looks like raw binary rather than document text.
    /// Always `false` for gated values.
    pub fn is_likely_binary(&self) -> bool {
        self.is_likely_binary
    }

    /// Consumes the value, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Strategy for turning raw document bytes into plain text.
///
/// Implementations must be pure over the byte buffer: no retained state,
/// identical bytes always yield the identical verdict. Extraction is the
/// only pipeline stage permitted to block, so callers that need a bound
/// should wrap the call in their own timeout.
pub trait TextExtractor: Send + Sync {
    /// Extracts text from raw bytes, applying the usability gate.
    fn extract(&self, bytes: &[u8]) -> AnalyzerResult<ExtractedText>;

    /// Returns a human-readable name for this extractor.
    fn name(&self) -> &str;
}

/// Structured PDF text extraction via the `pdf-extract` crate.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Creates a new PDF text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> AnalyzerResult<ExtractedText> {
        // A parser error is a structural failure of the document, not a
        // crash; it gets the same terminal verdict as unusable text.
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|_| {
            AnalyzerError::Extraction {
                reason: UNREADABLE_REASON.to_string(),
                is_pdf_binary: true,
            }
        })?;

        ExtractedText::gate(text)
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

/// Scoped on-disk staging for uploaded bytes.
///
/// The backing temp file exists only for the lifetime of this value and is
/// deleted on drop, on success and failure paths alike.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Writes `bytes` to a fresh temp file.
    pub fn stage(bytes: &[u8]) -> AnalyzerResult<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the staged file, valid until drop.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the staged bytes back.
    pub fn read(&self) -> AnalyzerResult<Vec<u8>> {
        std::fs::read(self.path()).map_err(|e| AnalyzerError::Io {
            path: self.path().to_path_buf(),
            source: e,
        })
    }
}
