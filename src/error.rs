//! Error types for the document analysis library.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde_json::json;

/// Result type alias for analysis operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Comprehensive error type for all analysis operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging and error recovery.
#[derive(Debug)]
pub enum AnalyzerError {
    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },

    /// Upload rejected before extraction (wrong media type or oversize payload)
    UploadRejected { reason: String },

    /// Text extraction failed or produced unusable output.
    ///
    /// `is_pdf_binary` distinguishes scanned/encrypted/corrupted sources so
    /// callers can suggest OCR or a different file.
    Extraction { reason: String, is_pdf_binary: bool },

    /// Pattern matching or regex compilation error
    Pattern { pattern: String, reason: String },

    /// Comparison precondition violated (fewer than two documents, unknown id)
    Comparison { reason: String },

    /// Unexpected failure during classification, simplification, or summarization
    Internal {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalyzerError {
    /// Returns true for errors the caller should report as a client error
    /// (bad upload, unreadable document, invalid comparison request) rather
    /// than a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UploadRejected { .. } | Self::Extraction { .. } | Self::Comparison { .. }
        )
    }

    /// Converts the error into the JSON surface returned at the boundary.
    ///
    /// Extraction failures carry the distinguishing `isPDFBinary` flag;
    /// unexpected internal failures collapse into a generic error plus a
    /// detail message.
    pub fn to_response(&self) -> serde_json::Value {
        match self {
            Self::Extraction {
                reason,
                is_pdf_binary,
            } => json!({
                "error": reason,
                "isPDFBinary": is_pdf_binary,
            }),
            Self::UploadRejected { reason } => json!({ "error": reason }),
            Self::Comparison { reason } => json!({ "error": reason }),
            other => json!({
                "error": "Failed to process PDF file",
                "message": other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
            Self::UploadRejected { reason } => {
                write!(f, "Upload rejected: {}", reason)
            }
            Self::Extraction { reason, .. } => {
                write!(f, "Text extraction failed: {}", reason)
            }
            Self::Pattern { pattern, reason } => {
                write!(f, "Pattern error for '{}': {}", pattern, reason)
            }
            Self::Comparison { reason } => {
                write!(f, "Comparison failed: {}", reason)
            }
            Self::Internal { message, .. } => {
                write!(f, "Internal analysis error: {}", message)
            }
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Internal { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<io::Error> for AnalyzerError {
    fn from(err: io::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<regex::Error> for AnalyzerError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for AnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}
