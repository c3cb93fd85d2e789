//! Integration tests for extraction gating and staging.

use clearterms::analysis::extract::{MIN_USABLE_LEN, PDF_SIGNATURE, UNREADABLE_REASON};
use clearterms::{AnalyzerError, ExtractedText, PdfTextExtractor, StagedUpload, TextExtractor};

fn usable(len: usize) -> String {
    "terms of service apply ".chars().cycle().take(len).collect()
}

#[test]
fn test_usable_text_passes_gate_unchanged() {
    let text = usable(MIN_USABLE_LEN);
    let extracted = ExtractedText::gate(text.clone()).unwrap();

    assert_eq!(extracted.text(), text);
    assert!(!extracted.is_likely_binary());
    assert_eq!(extracted.char_len(), MIN_USABLE_LEN);
}

#[test]
fn test_empty_text_fails_gate() {
    let err = ExtractedText::gate(String::new()).unwrap_err();
    assert!(matches!(err, AnalyzerError::Extraction { .. }));
}

#[test]
fn test_below_threshold_fails_gate() {
    let err = ExtractedText::gate(usable(MIN_USABLE_LEN - 1)).unwrap_err();
    match err {
        AnalyzerError::Extraction {
            reason,
            is_pdf_binary,
        } => {
            assert_eq!(reason, UNREADABLE_REASON);
            assert!(is_pdf_binary);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_pdf_header_leak_fails_gate_even_when_long() {
    let leaked = format!("{}-1.4 obj stream {}", PDF_SIGNATURE, usable(400));
    let err = ExtractedText::gate(leaked).unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::Extraction {
            is_pdf_binary: true,
            ..
        }
    ));
}

#[test]
fn test_gate_failure_is_deterministic() {
    let first = ExtractedText::gate("short".to_string()).unwrap_err();
    let second = ExtractedText::gate("short".to_string()).unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_extractor_reports_structural_failure_for_garbage() {
    let extractor = PdfTextExtractor::new();
    let err = extractor.extract(b"this is not a pdf at all").unwrap_err();

    match err {
        AnalyzerError::Extraction { is_pdf_binary, .. } => assert!(is_pdf_binary),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_extractor_has_a_name() {
    assert_eq!(PdfTextExtractor::new().name(), "pdf-extract");
}

#[test]
fn test_staged_upload_roundtrip_and_cleanup() {
    let staged = StagedUpload::stage(b"raw pdf bytes").unwrap();
    let path = staged.path().to_path_buf();

    assert!(path.exists());
    assert_eq!(staged.read().unwrap(), b"raw pdf bytes");

    drop(staged);
    assert!(!path.exists(), "staged file must be removed on drop");
}

#[test]
fn test_staged_upload_cleanup_survives_failure_path() {
    let path = {
        let staged = StagedUpload::stage(b"payload").unwrap();
        let path = staged.path().to_path_buf();
        // Simulate a failed extraction: the guard drops while unwinding
        // through an error return, not a success path.
        let _failure: Result<(), ()> = Err(());
        path
    };
    assert!(!path.exists());
}
