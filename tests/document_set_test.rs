//! Integration tests for the document set and the upload boundary.

mod common;

use clearterms::{
    AnalyzerError, DocumentId, DocumentSet, RawDocument, MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE,
};
use common::{analyze, service, BENIGN_TEXT, RISKY_TOS};

#[test]
fn test_compare_requires_two_documents() {
    let service = service();
    let mut set = DocumentSet::new();
    let id = set.add(analyze(&service, RISKY_TOS, "only.pdf"));

    let err = set.compare(id, id).unwrap_err();
    assert!(matches!(err, AnalyzerError::Comparison { .. }));
}

#[test]
fn test_compare_unknown_id_is_precondition_error() {
    let service = service();
    let mut set = DocumentSet::new();
    let a = set.add(analyze(&service, RISKY_TOS, "a.pdf"));
    set.add(analyze(&service, BENIGN_TEXT, "b.pdf"));

    let err = set.compare(a, DocumentId(9999)).unwrap_err();
    assert!(matches!(err, AnalyzerError::Comparison { .. }));
}

#[test]
fn test_compare_explicit_pair() {
    let service = service();
    let mut set = DocumentSet::new();
    let a = set.add(analyze(&service, "cat dog bird", "a.pdf"));
    let b = set.add(analyze(&service, "cat dog fish", "b.pdf"));
    // A third document must not disturb an explicit pair.
    set.add(analyze(&service, BENIGN_TEXT, "c.pdf"));

    let result = set.compare(a, b).unwrap();
    assert_eq!(result.text_similarity_percent, 50);
    assert_eq!(result.name_a, "a.pdf");
    assert_eq!(result.name_b, "b.pdf");
}

#[test]
fn test_removed_document_is_gone() {
    let service = service();
    let mut set = DocumentSet::new();
    let a = set.add(analyze(&service, RISKY_TOS, "a.pdf"));
    let b = set.add(analyze(&service, BENIGN_TEXT, "b.pdf"));

    let removed = set.remove(a).unwrap();
    assert_eq!(removed.file_name, "a.pdf");
    assert!(set.get(a).is_none());

    let err = set.compare(a, b).unwrap_err();
    assert!(matches!(err, AnalyzerError::Comparison { .. }));
}

#[test]
fn test_insertion_order_is_preserved() {
    let service = service();
    let mut set = DocumentSet::new();
    set.add(analyze(&service, "one", "1.pdf"));
    set.add(analyze(&service, "two", "2.pdf"));
    set.add(analyze(&service, "three", "3.pdf"));

    let names: Vec<&str> = set.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(names, vec!["1.pdf", "2.pdf", "3.pdf"]);
}

#[test]
fn test_boundary_rejects_wrong_media_type() {
    let raw = RawDocument::new(vec![0; 128], "image/png", "scan.png");
    let err = raw.validate().unwrap_err();
    assert!(matches!(err, AnalyzerError::UploadRejected { .. }));
    assert!(err.is_client_error());
}

#[test]
fn test_boundary_rejects_oversize_payload() {
    let raw = RawDocument::new(vec![0; MAX_UPLOAD_BYTES + 1], PDF_MEDIA_TYPE, "big.pdf");
    let err = raw.validate().unwrap_err();
    assert!(matches!(err, AnalyzerError::UploadRejected { .. }));
}

#[test]
fn test_boundary_accepts_pdf_at_limit() {
    let raw = RawDocument::new(vec![0; MAX_UPLOAD_BYTES], PDF_MEDIA_TYPE, "ok.pdf");
    assert!(raw.validate().is_ok());
}

#[test]
fn test_analyses_are_independent_values() {
    let service = service();
    let a = analyze(&service, RISKY_TOS, "a.pdf");
    let b = analyze(&service, RISKY_TOS, "b.pdf");

    assert_ne!(a.id, b.id);
    assert_eq!(a.original_text, b.original_text);
    assert_eq!(a.risky_clauses, b.risky_clauses);
}
