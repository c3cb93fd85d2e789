//! Common test utilities and fixtures.

#![allow(dead_code)]

use clearterms::{AnalysisService, DocumentAnalysis};

/// A realistic ToS excerpt that trips several risk categories.
pub const RISKY_TOS: &str = "\
Welcome to the service. By creating an account you agree to these terms. \
Any dispute arising under this agreement will be resolved through binding arbitration. \
In no event shall the company be liable for indirect damages. \
Your subscription renews automatically at the end of each billing period unless you cancel. \
We may share your personal information with third parties for marketing purposes. \
We reserve the right to modify these terms at any time without prior notice. \
We may terminate your account for any violation of these terms.";

/// A harmless text with none of the tracked clause patterns.
pub const BENIGN_TEXT: &str = "\
The garden club meets on the first Tuesday of every month. \
Members bring seeds, cuttings, and stories about their favorite plants. \
Refreshments are provided by volunteers.";

/// Builds an analysis from plain text, bypassing PDF extraction.
pub fn analyze(service: &AnalysisService, text: &str, name: &str) -> DocumentAnalysis {
    service.analyze_text(text, name)
}

pub fn service() -> AnalysisService {
    AnalysisService::with_pdf_extractor()
}
