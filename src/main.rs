//! Terms-of-Service Analyzer CLI.
//!
//! This binary provides a command-line interface for the clearterms library,
//! producing JSON analysis reports, document comparisons, and raw text dumps
//! with proper error handling and user feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use clearterms::{AnalysisService, AnalyzerError, DocumentSet, RawDocument, PDF_MEDIA_TYPE};

/// Terms-of-Service Analyzer
///
/// Analyze a ToS PDF for risky clauses, plain-language rendering, and a
/// summary, or compare two analyzed documents.
#[derive(Parser)]
#[command(name = "clearterms")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single PDF and print the JSON report
    Analyze {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Analyze two PDFs and print their comparison
    Compare {
        /// First PDF file path (side A)
        #[arg(long, value_name = "FILE")]
        first: PathBuf,

        /// Second PDF file path (side B)
        #[arg(long, value_name = "FILE")]
        second: PathBuf,
    },

    /// Extract text from a PDF (for debugging and verification)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Command handler owning the analysis service.
struct AnalysisHandler {
    service: AnalysisService,
    verbose: bool,
}

impl AnalysisHandler {
    fn new(verbose: bool) -> Self {
        Self {
            service: AnalysisService::with_pdf_extractor(),
            verbose,
        }
    }

    /// Analyzes one PDF and writes the JSON success surface.
    fn analyze(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let raw = load_document(input)?;

        if self.verbose {
            println!("Input: {} ({} bytes)", input.display(), raw.bytes.len());
        }

        let analysis = self.run_pipeline(&raw)?;
        let json = serde_json::to_string_pretty(&analysis.report())?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &json)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Analyzed {} clause(s) → {}",
                analysis.risky_clauses.len(),
                output_path.display()
            );
        } else {
            println!("{}", json);
        }

        if self.verbose {
            println!("\nAnalysis Summary:");
            println!("  Text length:   {} chars", analysis.original_text.len());
            println!("  Risky clauses: {}", analysis.risky_clauses.len());
        }

        Ok(())
    }

    /// Analyzes two PDFs and writes their comparison.
    fn compare(&self, first: &Path, second: &Path) -> Result<()> {
        let raw_a = load_document(first)?;
        let raw_b = load_document(second)?;

        let mut set = DocumentSet::new();
        let id_a = set.add(self.run_pipeline(&raw_a)?);
        let id_b = set.add(self.run_pipeline(&raw_b)?);

        let result = set
            .compare(id_a, id_b)
            .map_err(|err| self.report_failure(err))?;

        println!("{}", serde_json::to_string_pretty(&result)?);
        println!("{}", result.band().interpretation());

        Ok(())
    }

    /// Extracts text from a PDF.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let raw = load_document(input)?;

        let extracted = self
            .service
            .extract(&raw.bytes)
            .map_err(|err| self.report_failure(err))?;

        if let Some(output_path) = output {
            std::fs::write(output_path, extracted.text())
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                extracted.char_len(),
                output_path.display()
            );
        } else {
            println!("{}", extracted.text());
        }

        Ok(())
    }

    fn run_pipeline(&self, raw: &RawDocument) -> Result<clearterms::DocumentAnalysis> {
        self.service
            .analyze_upload(raw)
            .map_err(|err| self.report_failure(err))
    }

    /// Prints the JSON error surface to stderr before propagating.
    fn report_failure(&self, err: AnalyzerError) -> anyhow::Error {
        if let Ok(json) = serde_json::to_string_pretty(&err.to_response()) {
            eprintln!("{}", json);
        }
        anyhow::Error::new(err)
    }
}

/// Reads a document from disk, deriving its media type from the extension.
/// Non-PDF extensions are surfaced as upload rejections by the boundary
/// validation inside the service.
fn load_document(path: &Path) -> Result<RawDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let media_type = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
        _ => "application/octet-stream",
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    Ok(RawDocument::new(bytes, media_type, file_name))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handler = AnalysisHandler::new(cli.verbose);

    match &cli.command {
        Commands::Analyze { input, output } => {
            handler.analyze(input, output.as_deref())?;
        }
        Commands::Compare { first, second } => {
            handler.compare(first, second)?;
        }
        Commands::Extract { input, output } => {
            handler.extract(input, output.as_deref())?;
        }
    }

    Ok(())
}
