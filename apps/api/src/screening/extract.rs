//! Text extraction from uploaded PDF resumes.
//!
//! Pure sequential text concatenation: every page in order, no separators,
//! no OCR, no layout reconstruction. The concatenation is then flattened to
//! a single whitespace-normalized line, which is what the prompt builder
//! expects.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Malformed, encrypted, or otherwise unreadable document.
    #[error("unreadable PDF: {0}")]
    Unreadable(#[from] pdf_extract::OutputError),

    /// The document parsed but yielded no text at all (scanned images,
    /// empty pages). Such files are skipped, not scored.
    #[error("document contains no extractable text")]
    NoText,
}

/// Seam between the batch loop and the PDF backend, so the loop and the HTTP
/// handlers can be exercised without fixture PDFs.
pub trait ResumeExtractor: Send + Sync {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Production extractor backed by the `pdf-extract` crate.
pub struct PdfExtractor;

impl ResumeExtractor for PdfExtractor {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError> {
        let raw = pdf_extract::extract_text_from_mem(pdf_bytes)?;
        let text = normalize_whitespace(&raw);
        if text.is_empty() {
            return Err(ExtractError::NoText);
        }
        Ok(text)
    }
}

/// Replaces newlines and tabs with single spaces, collapses whitespace runs
/// to exactly one space, and trims the ends.
fn normalize_whitespace(raw: &str) -> String {
    raw.replace('\n', " ")
        .replace('\t', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
