//! Format-specific document extractors.
//!
//! Extractors turn a local file into text (and page texts, when the format
//! is paginated). Selection happens once, by file extension; a format with
//! no registered extractor is a typed [`SourceError::UnsupportedFormat`],
//! not a runtime surprise.

use std::path::Path;

use super::SourceError;
use crate::matcher::Document;

/// Extracts plain text (and pages, when available) from a local file
pub trait DocumentExtractor: Send + Sync + std::fmt::Debug {
    /// Human-readable extractor name
    fn name(&self) -> &'static str;

    /// Whether this extractor handles the given lowercase file extension
    fn supports(&self, extension: &str) -> bool;

    fn extract(&self, path: &Path) -> Result<Document, SourceError>;
}

/// PDF extractor producing one text per page, so hits carry page numbers
#[derive(Debug)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supports(&self, extension: &str) -> bool {
        extension == "pdf"
    }

    fn extract(&self, path: &Path) -> Result<Document, SourceError> {
        let data = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&data).map_err(|source| {
            SourceError::Extraction {
                path: path.to_path_buf(),
                detail: source.to_string(),
            }
        })?;

        Ok(Document::from_pages(pages))
    }
}

/// Fallback extractor: reads the file as UTF-8 text, no pagination
#[derive(Debug)]
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn supports(&self, extension: &str) -> bool {
        // Anything not claimed by a format-specific extractor and not
        // explicitly unsupported is treated as text
        !matches!(extension, "pdf" | "docx" | "doc")
    }

    fn extract(&self, path: &Path) -> Result<Document, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Document::from_text(text))
    }
}

/// Pick the extractor for a path, or fail with a typed error for formats
/// nothing here can read (e.g. `.docx`).
pub fn extractor_for(path: &Path) -> Result<&'static dyn DocumentExtractor, SourceError> {
    static PDF: PdfExtractor = PdfExtractor;
    static PLAIN: PlainTextExtractor = PlainTextExtractor;
    static EXTRACTORS: [&(dyn DocumentExtractor); 2] = [&PDF, &PLAIN];

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    EXTRACTORS
        .iter()
        .find(|e| e.supports(&extension))
        .copied()
        .ok_or(SourceError::UnsupportedFormat { extension })
}
