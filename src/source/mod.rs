//! Document acquisition: turning a source designation into text.
//!
//! Provenance is decided once, at the boundary, as a tagged
//! [`DocumentSource`] — the matcher never sees where a document came from.
//! Everything here is I/O glue around the pure core: file reading, format
//! extraction, and remote fetching all happen before validation starts.

pub mod extractors;

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::matcher::Document;

pub use extractors::{extractor_for, DocumentExtractor, PdfExtractor, PlainTextExtractor};

/// Errors from resolving a document source
#[derive(Debug, Error)]
pub enum SourceError {
    /// No extractor is registered for the file's format
    #[error("unsupported document format '.{extension}'")]
    UnsupportedFormat { extension: String },

    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extractor failed on the file's contents
    #[error("failed to extract text from {path}: {detail}")]
    Extraction { path: PathBuf, detail: String },

    /// The remote document could not be fetched
    #[error("failed to fetch {url}: {detail}")]
    Fetch { url: String, detail: String },
}

/// Where a document comes from. Exactly one variant is chosen at the
/// boundary; there is no optional-field ambiguity downstream.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Text supplied directly by the caller
    Inline(String),
    /// A file on the local filesystem, handled by a format extractor
    LocalPath(PathBuf),
    /// A document fetched over HTTP(S), text body only
    RemoteUrl(String),
}

impl DocumentSource {
    /// Resolve the source into a [`Document`], fetching or extracting as
    /// needed. `fetch_timeout` only applies to remote sources.
    pub async fn resolve(&self, fetch_timeout: Duration) -> Result<Document, SourceError> {
        match self {
            DocumentSource::Inline(text) => Ok(Document::from_text(text.clone())),

            DocumentSource::LocalPath(path) => {
                let extractor = extractor_for(path)?;
                debug!(extractor = extractor.name(), path = %path.display(), "extracting document");
                extractor.extract(path)
            }

            DocumentSource::RemoteUrl(url) => {
                debug!(url = %url, "fetching document");
                let client = reqwest::Client::builder()
                    .timeout(fetch_timeout)
                    .build()
                    .map_err(|e| SourceError::Fetch {
                        url: url.clone(),
                        detail: e.to_string(),
                    })?;

                let response = client.get(url).send().await.map_err(|e| SourceError::Fetch {
                    url: url.clone(),
                    detail: e.to_string(),
                })?;

                if !response.status().is_success() {
                    return Err(SourceError::Fetch {
                        url: url.clone(),
                        detail: format!("server returned {}", response.status()),
                    });
                }

                let text = response.text().await.map_err(|e| SourceError::Fetch {
                    url: url.clone(),
                    detail: e.to_string(),
                })?;

                Ok(Document::from_text(text))
            }
        }
    }
}
