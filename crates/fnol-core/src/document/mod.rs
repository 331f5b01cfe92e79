//! Document text acquisition.
//!
//! Turns a file on disk into the plain text the triage pipeline works on.
//! Plain-text files are read verbatim; anything else goes through a
//! [`PdfTextSource`]. Text extraction is best effort: when a document cannot
//! be converted the loader logs a warning and yields empty text.

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DocumentError, Result};
use crate::models::config::DocumentConfig;

/// Capability that extracts the text layer of a PDF.
pub trait PdfTextSource: Send + Sync {
    /// Extract text from raw PDF bytes.
    fn extract_text(&self, data: &[u8]) -> std::result::Result<String, DocumentError>;
}

/// Fallback used when no PDF backend is available: every document is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPdfText;

impl PdfTextSource for NoPdfText {
    fn extract_text(&self, _data: &[u8]) -> std::result::Result<String, DocumentError> {
        Ok(String::new())
    }
}

/// The best PDF backend compiled into this build.
#[cfg(feature = "pdf")]
pub fn default_pdf_source() -> Box<dyn PdfTextSource> {
    Box::new(PdfExtractor::new())
}

/// The best PDF backend compiled into this build.
#[cfg(not(feature = "pdf"))]
pub fn default_pdf_source() -> Box<dyn PdfTextSource> {
    Box::new(NoPdfText)
}

/// Loads document text from disk.
pub struct DocumentLoader {
    pdf: Box<dyn PdfTextSource>,
    text_extensions: Vec<String>,
}

impl DocumentLoader {
    /// Create a loader with the default PDF backend that reads `.txt` verbatim.
    pub fn new() -> Self {
        Self::from_config(&DocumentConfig::default())
    }

    /// Create a loader from configuration.
    pub fn from_config(config: &DocumentConfig) -> Self {
        let pdf = if config.pdf_enabled {
            default_pdf_source()
        } else {
            Box::new(NoPdfText)
        };

        Self {
            pdf,
            text_extensions: config
                .text_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Replace the PDF backend.
    pub fn with_pdf_source(mut self, pdf: Box<dyn PdfTextSource>) -> Self {
        self.pdf = pdf;
        self
    }

    /// Whether `path` is read verbatim rather than through the PDF backend.
    pub fn is_text_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.text_extensions.iter().any(|t| *t == ext)
            })
            .unwrap_or(false)
    }

    /// Read the text of a document.
    ///
    /// Errors only when a plain-text file cannot be read. Any failure on the
    /// PDF path degrades to empty text.
    pub fn load(&self, path: &Path) -> Result<String> {
        if self.is_text_file(path) {
            debug!("Reading {} as plain text", path.display());
            return Ok(fs::read_to_string(path)?);
        }

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                return Ok(String::new());
            }
        };

        match self.pdf.extract_text(&data) {
            Ok(text) => {
                debug!("Extracted {} characters from {}", text.len(), path.display());
                Ok(text)
            }
            Err(e) => {
                warn!("No text extracted from {}: {}", path.display(), e);
                Ok(String::new())
            }
        }
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}
