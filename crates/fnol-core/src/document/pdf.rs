//! PDF text layer extraction using lopdf and pdf-extract.

use std::borrow::Cow;

use lopdf::Document;
use tracing::debug;

use super::PdfTextSource;
use crate::error::DocumentError;

/// Extracts embedded text from text-layer PDFs. Scanned documents without a
/// text layer yield little or no text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Parse the document, decrypting it with the empty password if needed.
    fn prepare<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>, DocumentError> {
        let mut doc = Document::load_mem(data).map_err(|e| DocumentError::Parse(e.to_string()))?;

        if doc.get_pages().is_empty() {
            return Err(DocumentError::NoPages);
        }
        debug!("Loaded PDF with {} pages", doc.get_pages().len());

        if !doc.is_encrypted() {
            return Ok(Cow::Borrowed(data));
        }

        if doc.decrypt("").is_err() {
            return Err(DocumentError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DocumentError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
        Ok(Cow::Owned(decrypted))
    }
}

impl PdfTextSource for PdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String, DocumentError> {
        let bytes = self.prepare(data)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| DocumentError::TextExtraction(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}
