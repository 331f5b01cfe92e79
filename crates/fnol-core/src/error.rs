//! Error types for the fnol-core library.
//!
//! Field extraction and triage are total functions and never fail; errors only
//! arise while acquiring document text or loading configuration.

use thiserror::Error;

/// Main error type for the fnol library.
#[derive(Error, Debug)]
pub enum FnolError {
    /// Document text acquisition error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a binary document into text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and the empty password did not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the fnol library.
pub type Result<T> = std::result::Result<T, FnolError>;
