//! Error types for the cardex-core library.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
///
/// Per-line parse failures are not errors; a line that does not look like
/// a transaction is silently skipped. Only document-layer failures belong
/// here.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and the supplied password was missing or wrong.
    #[error("incorrect or missing PDF password")]
    BadPassword,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
