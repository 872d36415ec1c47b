//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A loaded document that can hand out per-page plain text.
///
/// This is the boundary the extraction core sees: an ordered sequence of
/// pages, each yielding text or nothing (e.g. a scanned image page).
/// Decryption and password handling happen before pages reach this trait.
pub trait PdfSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Plain text of the given 1-indexed page, or `None` when the page
    /// yields no text.
    fn page_text(&self, page: u32) -> Result<Option<String>>;
}
