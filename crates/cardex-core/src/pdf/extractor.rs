//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfSource, Result};
use crate::error::PdfError;

/// PDF statement loader.
///
/// lopdf handles document structure and decryption; pdf-extract does the
/// per-page text extraction. Page texts are materialized once at load
/// time, so [`PdfSource::page_text`] is cheap and infallible apart from
/// page-number validation.
pub struct PdfExtractor {
    page_texts: Vec<String>,
    /// Pages with less trimmed text than this count as textless.
    min_text_length: usize,
}

impl PdfExtractor {
    /// Load a PDF from bytes, trying an empty password when the document
    /// is encrypted.
    pub fn load(data: &[u8]) -> Result<Self> {
        Self::load_with_password(data, None)
    }

    /// Load a PDF from bytes, decrypting with `password` when the
    /// document is encrypted.
    ///
    /// A wrong or missing password surfaces as [`PdfError::BadPassword`]
    /// so the caller can re-prompt and retry.
    pub fn load_with_password(data: &[u8], password: Option<&str>) -> Result<Self> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            if doc.decrypt(password.unwrap_or("")).is_err() {
                return Err(PdfError::BadPassword);
            }
            debug!("decrypted PDF");

            // pdf-extract needs the decrypted bytes.
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("loaded PDF with {} pages", page_count);

        let page_texts = pdf_extract::extract_text_from_mem_by_pages(&raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        Ok(Self {
            page_texts,
            min_text_length: 1,
        })
    }

    /// Treat pages with less than `len` characters of trimmed text as
    /// yielding no text.
    pub fn with_min_text_length(mut self, len: usize) -> Self {
        self.min_text_length = len;
        self
    }
}

impl PdfSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.page_texts.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<Option<String>> {
        let text = self
            .page_texts
            .get(page.checked_sub(1).ok_or(PdfError::InvalidPage(page))? as usize)
            .ok_or(PdfError::InvalidPage(page))?;

        if text.trim().len() < self.min_text_length.max(1) {
            Ok(None)
        } else {
            Ok(Some(text.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let result = PdfExtractor::load(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_page_zero_is_invalid() {
        let extractor = PdfExtractor {
            page_texts: vec!["x".to_string()],
            min_text_length: 1,
        };
        assert!(matches!(
            extractor.page_text(0),
            Err(PdfError::InvalidPage(0))
        ));
        assert!(matches!(
            extractor.page_text(2),
            Err(PdfError::InvalidPage(2))
        ));
    }

    #[test]
    fn test_whitespace_page_maps_to_none() {
        let extractor = PdfExtractor {
            page_texts: vec!["  \n ".to_string(), "text".to_string()],
            min_text_length: 1,
        };
        assert!(extractor.page_text(1).unwrap().is_none());
        assert_eq!(extractor.page_text(2).unwrap().unwrap(), "text");
    }

    #[test]
    fn test_min_text_length_filters_short_pages() {
        let extractor = PdfExtractor {
            page_texts: vec!["ok".to_string(), "a much longer page".to_string()],
            min_text_length: 1,
        }
        .with_min_text_length(5);

        assert!(extractor.page_text(1).unwrap().is_none());
        assert!(extractor.page_text(2).unwrap().is_some());
    }
}
