//! Statement extraction: feeding page text through a line parser.

use tracing::{debug, info};

use crate::models::Transaction;
use crate::parsers::LineParser;
use crate::pdf::{PdfSource, Result};

/// Walks the pages of a loaded statement and collects every line the
/// selected parser recognizes, in encounter order (page order, then
/// in-page line order).
pub struct StatementExtractor {
    /// Maximum pages to walk (0 = unlimited).
    max_pages: usize,
}

impl StatementExtractor {
    pub fn new() -> Self {
        Self { max_pages: 0 }
    }

    /// Cap the number of pages walked. 0 means unlimited.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Extract transactions from every page of `source`.
    ///
    /// Pages that yield no text are skipped; non-matching lines are
    /// skipped silently. An empty result is a valid outcome ("no
    /// transactions found"), not an error. A page-source failure aborts
    /// the whole pass: no partial record set is ever returned as
    /// complete.
    pub fn extract(
        &self,
        source: &impl PdfSource,
        parser: &dyn LineParser,
    ) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();

        let mut last_page = source.page_count();
        if self.max_pages > 0 {
            last_page = last_page.min(self.max_pages as u32);
        }

        for page in 1..=last_page {
            let Some(text) = source.page_text(page)? else {
                debug!("page {} has no extractable text, skipping", page);
                continue;
            };

            let before = transactions.len();
            self.extract_from_text(&text, parser, &mut transactions);
            debug!(
                "page {}: {} transaction(s) matched",
                page,
                transactions.len() - before
            );
        }

        info!("extracted {} transaction(s)", transactions.len());
        Ok(transactions)
    }

    /// Run the parser over one block of already-extracted text, appending
    /// matches to `out` in line order.
    pub fn extract_from_text(
        &self,
        text: &str,
        parser: &dyn LineParser,
        out: &mut Vec<Transaction>,
    ) {
        for line in text.split('\n') {
            if let Some(txn) = parser.parse_line(line) {
                out.push(txn);
            }
        }
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}
