//! Page extraction from the source document.
//!
//! Both size estimation and part assembly need the same primitive: a new
//! document containing a contiguous run of the source's pages, with
//! everything else dropped.

use std::ops::Range;

use lopdf::Document;

use crate::error::{PdfSplitError, Result};

/// Page extractor for building sub-documents from a source.
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Build a new document containing only the pages in `range`.
    ///
    /// `range` is 0-indexed over the source's page order. Pages are copied
    /// in order; no reordering, deduplication, or content transformation.
    /// Orphaned objects left behind by the dropped pages are pruned.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or extends past the last page.
    pub fn extract_range(&self, source: &Document, range: Range<usize>) -> Result<Document> {
        let page_count = source.get_pages().len();

        if range.is_empty() {
            return Err(PdfSplitError::assembly_failed("empty page range"));
        }

        if range.end > page_count {
            return Err(PdfSplitError::assembly_failed(format!(
                "page range {}..{} exceeds document page count {}",
                range.start, range.end, page_count
            )));
        }

        let mut doc = source.clone();

        // lopdf page numbers are 1-indexed; deleting a page renumbers the
        // ones after it, so the complement is removed highest-first.
        let delete: Vec<u32> = (1..=page_count as u32)
            .filter(|p| {
                let idx = (*p - 1) as usize;
                idx < range.start || idx >= range.end
            })
            .rev()
            .collect();

        for page_number in delete {
            doc.delete_pages(&[page_number]);
        }

        doc.prune_objects();

        Ok(doc)
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}
