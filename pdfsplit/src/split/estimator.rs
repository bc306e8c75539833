//! Per-page size estimation.
//!
//! Each page's estimated size is the byte length it occupies when serialized
//! alone into a fresh single-page document. The estimate deliberately counts
//! shared resources (fonts, images) once per page that references them and
//! includes per-document overhead in every entry: exact sizing would require
//! re-serializing every candidate page combination.

use lopdf::Document;

use crate::error::Result;
use crate::split::pages::PageExtractor;

/// Ordered per-page byte-size estimates, indexed like the source's pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeTable {
    sizes: Vec<u64>,
}

impl PageSizeTable {
    /// Build a table from raw per-page sizes.
    pub fn from_sizes(sizes: Vec<u64>) -> Self {
        Self { sizes }
    }

    /// Number of entries, equal to the source's page count.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when the source document has no pages.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Estimated size of the page at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.sizes.get(index).copied()
    }

    /// Iterate over the estimates in page order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }

    /// Sum of all estimates.
    pub fn total(&self) -> u64 {
        self.sizes.iter().sum()
    }
}

/// Estimator producing a [`PageSizeTable`] for a loaded document.
pub struct PageSizeEstimator {
    extractor: PageExtractor,
}

impl PageSizeEstimator {
    /// Create a new estimator.
    pub fn new() -> Self {
        Self {
            extractor: PageExtractor::new(),
        }
    }

    /// Estimate the isolated size of every page in `doc`.
    ///
    /// The returned table has exactly one entry per page, in page order.
    /// A zero-page document yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if a page cannot be extracted or serialized.
    pub fn estimate(&self, doc: &Document) -> Result<PageSizeTable> {
        let page_count = self.extractor.page_count(doc);
        let mut sizes = Vec::with_capacity(page_count);

        for index in 0..page_count {
            let mut isolated = self.extractor.extract_range(doc, index..index + 1)?;

            let mut buffer = Vec::new();
            isolated.save_to(&mut buffer)?;

            sizes.push(buffer.len() as u64);
        }

        Ok(PageSizeTable::from_sizes(sizes))
    }
}

impl Default for PageSizeEstimator {
    fn default() -> Self {
        Self::new()
    }
}
