//! Greedy part-boundary planning.
//!
//! A single forward pass over the page-size table accumulates estimated
//! sizes; the page that pushes the running total to the threshold closes the
//! part in progress and seeds the next one. Pages are atomic: a page whose
//! isolated size alone reaches the threshold still becomes its own part.

use std::ops::Range;

use crate::split::estimator::PageSizeTable;

/// A planned part: a contiguous, non-empty run of page indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPlan {
    /// 1-based part number, used for output file naming.
    pub number: usize,

    /// Page indices `[start, end)` into the source document.
    pub pages: Range<usize>,
}

impl PartPlan {
    /// Number of pages in this part.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Planner turning a [`PageSizeTable`] into an ordered sequence of parts.
pub struct PartitionPlanner;

impl PartitionPlanner {
    /// Create a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Plan the parts for `sizes` against a byte `threshold`.
    ///
    /// The emitted parts are contiguous, non-overlapping, and cover the full
    /// index range exactly once. An empty table yields no parts; a threshold
    /// no page run ever reaches yields a single part with every page.
    ///
    /// `threshold` must be positive; configuration validation rejects a zero
    /// part size before planning is reached.
    pub fn plan(&self, sizes: &PageSizeTable, threshold: u64) -> Vec<PartPlan> {
        let mut parts = Vec::new();
        let mut accumulated: u64 = 0;
        let mut part_start: usize = 0;

        for (i, size) in sizes.iter().enumerate() {
            accumulated += size;

            if accumulated >= threshold {
                // Page i triggered the overflow but is not consumed here: it
                // becomes the first page of the next part.
                if i > part_start {
                    parts.push(PartPlan {
                        number: parts.len() + 1,
                        pages: part_start..i,
                    });
                }
                part_start = i;
                accumulated = size;
            }
        }

        if part_start < sizes.len() {
            parts.push(PartPlan {
                number: parts.len() + 1,
                pages: part_start..sizes.len(),
            });
        }

        parts
    }
}

impl Default for PartitionPlanner {
    fn default() -> Self {
        Self::new()
    }
}
