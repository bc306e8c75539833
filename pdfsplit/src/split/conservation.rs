//! Page-count conservation check.
//!
//! After every part has been written, the page counts are summed and compared
//! with the source document. The planner makes a mismatch unreachable by
//! construction; if one is ever observed it points at an assembler defect, so
//! it is reported as a warning rather than escalated to a fatal error.

use serde::{Deserialize, Serialize};

use crate::split::assembler::AssembledPart;

/// Result of the conservation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conservation {
    /// Total pages written across all parts.
    pub pages_written: usize,

    /// Page count of the source document.
    pub source_pages: usize,
}

impl Conservation {
    /// Sum the written parts and compare with the source page count.
    pub fn check(parts: &[AssembledPart], source_pages: usize) -> Self {
        let pages_written = parts.iter().map(|p| p.page_count).sum();
        Self {
            pages_written,
            source_pages,
        }
    }

    /// True when every source page landed in exactly one part.
    pub fn matches(&self) -> bool {
        self.pages_written == self.source_pages
    }

    /// Human-readable progress line for this result.
    pub fn report_line(&self) -> String {
        if self.matches() {
            format!(
                "Total pages in parts match original PDF: {}",
                self.pages_written
            )
        } else {
            format!(
                "WARNING: Total pages in parts ({}) does not match original PDF ({})",
                self.pages_written, self.source_pages
            )
        }
    }
}
