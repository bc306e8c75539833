//! Part document assembly.
//!
//! Turns a planned page range into a standalone output document. Writing the
//! document to disk is the splitter's job; assembly itself is pure.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::split::pages::PageExtractor;
use crate::split::planner::PartPlan;

/// A part that has been written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledPart {
    /// 1-based part number.
    pub number: usize,

    /// Number of pages written into this part.
    pub page_count: usize,

    /// Path of the part file on disk.
    pub path: PathBuf,

    /// Size of the part file in bytes.
    pub file_size: u64,
}

/// Assembler building part documents from the source.
pub struct PartAssembler {
    extractor: PageExtractor,
}

impl PartAssembler {
    /// Create a new part assembler.
    pub fn new() -> Self {
        Self {
            extractor: PageExtractor::new(),
        }
    }

    /// Build the output document for one planned part.
    ///
    /// Copies the plan's pages from `source` in order and compresses the
    /// result. The source document is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan's range cannot be extracted.
    pub fn assemble(&self, source: &Document, plan: &PartPlan) -> Result<Document> {
        let mut doc = self.extractor.extract_range(source, plan.pages.clone())?;
        doc.compress();
        Ok(doc)
    }
}

impl Default for PartAssembler {
    fn default() -> Self {
        Self::new()
    }
}
