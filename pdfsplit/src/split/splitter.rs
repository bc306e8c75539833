//! Split orchestration.
//!
//! Runs the full pipeline for one operation: prepare the output directory,
//! load the source, estimate per-page sizes, plan the part boundaries,
//! assemble and write each part, then re-check page-count conservation.
//! Every stage runs exactly once per invocation and nothing is cached
//! between invocations.

use std::time::{Duration, Instant};

use crate::config::SplitConfig;
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter};
use crate::output::progress::ProgressSender;
use crate::split::assembler::{AssembledPart, PartAssembler};
use crate::split::conservation::Conservation;
use crate::split::estimator::PageSizeEstimator;
use crate::split::planner::PartitionPlanner;

/// Outcome of a completed split operation.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Parts written to disk, in order.
    pub parts: Vec<AssembledPart>,

    /// Page count of the source document.
    pub source_pages: usize,

    /// Total pages written across all parts.
    pub pages_written: usize,

    /// Whether the conservation check passed.
    pub pages_match: bool,

    /// Wall-clock time for the whole operation.
    pub split_time: Duration,
}

impl SplitOutcome {
    /// Number of parts produced.
    pub fn parts_written(&self) -> usize {
        self.parts.len()
    }
}

/// The size-bounded document partitioner.
pub struct Splitter {
    reader: PdfReader,
    estimator: PageSizeEstimator,
    planner: PartitionPlanner,
    assembler: PartAssembler,
    writer: PdfWriter,
}

impl Splitter {
    /// Create a new splitter with default components.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            estimator: PageSizeEstimator::new(),
            planner: PartitionPlanner::new(),
            assembler: PartAssembler::new(),
            writer: PdfWriter::new(),
        }
    }

    /// Run one split operation.
    ///
    /// Progress lines are emitted through `progress` in the order the
    /// corresponding steps complete. The caller is expected to have
    /// validated `config` already; the splitter assumes a readable input
    /// path and a positive part size.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be prepared, the
    /// source cannot be loaded, or a part cannot be assembled or written.
    /// A write failure aborts the remaining parts but does not remove the
    /// parts already on disk.
    pub async fn split(
        &self,
        config: &SplitConfig,
        progress: &ProgressSender,
    ) -> Result<SplitOutcome> {
        let split_start = Instant::now();

        self.writer.prepare_output_dir(&config.output_dir).await?;

        progress.log(format!("Opening PDF: {}", config.input.display()));
        let loaded = self.reader.load(&config.input).await?;
        progress.log(format!(
            "Original PDF total pages count: {}",
            loaded.page_count
        ));

        let sizes = self.estimator.estimate(&loaded.document)?;
        let plans = self.planner.plan(&sizes, config.part_size_bytes());

        let mut parts: Vec<AssembledPart> = Vec::with_capacity(plans.len());
        for plan in &plans {
            let part_doc = self.assembler.assemble(&loaded.document, plan)?;
            let part_path = config.part_path(plan.number);

            let stats = self.writer.save_with_stats(&part_doc, &part_path).await?;

            progress.log(format!(
                "Part #{} has {} pages.",
                plan.number,
                plan.page_count()
            ));

            parts.push(AssembledPart {
                number: plan.number,
                page_count: plan.page_count(),
                path: stats.output_path,
                file_size: stats.file_size,
            });
        }

        progress.log(format!("PDF split into {} parts.", parts.len()));

        let conservation = Conservation::check(&parts, loaded.page_count);
        progress.log(conservation.report_line());

        Ok(SplitOutcome {
            source_pages: loaded.page_count,
            pages_written: conservation.pages_written,
            pages_match: conservation.matches(),
            parts,
            split_time: split_start.elapsed(),
        })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}
