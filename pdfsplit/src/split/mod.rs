//! The size-bounded document partitioner.
//!
//! Pipeline: [`estimator::PageSizeEstimator`] measures each page's isolated
//! serialized size, [`planner::PartitionPlanner`] turns the size table into
//! contiguous page ranges, [`assembler::PartAssembler`] materializes each
//! range as an output document, and [`conservation::Conservation`] re-checks
//! that every page was written exactly once. [`splitter::Splitter`] wires the
//! stages together for one operation.

pub mod assembler;
pub mod conservation;
pub mod estimator;
pub mod pages;
pub mod planner;
pub mod splitter;

pub use assembler::{AssembledPart, PartAssembler};
pub use conservation::Conservation;
pub use estimator::{PageSizeEstimator, PageSizeTable};
pub use pages::PageExtractor;
pub use planner::{PartPlan, PartitionPlanner};
pub use splitter::{SplitOutcome, Splitter};
