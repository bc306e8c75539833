//! CLI argument parsing for pdfsplit.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.

use clap::Parser;
use std::path::PathBuf;

use pdfsplit::config::{SplitConfig, DEFAULT_OUTPUT_DIR, DEFAULT_PART_SIZE_MB};
use pdfsplit::error::{PdfSplitError, Result};

/// Split a PDF into size-bounded parts.
///
/// pdfsplit partitions a PDF document into consecutive parts, each holding
/// as many whole pages as fit under the part size threshold. Pages are
/// never reordered, duplicated, or dropped.
#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(version)]
#[command(about = "Split a PDF into size-bounded parts", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF file to split
    ///
    /// Parts are named after this file:
    ///   pdfsplit report.pdf      # output/report_part_1.pdf, ...
    #[arg(required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Maximum estimated size per part, in whole megabytes
    ///
    /// Each part accumulates pages until its estimated size reaches this
    /// threshold. A single page larger than the threshold still becomes
    /// its own part.
    #[arg(short = 's', long, value_name = "MB", default_value_t = DEFAULT_PART_SIZE_MB)]
    pub part_size: u64,

    /// Directory the part files are written to
    ///
    /// The directory is created if missing and emptied of files before
    /// the split starts. Files from a previous run never survive.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show per-part statistics after the split
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated SplitConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if the part size is zero or the input path does
    /// not point at an existing regular file.
    pub fn to_config(&self) -> Result<SplitConfig> {
        let mut config = SplitConfig::new(self.input.clone());
        config.output_dir = self.output_dir.clone();
        config.part_size_mb = self.part_size;
        config.quiet = self.quiet;
        config.verbose = self.verbose;

        config.validate()?;
        Ok(config)
    }

    /// Validate CLI arguments before processing.
    ///
    /// Performs early validation that doesn't require file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the part size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.part_size == 0 {
            return Err(PdfSplitError::InvalidPartSize {
                value: self.part_size,
            });
        }

        Ok(())
    }
}
