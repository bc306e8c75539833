//! Configuration module for pdfsplit.
//!
//! This module holds the validated, normalized configuration that drives a
//! split operation. Validation runs synchronously before any worker starts,
//! so a rejected configuration never touches the output directory.

use std::path::{Path, PathBuf};

use crate::error::{PdfSplitError, Result};

/// Number of bytes in one megabyte.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Default part size in megabytes.
pub const DEFAULT_PART_SIZE_MB: u64 = 5;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Complete configuration for a PDF split operation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Path to the source PDF.
    pub input: PathBuf,

    /// Directory the part files are written to.
    ///
    /// The directory is destructively reset before the first part is
    /// written: created if absent, emptied of files otherwise.
    pub output_dir: PathBuf,

    /// Target maximum accumulated estimated size per part, in whole megabytes.
    pub part_size_mb: u64,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl SplitConfig {
    /// Create a configuration with default output directory and part size.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            part_size_mb: DEFAULT_PART_SIZE_MB,
            quiet: false,
            verbose: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The part size is zero
    /// - The input file does not exist
    /// - The input path is not a regular file
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.part_size_mb == 0 {
            return Err(PdfSplitError::InvalidPartSize {
                value: self.part_size_mb,
            });
        }

        if !self.input.exists() {
            return Err(PdfSplitError::file_not_found(self.input.clone()));
        }

        if !self.input.is_file() {
            return Err(PdfSplitError::not_a_file(self.input.clone()));
        }

        if self.verbose && self.quiet {
            return Err(PdfSplitError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }

    /// Get the part-size threshold in bytes.
    pub fn part_size_bytes(&self) -> u64 {
        self.part_size_mb * BYTES_PER_MB
    }

    /// Base name of the input file, without the extension.
    pub fn input_stem(&self) -> String {
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    /// File name for a part, 1-based, no zero padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::config::SplitConfig;
    ///
    /// let config = SplitConfig::new("reports/annual.pdf");
    /// assert_eq!(config.part_file_name(1), "annual_part_1.pdf");
    /// ```
    pub fn part_file_name(&self, part_number: usize) -> String {
        format!("{}_part_{}.pdf", self.input_stem(), part_number)
    }

    /// Full path a part will be written to.
    pub fn part_path(&self, part_number: usize) -> PathBuf {
        self.output_dir.join(self.part_file_name(part_number))
    }

    /// Returns the input path.
    pub fn input(&self) -> &Path {
        self.input.as_path()
    }
}
