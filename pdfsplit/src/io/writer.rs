//! Part file writing and output directory preparation.
//!
//! This module provides safe and efficient PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Buffered output
//! - The destructive output-directory reset that precedes the first part
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.prepare_output_dir(Path::new("output")).await?;
//! writer.save(&doc, Path::new("output/doc_part_1.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfSplitError, Result};

/// Options for writing part files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// PDF writer with configurable behavior.
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Prepare the output directory for a fresh split.
    ///
    /// Creates the directory if it does not exist. If it does exist, every
    /// regular file inside it is deleted, including files unrelated to any
    /// previous split. Subdirectories are left alone.
    ///
    /// # Errors
    ///
    /// Returns `FailedToPrepareOutput` if the directory cannot be created,
    /// listed, or emptied.
    pub async fn prepare_output_dir(&self, dir: &Path) -> Result<()> {
        let wrap = |e: std::io::Error| PdfSplitError::FailedToPrepareOutput {
            path: dir.to_path_buf(),
            source: e,
        };

        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await.map_err(wrap)?;
            return Ok(());
        }

        let mut entries = tokio::fs::read_dir(dir).await.map_err(wrap)?;
        while let Some(entry) = entries.next_entry().await.map_err(wrap)? {
            let path = entry.path();
            if path.is_file() {
                tokio::fs::remove_file(&path).await.map_err(wrap)?;
            }
        }

        Ok(())
    }

    /// Save a part document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    /// (disk full, permission denied). Parts already written by a
    /// previous call are not rolled back.
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let _stats = self.save_with_stats(doc, path).await?;
        Ok(())
    }

    /// Save a part document and return statistics about the operation.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        // Serialization is CPU and disk bound; keep it off the async runtime.
        let mut doc_clone = doc.clone();

        let stats = task::spawn_blocking(move || {
            let start = Instant::now();

            let write_path = if options.atomic {
                path_buf.with_extension("tmp")
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|e| {
                PdfSplitError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: e,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

            doc_clone
                .save_to(&mut writer)
                .map_err(|e| PdfSplitError::FailedToWrite {
                    path: write_path.clone(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| PdfSplitError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;

            if options.atomic {
                std::fs::rename(&write_path, &path_buf).map_err(|e| {
                    PdfSplitError::FailedToWrite {
                        path: path_buf.clone(),
                        source: e,
                    }
                })?;
            }

            let write_time = start.elapsed();
            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok::<_, PdfSplitError>(WriteStatistics {
                write_time,
                file_size,
                output_path: path_buf,
            })
        })
        .await
        .map_err(|e| PdfSplitError::other(format!("Write task failed: {e}")))??;

        Ok(stats)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
