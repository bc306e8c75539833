//! pdfsplit - Partition a PDF into size-bounded parts.
//!
//! This library splits a single PDF document into consecutive parts, each
//! holding as many whole pages as fit under a configurable size threshold.
//! It supports:
//!
//! - Per-page size estimation from the isolated serialized page
//! - Greedy, deterministic partition planning over contiguous page ranges
//! - Atomic part writes into a dedicated output directory
//! - Page-count conservation checking after every split
//! - Progress reporting over a non-blocking FIFO channel
//! - A single-in-flight background runner for interactive frontends
//!
//! # Examples
//!
//! ## Basic Split
//!
//! ```no_run
//! use pdfsplit::config::SplitConfig;
//! use pdfsplit::output::progress;
//! use pdfsplit::split::Splitter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig::new(PathBuf::from("report.pdf"));
//! config.validate()?;
//!
//! let (sender, mut receiver) = progress::channel();
//! let outcome = Splitter::new().split(&config, &sender).await?;
//!
//! for event in receiver.drain() {
//!     println!("{event:?}");
//! }
//! println!("Wrote {} parts", outcome.parts_written());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Runner
//!
//! ```no_run
//! use pdfsplit::config::SplitConfig;
//! use pdfsplit::output::progress;
//! use pdfsplit::runner::SplitRunner;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig::new(PathBuf::from("report.pdf"));
//! let (sender, mut receiver) = progress::channel();
//!
//! let mut runner = SplitRunner::new();
//! runner.start(config, sender)?;
//!
//! // Drain progress while the worker runs, then collect the outcome.
//! while runner.is_busy() {
//!     for event in receiver.drain() {
//!         println!("{event:?}");
//!     }
//!     tokio::time::sleep(std::time::Duration::from_millis(100)).await;
//! }
//! let outcome = runner.join().await?;
//! println!("Split into {} parts", outcome.parts_written());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod runner;
pub mod split;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use config::SplitConfig;
pub use error::{PdfSplitError, Result};
pub use output::progress::{ProgressEvent, ProgressReceiver, ProgressSender, SplitStatus};
pub use runner::SplitRunner;
pub use split::{SplitOutcome, Splitter};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
