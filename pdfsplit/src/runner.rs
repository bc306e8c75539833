//! Single-in-flight split worker.
//!
//! A [`SplitRunner`] owns at most one background split at a time. Starting is
//! rejected while a previous operation is still running; configuration errors
//! are caught synchronously before any worker is spawned, so an invalid
//! request never occupies the slot.

use tokio::task::JoinHandle;

use crate::config::SplitConfig;
use crate::error::{PdfSplitError, Result};
use crate::output::progress::{ProgressSender, SplitStatus};
use crate::split::splitter::{SplitOutcome, Splitter};

/// Runs split operations one at a time on a background task.
#[derive(Debug, Default)]
pub struct SplitRunner {
    handle: Option<JoinHandle<Result<SplitOutcome>>>,
}

impl SplitRunner {
    /// Create an idle runner.
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Whether a split is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Start a split in the background.
    ///
    /// The configuration is validated before anything is spawned, so an
    /// invalid input path or part size surfaces here and the runner stays
    /// idle. On completion the worker publishes a terminal status through
    /// `progress`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSplitError::OperationInFlight`] when a previous split
    /// has not finished, or a validation error from the configuration.
    pub fn start(&mut self, config: SplitConfig, progress: ProgressSender) -> Result<()> {
        if self.is_busy() {
            return Err(PdfSplitError::OperationInFlight);
        }

        config.validate()?;

        self.handle = Some(tokio::spawn(async move {
            let splitter = Splitter::new();
            match splitter.split(&config, &progress).await {
                Ok(outcome) => {
                    progress.finish(SplitStatus::Done);
                    Ok(outcome)
                }
                Err(err) => {
                    progress.log(format!("Error: {err}"));
                    progress.finish(SplitStatus::Failed(err.to_string()));
                    Err(err)
                }
            }
        }));

        Ok(())
    }

    /// Wait for the in-flight split to finish and return its outcome.
    ///
    /// Returns the current operation's result and frees the slot. Calling
    /// this with no operation in flight is an error.
    ///
    /// # Errors
    ///
    /// Propagates the worker's error, or [`PdfSplitError::TaskFailed`] if
    /// the worker panicked or was cancelled.
    pub async fn join(&mut self) -> Result<SplitOutcome> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| PdfSplitError::other("no split operation in flight"))?;

        handle
            .await
            .map_err(|err| PdfSplitError::TaskFailed {
                reason: err.to_string(),
            })?
    }
}
