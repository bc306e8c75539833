//! pdfsplit - Split a PDF into size-bounded parts.
//!
//! A CLI tool that partitions a PDF into consecutive parts, each kept under
//! a configurable size threshold.

mod cli;

use clap::Parser;
use std::process;
use std::time::Duration;

use crate::cli::Cli;
use pdfsplit::error::PdfSplitError;
use pdfsplit::output::progress::{self, ProgressEvent, SplitStatus};
use pdfsplit::output::{display_outcome, OutputFormatter};
use pdfsplit::runner::SplitRunner;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfSplitError> {
    // Validate CLI arguments
    cli.validate()?;

    // Convert CLI to config; path checks happen here, before any worker
    // starts or the output directory is touched.
    let config = cli.to_config()?;

    // Create output formatter
    let formatter = OutputFormatter::from_config(&config);

    if formatter.should_print() {
        formatter.info(&format!("{} v{}", pdfsplit::NAME, pdfsplit::VERSION));
        formatter.blank_line();
    }

    // Start the split on a background task and stream its progress.
    let (sender, mut receiver) = progress::channel();
    let mut runner = SplitRunner::new();
    runner.start(config, sender)?;

    let mut failure_reported = false;
    let mut poll = tokio::time::interval(Duration::from_millis(100));
    'progress: loop {
        poll.tick().await;

        for event in receiver.drain() {
            match event {
                ProgressEvent::Line(line) => formatter.progress_line(&line),
                ProgressEvent::Status(status) => {
                    match status {
                        SplitStatus::Done => formatter.success(&status.to_string()),
                        SplitStatus::Failed(_) => {
                            formatter.error(&status.to_string());
                            failure_reported = true;
                        }
                    }
                    break 'progress;
                }
            }
        }
    }

    let outcome = match runner.join().await {
        Ok(outcome) => outcome,
        Err(err) => {
            // The worker already logged this failure through the progress
            // channel; exit without printing it a second time.
            if failure_reported {
                process::exit(err.exit_code());
            }
            return Err(err);
        }
    };

    if formatter.is_verbose() {
        formatter.blank_line();
        display_outcome(&formatter, &outcome);
    }

    Ok(())
}
