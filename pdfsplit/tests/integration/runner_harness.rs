//! Background runner behavior observed from the consumer side.

use pdfsplit::config::SplitConfig;
use pdfsplit::output::progress::{self, ProgressEvent, SplitStatus};
use pdfsplit::runner::SplitRunner;
use pdfsplit::PdfSplitError;
use std::time::Duration;
use tempfile::TempDir;

use crate::common::write_pdf;

#[tokio::test]
async fn test_runner_reports_done_after_success() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 4, 0);

    let mut config = SplitConfig::new(input);
    config.output_dir = dir.path().join("output");

    let (sender, mut receiver) = progress::channel();
    let mut runner = SplitRunner::new();
    runner.start(config, sender).unwrap();

    let outcome = runner.join().await.unwrap();
    assert_eq!(outcome.source_pages, 4);

    let events = receiver.drain();
    assert_eq!(
        events.last(),
        Some(&ProgressEvent::Status(SplitStatus::Done))
    );
}

#[tokio::test]
async fn test_runner_rejects_invalid_config_without_spawning() {
    let dir = TempDir::new().unwrap();
    let mut config = SplitConfig::new(dir.path().join("missing.pdf"));
    config.output_dir = dir.path().join("output");

    let (sender, mut receiver) = progress::channel();
    let mut runner = SplitRunner::new();

    let err = runner.start(config, sender).unwrap_err();
    assert!(err.is_input_error());
    assert!(!runner.is_busy());

    // Nothing ran: no events, no output directory.
    assert!(receiver.drain().is_empty());
    assert!(!dir.path().join("output").exists());
}

#[tokio::test]
async fn test_runner_is_single_in_flight() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 8, 50 * 1024);

    let mut config = SplitConfig::new(input.clone());
    config.output_dir = dir.path().join("output");

    let (sender, _receiver) = progress::channel();
    let mut runner = SplitRunner::new();
    runner.start(config.clone(), sender).unwrap();

    // No await has run since start(), so the current-thread test runtime
    // has not polled the worker yet and the slot is observably taken.
    assert!(runner.is_busy());

    let (sender, _receiver) = progress::channel();
    assert!(matches!(
        runner.start(config, sender),
        Err(PdfSplitError::OperationInFlight)
    ));

    runner.join().await.unwrap();
    assert!(!runner.is_busy());

    // The slot is free again after join.
    let mut config = SplitConfig::new(input);
    config.output_dir = dir.path().join("output");
    let (sender, _receiver) = progress::channel();
    runner.start(config, sender).unwrap();
    runner.join().await.unwrap();
}

#[tokio::test]
async fn test_runner_streams_progress_while_working() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 6, 100 * 1024);

    let mut config = SplitConfig::new(input);
    config.output_dir = dir.path().join("output");
    config.part_size_mb = 1;

    let (sender, mut receiver) = progress::channel();
    let mut runner = SplitRunner::new();
    runner.start(config, sender).unwrap();

    // Poll the channel the way an interactive frontend would.
    let mut events = Vec::new();
    loop {
        events.extend(receiver.drain());
        if events
            .iter()
            .any(|e| matches!(e, ProgressEvent::Status(_)))
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    runner.join().await.unwrap();

    // Terminal status is the last event and appears exactly once.
    let status_count = events
        .iter()
        .filter(|e| matches!(e, ProgressEvent::Status(_)))
        .count();
    assert_eq!(status_count, 1);
    assert!(matches!(events.last(), Some(ProgressEvent::Status(_))));
}

#[tokio::test]
async fn test_runner_reports_failure_status() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("garbage.pdf");
    std::fs::write(&input, b"not a pdf").unwrap();

    let mut config = SplitConfig::new(input);
    config.output_dir = dir.path().join("output");

    let (sender, mut receiver) = progress::channel();
    let mut runner = SplitRunner::new();
    runner.start(config, sender).unwrap();

    assert!(runner.join().await.is_err());

    let events = receiver.drain();
    assert!(matches!(
        events.last(),
        Some(ProgressEvent::Status(SplitStatus::Failed(_)))
    ));
}
