//! End-to-end split scenarios.

use pdfsplit::config::SplitConfig;
use pdfsplit::output::progress::{self, ProgressEvent};
use pdfsplit::split::Splitter;
use tempfile::TempDir;

use crate::common::{part_file_names, write_pdf};

fn config_for(input: std::path::PathBuf, output_dir: std::path::PathBuf) -> SplitConfig {
    let mut config = SplitConfig::new(input);
    config.output_dir = output_dir;
    config
}

#[tokio::test]
async fn test_small_document_becomes_one_part() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "report.pdf", 5, 0);
    let out_dir = dir.path().join("output");

    let config = config_for(input, out_dir.clone());
    let (sender, _receiver) = progress::channel();

    let outcome = Splitter::new().split(&config, &sender).await.unwrap();

    assert_eq!(outcome.parts_written(), 1);
    assert_eq!(outcome.source_pages, 5);
    assert_eq!(outcome.pages_written, 5);
    assert!(outcome.pages_match);
    assert_eq!(part_file_names(&out_dir), vec!["report_part_1.pdf"]);
}

#[tokio::test]
async fn test_pages_are_conserved_across_parts() {
    let dir = TempDir::new().unwrap();
    // Pages around 200 KB each against a 1 MB threshold force several parts.
    let input = write_pdf(&dir, "big.pdf", 12, 200 * 1024);
    let out_dir = dir.path().join("output");

    let mut config = config_for(input, out_dir.clone());
    config.part_size_mb = 1;
    let (sender, _receiver) = progress::channel();

    let outcome = Splitter::new().split(&config, &sender).await.unwrap();

    assert!(outcome.parts_written() > 1);
    assert_eq!(outcome.pages_written, 12);
    assert!(outcome.pages_match);

    // Part numbers are consecutive from 1 and every file exists.
    for (index, part) in outcome.parts.iter().enumerate() {
        assert_eq!(part.number, index + 1);
        assert!(part.path.exists());
        assert!(part.file_size > 0);
    }

    // Re-open each part and confirm its page count on disk.
    let mut total = 0;
    for part in &outcome.parts {
        let doc = lopdf::Document::load(&part.path).await.unwrap();
        assert_eq!(doc.get_pages().len(), part.page_count);
        total += part.page_count;
    }
    assert_eq!(total, 12);
}

#[tokio::test]
async fn test_part_files_follow_naming_scheme() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "annual.pdf", 9, 200 * 1024);
    let out_dir = dir.path().join("output");

    let mut config = config_for(input, out_dir.clone());
    config.part_size_mb = 1;
    let (sender, _receiver) = progress::channel();

    let outcome = Splitter::new().split(&config, &sender).await.unwrap();

    let expected: Vec<String> = (1..=outcome.parts_written())
        .map(|n| format!("annual_part_{n}.pdf"))
        .collect();
    let mut names = part_file_names(&out_dir);
    names.sort_by_key(|name| {
        name.trim_start_matches("annual_part_")
            .trim_end_matches(".pdf")
            .parse::<usize>()
            .unwrap()
    });
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_output_dir_is_reset_between_runs() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("output");

    // First run on a larger document leaves more parts behind.
    let big = write_pdf(&dir, "doc.pdf", 10, 200 * 1024);
    let mut config = config_for(big, out_dir.clone());
    config.part_size_mb = 1;
    let (sender, _r) = progress::channel();
    let first = Splitter::new().split(&config, &sender).await.unwrap();
    assert!(first.parts_written() > 1);

    // Second run on a tiny document must leave only its own single part.
    let small = write_pdf(&dir, "tiny.pdf", 1, 0);
    let config = config_for(small, out_dir.clone());
    let (sender, _r) = progress::channel();
    let second = Splitter::new().split(&config, &sender).await.unwrap();

    assert_eq!(second.parts_written(), 1);
    assert_eq!(part_file_names(&out_dir), vec!["tiny_part_1.pdf"]);
}

#[tokio::test]
async fn test_progress_lines_arrive_in_order() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "doc.pdf", 3, 0);
    let out_dir = dir.path().join("output");

    let config = config_for(input.clone(), out_dir);
    let (sender, mut receiver) = progress::channel();

    Splitter::new().split(&config, &sender).await.unwrap();

    let lines: Vec<String> = receiver
        .drain()
        .into_iter()
        .filter_map(|event| match event {
            ProgressEvent::Line(line) => Some(line),
            ProgressEvent::Status(_) => None,
        })
        .collect();

    assert_eq!(lines[0], format!("Opening PDF: {}", input.display()));
    assert_eq!(lines[1], "Original PDF total pages count: 3");
    assert_eq!(lines[2], "Part #1 has 3 pages.");
    assert_eq!(lines[3], "PDF split into 1 parts.");
    assert_eq!(lines[4], "Total pages in parts match original PDF: 3");
}

#[tokio::test]
async fn test_zero_page_document_yields_no_parts() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(&dir, "empty.pdf", 0, 0);
    let out_dir = dir.path().join("output");

    let config = config_for(input, out_dir.clone());
    let (sender, mut receiver) = progress::channel();

    let outcome = Splitter::new().split(&config, &sender).await.unwrap();

    assert_eq!(outcome.parts_written(), 0);
    assert_eq!(outcome.pages_written, 0);
    assert!(outcome.pages_match);
    assert!(part_file_names(&out_dir).is_empty());

    let warned = receiver.drain().iter().any(|event| {
        matches!(event, ProgressEvent::Line(line) if line.contains("WARNING"))
    });
    assert!(!warned);
}
