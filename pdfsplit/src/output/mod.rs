//! User-facing output for pdfsplit.
//!
//! The worker never prints: it reports through the FIFO progress channel in
//! [`progress`], and the consuming side decides how to present the lines.
//! [`formatter`] provides the terminal presentation used by the CLI, and
//! [`confirm`] the synchronous yes/no rendezvous a worker can block on.

pub mod confirm;
pub mod formatter;
pub mod progress;

pub use confirm::{ConfirmAsker, ConfirmRequest, ConfirmResponder};
pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::{ProgressEvent, ProgressReceiver, ProgressSender, SplitStatus};

use crate::split::SplitOutcome;

/// Display a completed split's summary through a formatter.
///
/// Only shown in verbose mode; the progress lines already carry the
/// per-part detail.
pub fn display_outcome(formatter: &OutputFormatter, outcome: &SplitOutcome) {
    formatter.detail("Parts written", &outcome.parts_written().to_string());
    formatter.detail("Total pages", &outcome.pages_written.to_string());
    formatter.detail(
        "Split time",
        &format!("{:.2}s", outcome.split_time.as_secs_f64()),
    );

    for part in &outcome.parts {
        formatter.detail(
            &format!("Part #{}", part.number),
            &format!(
                "{} page(s), {}",
                part.page_count,
                format_file_size(part.file_size)
            ),
        );
    }
}

/// Format file size as human-readable string.
pub(crate) fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
