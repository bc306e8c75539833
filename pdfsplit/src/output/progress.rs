//! Progress reporting channel.
//!
//! The split worker publishes human-readable lines through an unbounded FIFO
//! channel and finishes with exactly one terminal [`SplitStatus`]. Consumers
//! drain the channel without blocking, so a slow or absent consumer never
//! stalls the worker. Dropping the receiver is harmless: the sender ignores
//! send failures and keeps going.

use tokio::sync::mpsc;

/// Terminal status of a split operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStatus {
    /// The operation completed and every part is on disk.
    Done,
    /// The operation failed; the payload is the error's display text.
    Failed(String),
}

impl std::fmt::Display for SplitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "Done!"),
            Self::Failed(_) => write!(f, "Something went wrong!"),
        }
    }
}

/// One event on the progress channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A human-readable progress line.
    Line(String),
    /// The terminal status. At most one per operation, always last.
    Status(SplitStatus),
}

/// Create a connected progress sender/receiver pair.
pub fn channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressSender { tx }, ProgressReceiver { rx })
}

/// Worker-side handle for publishing progress.
#[derive(Debug, Clone)]
pub struct ProgressSender {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ProgressSender {
    /// Publish one progress line.
    ///
    /// A closed channel is ignored; reporting is best-effort and never
    /// fails the operation itself.
    pub fn log(&self, line: impl Into<String>) {
        let _ = self.tx.send(ProgressEvent::Line(line.into()));
    }

    /// Publish the terminal status.
    pub fn finish(&self, status: SplitStatus) {
        let _ = self.tx.send(ProgressEvent::Status(status));
    }
}

/// Consumer-side handle for reading progress.
#[derive(Debug)]
pub struct ProgressReceiver {
    rx: mpsc::UnboundedReceiver<ProgressEvent>,
}

impl ProgressReceiver {
    /// Take every event currently queued, in publication order, without
    /// waiting for more.
    pub fn drain(&mut self) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once every sender has been dropped and the queue is
    /// empty.
    pub async fn recv(&mut self) -> Option<ProgressEvent> {
        self.rx.recv().await
    }
}
