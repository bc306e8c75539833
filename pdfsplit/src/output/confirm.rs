//! Confirmation rendezvous.
//!
//! A worker that needs a yes/no answer before a destructive step sends a
//! [`ConfirmRequest`] carrying a one-shot reply slot, then awaits the reply.
//! The asking side blocks until the answering side responds; the answering
//! side decides the policy (prompt the user, auto-approve, always refuse).

use tokio::sync::{mpsc, oneshot};

use crate::error::{PdfSplitError, Result};

/// A pending yes/no question with its reply slot.
#[derive(Debug)]
pub struct ConfirmRequest {
    message: String,
    reply: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    /// The question to present.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Answer the question, unblocking the asker.
    pub fn respond(self, answer: bool) {
        let _ = self.reply.send(answer);
    }
}

/// Create a connected asker/responder pair.
pub fn channel() -> (ConfirmAsker, ConfirmResponder) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ConfirmAsker { tx }, ConfirmResponder { rx })
}

/// Worker-side handle: ask a question and wait for the answer.
#[derive(Debug, Clone)]
pub struct ConfirmAsker {
    tx: mpsc::UnboundedSender<ConfirmRequest>,
}

impl ConfirmAsker {
    /// Ask a yes/no question and wait for the reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the responder side has gone away, either before
    /// the question was delivered or before it was answered.
    pub async fn ask(&self, message: impl Into<String>) -> Result<bool> {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest {
            message: message.into(),
            reply,
        };

        self.tx
            .send(request)
            .map_err(|_| PdfSplitError::other("confirmation channel closed"))?;

        answer
            .await
            .map_err(|_| PdfSplitError::other("confirmation request dropped without an answer"))
    }
}

/// Consumer-side handle: receive questions to answer.
#[derive(Debug)]
pub struct ConfirmResponder {
    rx: mpsc::UnboundedReceiver<ConfirmRequest>,
}

impl ConfirmResponder {
    /// Wait for the next question.
    ///
    /// Returns `None` once every asker has been dropped.
    pub async fn next(&mut self) -> Option<ConfirmRequest> {
        self.rx.recv().await
    }
}
