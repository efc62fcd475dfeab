//! One-shot confirmations for destructive actions.
//!
//! Each dialog opening calls [`request`], which returns a fresh prompt/handle
//! pair. The prompt goes to the dialog, the handle to the code waiting for the
//! answer. Nothing is reused between openings, so a stale dialog can never
//! answer a newer request.
//!
//! ```
//! use folio_editor::confirm::{self, Decision};
//!
//! let (prompt, mut handle) = confirm::request("Delete tag \"travel\"?");
//! assert_eq!(handle.try_decision(), None);
//! prompt.confirm();
//! assert_eq!(handle.try_decision(), Some(Decision::Confirmed));
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Answer to a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Open a confirmation with the given message.
#[must_use]
pub fn request(message: impl Into<String>) -> (ConfirmationPrompt, ConfirmationHandle) {
    let (sender, receiver) = oneshot::channel();
    (
        ConfirmationPrompt {
            message: message.into(),
            sender,
        },
        ConfirmationHandle { receiver },
    )
}

/// Dialog side of a confirmation.
///
/// Answering consumes the prompt. Dropping it unanswered counts as
/// [`Decision::Cancelled`].
#[derive(Debug)]
pub struct ConfirmationPrompt {
    message: String,
    sender: oneshot::Sender<Decision>,
}

impl ConfirmationPrompt {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn confirm(self) {
        self.answer(Decision::Confirmed);
    }

    pub fn cancel(self) {
        self.answer(Decision::Cancelled);
    }

    fn answer(self, decision: Decision) {
        tracing::debug!(message = %self.message, ?decision, "Confirmation answered");
        // The waiter may have given up already.
        let _ = self.sender.send(decision);
    }
}

/// Waiting side of a confirmation. Resolves to the [`Decision`].
#[derive(Debug)]
pub struct ConfirmationHandle {
    receiver: oneshot::Receiver<Decision>,
}

impl ConfirmationHandle {
    /// Decision if already answered, without waiting.
    pub fn try_decision(&mut self) -> Option<Decision> {
        match self.receiver.try_recv() {
            Ok(decision) => Some(decision),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Decision::Cancelled),
        }
    }
}

impl Future for ConfirmationHandle {
    type Output = Decision;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(Decision::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_confirm() {
        let (prompt, handle) = request("Delete page?");
        assert_eq!(prompt.message(), "Delete page?");
        prompt.confirm();
        assert_eq!(handle.await, Decision::Confirmed);
    }

    #[tokio::test]
    async fn test_cancel() {
        let (prompt, handle) = request("Delete page?");
        prompt.cancel();
        assert_eq!(handle.await, Decision::Cancelled);
    }

    #[tokio::test]
    async fn test_dropped_prompt_cancels() {
        let (prompt, handle) = request("Delete page?");
        drop(prompt);
        assert_eq!(handle.await, Decision::Cancelled);
    }

    #[tokio::test]
    async fn test_answer_from_another_task() {
        let (prompt, handle) = request("Delete tag?");
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            prompt.confirm();
        });
        assert_eq!(handle.await, Decision::Confirmed);
    }

    #[test]
    fn test_try_decision() {
        let (prompt, mut handle) = request("Delete?");
        assert_eq!(handle.try_decision(), None);
        prompt.confirm();
        assert_eq!(handle.try_decision(), Some(Decision::Confirmed));
    }

    #[test]
    fn test_each_request_is_independent() {
        let (first, mut first_handle) = request("first");
        let (second, mut second_handle) = request("second");
        second.confirm();
        drop(first);
        assert_eq!(first_handle.try_decision(), Some(Decision::Cancelled));
        assert_eq!(second_handle.try_decision(), Some(Decision::Confirmed));
    }
}
