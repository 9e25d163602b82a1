//! Chat controller: the per-submission state machine.
//!
//! DESIGN
//! ======
//! Idle → Validating → Echoing → Pending → Resolved | Failed.
//!
//! [`ChatController::begin`] runs the synchronous part (trim, reject blanks,
//! append the user entry and the pending bot entry) so the host can clear
//! the input and repaint before the network call. [`ChatController::complete`]
//! awaits exactly one backend call and settles the pending entry in place.
//! No retries, no cancellation: concurrent submissions each settle their own
//! entry in whatever order their replies arrive.
//!
//! The transcript is shared through `Rc<RefCell<_>>`; borrows are scoped so
//! none is held across an await.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{ChatBackend, ChatError};
use crate::transcript::{EntryId, Transcript};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Transcript text for a failed submission.
///
/// Ends in exactly one period, whether or not the reason already has one.
#[must_use]
pub fn error_text(err: &ChatError) -> String {
    let reason = err.to_string();
    let reason = reason.strip_suffix('.').unwrap_or(&reason);
    format!("Sorry, an error occurred: {reason}.")
}

/// A validated question waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub question: String,
    pub user_entry: EntryId,
    pub pending_entry: EntryId,
}

pub struct ChatController<B> {
    transcript: Rc<RefCell<Transcript>>,
    backend: B,
}

impl<B: ChatBackend> ChatController<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_transcript(Rc::new(RefCell::new(Transcript::new())), backend)
    }

    #[must_use]
    pub fn with_transcript(transcript: Rc<RefCell<Transcript>>, backend: B) -> Self {
        Self { transcript, backend }
    }

    /// Shared handle to the transcript, for rendering.
    #[must_use]
    pub fn transcript(&self) -> Rc<RefCell<Transcript>> {
        Rc::clone(&self.transcript)
    }

    /// Validate and echo one raw input.
    ///
    /// Returns `None` (and touches nothing) when the trimmed input is empty.
    pub fn begin(&self, raw: &str) -> Option<Submission> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }

        let mut transcript = self.transcript.borrow_mut();
        let user_entry = transcript.push_user(question);
        let pending_entry = transcript.push_pending();
        Some(Submission { question: question.to_owned(), user_entry, pending_entry })
    }

    /// Issue the one request for `submission` and settle its pending entry.
    ///
    /// Returns the settled entry's id.
    pub async fn complete(&self, submission: Submission) -> EntryId {
        let reply = self.backend.ask(&submission.question).await;

        let id = submission.pending_entry;
        let mut transcript = self.transcript.borrow_mut();
        match reply {
            Ok(answer) => {
                transcript.resolve(id, answer);
            }
            Err(err) => {
                log::error!("chat request failed: {err}");
                transcript.fail(id, error_text(&err));
            }
        }
        id
    }

    /// [`begin`](Self::begin) followed by [`complete`](Self::complete).
    pub async fn submit(&self, raw: &str) -> Option<EntryId> {
        let submission = self.begin(raw)?;
        Some(self.complete(submission).await)
    }
}
