//! Transcript: the append-only list of chat messages.
//!
//! DESIGN
//! ======
//! Entries are plain value records; nothing here knows about the DOM. A
//! pending bot entry is created right after its user entry and later settled
//! in place (answer or error). Entries are never removed, reordered, or
//! replaced, so an [`EntryId`] stays valid for the lifetime of the page.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Placeholder text of a pending bot entry before its reply arrives.
pub const PENDING_TEXT: &str = "...";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub is_pending: bool,
    pub is_error: bool,
}

/// Position of an entry in the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user entry with already-trimmed text.
    pub fn push_user(&mut self, text: impl Into<String>) -> EntryId {
        self.push(ChatMessage { sender: Sender::User, text: text.into(), is_pending: false, is_error: false })
    }

    /// Append a bot entry awaiting its reply.
    pub fn push_pending(&mut self) -> EntryId {
        self.push(ChatMessage { sender: Sender::Bot, text: PENDING_TEXT.to_owned(), is_pending: true, is_error: false })
    }

    /// Settle a pending entry with the answer text.
    ///
    /// Returns `false` if `id` is unknown or already settled.
    pub fn resolve(&mut self, id: EntryId, text: impl Into<String>) -> bool {
        self.settle(id, text.into(), false)
    }

    /// Settle a pending entry with an error message and error styling.
    ///
    /// Returns `false` if `id` is unknown or already settled.
    pub fn fail(&mut self, id: EntryId, message: impl Into<String>) -> bool {
        self.settle(id, message.into(), true)
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&ChatMessage> {
        self.entries.get(id.0)
    }

    #[must_use]
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of bot entries still waiting for a reply.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|m| m.is_pending).count()
    }

    fn push(&mut self, message: ChatMessage) -> EntryId {
        self.entries.push(message);
        EntryId(self.entries.len() - 1)
    }

    fn settle(&mut self, id: EntryId, text: String, is_error: bool) -> bool {
        let Some(entry) = self.entries.get_mut(id.0) else {
            return false;
        };
        if !entry.is_pending {
            return false;
        }
        entry.text = text;
        entry.is_pending = false;
        entry.is_error = is_error;
        true
    }
}
