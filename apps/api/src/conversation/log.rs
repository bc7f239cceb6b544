//! Append-only conversation log.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::models::chat::{ChatMessage, Sender};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    messages: Vec<ChatMessage>,
}

/// Messages in arrival order. Ids are assigned under the same lock as the
/// append, so id order always equals log order.
#[derive(Debug, Default)]
pub struct ConversationLog {
    inner: Mutex<Inner>,
    pending: AtomicUsize,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that opens with an assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let log = Self::new();
        log.append(Sender::Assistant, greeting);
        log
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Appends cannot leave the vector half-written, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn append(&self, sender: Sender, content: impl Into<String>) -> ChatMessage {
        let mut inner = self.lock();
        inner.next_id += 1;
        let message = ChatMessage {
            id: inner.next_id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        };
        inner.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while at least one reply is scheduled but not yet appended.
    pub fn is_typing(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    #[cfg(test)]
    pub fn pending_replies(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Marks a reply as pending until the returned guard is dropped.
    pub fn begin_reply(self: &Arc<Self>) -> PendingReply {
        self.pending.fetch_add(1, Ordering::SeqCst);
        PendingReply(Arc::clone(self))
    }
}

/// Decrements the pending count on drop, including when the reply task is aborted.
pub struct PendingReply(Arc<ConversationLog>);

impl Drop for PendingReply {
    fn drop(&mut self) {
        self.0.pending.fetch_sub(1, Ordering::SeqCst);
    }
}
