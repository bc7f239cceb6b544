//! Artificial "thinking" delay between a user message and its reply.
//!
//! Each reply is its own spawned task. Replies are not serialized: two
//! messages sent close together may be answered in either order.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::advisor::random::RandomSource;
use crate::advisor::selector::Advisor;
use crate::conversation::log::ConversationLog;
use crate::models::chat::Sender;
use crate::models::profile::Profile;

/// Fixed base plus uniform jitter in `[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1000),
            jitter: Duration::from_millis(1000),
        }
    }
}

impl ReplyDelay {
    pub fn sample(&self, rng: &dyn RandomSource) -> Duration {
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rng.below(jitter_ms))
    }
}

/// Handle to a reply that has been scheduled but may not have fired yet.
pub struct ScheduledReply {
    handle: JoinHandle<()>,
    delay: Duration,
}

impl ScheduledReply {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Drops the reply if it has not been appended yet.
    #[cfg(test)]
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }

    #[cfg(test)]
    pub async fn join(self) -> Result<(), tokio::task::JoinError> {
        self.handle.await
    }
}

/// Spawns a one-shot task that waits `delay`, asks the advisor, and appends
/// the answer to `log`.
pub fn schedule_reply(
    log: Arc<ConversationLog>,
    advisor: Arc<dyn Advisor>,
    profile: Option<Profile>,
    user_text: String,
    delay: Duration,
) -> ScheduledReply {
    let pending = log.begin_reply();
    let handle = tokio::spawn(async move {
        let _pending = pending;
        tokio::time::sleep(delay).await;
        let reply = advisor.reply(&user_text, profile.as_ref()).await;
        let message = log.append(Sender::Assistant, reply);
        debug!(message_id = message.id, "assistant reply appended");
    });

    ScheduledReply { handle, delay }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::random::FixedRandom;
    use crate::advisor::selector::{KeywordAdvisor, ResponseSelector};

    fn advisor() -> Arc<dyn Advisor> {
        Arc::new(KeywordAdvisor(ResponseSelector::new(Arc::new(FixedRandom(0)))))
    }

    fn profile() -> Profile {
        Profile {
            name: "Sam".to_string(),
            education: "associate".to_string(),
            skills: "Excel".to_string(),
            experience: "5-10".to_string(),
            interests: "business-analytics".to_string(),
            goals: "Move into product".to_string(),
        }
    }

    #[test]
    fn test_sample_stays_within_bounds() {
        let delay = ReplyDelay::default();
        assert_eq!(delay.sample(&FixedRandom(0)), Duration::from_millis(1000));
        assert_eq!(delay.sample(&FixedRandom(u64::MAX)), Duration::from_millis(1999));
    }

    #[test]
    fn test_zero_jitter_is_base_only() {
        let delay = ReplyDelay {
            base: Duration::from_millis(250),
            jitter: Duration::ZERO,
        };
        assert_eq!(delay.sample(&FixedRandom(7)), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_appended_only_after_delay() {
        let log = Arc::new(ConversationLog::new());
        log.append(Sender::User, "How do I fix my resume?");

        let reply = schedule_reply(
            Arc::clone(&log),
            advisor(),
            Some(profile()),
            "How do I fix my resume?".to_string(),
            Duration::from_millis(1500),
        );
        assert!(log.is_typing());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(log.len(), 1, "reply must not land before the delay");

        reply.join().await.unwrap();
        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert!(messages[1].content.contains("Given your 5-10 experience level"));
        assert!(!log.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_append() {
        let log = Arc::new(ConversationLog::new());
        let reply = schedule_reply(
            Arc::clone(&log),
            advisor(),
            None,
            "hello".to_string(),
            Duration::from_secs(1),
        );
        reply.cancel();

        let result = reply.join().await;
        assert!(result.unwrap_err().is_cancelled());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(log.is_empty());
        assert!(!log.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_replies_may_finish_out_of_order() {
        let log = Arc::new(ConversationLog::new());
        let slow = schedule_reply(
            Arc::clone(&log),
            advisor(),
            Some(profile()),
            "interview tips".to_string(),
            Duration::from_millis(1900),
        );
        let fast = schedule_reply(
            Arc::clone(&log),
            advisor(),
            Some(profile()),
            "startup life".to_string(),
            Duration::from_millis(1100),
        );
        assert_eq!(log.pending_replies(), 2);

        fast.join().await.unwrap();
        slow.join().await.unwrap();

        let messages = log.messages();
        assert!(messages[0].content.starts_with("The startup ecosystem"));
        assert!(messages[1].content.starts_with("Interview preparation"));
    }
}
