//! Response selection: keyword topic first, random default otherwise.
//!
//! `Advisor` is the seam the conversation layer talks to. The only backend
//! is `KeywordAdvisor`, a thin async wrapper over `ResponseSelector`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::advisor::random::RandomSource;
use crate::advisor::templates;
use crate::advisor::topics::matching_rule;
use crate::models::profile::Profile;

/// Picks a canned reply for a user message.
#[derive(Clone)]
pub struct ResponseSelector {
    rng: Arc<dyn RandomSource>,
}

impl ResponseSelector {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Never fails. An absent profile behaves like one with every field empty.
    pub fn select(&self, user_text: &str, profile: Option<&Profile>) -> String {
        let empty = Profile::default();
        let profile = profile.unwrap_or(&empty);

        if let Some(rule) = matching_rule(user_text) {
            debug!(topic = ?rule.topic, "matched advice topic");
            return (rule.build)(profile);
        }

        let defaults = templates::default_responses(profile);
        let index = self.rng.below(defaults.len() as u64) as usize;
        debug!(index, "no topic matched, using default reply");
        defaults
            .into_iter()
            .nth(index)
            .unwrap_or_default()
    }
}

/// Produces assistant replies for the conversation log.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn reply(&self, user_text: &str, profile: Option<&Profile>) -> String;
}

/// Keyword-table advisor. Deterministic apart from the default-reply pick.
pub struct KeywordAdvisor(pub ResponseSelector);

#[async_trait]
impl Advisor for KeywordAdvisor {
    async fn reply(&self, user_text: &str, profile: Option<&Profile>) -> String {
        self.0.select(user_text, profile)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::advisor::random::{FixedRandom, SeededRandom, ThreadRandom};

    fn profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            education: "master".to_string(),
            skills: "Python, SQL, Spark".to_string(),
            experience: "3-5".to_string(),
            interests: "data-ai".to_string(),
            goals: "Lead an ML platform team".to_string(),
        }
    }

    fn selector(rng: impl RandomSource + 'static) -> ResponseSelector {
        ResponseSelector::new(Arc::new(rng))
    }

    #[test]
    fn test_resume_reply_interpolates_experience() {
        let s = selector(FixedRandom(0));
        for text in ["Can you review my resume?", "Update my CV please"] {
            let reply = s.select(text, Some(&profile()));
            assert!(reply.starts_with("Here are key tips to improve your resume"));
            assert!(reply.contains("Given your 3-5 experience level"));
        }
    }

    #[test]
    fn test_skill_and_resume_returns_skill_template() {
        let s = selector(FixedRandom(0));
        let reply = s.select("What skill should my resume show?", Some(&profile()));
        assert!(reply.starts_with("Based on your profile in data-ai"));
        assert!(!reply.contains("improve your resume"));
    }

    #[test]
    fn test_skills_question_interpolates_interests() {
        let s = selector(FixedRandom(0));
        let reply = s.select("What skills should I focus on next?", Some(&profile()));
        assert!(reply.contains("data-ai"));
        assert!(!reply.contains("profile in technology"));
    }

    #[test]
    fn test_freelance_uses_skills_field() {
        let s = selector(FixedRandom(0));
        let reply = s.select("Should I try consulting?", Some(&profile()));
        assert!(reply.contains("With your skills in Python, SQL, Spark"));
    }

    #[test]
    fn test_missing_profile_degrades_to_placeholders() {
        let s = selector(FixedRandom(0));
        let reply = s.select("salary advice", None);
        assert!(reply.contains("background in technology"));
    }

    #[test]
    fn test_empty_input_returns_a_default() {
        let s = selector(FixedRandom(1));
        let reply = s.select("", Some(&profile()));
        assert!(reply.starts_with("I'm here to help you navigate"));
    }

    #[test]
    fn test_fixed_source_selects_deterministic_default() {
        let s = selector(FixedRandom(3));
        let reply = s.select("hmm", Some(&profile()));
        assert_eq!(reply, templates::default_responses(&profile())[3]);
    }

    #[test]
    fn test_seeded_source_only_yields_defaults() {
        let s = selector(SeededRandom::new(7));
        let defaults = templates::default_responses(&profile());
        for _ in 0..50 {
            let reply = s.select("hello", Some(&profile()));
            assert!(defaults.contains(&reply));
        }
    }

    #[test]
    fn test_all_four_defaults_observed() {
        let s = selector(ThreadRandom);
        let seen: HashSet<String> = (0..500)
            .map(|_| s.select("tell me something", Some(&profile())))
            .collect();
        assert_eq!(seen.len(), 4);
    }

    #[tokio::test]
    async fn test_keyword_advisor_delegates_to_selector() {
        let advisor = KeywordAdvisor(selector(FixedRandom(0)));
        let reply = advisor.reply("interview prep", Some(&profile())).await;
        assert!(reply.starts_with("Interview preparation is crucial"));
    }
}
