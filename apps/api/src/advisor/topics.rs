//! Keyword topics and their priority order.
//!
//! Topics overlap ("skill" and "resume" can both appear in one message), so
//! the position in `TOPIC_RULES` decides which answer wins. Do not reorder.

use serde::{Deserialize, Serialize};

use crate::advisor::templates;
use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Skills,
    Resume,
    Interview,
    Certification,
    Salary,
    JobMarket,
    CareerChange,
    Networking,
    RemoteWork,
    Freelance,
    Leadership,
    Startup,
}

/// A keyword group paired with the template it triggers.
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub build: fn(&Profile) -> String,
}

impl TopicRule {
    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(kw))
    }
}

/// Evaluated top to bottom; first match wins.
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Skills,
        keywords: &["skill", "learn"],
        build: templates::skills,
    },
    TopicRule {
        topic: Topic::Resume,
        keywords: &["resume", "cv"],
        build: templates::resume,
    },
    TopicRule {
        topic: Topic::Interview,
        keywords: &["interview"],
        build: templates::interview,
    },
    TopicRule {
        topic: Topic::Certification,
        keywords: &["certification", "certificate"],
        build: templates::certification,
    },
    TopicRule {
        topic: Topic::Salary,
        keywords: &["salary", "pay", "money"],
        build: templates::salary,
    },
    TopicRule {
        topic: Topic::JobMarket,
        keywords: &["job market", "hiring", "opportunities"],
        build: templates::job_market,
    },
    TopicRule {
        topic: Topic::CareerChange,
        keywords: &["career change", "transition"],
        build: templates::career_change,
    },
    TopicRule {
        topic: Topic::Networking,
        keywords: &["network", "networking"],
        build: templates::networking,
    },
    TopicRule {
        topic: Topic::RemoteWork,
        keywords: &["remote", "work from home"],
        build: templates::remote_work,
    },
    TopicRule {
        topic: Topic::Freelance,
        keywords: &["freelance", "consulting"],
        build: templates::freelance,
    },
    TopicRule {
        topic: Topic::Leadership,
        keywords: &["leadership", "management"],
        build: templates::leadership,
    },
    TopicRule {
        topic: Topic::Startup,
        keywords: &["startup", "entrepreneur"],
        build: templates::startup,
    },
];

/// Returns the highest-priority rule whose keywords appear in `text`.
pub fn matching_rule(text: &str) -> Option<&'static TopicRule> {
    let lowered = text.to_lowercase();
    TOPIC_RULES.iter().find(|rule| rule.matches(&lowered))
}

pub fn classify(text: &str) -> Option<Topic> {
    matching_rule(text).map(|rule| rule.topic)
}
