use std::sync::Arc;

use crate::advisor::random::RandomSource;
use crate::advisor::selector::Advisor;
use crate::conversation::pacing::ReplyDelay;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    /// Pluggable reply backend. Default: KeywordAdvisor.
    pub advisor: Arc<dyn Advisor>,
    /// Drives reply jitter. Default-reply picks use the advisor's own source.
    pub rng: Arc<dyn RandomSource>,
    pub reply_delay: ReplyDelay,
}
