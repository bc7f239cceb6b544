//! Dashboard sessions: wizard, submitted profile, conversation and tab gating.
//!
//! Sessions live only in process memory. Idle sessions are expired by
//! [`sweeper::SessionSweeper`] and the store refuses new sessions past its cap.

pub mod handlers;
pub mod sweeper;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::advisor::templates::greeting;
use crate::conversation::log::ConversationLog;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::wizard::{ProfileWizard, WizardError, WizardStep, SECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Profile,
    Results,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Results, Tab::Chat];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile Setup",
            Tab::Results => "Career Results",
            Tab::Chat => "AI Advisor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tab::Profile => "Complete your career profile",
            Tab::Results => "View your personalized recommendations",
            Tab::Chat => "Chat with your career advisor",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub id: Tab,
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionOverview {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub active_tab: Tab,
    pub tabs: Vec<TabInfo>,
    pub current_section: usize,
    pub section_title: &'static str,
    pub section_count: usize,
    pub draft: Profile,
    pub profile_complete: bool,
}

pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    wizard: ProfileWizard,
    profile: Option<Profile>,
    conversation: Option<Arc<ConversationLog>>,
    active_tab: Tab,
    pending: Vec<AbortHandle>,
    last_active: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            wizard: ProfileWizard::new(),
            profile: None,
            conversation: None,
            active_tab: Tab::Profile,
            pending: Vec::new(),
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    #[cfg(test)]
    pub fn wizard(&self) -> &ProfileWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut ProfileWizard {
        &mut self.wizard
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[cfg(test)]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn conversation(&self) -> Option<Arc<ConversationLog>> {
        self.conversation.clone()
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_active) >= ttl
    }

    pub fn is_tab_enabled(&self, tab: Tab) -> bool {
        match tab {
            Tab::Profile => true,
            Tab::Results | Tab::Chat => self.profile.is_some(),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<Tab, AppError> {
        if !self.is_tab_enabled(tab) {
            return Err(AppError::Conflict(format!(
                "{} is unavailable until the profile is complete",
                tab.label()
            )));
        }
        self.active_tab = tab;
        Ok(tab)
    }

    /// Advances the wizard. A successful final step completes the profile.
    pub fn advance_wizard(&mut self) -> Result<WizardStep, WizardError> {
        let mut completed = None;
        let step = self.wizard.advance(|profile| completed = Some(profile))?;
        if let Some(profile) = completed {
            self.complete_profile(profile);
        }
        Ok(step)
    }

    fn complete_profile(&mut self, profile: Profile) {
        info!(session_id = %self.id, interests = %profile.interests, "profile completed");
        if self.conversation.is_none() {
            self.conversation = Some(Arc::new(ConversationLog::with_greeting(greeting(&profile))));
        }
        self.profile = Some(profile);
        self.active_tab = Tab::Results;
    }

    pub fn track_reply(&mut self, handle: AbortHandle) {
        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    /// Aborts every reply that has not been appended yet. Returns how many were live.
    pub fn cancel_pending(&mut self) -> usize {
        let live = self.pending.iter().filter(|h| !h.is_finished()).count();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        live
    }

    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            id: self.id,
            created_at: self.created_at,
            active_tab: self.active_tab,
            tabs: Tab::ALL
                .iter()
                .map(|&tab| TabInfo {
                    id: tab,
                    label: tab.label(),
                    description: tab.description(),
                    enabled: self.is_tab_enabled(tab),
                })
                .collect(),
            current_section: self.wizard.current_section(),
            section_title: self.wizard.section().title,
            section_count: SECTIONS.len(),
            draft: self.wizard.draft().clone(),
            profile_complete: self.profile.is_some(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds on how many sessions the store holds and how long they may sit idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    pub idle_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_ttl: Duration::from_secs(3600),
        }
    }
}

/// Concurrent in-memory session map.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
    limits: SessionLimits,
}

impl SessionStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: DashMap::new(),
            limits,
        }
    }

    /// Creates a session. When the store is full, idle sessions are swept
    /// first; if it is still full the request is refused.
    pub fn create(&self) -> Result<SessionOverview, AppError> {
        if self.sessions.len() >= self.limits.max_sessions {
            self.sweep_idle();
            if self.sessions.len() >= self.limits.max_sessions {
                warn!(max_sessions = self.limits.max_sessions, "session limit reached");
                return Err(AppError::Unavailable(
                    "Too many active sessions, try again later".to_string(),
                ));
            }
        }

        let session = Session::new();
        let overview = session.overview();
        self.sessions.insert(session.id(), session);
        info!(session_id = %overview.id, "session created");
        Ok(overview)
    }

    /// Runs `f` against the session and marks it active. The map shard stays
    /// locked for the duration, so `f` must not await.
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.touch();
        Ok(f(&mut session))
    }

    /// Removes the session after aborting its pending replies. Returns how
    /// many replies were still live.
    pub fn remove(&self, id: Uuid) -> Result<usize, AppError> {
        let (_, mut session) = self
            .sessions
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        let cancelled = session.cancel_pending();
        info!(session_id = %id, cancelled, "session removed");
        Ok(cancelled)
    }

    /// Drops every session idle for at least the configured TTL. Returns how
    /// many were dropped.
    pub fn sweep_idle(&self) -> usize {
        let now = Instant::now();
        let ttl = self.limits.idle_ttl;
        let mut expired = 0;
        self.sessions.retain(|id, session| {
            if !session.is_idle(now, ttl) {
                return true;
            }
            session.cancel_pending();
            debug!(session_id = %id, "idle session expired");
            expired += 1;
            false
        });
        expired
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
