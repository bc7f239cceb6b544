//! Background task that expires idle sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use super::SessionStore;

/// Periodically calls [`SessionStore::sweep_idle`].
pub struct SessionSweeper {
    store: Arc<SessionStore>,
    interval: Duration,
}

impl SessionSweeper {
    /// `interval` must be non-zero.
    pub fn new(store: Arc<SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Spawns the sweep loop. Abort the returned handle to stop it.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let expired = self.store.sweep_idle();
                if expired > 0 {
                    info!(expired, remaining = self.store.len(), "expired idle sessions");
                }
            }
        })
    }
}
