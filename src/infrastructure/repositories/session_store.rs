//! In-memory SessionStore backed by DashMap
//!
//! Sessions idle for longer than the configured TTL are dropped, lazily on
//! read and in bulk by `purge_expired`.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::SessionStore;
use crate::models::SessionState;

struct Entry {
    touched: Instant,
    state: SessionState,
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Entry>,
    /// `None` keeps sessions until they are removed explicitly
    idle_ttl: Option<Duration>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that forgets sessions untouched for `idle_ttl`. Zero disables expiry.
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_ttl: (!idle_ttl.is_zero()).then_some(idle_ttl),
        }
    }

    fn is_expired(&self, touched: Instant) -> bool {
        self.idle_ttl.is_some_and(|ttl| touched.elapsed() >= ttl)
    }

    /// Drop every idle session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !self.is_expired(entry.touched));
        before.saturating_sub(self.sessions.len())
    }

    /// Purge idle sessions periodically on the current runtime
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) {
        if self.idle_ttl.is_none() || every.is_zero() {
            return;
        }
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime available, session sweeper not started");
            return;
        };

        let store = Arc::downgrade(self);
        handle.spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    break;
                };
                let removed = store.purge_expired();
                if removed > 0 {
                    tracing::debug!("Expired {} idle sessions", removed);
                }
            }
        });
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<SessionState> {
        let mut entry = self.sessions.get_mut(session_id)?;
        if self.is_expired(entry.touched) {
            drop(entry);
            self.sessions.remove_if(session_id, |_, entry| self.is_expired(entry.touched));
            return None;
        }
        entry.touched = Instant::now();
        Some(entry.state.clone())
    }

    fn put(&self, session_id: &str, state: SessionState) {
        self.sessions.insert(
            session_id.to_string(),
            Entry {
                touched: Instant::now(),
                state,
            },
        );
    }

    fn remove(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }
}
