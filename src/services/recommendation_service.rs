//! Recommendation Service - the per-interaction flow
//!
//! Loads the catalog, runs the selection engine against the session's history
//! for the chosen category, writes the result back to the session store and
//! hands the click to the audit sink without waiting for it.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

use crate::domain::{AuditSink, CatalogProvider, DomainError, SessionStore};
use crate::models::{AuditEvent, BookRecord, Catalog, SessionState, Status};
use crate::services::selection_service::SelectionEngine;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Recommendation {
    pub book: BookRecord,
    /// History for the requested category after this pick, oldest first
    pub history: Vec<BookRecord>,
    pub status: Status,
}

/// Puts the pre-pick status back if a pick is abandoned while `thinking`,
/// whether by error or by the request future being dropped.
struct ThinkingGuard<'a> {
    sessions: Arc<dyn SessionStore>,
    session_id: &'a str,
    previous_status: Status,
    completed: bool,
}

impl Drop for ThinkingGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Some(mut state) = self.sessions.get(self.session_id)
            && state.status == Status::Thinking
        {
            tracing::debug!("Pick abandoned, restoring session {}", self.session_id);
            state.status = self.previous_status;
            self.sessions.put(self.session_id, state);
        }
    }
}

pub struct RecommendationService {
    catalog: Arc<dyn CatalogProvider>,
    sessions: Arc<dyn SessionStore>,
    audit: Arc<dyn AuditSink>,
    engine: SelectionEngine,
    thinking_delay: Duration,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        sessions: Arc<dyn SessionStore>,
        audit: Arc<dyn AuditSink>,
        engine: SelectionEngine,
    ) -> Self {
        Self {
            catalog,
            sessions,
            audit,
            engine,
            thinking_delay: Duration::ZERO,
        }
    }

    /// Pause between entering `thinking` and picking
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    async fn fetch_catalog(&self) -> Result<Catalog, DomainError> {
        let records = self.catalog.fetch().await?;
        Ok(Catalog::from_records(records))
    }

    /// Current catalog. A failed fetch degrades to an empty catalog.
    pub async fn load_catalog(&self) -> Catalog {
        match self.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Failed to load catalog: {}", e);
                Catalog::default()
            }
        }
    }

    pub async fn categories(&self) -> Vec<String> {
        self.load_catalog().await.categories().to_vec()
    }

    pub fn create_session(&self) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.sessions.put(&session_id, SessionState::default());
        tracing::debug!("Created session {}", session_id);
        session_id
    }

    /// State for a session; unknown sessions read as fresh and idle.
    pub fn session(&self, session_id: &str) -> SessionState {
        self.sessions.get(session_id).unwrap_or_default()
    }

    pub fn end_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id)
    }

    pub async fn recommend(
        &self,
        session_id: &str,
        category: &str,
    ) -> Result<Recommendation, DomainError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(DomainError::Validation("category is required".to_string()));
        }

        let catalog = match self.fetch_catalog().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => {
                tracing::warn!("Catalog feed returned no books");
                return Err(DomainError::DataUnavailable(
                    "catalog feed returned no books".to_string(),
                ));
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog: {}", e);
                return Err(e);
            }
        };

        // Checked before the session is touched, so a miss never shows `thinking`
        let pool = catalog.pool(category);
        if pool.is_empty() {
            tracing::info!("No books in category '{}'", category);
            return Err(DomainError::EmptyPool);
        }

        let mut state = self.session(session_id);
        let previous_status = state.status;

        state.status = Status::Thinking;
        self.sessions.put(session_id, state.clone());
        let mut thinking = ThinkingGuard {
            sessions: self.sessions.clone(),
            session_id,
            previous_status,
            completed: false,
        };

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let selection = self.engine.pick_next(pool, state.history_for(category))?;

        tracing::info!(
            "Recommended '{}' in category '{}'",
            selection.selected.title,
            category
        );

        state
            .history
            .insert(category.to_string(), selection.history.clone());
        state.last_selected = Some(selection.selected.clone());
        state.status = Status::Done;
        self.sessions.put(session_id, state);
        thinking.completed = true;

        self.audit(AuditEvent::now(
            "recommend",
            category,
            selection.selected.title.as_str(),
        ));

        Ok(Recommendation {
            book: selection.selected,
            history: selection.history,
            status: Status::Done,
        })
    }

    /// Clear every category's history and return to idle
    pub fn reset(&self, session_id: &str) -> SessionState {
        let mut state = self.session(session_id);
        state.reset();
        self.sessions.put(session_id, state.clone());
        self.audit(AuditEvent::now("reset", "", ""));
        state
    }

    // Fire-and-forget; failures are logged and dropped
    fn audit(&self, event: AuditEvent) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime available, skipping audit of '{}'", event.event);
            return;
        };

        let sink = self.audit.clone();
        handle.spawn(async move {
            if let Err(e) = sink.record(&event).await {
                tracing::warn!("Failed to record audit event '{}': {}", event.event, e);
            }
        });
    }
}
