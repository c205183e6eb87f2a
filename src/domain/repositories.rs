//! Collaborator trait definitions
//!
//! These traits define the contract for the catalog feed, the audit sink and
//! the session store. Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{AuditEvent, BookRecord, SessionState};

/// Source of the book catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every record in the feed, across all categories
    async fn fetch(&self) -> Result<Vec<BookRecord>, DomainError>;
}

/// Best-effort recorder of user actions
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record a single event. Callers treat failures as non-fatal.
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError>;
}

/// Opaque key-value store of per-session state
pub trait SessionStore: Send + Sync {
    /// Load the state for a session, if one exists
    fn get(&self, session_id: &str) -> Option<SessionState>;

    /// Replace the state for a session
    fn put(&self, session_id: &str, state: SessionState);

    /// Discard a session. Returns whether it existed.
    fn remove(&self, session_id: &str) -> bool;
}
