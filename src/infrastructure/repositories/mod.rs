//! Collaborator implementations: catalog feeds, audit sinks, session storage

pub mod audit_sink;
pub mod catalog_provider;
pub mod session_store;

pub use audit_sink::{FileAuditSink, NoopAuditSink, WebhookAuditSink};
pub use catalog_provider::{CachedProvider, FileProvider, SheetProvider, StaticProvider};
pub use session_store::MemorySessionStore;
