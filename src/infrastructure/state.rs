//! Application state containing the recommendation service and its collaborators

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AuditSink, CatalogProvider, DomainError};
use crate::infrastructure::config::Config;
use crate::infrastructure::{
    CachedProvider, FileAuditSink, FileProvider, MemorySessionStore, NoopAuditSink, SheetProvider,
    StaticProvider, WebhookAuditSink,
};
use crate::services::{RecommendationService, SelectionEngine};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(service: RecommendationService) -> Self {
        Self {
            recommendations: Arc::new(service),
        }
    }

    /// Wire providers, sinks and the engine from configuration
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let engine = match config.selection_seed {
            Some(seed) => SelectionEngine::seeded(config.history_limit, seed),
            None => SelectionEngine::new(config.history_limit),
        };

        let sessions = Arc::new(MemorySessionStore::with_idle_ttl(config.session_ttl));
        sessions.spawn_sweeper(config.session_ttl.min(SWEEP_INTERVAL));

        let service = RecommendationService::new(
            build_catalog_provider(config)?,
            sessions,
            build_audit_sink(config)?,
            engine,
        )
        .with_thinking_delay(config.thinking_delay);

        Ok(Self::new(service))
    }
}

fn build_catalog_provider(config: &Config) -> Result<Arc<dyn CatalogProvider>, DomainError> {
    let source: Arc<dyn CatalogProvider> = if let Some(url) = &config.catalog_url {
        tracing::info!("Catalog source: remote feed {}", url);
        Arc::new(SheetProvider::new(url.clone(), config.fetch_timeout)?)
    } else if let Some(path) = &config.catalog_file {
        tracing::info!("Catalog source: file {:?}", path);
        Arc::new(FileProvider::new(path.clone()))
    } else {
        tracing::info!("Catalog source: built-in list");
        return Ok(Arc::new(StaticProvider::default()));
    };

    Ok(Arc::new(CachedProvider::new(source, config.catalog_ttl)))
}

fn build_audit_sink(config: &Config) -> Result<Arc<dyn AuditSink>, DomainError> {
    if let Some(url) = &config.audit_webhook_url {
        tracing::info!("Audit sink: webhook");
        return Ok(Arc::new(WebhookAuditSink::new(
            url.clone(),
            config.fetch_timeout,
        )?));
    }

    if let Some(path) = &config.audit_log_path {
        tracing::info!("Audit sink: file {:?}", path);
        return Ok(Arc::new(FileAuditSink::new(path.clone())));
    }

    Ok(Arc::new(NoopAuditSink))
}
