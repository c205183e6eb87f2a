//! AuditSink implementations

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::{AuditSink, DomainError};
use crate::models::AuditEvent;

/// Used when auditing is not configured
pub struct NoopAuditSink;

#[async_trait]
impl AuditSink for NoopAuditSink {
    async fn record(&self, _event: &AuditEvent) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Appends one tab-separated line per event to a local file
pub struct FileAuditSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::Audit(format!("Failed to open {:?}: {}", self.path, e)))?;

        file.write_all(event.to_line().as_bytes())
            .await
            .map_err(|e| DomainError::Audit(format!("Failed to write {:?}: {}", self.path, e)))?;

        Ok(())
    }
}

/// POSTs each event as JSON to a webhook
pub struct WebhookAuditSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookAuditSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Audit(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl AuditSink for WebhookAuditSink {
    async fn record(&self, event: &AuditEvent) -> Result<(), DomainError> {
        let resp = self
            .client
            .post(&self.url)
            .json(event)
            .send()
            .await
            .map_err(|e| DomainError::Audit(format!("Webhook request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::Audit(format!(
                "Webhook returned status {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
