use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// RFC 3339, UTC
    pub timestamp: String,
    pub event: String,
    pub category: String,
    pub title: String,
}

impl AuditEvent {
    pub fn now(
        event: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event: event.into(),
            category: category.into(),
            title: title.into(),
        }
    }

    /// Tab-separated log line. Tabs and newlines inside fields become spaces.
    pub fn to_line(&self) -> String {
        let clean = |s: &str| s.replace(['\t', '\r', '\n'], " ");
        format!(
            "{}\t{}\t{}\t{}\n",
            self.timestamp,
            clean(&self.event),
            clean(&self.category),
            clean(&self.title)
        )
    }
}
