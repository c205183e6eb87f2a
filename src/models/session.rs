use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::book::BookRecord;

/// Where a session is in the pick cycle. Drives the mascot state in clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Thinking,
    Done,
}

/// Per-session state, owned by the session store and passed by value through
/// the recommendation flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionState {
    pub status: Status,
    /// Recently shown books per category, oldest first.
    pub history: HashMap<String, Vec<BookRecord>>,
    pub last_selected: Option<BookRecord>,
}

impl SessionState {
    pub fn history_for(&self, category: &str) -> &[BookRecord] {
        self.history.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.history.clear();
        self.last_selected = None;
    }
}
