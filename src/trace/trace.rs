use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::registry::field_spec::FieldKey;

/// One line in the JSONL trace: a field edit, a toggle transition, a summary
/// recompute, or a submission outcome.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub event: String,

    pub field: Option<String>,
    pub detail: Option<String>,
    pub has_changes: Option<bool>,
}

impl TraceEvent {
    pub fn now(event: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            event: event.to_string(),
            field: None,
            detail: None,
            has_changes: None,
        }
    }

    pub fn with_field(mut self, key: &FieldKey) -> Self {
        self.field = Some(key.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn with_has_changes(mut self, has_changes: bool) -> Self {
        self.has_changes = Some(has_changes);
        self
    }
}
