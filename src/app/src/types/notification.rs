use serde::{Deserialize, Serialize};

use crate::config::NOTIFICATION_DURATION_MS;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
}

/// A transient message shown to the operator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Lifetime from creation; the shell timer fires once it has elapsed
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(id: u64, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}
