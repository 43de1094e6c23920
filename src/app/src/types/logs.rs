use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LOG_TYPE;
use crate::http_helpers::api_path_with_segments;

pub const LOG_LOADING: &str = "Loading log content...";
pub const LOG_EMPTY: &str = "No log content available";

/// Response of `GET /logs/{type}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogContent {
    #[serde(default)]
    pub content: Option<String>,
}

/// Log viewer state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogState {
    pub log_type: String,
    pub content: String,
    pub is_loading: bool,
}

impl Default for LogState {
    fn default() -> Self {
        Self {
            log_type: DEFAULT_LOG_TYPE.to_string(),
            content: String::new(),
            is_loading: false,
        }
    }
}

impl LogState {
    /// Static download location of the selected log
    pub fn download_url(&self) -> String {
        api_path_with_segments("/logs", &[self.log_type.as_str(), "download"])
    }
}
