use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::{SettingsDraft, SettingsForm, SettingsResource};
use crate::config::ViewConfig;
use crate::error::RequestError;

pub const MISSING_CREDENTIALS: &str = "Please enter both SSID and password";

/// Credentials of a WiFi network to add
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct WifiCredentials {
    #[validate(min_length = 1)]
    pub ssid: String,
    #[validate(min_length = 1)]
    pub wifipass: String,
}

/// WiFi connection as reported by `GET /network/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkStatusView {
    pub connected: bool,
    pub ssid: Option<String>,
    pub ip: Option<String>,
    pub signal_strength: Option<String>,
}

impl NetworkStatusView {
    pub fn status_text(&self) -> &str {
        if self.connected {
            "Connected"
        } else {
            "Disconnected"
        }
    }

    pub fn ssid_text(&self) -> &str {
        non_empty(self.ssid.as_deref()).unwrap_or("None")
    }

    pub fn ip_text(&self) -> &str {
        non_empty(self.ip.as_deref()).unwrap_or("Not available")
    }

    pub fn signal_text(&self) -> String {
        match (self.connected, self.signal_strength.as_deref()) {
            (true, Some(signal)) => format!("{signal}%"),
            _ => "N/A".to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Network panel: read-only connection status plus the add-network form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkSettings {
    pub status: NetworkStatusView,
    pub credentials: WifiCredentials,
}

impl NetworkSettings {
    pub fn clear_credentials(&mut self) {
        self.credentials = WifiCredentials::default();
    }
}

impl SettingsForm for NetworkSettings {
    const RESOURCE: SettingsResource = SettingsResource::Network;

    /// The status is a report, not an editable form, so it is replaced as a whole.
    fn hydrate(&mut self, draft: &SettingsDraft) {
        self.status = NetworkStatusView {
            connected: draft.flag("connected").unwrap_or_default(),
            ssid: draft.get("ssid").map(str::to_string),
            ip: draft.get("ip").map(str::to_string),
            signal_strength: draft.get("signalStrength").map(str::to_string),
        };
    }

    fn to_draft(&self, _config: &ViewConfig) -> SettingsDraft {
        [
            ("ssid", self.credentials.ssid.as_str()),
            ("wifipass", self.credentials.wifipass.as_str()),
        ]
        .into_iter()
        .collect()
    }

    fn validate(&self) -> Result<(), RequestError> {
        self.credentials.validate().map_err(|e| {
            log::debug!("WiFi credentials rejected: {e:?}");
            RequestError::ValidationFailure(MISSING_CREDENTIALS.to_string())
        })
    }
}
