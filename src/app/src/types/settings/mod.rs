//! Settings resources and the forms mirroring them.
//!
//! A form is hydrated from a [`SettingsDraft`] fetched from the device and serialized
//! back into one for submission. Hydration only touches fields whose key is present in
//! the response: a missing key leaves the field alone, while a present falsy value
//! such as `"0"` or `""` is written.

mod camera;
mod network;
mod power;
mod schedule;

pub use camera::*;
pub use network::*;
pub use power::*;
pub use schedule::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ViewConfig;
use crate::error::RequestError;

/// Server-side configuration groups edited through a form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsResource {
    Camera,
    Schedule,
    Network,
    Power,
}

impl SettingsResource {
    /// Endpoint the form is hydrated from
    pub fn load_path(&self) -> &'static str {
        match self {
            Self::Camera => "/camera/settings",
            Self::Schedule => "/schedule/settings",
            Self::Network => "/network/status",
            Self::Power => "/system/power",
        }
    }

    /// Endpoint the serialized draft is posted to
    pub fn submit_path(&self) -> &'static str {
        match self {
            Self::Camera => "/camera/settings",
            Self::Schedule => "/schedule/settings",
            Self::Network => "/network/add",
            Self::Power => "/system/power",
        }
    }

    /// Whether a failed load is shown to the operator or only logged
    pub fn reports_load_failure(&self) -> bool {
        matches!(self, Self::Camera | Self::Schedule)
    }

    pub fn load_failure_message(&self, error: &RequestError) -> String {
        match self {
            Self::Camera => format!("Error loading camera settings: {error}"),
            Self::Schedule => format!("Error loading schedule settings: {error}"),
            Self::Network => format!("Error loading network status: {error}"),
            Self::Power => format!("Error loading power settings: {error}"),
        }
    }

    pub fn submit_success_message(&self) -> &'static str {
        match self {
            Self::Camera => "Camera settings saved successfully!",
            Self::Schedule => "Schedule settings saved successfully!",
            Self::Network => "WiFi network added successfully! Connection attempt in progress...",
            Self::Power => "Power settings saved successfully!",
        }
    }

    pub fn submit_failure_message(&self, error: &RequestError) -> String {
        match (self, error) {
            (_, RequestError::ValidationFailure(message)) => message.clone(),
            (Self::Camera, _) => format!("Error saving camera settings: {error}"),
            (Self::Schedule, _) => format!("Error saving schedule settings: {error}"),
            (Self::Network, _) => format!("Error adding WiFi network: {error}"),
            (Self::Power, _) => format!("Error saving power settings: {error}"),
        }
    }
}

/// Flat string-keyed mirror of one settings resource
///
/// Deserializing from a JSON object stringifies scalars (booleans as `"1"`/`"0"`) and
/// drops `null` members, so only keys with a value are considered present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, String>")]
pub struct SettingsDraft(BTreeMap<String, String>);

impl SettingsDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Boolean value of a present key
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn insert_flag(&mut self, key: impl Into<String>, value: bool) {
        self.insert(key, encode_flag(value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for SettingsDraft {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        Self(
            raw.into_iter()
                .filter_map(|(key, value)| super::scalar_to_string(&value).map(|v| (key, v)))
                .collect(),
        )
    }
}

impl From<SettingsDraft> for BTreeMap<String, String> {
    fn from(draft: SettingsDraft) -> Self {
        draft.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsDraft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Two-way mapping between a settings resource and its form
pub trait SettingsForm {
    const RESOURCE: SettingsResource;

    /// Write every recognized key present in `draft` into the form
    fn hydrate(&mut self, draft: &SettingsDraft);

    /// Read the form into the body posted to the device
    fn to_draft(&self, config: &ViewConfig) -> SettingsDraft;

    /// Client-side check before submission
    fn validate(&self) -> Result<(), RequestError> {
        Ok(())
    }
}

/// Integer prefix of a string, like the browser's `parseInt`
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

pub(crate) fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
