//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - actions: Device command state
//! - gallery: Photo records and the gallery state machine
//! - logs: Log viewer state
//! - notification: Transient user messages
//! - settings: Settings resources, drafts and forms
//! - stream: Live camera preview
//! - telemetry: Device status snapshot and its rendered form

pub mod actions;
pub mod gallery;
pub mod logs;
pub mod notification;
pub mod settings;
pub mod stream;
pub mod telemetry;

pub use actions::*;
pub use gallery::*;
pub use logs::*;
pub use notification::*;
pub use settings::*;
pub use stream::*;
pub use telemetry::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar the way the browser would interpolate it.
///
/// `null` yields `None`; strings are taken as-is, numbers and booleans are
/// stringified with booleans encoded as `"1"`/`"0"`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

/// Deserialize an optional field that the device sends either as string or number.
pub fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}
