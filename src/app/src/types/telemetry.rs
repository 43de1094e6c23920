use serde::{Deserialize, Serialize};

use crate::format::{format_bytes, format_date_time, format_duration, format_percentage, percentage};

/// CPU, memory and uptime of the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemTelemetry {
    pub device_name: String,
    pub uptime: f64,
    pub cpu_temp: f64,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerTelemetry {
    pub source: String,
    pub battery_level: f64,
    pub current: f64,
    pub voltage: f64,
    pub lights_on: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageTelemetry {
    pub internal_used: u64,
    pub internal_total: u64,
    pub photos_count: u64,
    pub photos_size: u64,
    pub external_connected: bool,
    pub external_used: u64,
    pub external_total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleTelemetry {
    pub mode: String,
    pub next_wake: Option<f64>,
    pub last_photo: Option<f64>,
    #[serde(deserialize_with = "super::deserialize_optional_scalar")]
    pub runtime: Option<String>,
}

/// Response of `GET /system/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TelemetrySnapshot {
    pub system: SystemTelemetry,
    pub power: PowerTelemetry,
    pub storage: StorageTelemetry,
    pub schedule: ScheduleTelemetry,
}

/// Rendered telemetry
///
/// Always built from a single snapshot so fields of different responses never mix.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TelemetryView {
    pub device_name: String,
    pub uptime: String,
    pub cpu_temp: String,
    pub cpu_usage: String,
    pub memory_usage: String,
    pub status: String,
    pub status_class: String,

    pub power_source: String,
    pub battery_level: f64,
    pub battery_percentage: String,
    pub power_current: String,
    pub power_voltage: String,
    pub lights_on: bool,

    pub storage_internal_percent: f64,
    pub storage_internal_text: String,
    pub photos_count: String,
    pub storage_external_percent: f64,
    pub storage_external_text: String,

    pub current_mode: String,
    pub next_wake: String,
    pub last_photo: String,
    pub runtime: String,
}

impl From<&TelemetrySnapshot> for TelemetryView {
    fn from(snapshot: &TelemetrySnapshot) -> Self {
        let system = &snapshot.system;
        let power = &snapshot.power;
        let storage = &snapshot.storage;
        let schedule = &snapshot.schedule;

        let (storage_external_percent, storage_external_text) = if storage.external_connected {
            (
                percentage(storage.external_used, storage.external_total),
                storage_text(storage.external_used, storage.external_total),
            )
        } else {
            (0.0, "Not connected".to_string())
        };

        Self {
            device_name: system.device_name.clone(),
            uptime: format_duration(system.uptime as i64),
            cpu_temp: format!("{}°C", system.cpu_temp),
            cpu_usage: format!("{}%", system.cpu_usage),
            memory_usage: format!("{}%", system.memory_usage),
            status: system.status.clone(),
            status_class: system.status.to_lowercase(),

            power_source: power.source.clone(),
            battery_level: power.battery_level,
            battery_percentage: format!("{}%", power.battery_level),
            power_current: format!("{} mA", power.current),
            power_voltage: format!("{} V", power.voltage),
            lights_on: power.lights_on,

            storage_internal_percent: percentage(storage.internal_used, storage.internal_total),
            storage_internal_text: storage_text(storage.internal_used, storage.internal_total),
            photos_count: format!(
                "{} photos ({})",
                storage.photos_count,
                format_bytes(storage.photos_size)
            ),
            storage_external_percent,
            storage_external_text,

            current_mode: schedule.mode.clone(),
            next_wake: format_date_time(schedule.next_wake.map(|ts| ts as i64)),
            last_photo: format_date_time(schedule.last_photo.map(|ts| ts as i64)),
            runtime: format!(
                "{} minutes",
                schedule.runtime.as_deref().unwrap_or_default()
            ),
        }
    }
}

fn storage_text(used: u64, total: u64) -> String {
    format!(
        "{}% ({} / {})",
        format_percentage(used, total),
        format_bytes(used),
        format_bytes(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_is_derived_from_a_full_status_response() {
        let json = r#"{
            "system": {"deviceName": "trailcam-01", "uptime": 3661, "cpuTemp": 45.5,
                       "cpuUsage": 12.5, "memoryUsage": 40, "status": "Running"},
            "power": {"source": "Battery", "batteryLevel": 80, "current": 120, "voltage": 3.7},
            "storage": {"internalUsed": 1024, "internalTotal": 4096, "photosCount": 12,
                        "photosSize": 1536, "externalConnected": false},
            "schedule": {"mode": "Timelapse", "nextWake": 0, "runtime": "10"}
        }"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();
        let view = TelemetryView::from(&snapshot);

        assert_eq!(view.device_name, "trailcam-01");
        assert_eq!(view.uptime, "1h 1m 1s");
        assert_eq!(view.cpu_temp, "45.5°C");
        assert_eq!(view.memory_usage, "40%");
        assert_eq!(view.status_class, "running");
        assert_eq!(view.battery_percentage, "80%");
        assert_eq!(view.power_voltage, "3.7 V");
        assert_eq!(view.storage_internal_text, "25.0% (1 KB / 4 KB)");
        assert_eq!(view.photos_count, "12 photos (1.5 KB)");
        assert_eq!(view.storage_external_text, "Not connected");
        assert_eq!(view.next_wake, "Never");
        assert_eq!(view.last_photo, "Never");
        assert_eq!(view.runtime, "10 minutes");
        assert!(!view.lights_on);
    }
}
