//! Formatting of telemetry and gallery values for display.

use chrono::{DateTime, NaiveDate};

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human readable byte count, e.g. `1536` -> `"1.5 KB"`.
///
/// The unit is `floor(log_1024(bytes))`, the value is rounded to two decimals
/// and trailing zeros are dropped.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024;
        unit += 1;
    }

    let value = bytes as f64 / 1024_f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{rounded} {}", BYTE_UNITS[unit])
}

/// Duration as `Nd Nh Nm Ns`, zero-valued units omitted.
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    [(days, "d"), (hours, "h"), (minutes, "m"), (secs, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unix timestamp (seconds) as UTC date and time, `Never` when unset.
pub fn format_date_time(timestamp: Option<i64>) -> String {
    match timestamp {
        None | Some(0) => "Never".to_string(),
        Some(ts) => DateTime::from_timestamp(ts, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| ts.to_string()),
    }
}

/// `YYYY-MM-DD` as a readable day, anything else is returned unchanged.
pub fn format_date_string(date: &str) -> String {
    if date.split('-').count() != 3 {
        return date.to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Share of `used` in `total` with one decimal, `0.0` for an empty total.
pub fn format_percentage(used: u64, total: u64) -> String {
    format!("{:.1}", percentage(used, total))
}

pub fn percentage(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}
