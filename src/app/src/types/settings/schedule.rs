use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{SettingsDraft, SettingsForm, SettingsResource};
use crate::config::ViewConfig;

/// Weekday checkbox values in display order (ISO numbering, Monday first)
pub const WEEKDAYS: [(&str, &str); 7] = [
    ("1", "Mon"),
    ("2", "Tue"),
    ("3", "Wed"),
    ("4", "Thu"),
    ("5", "Fri"),
    ("6", "Sat"),
    ("7", "Sun"),
];

pub const HOURS_PER_DAY: u8 = 24;

const LIST_SEPARATOR: char = ';';

/// Wake-up schedule as edited in the schedule panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub weekdays: BTreeSet<String>,
    pub hours: BTreeSet<u8>,
    pub utc_off: String,
    pub runtime: String,
    pub onlyflash: String,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            weekdays: BTreeSet::new(),
            hours: BTreeSet::new(),
            utc_off: "0".to_string(),
            runtime: "5".to_string(),
            onlyflash: "0".to_string(),
        }
    }
}

/// Label of a box in the hour grid, e.g. `07:00`
pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}:00")
}

impl ScheduleSettings {
    pub fn toggle_hour(&mut self, hour: u8) {
        if hour >= HOURS_PER_DAY {
            return;
        }
        if !self.hours.remove(&hour) {
            self.hours.insert(hour);
        }
    }

    pub fn toggle_weekday(&mut self, weekday: &str) {
        if !WEEKDAYS.iter().any(|(value, _)| *value == weekday) {
            return;
        }
        if !self.weekdays.remove(weekday) {
            self.weekdays.insert(weekday.to_string());
        }
    }

    fn joined_weekdays(&self) -> String {
        WEEKDAYS
            .iter()
            .filter(|(value, _)| self.weekdays.contains(*value))
            .map(|(value, _)| *value)
            .collect::<Vec<_>>()
            .join(";")
    }

    fn joined_hours(&self) -> String {
        self.hours
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl SettingsForm for ScheduleSettings {
    const RESOURCE: SettingsResource = SettingsResource::Schedule;

    fn hydrate(&mut self, draft: &SettingsDraft) {
        if let Some(v) = draft.get("weekday") {
            let days: BTreeSet<&str> = split_list(v).collect();
            self.weekdays = WEEKDAYS
                .iter()
                .filter(|(value, _)| days.contains(value))
                .map(|(value, _)| value.to_string())
                .collect();
        }
        if let Some(v) = draft.get("hour") {
            self.hours = split_list(v)
                .filter_map(|h| h.parse::<u8>().ok())
                .filter(|h| *h < HOURS_PER_DAY)
                .collect();
        }
        if let Some(v) = draft.get("utc_off") {
            self.utc_off = v.to_string();
        }
        if let Some(v) = draft.get("runtime") {
            self.runtime = v.to_string();
        }
        if let Some(v) = draft.get("onlyflash") {
            self.onlyflash = v.to_string();
        }
    }

    fn to_draft(&self, _config: &ViewConfig) -> SettingsDraft {
        [
            ("weekday", self.joined_weekdays()),
            ("hour", self.joined_hours()),
            ("utc_off", self.utc_off.clone()),
            ("runtime", self.runtime.clone()),
            ("onlyflash", self.onlyflash.clone()),
        ]
        .into_iter()
        .collect()
    }
}
