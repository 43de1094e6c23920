//! What the shell renders: the model plus every label derived from it.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::format::format_date_string;
use crate::model::Model;
use crate::types::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraLabels {
    pub exposure: String,
    pub gain: String,
    pub lens_position: String,
    pub hdr_options_visible: bool,
}

/// One box of the schedule hour grid or weekday row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleToggle {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Entry of the gallery date selector
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamView {
    pub active: bool,
    pub url: Option<String>,
    pub image_source: String,
    pub overlay_visible: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkStatusTexts {
    pub connected: bool,
    pub status: String,
    pub ssid: String,
    pub ip: String,
    pub signal: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub view_config: ViewConfig,
    pub notifications: Vec<Notification>,
    pub telemetry: Option<TelemetryView>,

    pub gallery: GalleryState,
    pub gallery_placeholder: Option<String>,
    pub date_options: Vec<DateOption>,
    /// List-view caption per photo, in `gallery.photos` order
    pub photo_captions: Vec<String>,

    pub camera: CameraSettings,
    pub camera_labels: CameraLabels,
    pub stream: StreamView,
    pub schedule: ScheduleSettings,
    pub schedule_hours: Vec<ScheduleToggle>,
    pub schedule_weekdays: Vec<ScheduleToggle>,
    pub network: NetworkSettings,
    pub network_status: NetworkStatusTexts,
    pub power: PowerSettings,
    pub power_model: String,
    pub power_manager: String,

    pub actions: ActionStates,
    pub logs: LogState,
}

fn hour_toggles(schedule: &ScheduleSettings) -> Vec<ScheduleToggle> {
    (0..HOURS_PER_DAY)
        .map(|hour| ScheduleToggle {
            value: hour.to_string(),
            label: hour_label(hour),
            selected: schedule.hours.contains(&hour),
        })
        .collect()
}

fn weekday_toggles(schedule: &ScheduleSettings) -> Vec<ScheduleToggle> {
    WEEKDAYS
        .iter()
        .map(|(value, label)| ScheduleToggle {
            value: value.to_string(),
            label: label.to_string(),
            selected: schedule.weekdays.contains(*value),
        })
        .collect()
}

fn date_options(gallery: &GalleryState) -> Vec<DateOption> {
    let all = DateOption {
        value: DateFilter::All.selector_value().to_string(),
        label: "All Dates".to_string(),
        selected: gallery.selected_date == DateFilter::All,
    };
    let days = gallery.dates.iter().map(|date| DateOption {
        value: date.clone(),
        label: format_date_string(date),
        selected: matches!(&gallery.selected_date, DateFilter::Day(day) if day == date),
    });

    std::iter::once(all).chain(days).collect()
}

fn photo_captions(photos: &[PhotoRecord]) -> Vec<String> {
    photos
        .iter()
        .map(|photo| format!("{} {}", format_date_string(&photo.date), photo.time))
        .collect()
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let status = &model.network.status;

        Self {
            view_config: model.view_config,
            notifications: model.notifications.clone(),
            telemetry: model.telemetry.clone(),

            gallery: model.gallery.clone(),
            gallery_placeholder: model.gallery.status.placeholder().map(str::to_string),
            date_options: date_options(&model.gallery),
            photo_captions: photo_captions(&model.gallery.photos),

            camera: model.camera.clone(),
            camera_labels: CameraLabels {
                exposure: model.camera.exposure_label(),
                gain: model.camera.gain_label(),
                lens_position: model.camera.lens_position_label(),
                hdr_options_visible: model.camera.hdr_options_visible(),
            },
            stream: StreamView {
                active: model.stream.active,
                url: model.stream.url.clone(),
                image_source: model.stream.image_source().to_string(),
                overlay_visible: model.stream.overlay_visible(),
            },
            schedule: model.schedule.clone(),
            schedule_hours: hour_toggles(&model.schedule),
            schedule_weekdays: weekday_toggles(&model.schedule),
            network: model.network.clone(),
            network_status: NetworkStatusTexts {
                connected: status.connected,
                status: status.status_text().to_string(),
                ssid: status.ssid_text().to_string(),
                ip: status.ip_text().to_string(),
                signal: status.signal_text(),
            },
            power: model.power.clone(),
            power_model: model.power.info.model_text(),
            power_manager: model.power.info.manager_text().to_string(),

            actions: model.actions.clone(),
            logs: model.logs.clone(),
        }
    }
}
