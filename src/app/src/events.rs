use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::error::RequestResult;
use crate::types::*;

/// Events that can happen in the app
///
/// Response variants are produced by the core itself and skipped from serialization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    /// The view was constructed; carries the panels it contains
    Initialize(ViewConfig),

    Notification(NotificationEvent),
    Telemetry(TelemetryEvent),
    Gallery(GalleryEvent),
    Settings(SettingsEvent),
    Camera(CameraEvent),
    Action(ActionEvent),
    Logs(LogEvent),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Close button
    Dismiss { id: u64 },
    #[serde(skip)]
    Expired { id: u64 },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum TelemetryEvent {
    /// Fetch outside the poll interval
    Refresh,
    #[serde(skip)]
    PollTick,
    #[serde(skip)]
    Response(RequestResult<TelemetrySnapshot>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    LoadDates,
    SelectDate(DateFilter),
    Open(usize),
    Previous,
    Next,
    Close,
    /// DOM `KeyboardEvent.key` of a key press anywhere on the page
    KeyPressed(String),
    DeleteCurrent,
    DownloadCurrent,
    SetLayout(GalleryLayout),

    #[serde(skip)]
    DatesResponse(RequestResult<Vec<String>>),
    #[serde(skip)]
    PhotosResponse {
        request: u64,
        result: RequestResult<Vec<PhotoRecord>>,
    },
    #[serde(skip)]
    DeleteConfirmed { filename: String, confirmed: bool },
    #[serde(skip)]
    DeleteResponse {
        filename: String,
        result: RequestResult<()>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Load(SettingsResource),
    Submit(SettingsResource),

    // Form edits
    CameraFormChanged(CameraSettings),
    ToggleHdr(bool),
    ScheduleFormChanged(ScheduleSettings),
    ToggleHour(u8),
    ToggleWeekday(String),
    NetworkCredentialsChanged(WifiCredentials),
    PowerFormChanged {
        power_off_on_halt: bool,
        wake_on_gpio: bool,
    },

    #[serde(skip)]
    Loaded {
        resource: SettingsResource,
        result: RequestResult<SettingsDraft>,
    },
    #[serde(skip)]
    Submitted {
        resource: SettingsResource,
        result: RequestResult<()>,
    },
    #[serde(skip)]
    NetworkRecheckDue,
}

/// Live preview controls of the camera panel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum CameraEvent {
    StartStream,
    StopStream,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ActionEvent {
    Trigger(DeviceAction),

    #[serde(skip)]
    Confirmed { action: DeviceAction, confirmed: bool },
    #[serde(skip)]
    Completed {
        action: DeviceAction,
        result: RequestResult<()>,
    },
    #[serde(skip)]
    LightsToggled(RequestResult<ToggleLightsResponse>),
    #[serde(skip)]
    ReloadDue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// Load a log; `None` reloads the selected one
    Load(Option<String>),
    Download,

    #[serde(skip)]
    Response {
        log_type: String,
        result: RequestResult<LogContent>,
    },
}
