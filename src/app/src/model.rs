use crux_core::{render::render, Command};
use serde::{Deserialize, Serialize};

use crate::config::{ViewConfig, NOTIFICATION_DURATION_MS};
use crate::events::{Event, NotificationEvent};
use crate::types::*;
use crate::{Effect, TimerCmd};

/// Application Model - the complete state
///
/// The shell never sees it directly; [`crate::ViewModel`] is derived from it.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    /// Panels and controls present in the hosting page
    pub view_config: ViewConfig,

    // Notification state
    pub notifications: Vec<Notification>,
    #[serde(skip)]
    pub next_notification_id: u64,

    // Telemetry state
    pub telemetry: Option<TelemetryView>,
    /// The poll loop is armed; a second initialization must not start another one
    #[serde(skip)]
    pub polling_active: bool,

    pub gallery: GalleryState,

    // Settings forms
    pub camera: CameraSettings,
    pub schedule: ScheduleSettings,
    pub network: NetworkSettings,
    pub power: PowerSettings,
    pub stream: CameraStream,

    pub actions: ActionStates,
    pub logs: LogState,
}

impl Model {
    /// Show a notification with the default lifetime
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> Command<Effect, Event> {
        self.notify_for(message, severity, NOTIFICATION_DURATION_MS)
    }

    /// Show a notification and schedule its removal after `duration_ms`
    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> Command<Effect, Event> {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications
            .push(Notification::new(id, message, severity).with_duration(duration_ms));

        Command::all([
            render(),
            TimerCmd::after(duration_ms)
                .build()
                .then_send(move |_| Event::Notification(NotificationEvent::Expired { id })),
        ])
    }

    /// Remove a notification; returns `false` if it is already gone
    pub fn remove_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }
}
