use serde::{Deserialize, Serialize};

/// Commands the operator can send to the device
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceAction {
    Capture,
    Calibrate,
    ToggleLights,
    Reboot,
    Shutdown,
}

impl DeviceAction {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Capture => "/camera/capture",
            Self::Calibrate => "/camera/calibrate",
            Self::ToggleLights => "/system/toggle-lights",
            Self::Reboot => "/system/reboot",
            Self::Shutdown => "/system/shutdown",
        }
    }

    /// Question asked before a destructive command is sent
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::Reboot => Some("Are you sure you want to reboot the system?"),
            Self::Shutdown => Some("Are you sure you want to shut down the system?"),
            _ => None,
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            Self::Capture => "Taking photo...",
            Self::Calibrate => "Calibrating...",
            Self::ToggleLights => "Toggling lights...",
            Self::Reboot => "Rebooting...",
            Self::Shutdown => "Shutting down...",
        }
    }

    pub fn idle_label(&self, lights_on: bool) -> &'static str {
        match self {
            Self::Capture => "Take Photo",
            Self::Calibrate => "Calibrate",
            Self::ToggleLights if lights_on => "Lights On",
            Self::ToggleLights => "Lights Off",
            Self::Reboot => "Reboot",
            Self::Shutdown => "Shutdown",
        }
    }

    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Self::Capture => "Error taking photo",
            Self::Calibrate => "Error calibrating camera",
            Self::ToggleLights => "Error toggling lights",
            Self::Reboot => "Error rebooting system",
            Self::Shutdown => "Error shutting down system",
        }
    }
}

/// Enabled state and label of one action control
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionState {
    pub disabled: bool,
    pub busy: bool,
    pub label: String,
}

impl ActionState {
    pub fn idle(action: DeviceAction, lights_on: bool) -> Self {
        Self {
            disabled: false,
            busy: false,
            label: action.idle_label(lights_on).to_string(),
        }
    }
}

/// State of every action control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionStates {
    pub capture: ActionState,
    pub calibrate: ActionState,
    pub toggle_lights: ActionState,
    pub reboot: ActionState,
    pub shutdown: ActionState,
    pub lights_on: bool,
}

impl Default for ActionStates {
    fn default() -> Self {
        Self {
            capture: ActionState::idle(DeviceAction::Capture, false),
            calibrate: ActionState::idle(DeviceAction::Calibrate, false),
            toggle_lights: ActionState::idle(DeviceAction::ToggleLights, false),
            reboot: ActionState::idle(DeviceAction::Reboot, false),
            shutdown: ActionState::idle(DeviceAction::Shutdown, false),
            lights_on: false,
        }
    }
}

impl ActionStates {
    pub fn get(&self, action: DeviceAction) -> &ActionState {
        match action {
            DeviceAction::Capture => &self.capture,
            DeviceAction::Calibrate => &self.calibrate,
            DeviceAction::ToggleLights => &self.toggle_lights,
            DeviceAction::Reboot => &self.reboot,
            DeviceAction::Shutdown => &self.shutdown,
        }
    }

    pub fn get_mut(&mut self, action: DeviceAction) -> &mut ActionState {
        match action {
            DeviceAction::Capture => &mut self.capture,
            DeviceAction::Calibrate => &mut self.calibrate,
            DeviceAction::ToggleLights => &mut self.toggle_lights,
            DeviceAction::Reboot => &mut self.reboot,
            DeviceAction::Shutdown => &mut self.shutdown,
        }
    }

    /// Disable the control and show its busy label
    pub fn start(&mut self, action: DeviceAction) {
        let state = self.get_mut(action);
        state.disabled = true;
        state.busy = true;
        state.label = action.busy_label().to_string();
    }

    /// Re-enable the control with its idle label
    pub fn restore(&mut self, action: DeviceAction) {
        let lights_on = self.lights_on;
        *self.get_mut(action) = ActionState::idle(action, lights_on);
    }

    /// Keep the control disabled after the request settled
    pub fn settle_disabled(&mut self, action: DeviceAction) {
        let state = self.get_mut(action);
        state.busy = false;
        state.disabled = true;
    }

    /// Track the light state and relabel the toggle unless it is busy
    pub fn set_lights_on(&mut self, lights_on: bool) {
        self.lights_on = lights_on;
        if !self.toggle_lights.busy {
            self.toggle_lights.label = DeviceAction::ToggleLights
                .idle_label(lights_on)
                .to_string();
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LightsState {
    #[serde(rename = "lightsOn")]
    pub lights_on: bool,
}

/// Response of `POST /system/toggle-lights`
///
/// The device reports the state either at the top level or wrapped in `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleLightsResponse {
    #[serde(rename = "lightsOn", default)]
    pub lights_on: Option<bool>,
    #[serde(default)]
    pub data: Option<LightsState>,
}

impl ToggleLightsResponse {
    pub fn lights_on(&self) -> bool {
        self.lights_on
            .or_else(|| self.data.as_ref().map(|d| d.lights_on))
            .unwrap_or_default()
    }
}
