use serde::{Deserialize, Serialize};

use super::{SettingsDraft, SettingsForm, SettingsResource};
use crate::config::ViewConfig;

/// Hardware facts shown next to the power form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PowerInfo {
    pub pi_model: Option<String>,
    pub power_manager: Option<String>,
}

impl PowerInfo {
    pub fn model_text(&self) -> String {
        format!("Raspberry Pi {}", self.pi_model.as_deref().unwrap_or("Unknown"))
    }

    pub fn manager_text(&self) -> &str {
        self.power_manager.as_deref().unwrap_or("Unknown")
    }
}

/// Power management flags as edited in the power panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PowerSettings {
    pub info: PowerInfo,
    pub power_off_on_halt: bool,
    pub wake_on_gpio: bool,
}

impl SettingsForm for PowerSettings {
    const RESOURCE: SettingsResource = SettingsResource::Power;

    fn hydrate(&mut self, draft: &SettingsDraft) {
        self.info = PowerInfo {
            pi_model: draft.get("piModel").map(str::to_string),
            power_manager: draft.get("powerManager").map(str::to_string),
        };
        if let Some(v) = draft.flag("POWER_OFF_ON_HALT") {
            self.power_off_on_halt = v;
        }
        if let Some(v) = draft.flag("WAKE_ON_GPIO") {
            self.wake_on_gpio = v;
        }
    }

    fn to_draft(&self, _config: &ViewConfig) -> SettingsDraft {
        let mut draft = SettingsDraft::new();
        draft.insert_flag("POWER_OFF_ON_HALT", self.power_off_on_halt);
        draft.insert_flag("WAKE_ON_GPIO", self.wake_on_gpio);
        draft
    }
}
