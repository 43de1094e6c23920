//! Static configuration of the core and the per-view capability object.

use serde::{Deserialize, Serialize};

/// Prefix of every device API endpoint.
pub const API_PREFIX: &str = "/api";

/// Base URL for device API endpoints.
///
/// NOTE: `crux_http` requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase`). The shell strips this prefix before calling `fetch()`.
pub const BASE_URL: &str = "https://relative";

/// Telemetry poll interval.
pub const POLL_INTERVAL_MS: u64 = 10_000;

/// Default lifetime of a notification.
pub const NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Delay between a successful reboot request and the page reload.
pub const REBOOT_RELOAD_DELAY_MS: u64 = 60_000;

/// Delay before re-reading the network status after adding a WiFi network.
pub const NETWORK_RECHECK_DELAY_MS: u64 = 10_000;

/// Log shown when the viewer opens without an explicit selection.
pub const DEFAULT_LOG_TYPE: &str = "system";

/// Which camera form controls exist on the hosting page.
///
/// Absent controls serialize to their documented default literal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraControls {
    pub image_format: bool,
    pub exposure_time: bool,
    pub analogue_gain: bool,
    pub lens_position: bool,
    pub hdr: bool,
    pub hdr_width: bool,
    pub auto_calibration: bool,
    pub calibration_period: bool,
    pub vertical_flip: bool,
    pub awb_mode: bool,
    pub focus_mode: bool,
}

impl CameraControls {
    pub const fn all() -> Self {
        Self {
            image_format: true,
            exposure_time: true,
            analogue_gain: true,
            lens_position: true,
            hdr: true,
            hdr_width: true,
            auto_calibration: true,
            calibration_period: true,
            vertical_flip: true,
            awb_mode: true,
            focus_mode: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            image_format: false,
            exposure_time: false,
            analogue_gain: false,
            lens_position: false,
            hdr: false,
            hdr_width: false,
            auto_calibration: false,
            calibration_period: false,
            vertical_flip: false,
            awb_mode: false,
            focus_mode: false,
        }
    }
}

impl Default for CameraControls {
    fn default() -> Self {
        Self::all()
    }
}

/// Panels present in the current view, decided once when the view is constructed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    pub dashboard: bool,
    pub gallery: bool,
    pub camera: bool,
    pub schedule: bool,
    pub network: bool,
    pub power: bool,
    pub logs: bool,
    pub camera_controls: CameraControls,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dashboard: true,
            gallery: true,
            camera: true,
            schedule: true,
            network: true,
            power: true,
            logs: true,
            camera_controls: CameraControls::all(),
        }
    }
}

impl ViewConfig {
    /// A view without any optional panel.
    pub fn empty() -> Self {
        Self {
            dashboard: false,
            gallery: false,
            camera: false,
            schedule: false,
            network: false,
            power: false,
            logs: false,
            camera_controls: CameraControls::none(),
        }
    }
}
