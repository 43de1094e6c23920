use serde::{Deserialize, Serialize};

use super::{encode_flag, parse_float, parse_int, SettingsDraft, SettingsForm, SettingsResource};
use crate::config::ViewConfig;

/// Smallest HDR value that means "HDR on, take this many photos"
pub const HDR_MIN_PHOTOS: i64 = 3;

const DEFAULT_IMAGE_FILE_TYPE: &str = "0";
const DEFAULT_EXPOSURE_TIME: &str = "500";
const DEFAULT_ANALOGUE_GAIN: &str = "1.5";
const DEFAULT_LENS_POSITION: &str = "6.0";
const DEFAULT_HDR: &str = "0";
const DEFAULT_HDR_PHOTOS: &str = "3";
const DEFAULT_HDR_WIDTH: &str = "7000";
const DEFAULT_CALIBRATION_PERIOD: &str = "600";
const DEFAULT_AWB_MODE: &str = "0";
const DEFAULT_AF_MODE: &str = "0";

/// Camera capture parameters as edited in the camera panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraSettings {
    pub image_file_type: String,
    pub exposure_time: String,
    pub analogue_gain: String,
    pub lens_position: String,
    pub hdr_enabled: bool,
    pub hdr_photos: String,
    pub hdr_width: String,
    pub auto_calibration: bool,
    pub auto_calibration_period: String,
    pub vertical_flip: bool,
    pub awb_mode: String,
    pub af_mode: String,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            image_file_type: DEFAULT_IMAGE_FILE_TYPE.to_string(),
            exposure_time: DEFAULT_EXPOSURE_TIME.to_string(),
            analogue_gain: DEFAULT_ANALOGUE_GAIN.to_string(),
            lens_position: DEFAULT_LENS_POSITION.to_string(),
            hdr_enabled: false,
            hdr_photos: DEFAULT_HDR_PHOTOS.to_string(),
            hdr_width: DEFAULT_HDR_WIDTH.to_string(),
            auto_calibration: false,
            auto_calibration_period: DEFAULT_CALIBRATION_PERIOD.to_string(),
            vertical_flip: false,
            awb_mode: DEFAULT_AWB_MODE.to_string(),
            af_mode: DEFAULT_AF_MODE.to_string(),
        }
    }
}

impl CameraSettings {
    /// HDR photo count and width are only shown while HDR is on
    pub fn hdr_options_visible(&self) -> bool {
        self.hdr_enabled
    }

    pub fn exposure_label(&self) -> String {
        self.exposure_time.clone()
    }

    pub fn gain_label(&self) -> String {
        one_decimal(&self.analogue_gain)
    }

    pub fn lens_position_label(&self) -> String {
        one_decimal(&self.lens_position)
    }
}

fn one_decimal(value: &str) -> String {
    parse_float(value)
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| value.to_string())
}

fn integer_or_raw(value: &str) -> String {
    parse_int(value)
        .map(|v| v.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn float_or_raw(value: &str) -> String {
    parse_float(value)
        .map(|v| v.to_string())
        .unwrap_or_else(|| value.to_string())
}

impl SettingsForm for CameraSettings {
    const RESOURCE: SettingsResource = SettingsResource::Camera;

    fn hydrate(&mut self, draft: &SettingsDraft) {
        if let Some(v) = draft.get("ImageFileType") {
            self.image_file_type = v.to_string();
        }
        if let Some(v) = draft.get("ExposureTime") {
            self.exposure_time = integer_or_raw(v);
        }
        if let Some(v) = draft.get("AnalogueGain") {
            self.analogue_gain = float_or_raw(v);
        }
        if let Some(v) = draft.get("LensPosition") {
            self.lens_position = float_or_raw(v);
        }
        if let Some(v) = draft.get("HDR") {
            let photos = parse_int(v).unwrap_or_default();
            self.hdr_enabled = photos >= HDR_MIN_PHOTOS;
            if self.hdr_enabled {
                self.hdr_photos = photos.to_string();
            }
        }
        if let Some(v) = draft.get("HDR_width") {
            self.hdr_width = v.to_string();
        }
        if let Some(v) = draft.flag("AutoCalibration") {
            self.auto_calibration = v;
        }
        if let Some(v) = draft.get("AutoCalibrationPeriod") {
            self.auto_calibration_period = v.to_string();
        }
        if let Some(v) = draft.flag("VerticalFlip") {
            self.vertical_flip = v;
        }
        if let Some(v) = draft.get("AwbMode") {
            self.awb_mode = v.to_string();
        }
        if let Some(v) = draft.get("AfMode") {
            self.af_mode = v.to_string();
        }
    }

    fn to_draft(&self, config: &ViewConfig) -> SettingsDraft {
        let controls = &config.camera_controls;
        let pick = |present: bool, value: &str, default: &str| -> String {
            (if present { value } else { default }).to_string()
        };

        let hdr = if controls.hdr && self.hdr_enabled {
            self.hdr_photos.clone()
        } else {
            DEFAULT_HDR.to_string()
        };

        let mut draft = SettingsDraft::new();
        draft.insert(
            "ImageFileType",
            pick(controls.image_format, &self.image_file_type, DEFAULT_IMAGE_FILE_TYPE),
        );
        draft.insert(
            "ExposureTime",
            pick(controls.exposure_time, &self.exposure_time, DEFAULT_EXPOSURE_TIME),
        );
        draft.insert(
            "AnalogueGain",
            pick(controls.analogue_gain, &self.analogue_gain, DEFAULT_ANALOGUE_GAIN),
        );
        draft.insert(
            "LensPosition",
            pick(controls.lens_position, &self.lens_position, DEFAULT_LENS_POSITION),
        );
        draft.insert("HDR", hdr);
        draft.insert(
            "HDR_width",
            pick(controls.hdr_width, &self.hdr_width, DEFAULT_HDR_WIDTH),
        );
        draft.insert(
            "AutoCalibration",
            encode_flag(controls.auto_calibration && self.auto_calibration),
        );
        draft.insert(
            "AutoCalibrationPeriod",
            pick(
                controls.calibration_period,
                &self.auto_calibration_period,
                DEFAULT_CALIBRATION_PERIOD,
            ),
        );
        draft.insert(
            "VerticalFlip",
            encode_flag(controls.vertical_flip && self.vertical_flip),
        );
        draft.insert("AwbMode", pick(controls.awb_mode, &self.awb_mode, DEFAULT_AWB_MODE));
        draft.insert("AfMode", pick(controls.focus_mode, &self.af_mode, DEFAULT_AF_MODE));
        draft
    }
}
