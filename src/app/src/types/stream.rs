use serde::{Deserialize, Serialize};

use crate::config::API_PREFIX;

/// MJPEG endpoint of the live camera feed
pub const STREAM_ENDPOINT: &str = "/camera/stream";

/// Still image shown while no stream is running
pub const STREAM_PLACEHOLDER: &str = "img/camera-placeholder.jpg";

/// Live preview of the camera panel
///
/// `url` is set exactly while the stream is active.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraStream {
    pub active: bool,
    pub url: Option<String>,
}

impl CameraStream {
    pub fn start(&mut self) {
        self.active = true;
        self.url = Some(format!("{API_PREFIX}{STREAM_ENDPOINT}"));
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Source of the feed image: the stream, or the placeholder when stopped
    pub fn image_source(&self) -> &str {
        self.url.as_deref().unwrap_or(STREAM_PLACEHOLDER)
    }

    /// The start overlay covers the feed while nothing is streaming
    pub fn overlay_visible(&self) -> bool {
        !self.active
    }
}
