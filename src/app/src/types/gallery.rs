use serde::{Deserialize, Serialize};

use crate::format::format_date_string;

/// Text shown for photo metadata the device did not record.
pub const UNKNOWN: &str = "Unknown";

/// Photo entry of `GET /gallery/photos`
///
/// Exposure and focus come as strings or numbers depending on the capture pipeline.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoEntry {
    pub filename: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub url: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_scalar")]
    pub exposure: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_scalar")]
    pub focus: Option<String>,
}

/// A captured photo, identified by its filename within a date
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoRecord {
    pub filename: String,
    pub date: String,
    pub time: String,
    pub thumbnail_url: String,
    pub url: String,
    pub exposure: Option<String>,
    pub focus: Option<String>,
}

impl From<PhotoEntry> for PhotoRecord {
    fn from(entry: PhotoEntry) -> Self {
        Self {
            filename: entry.filename,
            date: entry.date,
            time: entry.time,
            thumbnail_url: entry.thumbnail_url,
            url: entry.url,
            exposure: entry.exposure,
            focus: entry.focus,
        }
    }
}

impl PhotoRecord {
    /// URL that makes the device serve the full-resolution file as attachment
    pub fn download_url(&self) -> String {
        format!("{}?download=1", self.url)
    }
}

/// Date filter of the gallery: every photo or a single ISO day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Day(String),
}

impl DateFilter {
    pub fn selector_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Day(day) => day,
        }
    }
}

/// Content of the photo list area
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Loading,
    Empty,
    Ready,
    Failed,
}

impl ListingStatus {
    /// Placeholder text shown instead of the photo grid, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading photos..."),
            Self::Empty => Some("No photos found"),
            Self::Failed => Some("Error loading photos"),
            Self::Ready => None,
        }
    }
}

/// Grid or list presentation of the photo list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GalleryLayout {
    #[default]
    Grid,
    List,
}

/// Keys the gallery reacts to while the detail view is open
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl NavigationKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Fields of the open detail view, derived from one photo record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoDetail {
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub exposure: String,
    pub focus: String,
    pub can_prev: bool,
    pub can_next: bool,
}

impl PhotoDetail {
    pub fn new(photo: &PhotoRecord, index: usize, count: usize) -> Self {
        Self {
            image_url: photo.url.clone(),
            title: photo.filename.clone(),
            date: format_date_string(&photo.date),
            time: photo.time.clone(),
            exposure: known_or_unknown(photo.exposure.as_deref()),
            focus: known_or_unknown(photo.focus.as_deref()),
            can_prev: index > 0,
            can_next: index + 1 < count,
        }
    }
}

fn known_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Gallery state
///
/// `current_index` is `Some(i)` with `i < photos.len()` exactly while the detail
/// view is open; `detail` mirrors it. Only the response to the newest photo list
/// request may replace `photos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryState {
    pub dates: Vec<String>,
    pub photos: Vec<PhotoRecord>,
    pub selected_date: DateFilter,
    pub current_index: Option<usize>,
    pub detail: Option<PhotoDetail>,
    pub status: ListingStatus,
    pub layout: GalleryLayout,
    #[serde(skip)]
    pub latest_request: u64,
}

impl GalleryState {
    pub fn is_detail_open(&self) -> bool {
        self.current_index.is_some()
    }

    pub fn current_photo(&self) -> Option<&PhotoRecord> {
        self.current_index.and_then(|i| self.photos.get(i))
    }

    /// Photos can be opened only while the listing shows them
    pub fn can_open(&self) -> bool {
        !self.is_detail_open() && self.status == ListingStatus::Ready
    }

    /// Mark a new photo list request as the only one whose response counts
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_request += 1;
        self.status = ListingStatus::Loading;
        self.latest_request
    }

    pub fn is_latest_request(&self, request: u64) -> bool {
        request == self.latest_request
    }

    /// Show the photo at `index`; returns `false` if it does not exist
    pub fn show(&mut self, index: usize) -> bool {
        match self.photos.get(index) {
            Some(photo) => {
                self.detail = Some(PhotoDetail::new(photo, index, self.photos.len()));
                self.current_index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Back to the listing, dropping the detail and its image reference
    pub fn close_detail(&mut self) {
        self.current_index = None;
        self.detail = None;
    }

    /// Accept a completed photo list for the selected date
    pub fn replace_photos(&mut self, photos: Vec<PhotoRecord>) {
        self.status = if photos.is_empty() {
            ListingStatus::Empty
        } else {
            ListingStatus::Ready
        };
        self.photos = photos;

        if let Some(index) = self.current_index {
            if !self.show(index) {
                self.close_detail();
            }
        }
    }
}
