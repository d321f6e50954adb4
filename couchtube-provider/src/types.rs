//! Wire types of the video metadata API.

use serde::{Deserialize, Serialize};

/// Path prefix every playable item reference starts with.
pub const WATCH_PATH_PREFIX: &str = "/watch";

/// Duration as reported by the API.
///
/// Usually a number of seconds; some items (live streams, shorts on some
/// instances) carry a pre-formatted label instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// Length in seconds.
    Seconds(f64),
    /// Pre-formatted label, shown verbatim.
    Label(String),
}

/// One entry of a trending or search listing.
///
/// Every field is optional on the wire: search results mix videos with
/// channels and playlists, which lack most of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// Watch reference, e.g. `/watch?v=dQw4w9WgXcQ`.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<DurationValue>,
    #[serde(default)]
    pub uploader_name: Option<String>,
    #[serde(default)]
    pub views: Option<i64>,
}

impl VideoItem {
    /// Whether the item points at something playable.
    pub fn is_watchable(&self) -> bool {
        self.url
            .as_deref()
            .is_some_and(|url| url.starts_with(WATCH_PATH_PREFIX))
    }
}

/// Response of the search endpoint.
///
/// A missing `items` field reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}
