//! 视频卡片

/// Rendered form of a watchable video item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    /// Value of the `v` parameter of the watch reference.
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    /// `format_time` output, empty when unknown.
    pub duration_label: String,
    pub uploader: String,
    /// Thousands-separated view count, `0` when absent.
    pub views_label: String,
}
