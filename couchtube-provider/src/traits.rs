use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SearchResponse, VideoItem};

/// 视频源 Trait
///
/// A source answers the two listings the client needs. How it reaches its
/// backend (one host, a fallback chain...) is up to the implementation.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Source identifier (for logs).
    fn id(&self) -> &'static str;

    /// Trending videos for a region (ISO 3166 alpha-2, e.g. `US`).
    async fn trending(&self, region: &str) -> Result<Vec<VideoItem>>;

    /// Free-text search restricted to videos.
    ///
    /// An empty `items` list is a valid answer ("no results"), not an error.
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}
