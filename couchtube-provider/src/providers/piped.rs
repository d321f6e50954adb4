//! Piped API video source

use async_trait::async_trait;

use crate::error::Result;
use crate::fallback::{FallbackFetcher, FetcherOptions};
use crate::http_client::HttpUtils;
use crate::traits::VideoSource;
use crate::types::{SearchResponse, VideoItem};

/// Public Piped API instances, in the order they are tried by default.
pub const DEFAULT_PIPED_INSTANCES: &[&str] = &[
    "https://api.piped.projectsegfau.lt",
    "https://pipedapi.tokhmi.xyz",
    "https://piped-api.lunar.icu",
    "https://pipedapi.smnz.de",
    "https://pipedapi.kavin.rocks",
];

/// Search filter restricting results to plain videos.
const SEARCH_FILTER_VIDEOS: &str = "videos";

/// Logical path of the trending listing.
pub fn trending_path(region: &str) -> String {
    format!("/trending?region={}", urlencoding::encode(region))
}

/// Logical path of a video search.
pub fn search_path(query: &str) -> String {
    format!(
        "/search?q={}&filter={SEARCH_FILTER_VIDEOS}",
        urlencoding::encode(query)
    )
}

/// Piped API source backed by a fallback chain of instances
pub struct PipedSource {
    fetcher: FallbackFetcher,
}

impl PipedSource {
    pub fn new<I, S>(instances: I, options: FetcherOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            fetcher: FallbackFetcher::new(instances, options)?,
        })
    }

    /// Source over [`DEFAULT_PIPED_INSTANCES`].
    pub fn with_default_instances(options: FetcherOptions) -> Result<Self> {
        Self::new(DEFAULT_PIPED_INSTANCES.iter().copied(), options)
    }

    pub fn instances(&self) -> &[String] {
        self.fetcher.instances()
    }
}

#[async_trait]
impl VideoSource for PipedSource {
    fn id(&self) -> &'static str {
        "piped"
    }

    async fn trending(&self, region: &str) -> Result<Vec<VideoItem>> {
        let value = self.fetcher.fetch_with_fallback(&trending_path(region)).await?;
        HttpUtils::from_value(value, "trending")
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let value = self.fetcher.fetch_with_fallback(&search_path(query)).await?;
        HttpUtils::from_value(value, "search")
    }
}
