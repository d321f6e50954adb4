//! 视频流服务：趋势与搜索

use std::sync::Arc;

use couchtube_provider::VideoSource;
use log::{info, warn};

use super::card_renderer::render_cards;
use crate::error::CoreResult;
use crate::types::{NavAction, VideoCard};

/// Query the Music page searches for.
pub const MUSIC_QUERY: &str = "Music";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "US";

/// A data operation the grid can be filled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    Trending,
    Search(String),
}

impl FeedRequest {
    /// Search request for user input; `None` when the query is blank.
    pub fn search(query: &str) -> Option<Self> {
        let query = query.trim();
        (!query.is_empty()).then(|| Self::Search(query.to_string()))
    }
}

/// Outcome of a successful data operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Videos(Vec<VideoCard>),
    /// The backend answered but nothing playable came back.
    NoResults,
}

impl Feed {
    fn from_cards(cards: Vec<VideoCard>) -> Self {
        if cards.is_empty() {
            Self::NoResults
        } else {
            Self::Videos(cards)
        }
    }
}

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Trending,
    Music,
    Search,
}

impl Page {
    pub fn for_action(action: NavAction) -> Self {
        match action {
            NavAction::Home | NavAction::Trending => Self::Trending,
            NavAction::Music => Self::Music,
            NavAction::Search => Self::Search,
        }
    }

    /// Request issued when the page is opened; the search page waits for input.
    pub fn initial_request(self) -> Option<FeedRequest> {
        match self {
            Self::Trending => Some(FeedRequest::Trending),
            Self::Music => Some(FeedRequest::Search(MUSIC_QUERY.to_string())),
            Self::Search => None,
        }
    }

    pub fn shows_search_panel(self) -> bool {
        matches!(self, Self::Search)
    }
}

/// Feed loading on top of a [`VideoSource`].
pub struct FeedService {
    source: Arc<dyn VideoSource>,
    region: String,
}

impl FeedService {
    pub fn new(source: Arc<dyn VideoSource>, region: impl Into<String>) -> Self {
        let region = region.into();
        let region = if region.trim().is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            region.trim().to_uppercase()
        };
        Self { source, region }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub async fn load_trending(&self) -> CoreResult<Feed> {
        info!("[{}] Loading trending for {}", self.source.id(), self.region);
        let items = self.source.trending(&self.region).await?;
        let cards = render_cards(&items);
        if cards.len() < items.len() {
            info!(
                "Trending: {} of {} items are playable",
                cards.len(),
                items.len()
            );
        }
        Ok(Feed::from_cards(cards))
    }

    pub async fn search(&self, query: &str) -> CoreResult<Feed> {
        info!("[{}] Searching for {query:?}", self.source.id());
        let response = self.source.search(query).await?;
        if response.items.is_empty() {
            warn!("Search {query:?} returned no items");
        }
        Ok(Feed::from_cards(render_cards(&response.items)))
    }

    pub async fn load(&self, request: &FeedRequest) -> CoreResult<Feed> {
        match request {
            FeedRequest::Trending => self.load_trending().await,
            FeedRequest::Search(query) => self.search(query).await,
        }
    }
}
