//! 视频网格状态

use couchtube_core::types::VideoCard;
use couchtube_core::FeedRequest;

/// What the grid currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    /// Nothing requested (search page before a query).
    #[default]
    Idle,
    Loading(FeedRequest),
    Videos(Vec<VideoCard>),
    NoResults,
    Failed {
        request: FeedRequest,
        message: String,
    },
}

impl FeedState {
    pub fn cards(&self) -> &[VideoCard] {
        match self {
            Self::Videos(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, index: usize) -> Option<&VideoCard> {
        self.cards().get(index)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Whether the pending or failed request is a search (Music searches too).
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            Self::Loading(FeedRequest::Search(_))
                | Self::Failed {
                    request: FeedRequest::Search(_),
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_feed_counts_as_search() {
        let music = FeedRequest::Search("music".to_string());
        assert!(FeedState::Loading(music.clone()).is_search());
        assert!(FeedState::Failed {
            request: music,
            message: "boom".to_string(),
        }
        .is_search());
    }

    #[test]
    fn trending_and_idle_are_not_search() {
        assert!(!FeedState::Loading(FeedRequest::Trending).is_search());
        assert!(!FeedState::Failed {
            request: FeedRequest::Trending,
            message: "boom".to_string(),
        }
        .is_search());
        assert!(!FeedState::Idle.is_search());
        assert!(!FeedState::NoResults.is_search());
    }
}
