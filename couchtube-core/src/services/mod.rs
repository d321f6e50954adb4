//! 业务逻辑服务层

mod card_renderer;
mod feed_service;
mod request_tracker;

pub use card_renderer::{extract_video_id, is_valid_video_id, render_card, render_cards};
pub use feed_service::{Feed, FeedRequest, FeedService, Page, DEFAULT_REGION, MUSIC_QUERY};
pub use request_tracker::{RequestId, RequestTracker};
