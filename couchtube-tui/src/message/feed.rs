//! 抓取结果消息

use couchtube_core::{CoreResult, Feed, FeedRequest, RequestId};

/// Result of one background feed load, tagged with its generation.
#[derive(Debug)]
pub struct FeedLoaded {
    pub id: RequestId,
    pub request: FeedRequest,
    pub result: CoreResult<Feed>,
}
