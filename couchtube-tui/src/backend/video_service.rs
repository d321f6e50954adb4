//! 视频服务
//!
//! 把 core 的 FeedService 放到 tokio 任务里执行，结果通过无界通道
//! 以 `AppMessage::FeedLoaded` 发回主循环。

use std::sync::Arc;

use couchtube_core::{FeedRequest, FeedService, RequestId};
use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, FeedLoaded};

/// Starts feed loads without blocking the caller.
pub trait FeedLoader: Send + Sync {
    fn load(&self, id: RequestId, request: FeedRequest);
}

/// Runs loads on a tokio runtime owned by `main`.
pub struct VideoService {
    feeds: Arc<FeedService>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl VideoService {
    pub fn new(feeds: FeedService, runtime: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self {
            feeds: Arc::new(feeds),
            runtime,
            tx,
        }
    }
}

impl FeedLoader for VideoService {
    fn load(&self, id: RequestId, request: FeedRequest) {
        let feeds = Arc::clone(&self.feeds);
        let tx = self.tx.clone();
        debug!("Spawning load {id}: {request:?}");

        self.runtime.spawn(async move {
            let result = feeds.load(&request).await;
            let msg = AppMessage::FeedLoaded(FeedLoaded {
                id,
                request,
                result,
            });
            if tx.send(msg).is_err() {
                // 主循环已退出
                warn!("Dropping result of load {id}: UI is gone");
            }
        });
    }
}
