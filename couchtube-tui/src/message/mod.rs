//! Message 层：事件消息
//!
//! Event 层把按键翻译成消息，Backend 任务把抓取结果包装成消息，
//! 二者都只在主循环里交给 update 层消费。
//!
//!     src/message/mod.rs
//!         mod app;        // 顶层消息 AppMessage
//!         mod feed;       // 后台抓取完成
//!         mod search;     // 搜索框编辑

mod app;
mod feed;
mod search;

pub use app::AppMessage;
pub use feed::FeedLoaded;
pub use search::SearchMessage;
