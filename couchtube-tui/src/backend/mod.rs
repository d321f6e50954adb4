//! Backend 层：业务服务
//!
//! 与 UI 解耦：配置文件读写，以及在 tokio 运行时上执行的视频抓取。
//!
//!     src/backend/mod.rs
//!         mod config_service;     // JSON 配置文件
//!         mod video_service;      // 后台抓取，结果经通道回到主循环

mod config_service;
mod video_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use video_service::{FeedLoader, VideoService};
