//! 应用级消息

use couchtube_core::focus::Command;

use super::{FeedLoaded, SearchMessage};

/// 应用消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 遥控器命令（方向 / 确认 / 关闭播放器）
    Command(Command),

    /// 搜索框编辑
    Search(SearchMessage),

    /// 后台抓取完成
    FeedLoaded(FeedLoaded),

    /// 无操作
    Noop,
}
