//! Update 层：状态更新
//!
//! 唯一修改 Model 的地方。每条消息在主循环里被依次消费。
//!
//!     src/update/mod.rs
//!         mod command;    // 遥控器命令：导航 / 激活 / 关闭播放器
//!         mod feed;       // 抓取结果（按代次丢弃过期结果）
//!         mod search;     // 搜索框编辑

mod command;
mod feed;
mod search;

use crate::message::AppMessage;
use crate::model::App;

pub use command::open_page;

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Command(command) => {
            command::update(app, command);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::FeedLoaded(loaded) => {
            feed::update(app, loaded);
        }

        AppMessage::Noop => {}
    }
}
