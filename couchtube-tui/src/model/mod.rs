//! Model 层：应用状态
//!
//!     src/model/mod.rs
//!         mod app;        // App 主状态
//!         mod feed;       // 视频网格状态
//!         mod screen;     // 布局、焦点标记、网格滚动
//!         mod search;     // 搜索框
//!
//! 导航器只通过 Screen 实现的 FocusLayout / FocusSurface 接触布局，
//! View 层读取同一个 Screen 来绘制，两者永远一致。

mod app;
mod feed;
mod screen;
mod search;

pub use app::App;
pub use feed::FeedState;
pub use screen::Screen;
pub use search::SearchState;
