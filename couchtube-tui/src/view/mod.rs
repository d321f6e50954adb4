//! View 层：UI 渲染
//!
//! 只读 Model，不修改状态。所有矩形都取自 `app.screen`，
//! 与导航器看到的布局是同一份，焦点高亮来自 `Screen::is_marked`。
//!
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 / 侧边栏 / 内容区 / 状态栏 / 播放器
//!         pub mod theme;      // 主题颜色
//!         mod components;     // 各区域组件

mod components;
mod layout;
pub mod theme;

pub use layout::render;
