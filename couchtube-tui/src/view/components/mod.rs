//! UI 组件

pub mod grid;
pub mod player;
pub mod search;
pub mod sidebar;
pub mod statusbar;
