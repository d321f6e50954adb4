//! 平台能力抽象
//!
//! The rendering layer injects these so the navigator never touches a
//! concrete document or terminal.

mod focus_layout;

pub use focus_layout::{FocusLayout, FocusSurface};
