//! Event 层：事件处理
//!
//! 负责把键盘输入翻译为 Message。
//!
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     按键先映射为遥控器按键（方向 / 确认 / 返回），再交给 core 的
//!     `dispatch`，依据当前模式（浏览 / 播放器打开）与焦点元素决定命令：
//!
//!         播放器打开      仅 Esc / Backspace 有效 → 关闭播放器
//!         焦点在输入框    ←/→ 不拦截，用于移动光标；↑/↓ 照常导航
//!         其它            方向键导航，Enter 激活焦点元素
//!
//!     未被拦截的按键（`prevent_default == false`）在输入框拥有输入焦点时
//!     执行默认编辑动作；可打印字符同样只在此时进入输入框。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
