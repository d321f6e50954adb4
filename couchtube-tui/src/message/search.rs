//! 搜索框消息

/// 搜索框编辑消息（仅在输入框获得输入焦点时产生）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    Input(char),
    Backspace,
    CursorLeft,
    CursorRight,
}
