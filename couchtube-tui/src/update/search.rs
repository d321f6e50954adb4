//! 搜索框编辑

use crate::message::SearchMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SearchMessage) {
    // 只有获得输入焦点的输入框才接收编辑
    if !app.search.editing || !app.focused_is_text_entry() {
        return;
    }
    match msg {
        SearchMessage::Input(c) => app.search.insert(c),
        SearchMessage::Backspace => app.search.backspace(),
        SearchMessage::CursorLeft => app.search.move_left(),
        SearchMessage::CursorRight => app.search.move_right(),
    }
}
