//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use couchtube_core::focus::{dispatch, InputMode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{remote_key, DefaultKeymap};
use crate::message::{AppMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 尺寸变化由主循环在下一帧重新布局
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    let mode = app.input_mode();
    let editing = mode == InputMode::Browse && app.search.editing && app.focused_is_text_entry();

    if let Some(remote) = remote_key(&key) {
        let outcome = dispatch(mode, app.focused_is_text_entry(), remote);
        if let Some(command) = outcome.command {
            return AppMessage::Command(command);
        }
        if !outcome.prevent_default && editing {
            return default_edit_action(key.code);
        }
        return AppMessage::Noop;
    }

    if editing {
        if let KeyCode::Char(c) = key.code {
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return AppMessage::Search(SearchMessage::Input(c));
            }
        }
        return AppMessage::Noop;
    }

    if mode == InputMode::Browse && DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    AppMessage::Noop
}

/// 输入框未被拦截按键的默认效果
fn default_edit_action(code: KeyCode) -> AppMessage {
    match code {
        KeyCode::Left => AppMessage::Search(SearchMessage::CursorLeft),
        KeyCode::Right => AppMessage::Search(SearchMessage::CursorRight),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        _ => AppMessage::Noop,
    }
}
