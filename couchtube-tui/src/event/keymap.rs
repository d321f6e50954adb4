//! 快捷键配置
//!
//! 把终端按键映射为遥控器按键；其余为应用级快捷键。

use couchtube_core::focus::RemoteKey;
use couchtube_core::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
}

/// 遥控器按键：方向键、Enter、Esc / Backspace
pub fn remote_key(key: &KeyEvent) -> Option<RemoteKey> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    let remote = match key.code {
        KeyCode::Up => RemoteKey::Direction(Direction::Up),
        KeyCode::Down => RemoteKey::Direction(Direction::Down),
        KeyCode::Left => RemoteKey::Direction(Direction::Left),
        KeyCode::Right => RemoteKey::Direction(Direction::Right),
        KeyCode::Enter => RemoteKey::Activate,
        KeyCode::Esc | KeyCode::Backspace => RemoteKey::Back,
        _ => return None,
    };
    Some(remote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_enter_and_back_are_remote_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            remote_key(&key(KeyCode::Left)),
            Some(RemoteKey::Direction(Direction::Left))
        );
        assert_eq!(remote_key(&key(KeyCode::Enter)), Some(RemoteKey::Activate));
        assert_eq!(remote_key(&key(KeyCode::Esc)), Some(RemoteKey::Back));
        assert_eq!(remote_key(&key(KeyCode::Backspace)), Some(RemoteKey::Back));
        assert_eq!(remote_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn modified_keys_are_not_remote_keys() {
        let ctrl_up = KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL);
        assert_eq!(remote_key(&ctrl_up), None);
        assert!(DefaultKeymap::FORCE_QUIT
            .matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
