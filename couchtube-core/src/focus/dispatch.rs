//! 遥控器按键分发
//!
//! Maps a remote key to a command given the current input mode. Pure: the
//! caller performs the command and honours `prevent_default`.

use crate::types::Direction;

/// Keys a TV remote / D-pad produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKey {
    Direction(Direction),
    /// OK / Enter.
    Activate,
    /// Back / Escape / Backspace.
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    PlayerOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    /// Click the focused element; text-entry fields also receive input focus.
    Activate { grant_input_focus: bool },
    /// Close the player and return focus to the first video card.
    ClosePlayer,
}

/// What to do with one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Option<Command>,
    /// When `false` the key keeps its default effect (e.g. moving a text cursor).
    pub prevent_default: bool,
}

impl Dispatch {
    const PASS: Dispatch = Dispatch {
        command: None,
        prevent_default: false,
    };

    const fn handled(command: Command) -> Self {
        Self {
            command: Some(command),
            prevent_default: true,
        }
    }
}

pub fn dispatch(mode: InputMode, focused_is_text_entry: bool, key: RemoteKey) -> Dispatch {
    match mode {
        InputMode::PlayerOpen => match key {
            RemoteKey::Back => Dispatch {
                command: Some(Command::ClosePlayer),
                prevent_default: false,
            },
            _ => Dispatch::PASS,
        },
        InputMode::Browse => match key {
            RemoteKey::Direction(Direction::Left | Direction::Right) if focused_is_text_entry => {
                Dispatch::PASS
            }
            RemoteKey::Direction(direction) => Dispatch::handled(Command::Navigate(direction)),
            RemoteKey::Activate => Dispatch::handled(Command::Activate {
                grant_input_focus: focused_is_text_entry,
            }),
            RemoteKey::Back => Dispatch::PASS,
        },
    }
}
