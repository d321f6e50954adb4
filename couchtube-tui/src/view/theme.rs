//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    /// 焦点边框（遥控器焦点标记）
    pub focus: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 时长角标
    pub badge: Color,
    pub error: Color,
    pub muted: Color,
    pub modal_bg: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            focus: Color::Rgb(255, 0, 0),
            highlight: Color::Rgb(204, 0, 0),
            selected_bg: Color::Rgb(64, 24, 24),
            selected_fg: Color::White,
            badge: Color::Rgb(230, 230, 230),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            modal_bg: Color::Black,
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            focus: Color::Rgb(204, 0, 0),
            highlight: Color::Rgb(204, 0, 0),
            selected_bg: Color::Rgb(255, 224, 224),
            selected_fg: Color::Black,
            badge: Color::Rgb(40, 40, 40),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
            modal_bg: Color::Rgb(250, 250, 250),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框：获得焦点时加粗高亮
    pub fn border(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default().fg(c.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.border)
        }
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }
}
