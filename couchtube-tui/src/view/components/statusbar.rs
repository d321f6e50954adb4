//! 底部状态栏组件

use couchtube_core::focus::InputMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据输入模式生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    if app.input_mode() == InputMode::PlayerOpen {
        return vec![("Esc", hints.close), ("Ctrl+C", hints.quit)];
    }

    let enter = if app.focused_is_text_entry() {
        hints.edit
    } else {
        hints.select
    };
    let mut list = vec![("←↑↓→", hints.navigate), ("Enter", enter)];
    if app.search.editing {
        list.push(("Ctrl+C", hints.quit));
    } else {
        list.push(("q", hints.quit));
    }
    list
}
