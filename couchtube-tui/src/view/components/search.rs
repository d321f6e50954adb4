//! 搜索面板组件：输入框 + 搜索按钮

use couchtube_core::types::ElementKind;
use ratatui::{
    layout::{Alignment, Position},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索面板
pub fn render(app: &App, frame: &mut Frame) {
    render_input(app, frame);
    render_button(app, frame);
}

fn render_input(app: &App, frame: &mut Frame) {
    let Some(rect) = app.screen.cell_rect(ElementKind::SearchInput) else {
        return;
    };
    let c = colors();
    let focused = app.screen.is_marked(ElementKind::SearchInput);
    let editing = app.search.editing && focused;

    let query = app.search.query();
    let (text, style) = if query.is_empty() && !editing {
        (t().search.placeholder, Style::default().fg(c.muted))
    } else {
        (query, Style::default().fg(c.fg))
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(focused)),
    );
    frame.render_widget(input, rect);

    // 输入焦点下显示终端光标
    if editing && rect.width > 2 && rect.height > 2 {
        let offset = app.search.before_cursor().width();
        let max = usize::from(rect.width - 3);
        let x = rect.x + 1 + u16::try_from(offset.min(max)).unwrap_or(0);
        frame.set_cursor_position(Position::new(x, rect.y + 1));
    }
}

fn render_button(app: &App, frame: &mut Frame) {
    let Some(rect) = app.screen.cell_rect(ElementKind::SearchButton) else {
        return;
    };
    let c = colors();
    let focused = app.screen.is_marked(ElementKind::SearchButton);

    let style = if focused {
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let button = Paragraph::new(t().search.button)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused)),
        );
    frame.render_widget(button, rect);
}
