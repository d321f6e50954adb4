//! 播放器弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染播放器弹窗（仅在播放器打开时）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(source) = app.player.source() else {
        return;
    };
    let c = colors();
    let texts = t();

    let area = centered_rect(80, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" ▶ {} ", texts.player.title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(format!(" Esc {} ", texts.hints.close)).centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.focus))
        .style(Style::default().bg(c.modal_bg));

    let label = Style::default().fg(c.muted);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.player.backend), label),
            Span::styled(app.player.name(), Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("{}:", texts.player.source), label)),
        Line::from(Span::styled(
            source.to_string(),
            Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled(texts.player.embed_note, label)),
    ];

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
