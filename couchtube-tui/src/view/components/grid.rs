//! 视频网格组件

use couchtube_core::types::{ElementKind, VideoCard};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FeedState};
use crate::view::theme::{colors, Styles};

/// 渲染网格：有卡片时绘制可见卡片，否则显示占位文本
pub fn render(app: &App, frame: &mut Frame) {
    match &app.feed {
        FeedState::Videos(cards) => {
            for (index, rect) in app.screen.visible_cards() {
                if let Some(card) = cards.get(index) {
                    let focused = app.screen.is_marked(ElementKind::VideoCard(index));
                    render_card(frame, card, rect, focused);
                }
            }
        }
        state => {
            let grid = app.screen.grid();
            if !grid.is_empty() {
                render_placeholder(frame, grid, state);
            }
        }
    }
}

fn render_card(frame: &mut Frame, card: &VideoCard, rect: Rect, focused: bool) {
    let c = colors();
    let texts = t();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    if !card.duration_label.is_empty() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", card.duration_label),
                Style::default().fg(c.badge).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    }

    let title_style = if focused {
        Style::default().fg(c.focus).add_modifier(Modifier::BOLD)
    } else {
        Styles::title()
    };
    let lines = vec![
        Line::from(Span::styled(card.title.clone(), title_style)),
        Line::from(Span::styled(card.uploader.clone(), Style::default().fg(c.muted))),
        Line::from(Span::styled(
            format!("{} {}", card.views_label, texts.common.views),
            Style::default().fg(c.muted),
        )),
    ];

    let body = Paragraph::new(lines).block(block);
    frame.render_widget(body, rect);
}

/// 占位文本；搜索请求（含音乐页）与趋势页的加载和失败文案不同
fn render_placeholder(frame: &mut Frame, area: Rect, state: &FeedState) {
    let c = colors();
    let feed = &t().feed;
    let searching = state.is_search();

    let (text, style) = match state {
        FeedState::Idle => (feed.search_prompt.to_string(), Style::default().fg(c.muted)),
        FeedState::Loading(_) if searching => {
            (feed.searching.to_string(), Style::default().fg(c.muted))
        }
        FeedState::Loading(_) => (feed.loading.to_string(), Style::default().fg(c.muted)),
        FeedState::NoResults => (feed.no_results.to_string(), Style::default().fg(c.fg)),
        FeedState::Failed { .. } => {
            let text = if searching {
                feed.search_failed
            } else {
                feed.load_failed
            };
            (text.to_string(), Style::default().fg(c.error))
        }
        FeedState::Videos(_) => return,
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
