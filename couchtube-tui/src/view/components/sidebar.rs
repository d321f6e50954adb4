//! 左侧导航栏组件

use couchtube_core::types::{ElementKind, NavAction};
use couchtube_core::Page;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航栏
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", t().common.app_name))
        .title_style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    frame.render_widget(block, app.screen.sidebar());

    for action in NavAction::ALL {
        let key = ElementKind::NavItem(action);
        let Some(rect) = app.screen.cell_rect(key) else {
            continue;
        };
        let focused = app.screen.is_marked(key);

        // 当前页面对应的导航项用选中色标出
        let active = action != NavAction::Home && Page::for_action(action) == app.page;
        let style = if active {
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        let item = Paragraph::new(format!("{} {}", icon(action), label(action)))
            .style(style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border(focused)),
            );
        frame.render_widget(item, rect);
    }
}

fn icon(action: NavAction) -> &'static str {
    match action {
        NavAction::Home => "⌂",
        NavAction::Trending => "🔥",
        NavAction::Music => "🎵",
        NavAction::Search => "🔍",
    }
}

fn label(action: NavAction) -> &'static str {
    let nav = &t().nav;
    match action {
        NavAction::Home => nav.home,
        NavAction::Trending => nav.trending,
        NavAction::Music => nav.music,
        NavAction::Search => nav.search,
    }
}
