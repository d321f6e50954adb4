//! 主布局渲染

use couchtube_core::Page;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
///
/// 区域划分由 `Screen::layout` 完成：标题栏 1 行，状态栏 1 行，
/// 中间是侧边栏和内容区。
pub fn render(app: &App, frame: &mut Frame) {
    let area = app.screen.area();
    if area.is_empty() {
        return;
    }

    render_title_bar(app, frame, Rect::new(area.x, area.y, area.width, 1));

    components::sidebar::render(app, frame);
    render_content(app, frame);

    if area.height > 1 {
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        components::statusbar::render(app, frame, status_area);
    }

    // 播放器在最上层
    components::player::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(" ▶ {} · {}", t().common.app_name, page_title(app.page));
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

fn page_title(page: Page) -> &'static str {
    let texts = t();
    match page {
        Page::Trending => texts.pages.trending,
        Page::Music => texts.pages.music,
        Page::Search => texts.pages.search,
    }
}

/// 内容区：边框 + 搜索面板 + 视频网格
fn render_content(app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(format!(" {} ", page_title(app.page)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    frame.render_widget(block, app.screen.content());

    if app.search.visible {
        components::search::render(app, frame);
    }
    components::grid::render(app, frame);
}
