//! 遥控器命令处理

use couchtube_core::focus::Command;
use couchtube_core::types::ElementKind;
use couchtube_core::{FeedRequest, Page};
use log::{debug, error, info, warn};

use crate::i18n::t;
use crate::model::{App, FeedState};

pub fn update(app: &mut App, command: Command) {
    match command {
        Command::Navigate(direction) => {
            app.navigator.navigate(&mut app.screen, direction);
            // 离开输入框即失去输入焦点
            if !app.focused_is_text_entry() {
                app.search.editing = false;
            }
        }

        Command::Activate { grant_input_focus } => {
            let Some(focused) = app.focused() else {
                return;
            };
            activate(app, focused, grant_input_focus);
        }

        Command::ClosePlayer => {
            app.player.close();
            app.clear_status();
            app.navigator
                .focus_first_where(&mut app.screen, |k| k.is_video_card());
        }
    }
}

fn activate(app: &mut App, element: ElementKind, grant_input_focus: bool) {
    match element {
        ElementKind::NavItem(action) => open_page(app, Page::for_action(action)),
        ElementKind::SearchInput => {
            if grant_input_focus {
                app.search.editing = true;
            }
        }
        ElementKind::SearchButton => submit_search(app),
        ElementKind::VideoCard(index) => open_player(app, index),
    }
}

/// 切换页面：趋势 / 音乐立即加载，搜索页显示输入框并清空网格
pub fn open_page(app: &mut App, page: Page) {
    info!("Opening page {page:?}");
    app.page = page;
    app.search.visible = page.shows_search_panel();
    app.search.editing = false;

    match page.initial_request() {
        Some(request) => start_request(app, request),
        None => {
            app.requests.invalidate();
            clear_cards(app, FeedState::Idle);
            app.navigator
                .set_focus(&mut app.screen, Some(ElementKind::SearchInput));
        }
    }
}

fn submit_search(app: &mut App) {
    match FeedRequest::search(app.search.query()) {
        Some(request) => {
            app.search.editing = false;
            start_request(app, request);
        }
        None => debug!("Ignoring blank search"),
    }
}

fn start_request(app: &mut App, request: FeedRequest) {
    let id = app.requests.begin();
    info!("Request {id}: {request:?}");
    app.clear_status();
    clear_cards(app, FeedState::Loading(request.clone()));
    app.loader().load(id, request);
}

/// Replace the grid contents; a focused card is released first.
fn clear_cards(app: &mut App, state: FeedState) {
    if app.focused().is_some_and(ElementKind::is_video_card) {
        app.navigator.set_focus(&mut app.screen, None);
    }
    app.feed = state;
    app.relayout();
}

fn open_player(app: &mut App, index: usize) {
    let Some(video_id) = app.feed.card(index).map(|c| c.video_id.clone()) else {
        warn!("Activated card {index} which is no longer rendered");
        return;
    };
    match app.player.open(&video_id) {
        Ok(()) => app.clear_status(),
        Err(e) => {
            if e.is_expected() {
                warn!("[{}] {e}", app.player.name());
            } else {
                error!("[{}] {e}", app.player.name());
            }
            app.set_status(format!("{}: {e}", t().status.player_failed));
        }
    }
}
