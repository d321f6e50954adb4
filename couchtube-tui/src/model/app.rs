//! 应用主状态结构

use std::sync::Arc;

use couchtube_core::focus::InputMode;
use couchtube_core::types::{ElementKind, NavAction};
use couchtube_core::{Navigator, Page, Playback, RequestTracker};
use ratatui::layout::Rect;

use super::{FeedState, Screen, SearchState};
use crate::backend::FeedLoader;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    /// 焦点导航器（唯一的焦点引用）
    pub navigator: Navigator<ElementKind>,

    /// 本帧布局、焦点标记与网格滚动
    pub screen: Screen,

    /// 视频网格
    pub feed: FeedState,

    /// 搜索框
    pub search: SearchState,

    /// 播放器
    pub player: Box<dyn Playback>,

    /// 请求代次
    pub requests: RequestTracker,

    /// 状态栏消息
    pub status_message: Option<String>,

    loader: Arc<dyn FeedLoader>,
    viewport: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new(loader: Arc<dyn FeedLoader>, player: Box<dyn Playback>) -> Self {
        Self {
            should_quit: false,
            page: Page::default(),
            navigator: Navigator::new(),
            screen: Screen::new(),
            feed: FeedState::Idle,
            search: SearchState::new(),
            player,
            requests: RequestTracker::new(),
            status_message: None,
            loader,
            viewport: Rect::default(),
        }
    }

    pub fn loader(&self) -> &dyn FeedLoader {
        self.loader.as_ref()
    }

    pub fn input_mode(&self) -> InputMode {
        if self.player.is_open() {
            InputMode::PlayerOpen
        } else {
            InputMode::Browse
        }
    }

    /// Currently focused element.
    pub fn focused(&self) -> Option<ElementKind> {
        self.navigator.current().copied()
    }

    pub fn focused_is_text_entry(&self) -> bool {
        self.focused().is_some_and(ElementKind::is_text_entry)
    }

    /// 终端尺寸变化时重新布局
    pub fn set_viewport(&mut self, area: Rect) {
        if area != self.viewport {
            self.viewport = area;
            self.relayout();
        }
    }

    /// 按当前状态重新计算布局
    pub fn relayout(&mut self) {
        self.screen
            .layout(self.viewport, self.search.visible, self.feed.cards().len());
    }

    /// 启动：加载趋势并聚焦 Home
    pub fn start(&mut self) {
        crate::update::open_page(self, Page::Trending);
        let home = ElementKind::NavItem(NavAction::Home);
        self.navigator.set_focus(&mut self.screen, Some(home));
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
