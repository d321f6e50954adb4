//! 测试辅助模块
//!
//! 提供 mock 视频源和可控的焦点布局。

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use couchtube_provider::{FetchError, SearchResponse, VideoItem, VideoSource};

use crate::traits::{FocusLayout, FocusSurface};
use crate::types::{Focusable, Rect, ScrollOptions};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ===== MockVideoSource =====

/// Scripted [`VideoSource`] that records what it was asked for.
pub struct MockVideoSource {
    trending: Mutex<Result<Vec<VideoItem>, FetchError>>,
    search: Mutex<Result<SearchResponse, FetchError>>,
    regions: Mutex<Vec<String>>,
    queries: Mutex<Vec<String>>,
}

impl MockVideoSource {
    pub fn new() -> Self {
        Self {
            trending: Mutex::new(Ok(Vec::new())),
            search: Mutex::new(Ok(SearchResponse::default())),
            regions: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn set_trending(&self, result: Result<Vec<VideoItem>, FetchError>) {
        *lock(&self.trending) = result;
    }

    pub fn set_search(&self, result: Result<SearchResponse, FetchError>) {
        *lock(&self.search) = result;
    }

    pub fn trending_regions(&self) -> Vec<String> {
        lock(&self.regions).clone()
    }

    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }
}

#[async_trait]
impl VideoSource for MockVideoSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn trending(&self, region: &str) -> couchtube_provider::Result<Vec<VideoItem>> {
        lock(&self.regions).push(region.to_string());
        lock(&self.trending).clone()
    }

    async fn search(&self, query: &str) -> couchtube_provider::Result<SearchResponse> {
        lock(&self.queries).push(query.to_string());
        lock(&self.search).clone()
    }
}

// ===== GridFixture =====

/// In-memory layout + surface keyed by `u32`.
///
/// Markers on unknown keys are ignored, like a surface whose element was removed.
#[derive(Debug, Default)]
pub struct GridFixture {
    elements: Vec<Focusable<u32>>,
    marked: Vec<u32>,
    scrolls: Vec<(u32, ScrollOptions)>,
}

impl GridFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: u32, rect: Rect) {
        self.elements.push(Focusable::new(key, rect));
    }

    pub fn hide(&mut self, key: u32) {
        for element in self.elements.iter_mut().filter(|e| e.key == key) {
            element.hidden = true;
        }
    }

    pub fn collapse(&mut self, key: u32) {
        for element in self.elements.iter_mut().filter(|e| e.key == key) {
            element.rect.width = 0.0;
            element.rect.height = 0.0;
        }
    }

    pub fn marked(&self) -> Vec<u32> {
        self.marked.clone()
    }

    pub fn last_scroll(&self) -> Option<(u32, ScrollOptions)> {
        self.scrolls.last().copied()
    }
}

impl FocusLayout<u32> for GridFixture {
    fn focusables(&self) -> Vec<Focusable<u32>> {
        self.elements.clone()
    }
}

impl FocusSurface<u32> for GridFixture {
    fn set_marker(&mut self, key: &u32, focused: bool) {
        if !self.elements.iter().any(|e| e.key == *key) {
            return;
        }
        self.marked.retain(|k| k != key);
        if focused {
            self.marked.push(*key);
        }
    }

    fn scroll_into_view(&mut self, key: &u32, options: ScrollOptions) {
        if self.elements.iter().any(|e| e.key == *key) {
            self.scrolls.push((*key, options));
        }
    }
}
