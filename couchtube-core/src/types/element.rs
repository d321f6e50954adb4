//! 可聚焦元素

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Home,
    Trending,
    Music,
    Search,
}

impl NavAction {
    /// Sidebar order, top to bottom.
    pub const ALL: [NavAction; 4] = [
        NavAction::Home,
        NavAction::Trending,
        NavAction::Music,
        NavAction::Search,
    ];
}

/// What a focusable element is, so input can be routed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    NavItem(NavAction),
    SearchInput,
    SearchButton,
    /// Card at this position of the rendered grid.
    VideoCard(usize),
}

impl ElementKind {
    /// Text-entry fields keep Left/Right for cursor movement.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::SearchInput)
    }

    pub fn is_video_card(self) -> bool {
        matches!(self, Self::VideoCard(_))
    }
}

/// One element of the current layout pass, as seen by the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct Focusable<K> {
    pub key: K,
    pub rect: Rect,
    pub hidden: bool,
}

impl<K> Focusable<K> {
    pub fn new(key: K, rect: Rect) -> Self {
        Self {
            key,
            rect,
            hidden: false,
        }
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Visible and rendered with a non-zero size.
    pub fn is_navigable(&self) -> bool {
        !self.hidden && !self.rect.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_or_collapsed_elements_are_not_navigable() {
        let visible = Focusable::new(1, Rect::new(0.0, 0.0, 10.0, 2.0));
        assert!(visible.is_navigable());
        assert!(!visible.clone().hidden(true).is_navigable());
        assert!(!Focusable::new(2, Rect::new(5.0, 5.0, 0.0, 2.0)).is_navigable());
    }

    #[test]
    fn only_search_input_is_text_entry() {
        assert!(ElementKind::SearchInput.is_text_entry());
        assert!(!ElementKind::SearchButton.is_text_entry());
        assert!(!ElementKind::NavItem(NavAction::Search).is_text_entry());
        assert!(ElementKind::VideoCard(0).is_video_card());
    }
}
