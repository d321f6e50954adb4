//! 布局与焦点呈现能力

use crate::types::{Focusable, ScrollOptions};

/// Enumerates the focusable elements of the current layout pass.
///
/// Enumeration order is significant: it decides the fallback target and
/// breaks distance ties.
pub trait FocusLayout<K> {
    fn focusables(&self) -> Vec<Focusable<K>>;
}

/// Applies focus visually.
///
/// Implementations must treat unknown keys as a no-op so a stale key never
/// leaves a marker behind.
pub trait FocusSurface<K> {
    /// Add (`true`) or remove (`false`) the focused marker on `key`.
    fn set_marker(&mut self, key: &K, focused: bool);

    /// Scroll so that `key` is visible according to `options`.
    fn scroll_into_view(&mut self, key: &K, options: ScrollOptions);
}
