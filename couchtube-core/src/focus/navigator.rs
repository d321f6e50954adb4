//! 焦点导航器

use log::debug;

use super::spatial::select_target;
use crate::traits::{FocusLayout, FocusSurface};
use crate::types::{Direction, Focusable, ScrollOptions};

/// Result of a [`Navigator::navigate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateOutcome<K> {
    /// Focus moved to a spatial neighbour.
    Moved(K),
    /// Focus was missing or stale and was reset to the first candidate.
    FellBack(K),
    /// Nothing lies in that direction; focus unchanged.
    Blocked,
    /// No navigable elements at all.
    NoCandidates,
}

/// Owns the single focused reference.
///
/// At most one element carries the focused marker at any time: the marker is
/// removed from the previous holder before it is applied to the new one.
#[derive(Debug, Clone)]
pub struct Navigator<K> {
    current: Option<K>,
}

impl<K> Default for Navigator<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K> Navigator<K>
where
    K: Clone + PartialEq + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused key, if any.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Move the focused reference to `target` (or clear it).
    ///
    /// A focused target is marked and scrolled into view, centred vertically
    /// and nearest-edge horizontally.
    pub fn set_focus<S>(&mut self, surface: &mut S, target: Option<K>)
    where
        S: FocusSurface<K> + ?Sized,
    {
        if let Some(previous) = self.current.take() {
            surface.set_marker(&previous, false);
        }
        if let Some(key) = &target {
            surface.set_marker(key, true);
            surface.scroll_into_view(key, ScrollOptions::FOCUS);
        }
        self.current = target;
    }

    /// Where focus would go for `direction`, without applying it.
    pub fn resolve<L>(&self, layout: &L, direction: Direction) -> NavigateOutcome<K>
    where
        L: FocusLayout<K> + ?Sized,
    {
        let candidates: Vec<Focusable<K>> = layout
            .focusables()
            .into_iter()
            .filter(Focusable::is_navigable)
            .collect();

        let Some(first) = candidates.first() else {
            return NavigateOutcome::NoCandidates;
        };

        let origin = self
            .current
            .as_ref()
            .and_then(|key| candidates.iter().find(|c| &c.key == key));
        let Some(origin) = origin else {
            return NavigateOutcome::FellBack(first.key.clone());
        };

        match select_target(&candidates, origin.rect.center(), direction) {
            Some(index) => NavigateOutcome::Moved(candidates[index].key.clone()),
            None => NavigateOutcome::Blocked,
        }
    }

    /// Move focus one step in `direction`.
    pub fn navigate<S>(&mut self, screen: &mut S, direction: Direction) -> NavigateOutcome<K>
    where
        S: FocusLayout<K> + FocusSurface<K> + ?Sized,
    {
        let outcome = self.resolve(&*screen, direction);
        debug!("navigate {direction:?}: {outcome:?}");
        match &outcome {
            NavigateOutcome::Moved(key) | NavigateOutcome::FellBack(key) => {
                self.set_focus(screen, Some(key.clone()));
            }
            NavigateOutcome::Blocked | NavigateOutcome::NoCandidates => {}
        }
        outcome
    }

    /// Focus the first navigable element matching `predicate`.
    ///
    /// Returns `false` (focus unchanged) when there is none.
    pub fn focus_first_where<S, P>(&mut self, screen: &mut S, predicate: P) -> bool
    where
        S: FocusLayout<K> + FocusSurface<K> + ?Sized,
        P: Fn(&K) -> bool,
    {
        let target = screen
            .focusables()
            .into_iter()
            .find(|f| f.is_navigable() && predicate(&f.key));
        match target {
            Some(found) => {
                self.set_focus(screen, Some(found.key));
                true
            }
            None => false,
        }
    }
}
