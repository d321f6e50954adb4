//! 请求代次追踪

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation a data operation was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic generation counter. Only the newest generation is current, so
/// results of superseded operations can be dropped on arrival.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier one.
    pub fn begin(&self) -> RequestId {
        RequestId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `id` is still the newest generation.
    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::SeqCst) == id.0
    }

    /// Supersede whatever is in flight without starting anything.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_generation_wins() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn invalidate_discards_in_flight_generation() {
        let tracker = RequestTracker::new();
        let pending = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_current(pending));
        assert!(tracker.is_current(tracker.begin()));
    }
}
