//! 空间导航选择算法
//!
//! Pure functions over rectangles. No focus state lives here.

use crate::types::{Direction, Focusable, Point};

/// Penalty applied to offset along the axis perpendicular to travel.
///
/// Keeps navigation in the same row/column unless nothing else qualifies.
pub const CROSS_AXIS_WEIGHT: f64 = 5.0;

/// Weighted distance from `from` to `to` for travel in `direction`.
pub fn directional_distance(direction: Direction, from: Point, to: Point) -> f64 {
    let (primary, cross) = direction.deltas(from, to);
    primary + CROSS_AXIS_WEIGHT * cross
}

/// Index into `candidates` of the element to move to, or `None`.
///
/// Only candidates whose centre lies strictly past `origin` along the travel
/// axis are eligible. The smallest [`directional_distance`] wins; on an exact
/// tie the earlier candidate is kept.
pub fn select_target<K>(
    candidates: &[Focusable<K>],
    origin: Point,
    direction: Direction,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let center = candidate.rect.center();
        if !direction.is_ahead(origin, center) {
            continue;
        }
        let distance = directional_distance(direction, origin, center);
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
