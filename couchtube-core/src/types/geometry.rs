//! 几何类型：矩形、点、方向与滚动对齐

use serde::{Deserialize, Serialize};

/// A point in layout coordinates (x grows right, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle measured during a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`.
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Midpoint on both axes.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Zero (or negative) rendered width or height.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Primary axis: vertical for Up/Down, horizontal for Left/Right.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Whether `to` lies strictly beyond `from` in this direction.
    ///
    /// Equal coordinates on the travel axis never qualify.
    pub fn is_ahead(self, from: Point, to: Point) -> bool {
        match self {
            Direction::Up => to.y < from.y,
            Direction::Down => to.y > from.y,
            Direction::Left => to.x < from.x,
            Direction::Right => to.x > from.x,
        }
    }

    /// (primary, cross) absolute deltas between two points for this direction.
    pub fn deltas(self, from: Point, to: Point) -> (f64, f64) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        match self.axis() {
            Axis::Vertical => (dy, dx),
            Axis::Horizontal => (dx, dy),
        }
    }
}

/// Where an element should end up inside the viewport after scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlignment {
    Start,
    #[default]
    Center,
    End,
    /// Scroll the least amount needed; no scroll when already fully visible.
    Nearest,
}

/// Bring-into-view options, one alignment per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    /// Vertical axis.
    pub block: ScrollAlignment,
    /// Horizontal axis.
    pub inline: ScrollAlignment,
}

impl ScrollOptions {
    /// Options used when focus moves: centre vertically, nearest edge horizontally.
    pub const FOCUS: ScrollOptions = ScrollOptions {
        block: ScrollAlignment::Center,
        inline: ScrollAlignment::Nearest,
    };
}

/// New scroll offset on one axis so that `[start, start + len)` is aligned inside
/// a viewport of `viewport_len` currently scrolled to `offset`.
///
/// The result is clamped to `[0, max_offset]`.
pub fn aligned_offset(
    offset: f64,
    viewport_len: f64,
    start: f64,
    len: f64,
    max_offset: f64,
    alignment: ScrollAlignment,
) -> f64 {
    let end = start + len;
    let target = match alignment {
        ScrollAlignment::Start => start,
        ScrollAlignment::End => end - viewport_len,
        ScrollAlignment::Center => start + len / 2.0 - viewport_len / 2.0,
        ScrollAlignment::Nearest => {
            if start >= offset && end <= offset + viewport_len {
                offset
            } else if start < offset || len > viewport_len {
                start
            } else {
                end - viewport_len
            }
        }
    };
    target.clamp(0.0, max_offset.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(Rect::centered_at(r.center(), 30.0, 40.0), r);
    }

    #[test]
    fn empty_when_any_side_is_zero() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn ahead_is_strict() {
        let o = Point::new(100.0, 100.0);
        assert!(Direction::Right.is_ahead(o, Point::new(101.0, 0.0)));
        assert!(!Direction::Right.is_ahead(o, Point::new(100.0, 0.0)));
        assert!(Direction::Up.is_ahead(o, Point::new(500.0, 99.0)));
        assert!(!Direction::Down.is_ahead(o, Point::new(0.0, 100.0)));
        assert!(Direction::Left.is_ahead(o, Point::new(-1.0, 100.0)));
    }

    #[test]
    fn deltas_follow_axis() {
        let o = Point::new(0.0, 0.0);
        let p = Point::new(3.0, -4.0);
        assert_eq!(Direction::Right.deltas(o, p), (3.0, 4.0));
        assert_eq!(Direction::Up.deltas(o, p), (4.0, 3.0));
    }

    #[test]
    fn center_alignment_centres_the_element() {
        // viewport 20 tall, element at 50..54 → offset puts its middle (52) at 10
        let offset = aligned_offset(0.0, 20.0, 50.0, 4.0, 1000.0, ScrollAlignment::Center);
        assert!((offset - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn center_alignment_is_clamped() {
        let offset = aligned_offset(30.0, 20.0, 2.0, 4.0, 100.0, ScrollAlignment::Center);
        assert!(offset.abs() < f64::EPSILON);
        let offset = aligned_offset(0.0, 20.0, 98.0, 4.0, 85.0, ScrollAlignment::Center);
        assert!((offset - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_keeps_visible_elements_still() {
        let offset = aligned_offset(10.0, 20.0, 15.0, 5.0, 100.0, ScrollAlignment::Nearest);
        assert!((offset - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_scrolls_minimally() {
        // below the viewport → align bottom edges
        let down = aligned_offset(0.0, 20.0, 30.0, 5.0, 100.0, ScrollAlignment::Nearest);
        assert!((down - 15.0).abs() < f64::EPSILON);
        // above the viewport → align top edges
        let up = aligned_offset(40.0, 20.0, 30.0, 5.0, 100.0, ScrollAlignment::Nearest);
        assert!((up - 30.0).abs() < f64::EPSILON);
    }
}
