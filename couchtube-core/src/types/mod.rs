//! 核心类型定义

mod card;
mod element;
mod geometry;

pub use card::VideoCard;
pub use element::{ElementKind, Focusable, NavAction};
pub use geometry::{
    aligned_offset, Axis, Direction, Point, Rect, ScrollAlignment, ScrollOptions,
};
