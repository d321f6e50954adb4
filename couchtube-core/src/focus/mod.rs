//! 二维空间焦点导航
//!
//! - [`spatial`]: candidate selection over rectangles
//! - [`Navigator`]: owns the focused reference and applies it to a surface
//! - [`dispatch`](dispatch::dispatch): maps remote keys to commands

pub mod dispatch;
mod navigator;
pub mod spatial;

pub use dispatch::{dispatch, Command, Dispatch, InputMode, RemoteKey};
pub use navigator::{NavigateOutcome, Navigator};
pub use spatial::{directional_distance, select_target, CROSS_AXIS_WEIGHT};
