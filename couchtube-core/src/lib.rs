//! CouchTube Core Library
//!
//! Platform-independent logic for a remote-control driven video browser:
//! - 2D spatial focus navigation (`focus`)
//! - Trending / search feeds on top of a resilient video source (`services`)
//! - Playback backends (`playback`)
//!
//! The rendering layer injects its layout and focus surface through the
//! traits in [`traits`], so the same navigator drives a terminal UI or any
//! other frontend.

pub mod error;
pub mod focus;
pub mod playback;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use focus::{NavigateOutcome, Navigator};
pub use playback::{create_playback, Playback, PlaybackSettings};
pub use services::{Feed, FeedRequest, FeedService, Page, RequestId, RequestTracker};
pub use traits::{FocusLayout, FocusSurface};
