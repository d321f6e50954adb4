//! 播放能力
//!
//! A [`Playback`] shows a player addressed by a video id. Backends are picked
//! from [`PlaybackSettings`] by [`create_playback`].

mod embed;
mod external;
mod settings;

pub use embed::{EmbedKind, EmbedPlayback};
pub use external::ExternalPlayback;
pub use settings::{create_playback, PlaybackBackend, PlaybackSettings, DEFAULT_PIPED_FRONTEND};

use crate::error::CoreResult;

/// Player surface.
///
/// `open` on an already open player replaces what is playing.
pub trait Playback: Send {
    /// Backend identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Show the player for `video_id`.
    fn open(&mut self, video_id: &str) -> CoreResult<()>;

    /// Hide the player and clear its source. Closing a closed player is a no-op.
    fn close(&mut self);

    /// Player URL currently loaded, if open.
    fn source(&self) -> Option<&str>;

    fn is_open(&self) -> bool {
        self.source().is_some()
    }
}
