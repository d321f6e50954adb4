//! 内嵌播放器
//!
//! Privacy-enhanced or Piped embed addresses, shown in the player modal.

use log::info;

use super::Playback;
use crate::error::{CoreError, CoreResult};
use crate::services::is_valid_video_id;

const NOCOOKIE_EMBED: &str = "https://www.youtube-nocookie.com/embed";

/// Which embeddable player a URL is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedKind {
    /// Privacy-enhanced YouTube embed.
    NoCookie,
    /// Self-hosted Piped frontend at this base address.
    Piped { frontend: String },
}

impl EmbedKind {
    /// Embeddable player URL for `video_id`.
    pub fn player_url(&self, video_id: &str) -> String {
        match self {
            Self::NoCookie => {
                format!("{NOCOOKIE_EMBED}/{video_id}?autoplay=1&rel=0&modestbranding=1")
            }
            Self::Piped { frontend } => {
                format!("{}/embed/{video_id}?autoplay=1", frontend.trim_end_matches('/'))
            }
        }
    }
}

/// Player that is fully described by its embed URL; the host surface loads it.
#[derive(Debug, Clone)]
pub struct EmbedPlayback {
    kind: EmbedKind,
    source: Option<String>,
}

impl EmbedPlayback {
    pub fn new(kind: EmbedKind) -> Self {
        Self { kind, source: None }
    }

    pub fn nocookie() -> Self {
        Self::new(EmbedKind::NoCookie)
    }
}

impl Playback for EmbedPlayback {
    fn name(&self) -> &'static str {
        match self.kind {
            EmbedKind::NoCookie => "nocookie",
            EmbedKind::Piped { .. } => "piped",
        }
    }

    fn open(&mut self, video_id: &str) -> CoreResult<()> {
        if !is_valid_video_id(video_id) {
            return Err(CoreError::InvalidVideoId(video_id.to_string()));
        }
        let url = self.kind.player_url(video_id);
        info!("[{}] Opening {url}", self.name());
        self.source = Some(url);
        Ok(())
    }

    fn close(&mut self) {
        if self.source.take().is_some() {
            info!("[{}] Player closed", self.name());
        }
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
