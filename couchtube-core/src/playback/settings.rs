//! 播放配置

use serde::{Deserialize, Serialize};
use url::Url;

use super::{EmbedKind, EmbedPlayback, ExternalPlayback, Playback};
use crate::error::{CoreError, CoreResult};

pub const DEFAULT_PIPED_FRONTEND: &str = "https://piped.video";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackBackend {
    #[default]
    NoCookie,
    Piped,
    External,
}

/// `playback` section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub backend: PlaybackBackend,
    /// Piped frontend base address (`piped` backend).
    pub frontend: String,
    /// Program to launch (`external` backend).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments placed before the player URL.
    pub args: Vec<String>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            backend: PlaybackBackend::NoCookie,
            frontend: DEFAULT_PIPED_FRONTEND.to_string(),
            command: None,
            args: Vec::new(),
        }
    }
}

/// Build the configured playback backend.
pub fn create_playback(settings: &PlaybackSettings) -> CoreResult<Box<dyn Playback>> {
    match settings.backend {
        PlaybackBackend::NoCookie => Ok(Box::new(EmbedPlayback::new(EmbedKind::NoCookie))),
        PlaybackBackend::Piped => {
            let frontend = settings.frontend.trim();
            let parsed = Url::parse(frontend).map_err(|e| {
                CoreError::Config(format!("playback.frontend `{frontend}`: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(CoreError::Config(format!(
                    "playback.frontend `{frontend}` must be an http(s) address"
                )));
            }
            Ok(Box::new(EmbedPlayback::new(EmbedKind::Piped {
                frontend: frontend.trim_end_matches('/').to_string(),
            })))
        }
        PlaybackBackend::External => {
            let command = settings
                .command
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or_else(|| {
                    CoreError::Config(
                        "playback.command is required for the external backend".to_string(),
                    )
                })?;
            Ok(Box::new(ExternalPlayback::new(command, settings.args.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_nocookie() {
        let player = create_playback(&PlaybackSettings::default());
        assert_eq!(player.map(|p| p.name()).ok(), Some("nocookie"));
    }

    #[test]
    fn backend_names_are_lowercase_in_json() {
        let settings: PlaybackSettings =
            serde_json::from_str(r#"{"backend":"external","command":"mpv","args":["--fs"]}"#)
                .unwrap_or_default();
        assert_eq!(settings.backend, PlaybackBackend::External);
        assert_eq!(settings.command.as_deref(), Some("mpv"));
        assert_eq!(settings.frontend, DEFAULT_PIPED_FRONTEND);
        assert_eq!(
            serde_json::to_value(PlaybackBackend::NoCookie).ok(),
            Some(serde_json::json!("nocookie"))
        );
    }

    #[test]
    fn piped_backend_requires_http_frontend() {
        let mut settings = PlaybackSettings {
            backend: PlaybackBackend::Piped,
            ..PlaybackSettings::default()
        };
        assert_eq!(create_playback(&settings).map(|p| p.name()).ok(), Some("piped"));

        settings.frontend = "ftp://piped.example".to_string();
        assert!(matches!(create_playback(&settings), Err(CoreError::Config(_))));
        settings.frontend = "not a url".to_string();
        assert!(matches!(create_playback(&settings), Err(CoreError::Config(_))));
    }

    #[test]
    fn external_backend_requires_command() {
        let settings = PlaybackSettings {
            backend: PlaybackBackend::External,
            command: Some("  ".to_string()),
            ..PlaybackSettings::default()
        };
        assert!(matches!(create_playback(&settings), Err(CoreError::Config(_))));
    }
}
