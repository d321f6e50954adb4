//! 外部播放器
//!
//! Hands the player URL to a local program such as `mpv`.

use std::process::{Child, Command, Stdio};

use log::{info, warn};

use super::{EmbedKind, Playback};
use crate::error::{CoreError, CoreResult};
use crate::services::is_valid_video_id;

/// Hands the player URL to an external program (e.g. `mpv`).
///
/// The URL is appended as the last argument. Closing kills the child.
#[derive(Debug)]
pub struct ExternalPlayback {
    command: String,
    args: Vec<String>,
    kind: EmbedKind,
    child: Option<Child>,
    source: Option<String>,
}

impl ExternalPlayback {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            kind: EmbedKind::NoCookie,
            child: None,
            source: None,
        }
    }

    fn stop_child(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        // 子进程可能已自行退出
        match child.try_wait() {
            Ok(Some(status)) => info!("[{}] Player already exited: {status}", self.command),
            Ok(None) => {
                if let Err(e) = child.kill() {
                    warn!("[{}] Failed to stop player: {e}", self.command);
                }
                let _ = child.wait();
            }
            Err(e) => warn!("[{}] Failed to query player: {e}", self.command),
        }
    }
}

impl Playback for ExternalPlayback {
    fn name(&self) -> &'static str {
        "external"
    }

    fn open(&mut self, video_id: &str) -> CoreResult<()> {
        if !is_valid_video_id(video_id) {
            return Err(CoreError::InvalidVideoId(video_id.to_string()));
        }
        self.close();

        let url = self.kind.player_url(video_id);
        info!("[{}] Launching {} for {url}", self.name(), self.command);
        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CoreError::PlayerLaunch {
                command: self.command.clone(),
                detail: e.to_string(),
            })?;

        self.child = Some(child);
        self.source = Some(url);
        Ok(())
    }

    fn close(&mut self) {
        self.stop_child();
        self.source = None;
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Drop for ExternalPlayback {
    fn drop(&mut self) {
        self.stop_child();
    }
}
