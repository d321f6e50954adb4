//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use couchtube_provider::FetchError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A watch reference did not yield a usable video id
    #[error("Invalid video id: {0}")]
    InvalidVideoId(String),

    /// Configuration value is unusable
    #[error("Config error: {0}")]
    Config(String),

    /// The external player could not be started
    #[error("Failed to launch player `{command}`: {detail}")]
    PlayerLaunch { command: String, detail: String },

    /// Fetch error (converting from library)
    #[error("{0}")]
    Fetch(#[from] FetchError),
}

impl CoreError {
    /// Whether the error stems from input or upstream availability rather than a bug.
    ///
    /// Log with `warn` when `true`, `error` otherwise. Keep in sync when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidVideoId(_) | Self::Config(_) => true,
            Self::PlayerLaunch { .. } => false,
            Self::Fetch(e) => e.is_expected(),
        }
    }

    /// Whether every backend instance failed.
    #[must_use]
    pub fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            Self::Fetch(FetchError::AllBackendsUnavailable { .. })
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
