//! Source factory functions.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{FetchError, Result};
use crate::fallback::FetcherOptions;
use crate::providers::{DEFAULT_PIPED_INSTANCES, PipedSource};
use crate::traits::VideoSource;

/// Everything needed to build a [`VideoSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Instance base addresses, in priority order.
    pub instances: Vec<String>,
    /// Per-attempt timeout; `None` disables it.
    pub attempt_timeout: Option<Duration>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            instances: DEFAULT_PIPED_INSTANCES
                .iter()
                .map(ToString::to_string)
                .collect(),
            attempt_timeout: FetcherOptions::default().attempt_timeout,
        }
    }
}

/// Creates a [`VideoSource`] from the given settings.
///
/// The returned source is wrapped in `Arc<dyn VideoSource>` so it can be
/// shared with spawned fetch tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use couchtube_provider::{create_source, SourceSettings};
///
/// let source = create_source(&SourceSettings::default()).unwrap();
/// assert_eq!(source.id(), "piped");
/// ```
pub fn create_source(settings: &SourceSettings) -> Result<Arc<dyn VideoSource>> {
    if let Some(bad) = settings
        .instances
        .iter()
        .find(|i| !(i.starts_with("http://") || i.starts_with("https://")))
    {
        return Err(FetchError::InvalidParameter {
            param: "instances".to_string(),
            detail: format!("'{bad}' is not an http(s) base address"),
        });
    }

    let options = FetcherOptions {
        attempt_timeout: settings.attempt_timeout,
    };
    Ok(Arc::new(PipedSource::new(
        settings.instances.iter().cloned(),
        options,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_public_instances() {
        let settings = SourceSettings::default();
        assert_eq!(settings.instances.len(), DEFAULT_PIPED_INSTANCES.len());
        assert!(create_source(&settings).is_ok());
    }

    #[test]
    fn rejects_non_http_instances() {
        let settings = SourceSettings {
            instances: vec!["https://ok.example".into(), "ftp://nope.example".into()],
            attempt_timeout: None,
        };
        let result = create_source(&settings);
        assert!(
            matches!(
                &result,
                Err(FetchError::InvalidParameter { param, .. }) if param == "instances"
            ),
            "unexpected result: {:?}",
            result.err()
        );
    }
}
