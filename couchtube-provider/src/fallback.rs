//! Ordered multi-instance fallback.
//!
//! A [`FallbackFetcher`] hides a list of interchangeable backend instances
//! behind a single logical call. Instances are tried strictly one after the
//! other in configuration order; the first instance that answers with a
//! success status and a JSON body wins.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{AttemptFailure, FetchError, Result};
use crate::http_client::{HttpUtils, create_http_client};

/// Tuning knobs for a [`FallbackFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherOptions {
    /// Upper bound for one attempt against one instance.
    ///
    /// `None` waits for as long as the instance keeps the connection open.
    pub attempt_timeout: Option<Duration>,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            attempt_timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// Resolves logical paths against an ordered list of instances.
#[derive(Debug, Clone)]
pub struct FallbackFetcher {
    client: Client,
    instances: Vec<String>,
    options: FetcherOptions,
}

impl FallbackFetcher {
    /// Create a fetcher over `instances` (base addresses, tried in this order).
    ///
    /// Trailing slashes are stripped so `base + "/path"` never doubles them.
    pub fn new<I, S>(instances: I, options: FetcherOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let instances = instances
            .into_iter()
            .map(|s| s.into().trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        Ok(Self {
            client: create_http_client()?,
            instances,
            options,
        })
    }

    /// Configured instances, in priority order.
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    /// Fetch `logical_path` from the first instance that can serve it.
    ///
    /// `logical_path` is the backend-agnostic suffix (path + query), e.g.
    /// `/trending?region=US`.
    ///
    /// # Errors
    /// [`FetchError::AllBackendsUnavailable`] once every instance failed; the
    /// error lists each attempt in order.
    pub async fn fetch_with_fallback(&self, logical_path: &str) -> Result<Value> {
        let mut attempts = Vec::with_capacity(self.instances.len());

        for instance in &self.instances {
            log::info!("Trying instance {instance} for {logical_path}");

            match self.try_instance(instance, logical_path).await {
                Ok(value) => {
                    if !attempts.is_empty() {
                        log::info!(
                            "{logical_path} served by {instance} after {} failed attempt(s)",
                            attempts.len()
                        );
                    }
                    return Ok(value);
                }
                Err(e) if e.is_candidate_failure() => {
                    log::warn!("Instance failed, trying next: {e}");
                    attempts.push(AttemptFailure {
                        instance: instance.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        log::error!(
            "All {} instance(s) failed for {logical_path}",
            self.instances.len()
        );
        Err(FetchError::AllBackendsUnavailable { attempts })
    }

    /// One attempt against one instance, no retries.
    async fn try_instance(&self, instance: &str, logical_path: &str) -> Result<Value> {
        let url = format!("{instance}{logical_path}");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(timeout) = self.options.attempt_timeout {
            request = request.timeout(timeout);
        }

        let (_status, body) = HttpUtils::execute_request(request, instance, &url).await?;
        HttpUtils::parse_body(&body, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_are_normalized_in_order() {
        let fetcher = FallbackFetcher::new(
            ["https://a.example/", " https://b.example ", "", "https://c.example"],
            FetcherOptions::default(),
        );
        assert!(fetcher.is_ok());
        let Ok(fetcher) = fetcher else {
            return;
        };
        assert_eq!(
            fetcher.instances(),
            ["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn default_attempt_timeout_is_bounded() {
        assert_eq!(
            FetcherOptions::default().attempt_timeout,
            Some(Duration::from_secs(10))
        );
    }

    #[tokio::test]
    async fn empty_instance_list_is_exhausted_immediately() {
        let Ok(fetcher) = FallbackFetcher::new(Vec::<String>::new(), FetcherOptions::default())
        else {
            return;
        };
        let result = fetcher.fetch_with_fallback("/trending?region=US").await;
        assert!(
            matches!(
                &result,
                Err(FetchError::AllBackendsUnavailable { attempts }) if attempts.is_empty()
            ),
            "unexpected result: {result:?}"
        );
    }
}
