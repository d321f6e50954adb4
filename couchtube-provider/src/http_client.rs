//! Generic HTTP client tools
//!
//! One request against one instance: send, log, classify the outcome.
//! Falling back across instances lives in [`crate::fallback`].
//!
//! # Classification
//! - transport failure → [`FetchError::NetworkError`] / [`FetchError::Timeout`]
//! - non-2xx status → [`FetchError::HttpStatus`]
//! - 2xx with a non-JSON body → [`FetchError::InvalidBody`]

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Create the shared HTTP client.
///
/// Only the connect timeout is set here; the per-attempt timeout is applied
/// to each request so it can be configured per fetcher.
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .user_agent(concat!("couchtube/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::InvalidParameter {
            param: "http_client".to_string(),
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `instance` - instance base address (for logging and error attribution)
    /// * `url` - full URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any 2xx status
    /// * `Err(FetchError::HttpStatus)` - non-2xx status
    /// * `Err(FetchError::NetworkError | FetchError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        instance: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{instance}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    instance: instance.to_string(),
                    detail: e.to_string(),
                }
            } else {
                FetchError::NetworkError {
                    instance: instance.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{instance}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                instance: instance.to_string(),
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    instance: instance.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                FetchError::NetworkError {
                    instance: instance.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{instance}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status.as_u16(), response_text))
    }

    /// Parse a response body into a JSON document
    ///
    /// A body that is not JSON is attributed to the instance that sent it.
    pub fn parse_body(response_text: &str, instance: &str) -> Result<Value> {
        serde_json::from_str(response_text).map_err(|e| {
            log::warn!("[{instance}] Body is not valid JSON: {e}");
            log::debug!(
                "[{instance}] Raw response: {}",
                truncate_for_log(response_text)
            );
            FetchError::InvalidBody {
                instance: instance.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Interpret an already fetched JSON document as `T`
    ///
    /// # Arguments
    /// * `value` - JSON document returned by the fallback chain
    /// * `context` - logical request name (used for error messages)
    pub fn from_value<T>(value: Value, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(value).map_err(|e| {
            log::error!("[{context}] JSON shape mismatch: {e}");
            FetchError::ParseError {
                context: context.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_body_valid() {
        let result = HttpUtils::parse_body(r#"{"items":[]}"#, "test");
        assert!(
            matches!(&result, Ok(v) if v["items"].is_array()),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_body_invalid_is_attributed_to_instance() {
        let result = HttpUtils::parse_body("<html>maintenance</html>", "https://x.example");
        assert!(
            matches!(
                &result,
                Err(FetchError::InvalidBody { instance, .. }) if instance == "https://x.example"
            ),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn from_value_shape_mismatch() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::from_value(serde_json::json!({"y": 1}), "test");
        assert!(
            matches!(&result, Err(FetchError::ParseError { context, .. }) if context == "test"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn from_value_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::from_value(serde_json::json!({"x": 42}), "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn client_builds() {
        assert!(create_http_client().is_ok());
    }
}
