//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use couchtube_provider::{FallbackFetcher, FetcherOptions};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: {} is not set", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got Err({:?})", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: Err({:?})",
            format_args!($($msg)+),
            res.as_ref().err()
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// An address nothing listens on; connecting fails immediately.
pub const UNREACHABLE_INSTANCE: &str = "http://127.0.0.1:9";

/// Short per-attempt timeout so slow-instance tests stay fast.
pub const TEST_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(300);

/// Fetcher over `instances` with the test timeout.
pub fn fetcher(instances: &[String]) -> Option<FallbackFetcher> {
    FallbackFetcher::new(
        instances.iter().cloned(),
        FetcherOptions {
            attempt_timeout: Some(TEST_ATTEMPT_TIMEOUT),
        },
    )
    .ok()
}

/// Instance answering the trending endpoint with `status` and `body`, expecting `hits` calls.
pub async fn trending_instance(status: u16, body: &str, hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .and(query_param("region", "US"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(hits)
        .mount(&server)
        .await;
    server
}

/// Instance answering the search endpoint with a JSON body, expecting `hits` calls.
pub async fn search_instance(query: &str, body: serde_json::Value, hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .and(query_param("filter", "videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(hits)
        .mount(&server)
        .await;
    server
}

/// Instance that must never be contacted.
pub async fn untouched_instance() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    server
}

/// Instance failing every request with `status`, expecting `hits` calls.
pub async fn failing_instance(status: u16, hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .expect(hits)
        .mount(&server)
        .await;
    server
}
