//! Fallback chain 集成测试
//!
//! Every backend instance is a local wiremock server, so these run offline:
//! ```bash
//! cargo test -p couchtube-provider --test fallback_test
//! ```

mod common;

use std::time::Duration;

use common::{
    UNREACHABLE_INSTANCE, failing_instance, fetcher, search_instance, trending_instance,
    untouched_instance,
};
use couchtube_provider::FetchError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn first_success_wins_and_later_instances_are_never_contacted() {
    let a = failing_instance(500, 1).await;
    let b = search_instance("x", json!({ "items": [] }), 1).await;
    let c = untouched_instance().await;

    let Some(fetcher) = require_some_fetcher(&[a.uri(), b.uri(), c.uri()]) else {
        return;
    };
    let value = require_ok!(fetcher.fetch_with_fallback("/search?q=x&filter=videos").await);
    assert_eq!(value, json!({ "items": [] }));
    // wiremock verifies `expect(0)` on C when the server is dropped
}

#[tokio::test]
async fn status_failure_advances_to_next_instance() {
    let a = trending_instance(503, "maintenance", 1).await;
    let b = trending_instance(200, r#"[{"url":"/watch?v=b"}]"#, 1).await;

    let Some(fetcher) = require_some_fetcher(&[a.uri(), b.uri()]) else {
        return;
    };
    let value = require_ok!(fetcher.fetch_with_fallback("/trending?region=US").await);
    assert_eq!(value[0]["url"], "/watch?v=b");
}

#[tokio::test]
async fn transport_failure_advances_to_next_instance() {
    let b = trending_instance(200, "[]", 1).await;

    let Some(fetcher) = require_some_fetcher(&[UNREACHABLE_INSTANCE.to_string(), b.uri()])
    else {
        return;
    };
    let value = require_ok!(fetcher.fetch_with_fallback("/trending?region=US").await);
    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn non_json_success_body_advances_to_next_instance() {
    let a = trending_instance(200, "<html>captcha</html>", 1).await;
    let b = trending_instance(200, "[]", 1).await;

    let Some(fetcher) = require_some_fetcher(&[a.uri(), b.uri()]) else {
        return;
    };
    let value = require_ok!(fetcher.fetch_with_fallback("/trending?region=US").await);
    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn slow_instance_is_abandoned_after_attempt_timeout() {
    let slow = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&slow)
        .await;
    let fast = trending_instance(200, r#"[{"url":"/watch?v=fast"}]"#, 1).await;

    let Some(fetcher) = require_some_fetcher(&[slow.uri(), fast.uri()]) else {
        return;
    };
    let value = require_ok!(fetcher.fetch_with_fallback("/trending?region=US").await);
    assert_eq!(value[0]["url"], "/watch?v=fast");
}

#[tokio::test]
async fn all_failing_instances_yield_exhaustion_in_try_order() {
    let a = trending_instance(500, "a down", 1).await;
    let b = trending_instance(502, "b down", 1).await;

    let Some(fetcher) = require_some_fetcher(&[a.uri(), b.uri()]) else {
        return;
    };
    let err = require_err!(fetcher.fetch_with_fallback("/trending?region=US").await);

    assert!(
        matches!(err, FetchError::AllBackendsUnavailable { .. }),
        "expected exhaustion, got {err:?}"
    );
    let FetchError::AllBackendsUnavailable { attempts } = err else {
        return;
    };
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].instance, a.uri());
    assert!(attempts[0].reason.contains("HTTP 500"));
    assert_eq!(attempts[1].instance, b.uri());
    assert!(attempts[1].reason.contains("HTTP 502"));
}

#[tokio::test]
async fn each_instance_is_tried_exactly_once() {
    // `expect(1)` fails the test on drop if an instance were retried
    let a = failing_instance(500, 1).await;
    let b = failing_instance(404, 1).await;
    let c = failing_instance(429, 1).await;

    let Some(fetcher) = require_some_fetcher(&[a.uri(), b.uri(), c.uri()]) else {
        return;
    };
    let err = require_err!(fetcher.fetch_with_fallback("/trending?region=US").await);
    assert!(matches!(
        err,
        FetchError::AllBackendsUnavailable { ref attempts } if attempts.len() == 3
    ));
}

fn require_some_fetcher(instances: &[String]) -> Option<couchtube_provider::FallbackFetcher> {
    let fetcher = fetcher(instances);
    assert!(fetcher.is_some(), "failed to build fetcher");
    fetcher
}
