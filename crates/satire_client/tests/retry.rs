use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use satire_client::{
    with_retry, ApiClient, ApiError, ClientConfig, ErrorKind, HttpTransport, RetryPolicy,
    Transport, TransportEvent, TransportSink,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct TestSink {
    events: Arc<Mutex<Vec<TransportEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn retries_scheduled(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, TransportEvent::RetryScheduled { .. }))
            .count()
    }
}

impl TransportSink for TestSink {
    fn record(&self, event: TransportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
    }
}

#[test]
fn backoff_doubles_per_attempt_and_is_capped() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_after(1), Duration::from_secs(2));
    assert_eq!(policy.delay_after(2), Duration::from_secs(4));
    assert_eq!(policy.delay_after(3), Duration::from_secs(8));
    assert_eq!(policy.delay_after(4), Duration::from_secs(10));
    assert_eq!(policy.delay_after(10), Duration::from_secs(10));
}

#[tokio::test]
async fn returns_the_value_once_an_attempt_succeeds() {
    let sink = TestSink::new();
    let calls = AtomicU32::new(0);

    let result = with_retry(fast_policy(), &sink, || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if n < 2 {
                Err(ApiError {
                    kind: ErrorKind::Timeout,
                    message: "slow".to_string(),
                })
            } else {
                Ok(7)
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(sink.retries_scheduled(), 2);
}

#[tokio::test]
async fn exhaustion_surfaces_the_last_attempts_error() {
    let sink = TestSink::new();
    let calls = AtomicU32::new(0);

    let result: Result<(), ApiError> = with_retry(fast_policy(), &sink, || {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            Err(ApiError {
                kind: ErrorKind::HttpStatus(500 + n as u16 + 1),
                message: String::new(),
            })
        }
    })
    .await;

    // Attempts saw 501, 502, 503; only the last one is surfaced.
    assert_eq!(result.unwrap_err().kind, ErrorKind::HttpStatus(503));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(sink.retries_scheduled(), 2);
}

#[tokio::test]
async fn single_attempt_policy_never_retries() {
    let sink = TestSink::new();
    let calls = AtomicU32::new(0);

    let result: Result<(), ApiError> = with_retry(RetryPolicy::none(), &sink, || {
        calls.fetch_add(1, Ordering::SeqCst);
        async {
            Err(ApiError {
                kind: ErrorKind::NetworkUnavailable,
                message: "down".to_string(),
            })
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.retries_scheduled(), 0);
}

#[tokio::test]
async fn listing_recovers_after_transient_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prompt"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prompt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "abc123",
            "prompt": "Local man eats soup daily",
            "story": "In a stunning turn of events...",
            "upvotes": 0,
            "downvotes": 0
        }])))
        .mount(&server)
        .await;

    let config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config).unwrap());
    let sink = TestSink::new();
    let api = ApiClient::new(transport, Arc::new(sink.clone())).with_retry_policy(fast_policy());

    let articles = api.list_articles().await.expect("list ok");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, "abc123");
    assert_eq!(sink.retries_scheduled(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
