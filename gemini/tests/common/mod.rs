#![allow(dead_code)]

use ask_gemini::{BackoffPolicy, GeminiConfig, GeminiService, RetryPolicy};
use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Stand-in for `generateContent` that replays a scripted list of responses.
/// Once the script runs out, the last entry repeats.
pub struct MockGemini {
    script: Vec<(u16, String)>,
    hits: AtomicUsize,
    requests: Mutex<Vec<Value>>,
    api_keys: Mutex<Vec<Option<String>>>,
    queries: Mutex<Vec<Option<String>>>,
}

impl MockGemini {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// `x-goog-api-key` header of each request.
    pub fn api_keys(&self) -> Vec<Option<String>> {
        self.api_keys.lock().unwrap().clone()
    }

    /// Raw query string of each request.
    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn generate_content(
    State(mock): State<Arc<MockGemini>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let n = mock.hits.fetch_add(1, Ordering::SeqCst);
    mock.requests.lock().unwrap().push(body);
    mock.queries.lock().unwrap().push(query);
    mock.api_keys.lock().unwrap().push(
        headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
    );

    let (status, body) = mock
        .script
        .get(n)
        .or_else(|| mock.script.last())
        .cloned()
        .unwrap();
    (StatusCode::from_u16(status).unwrap(), body)
}

/// Starts the mock and returns it with a base URL suitable for `GeminiConfig`.
pub async fn spawn_mock_gemini(script: Vec<(u16, String)>) -> (Arc<MockGemini>, String) {
    let mock = Arc::new(MockGemini {
        script,
        hits: AtomicUsize::new(0),
        requests: Mutex::new(Vec::new()),
        api_keys: Mutex::new(Vec::new()),
        queries: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1beta/models/*call", post(generate_content))
        .with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (mock, format!("http://{}/v1beta", addr))
}

pub fn answer_body(text: &str) -> String {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
}

pub fn ok(text: &str) -> (u16, String) {
    (200, answer_body(text))
}

pub const TEST_API_KEY: &str = "test-key";

pub fn service(base_url: &str) -> GeminiService {
    let config = GeminiConfig::new(TEST_API_KEY)
        .with_base_url(base_url)
        .with_model("gemini-test")
        .with_request_timeout(Duration::from_secs(5));
    GeminiService::new(config).unwrap()
}

/// Sidebar policy with millisecond waits so the tests stay fast.
pub fn fast_retries() -> RetryPolicy {
    RetryPolicy {
        max_attempts: RetryPolicy::SIDEBAR_MAX_ATTEMPTS,
        backoff: Some(BackoffPolicy::exponential(Duration::from_millis(1))),
    }
}
