mod common;

use ask_gemini::{Orchestrator, PromptStyle, RetryPolicy};
use common::{ok, service, spawn_mock_gemini};
use std::time::Duration;
use tokio::time::Instant;

fn sidebar(base_url: &str) -> Orchestrator {
    Orchestrator::new(service(base_url), RetryPolicy::sidebar(), PromptStyle::Explain)
}

#[tokio::test(start_paused = true)]
async fn first_attempt_success_does_not_wait() {
    let (mock, base_url) = spawn_mock_gemini(vec![ok("immediate")]).await;

    let started = Instant::now();
    let answer = sidebar(&base_url).generate("q").await.unwrap();

    assert_eq!(answer, "immediate");
    assert_eq!(mock.hits(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn success_on_third_attempt_waits_2s_then_4s() {
    let (mock, base_url) = spawn_mock_gemini(vec![
        (500, "a".to_string()),
        (500, "b".to_string()),
        ok("third"),
    ])
    .await;

    let started = Instant::now();
    let answer = sidebar(&base_url).generate("q").await.unwrap();

    assert_eq!(answer, "third");
    assert_eq!(mock.hits(), 3);
    assert_eq!(started.elapsed(), Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn exhausting_attempts_waits_30s_in_total() {
    let (mock, base_url) = spawn_mock_gemini(vec![(500, "down".to_string())]).await;

    let started = Instant::now();
    let failure = sidebar(&base_url).generate("q").await.unwrap_err();

    assert_eq!(failure.attempt, 5);
    assert_eq!(mock.hits(), 5);
    assert_eq!(started.elapsed(), Duration::from_secs(2 + 4 + 8 + 16));
}
