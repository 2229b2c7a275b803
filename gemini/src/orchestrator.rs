use uuid::Uuid;

use crate::error::{AskError, AttemptError, AttemptFailure};
use crate::gemini_service::{GeminiService, PromptStyle};
use crate::notify::{NotificationSink, NotificationTarget, SidebarNotification};
use crate::retry::RetryPolicy;

pub const NO_ANSWER: &str = "No answer.";

/// Issues Gemini calls for one entry point. Cloning is cheap; overlapping
/// queries share nothing but the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    service: GeminiService,
    policy: RetryPolicy,
    style: PromptStyle,
}

impl Orchestrator {
    pub fn new(service: GeminiService, policy: RetryPolicy, style: PromptStyle) -> Self {
        Self {
            service,
            policy,
            style,
        }
    }

    /// Context-menu flow: explanation prompt, five attempts with backoff.
    pub fn sidebar(service: GeminiService) -> Self {
        Self::new(service, RetryPolicy::sidebar(), PromptStyle::Explain)
    }

    /// Raw prompt, single attempt.
    pub fn single_shot(service: GeminiService) -> Self {
        Self::new(service, RetryPolicy::none(), PromptStyle::Raw)
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn service(&self) -> &GeminiService {
        &self.service
    }

    /// Sends a loading state to `target`, resolves the query and sends the
    /// final state. Always returns the text that was delivered as the answer,
    /// which is the last failure description when every attempt failed.
    ///
    /// Nothing cancels an in-flight call. Two overlapping queries for the same
    /// target both deliver, and whichever finishes last is what stays on screen.
    pub async fn ask(
        &self,
        query: &str,
        target: &NotificationTarget,
        sink: &dyn NotificationSink,
    ) -> String {
        let request_id = Uuid::new_v4();
        log::info!("[{}] query for target {}: {} chars", request_id, target, query.chars().count());

        if let Err(e) = sink.deliver(target, SidebarNotification::loading(query)).await {
            log::warn!("[{}] could not deliver loading state to {}: {}", request_id, target, e);
        }

        let answer = match self.generate(query).await {
            Ok(answer) => answer,
            Err(failure) => {
                log::warn!("[{}] giving up: {}", request_id, failure);
                failure.to_string()
            }
        };

        if let Err(e) = sink
            .deliver(target, SidebarNotification::finished(query, answer.clone()))
            .await
        {
            log::warn!("[{}] could not deliver answer to {}: {}", request_id, target, e);
        }

        answer
    }

    /// Runs the retry loop. Every failed attempt replaces the previous
    /// failure; on exhaustion the last one is returned.
    pub async fn generate(&self, query: &str) -> Result<String, AttemptFailure> {
        let request = self.style.build_request(query);
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            if let Some(delay) = self.policy.delay_before(attempt) {
                log::debug!("Waiting {:?} before attempt {}/{}", delay, attempt, max_attempts);
                tokio::time::sleep(delay).await;
            }

            match self.service.generate_answer(&request).await {
                Ok(answer) => {
                    log::info!("Gemini answered on attempt {}/{}", attempt, max_attempts);
                    return Ok(answer);
                }
                Err(error) => {
                    let failure = AttemptFailure {
                        attempt,
                        max_attempts,
                        error,
                    };
                    log::warn!("{}", failure);

                    if attempt >= max_attempts {
                        return Err(failure);
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Popup flow: one raw call, no loading state. A 2xx response without
    /// answer text yields [`NO_ANSWER`].
    pub async fn ask_direct(&self, query: &str) -> Result<String, AskError> {
        let request = PromptStyle::Raw.build_request(query);

        match self.service.generate_content(&request).await {
            Ok(response) => Ok(response
                .answer_text()
                .map(str::to_owned)
                .unwrap_or_else(|| NO_ANSWER.to_string())),
            Err(AttemptError::Api { status, .. }) | Err(AttemptError::Status { status, .. }) => {
                Err(AskError::Http { status })
            }
            Err(e) => Err(AskError::Attempt(e)),
        }
    }
}
