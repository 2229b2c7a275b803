use thiserror::Error;

use crate::models::GeminiErrorBody;

/// Characters of a non-2xx body kept in a failure description.
pub const BODY_EXCERPT_CHARS: usize = 200;

/// Why a single call to the Gemini API did not produce an answer.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("API Error: {message}")]
    Api { status: u16, message: String },

    #[error("API returned status {status}. Body: {excerpt}...")]
    Status { status: u16, excerpt: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No candidate text in response.")]
    MissingAnswer,
}

// reqwest renders the request URL into its message; drop it so nothing
// about the endpoint reaches logs or users.
impl From<reqwest::Error> for AttemptError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl AttemptError {
    /// Classifies a non-2xx response. Only 400 bodies are inspected for
    /// Gemini's `error.message`; everything else gets a truncated excerpt.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        if status == 400 {
            if let Some(message) = serde_json::from_str::<GeminiErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty())
            {
                return Self::Api { status, message };
            }
        }

        Self::Status {
            status,
            excerpt: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }
}

/// The description recorded for a failed attempt. Each one replaces the
/// previous; the last is what the user sees once attempts run out.
#[derive(Debug, Error)]
#[error("Retry {attempt}/{max_attempts} failed: {error}")]
pub struct AttemptFailure {
    pub attempt: u32,
    pub max_attempts: u32,
    #[source]
    pub error: AttemptError,
}

/// Failure of the single-shot direct path.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error(transparent)]
    Attempt(#[from] AttemptError),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Nothing is listening for this target any more.
    #[error("notification channel closed")]
    Closed,
}
