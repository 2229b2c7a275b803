use crate::config::GeminiConfig;
use crate::error::AttemptError;
use crate::models::*;
use anyhow::Result;
use reqwest::Client;

pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const SYSTEM_INSTRUCTION: &str = "You are a highly helpful assistant that explains text \
selected on a web page. Answer clearly and concisely, define any jargon, and use web search \
when the text refers to recent events.";

/// How a query is turned into a request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Query wrapped in the explanation template, with the system instruction
    /// and search grounding enabled.
    Explain,
    /// Query sent verbatim.
    Raw,
}

impl PromptStyle {
    pub fn build_prompt(&self, query: &str) -> String {
        match self {
            Self::Explain => format!(
                "Explain the following text concisely, highlighting the key ideas and any \
                 context a reader would need:\n\n---\n\n{query}"
            ),
            Self::Raw => query.to_string(),
        }
    }

    pub fn build_request(&self, query: &str) -> GeminiRequest {
        let contents = vec![GeminiContent::text(self.build_prompt(query))];
        match self {
            Self::Explain => GeminiRequest {
                contents,
                system_instruction: Some(GeminiContent::text(SYSTEM_INSTRUCTION)),
                tools: Some(vec![GeminiTool::google_search()]),
            },
            Self::Raw => GeminiRequest {
                contents,
                system_instruction: None,
                tools: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// One POST to `generateContent`. Non-2xx statuses and undecodable bodies
    /// come back as [`AttemptError`]s.
    pub async fn generate_content(&self, request: &GeminiRequest) -> Result<GeminiResponse, AttemptError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AttemptError::from_error_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`Self::generate_content`], but a response without answer text is a failure.
    pub async fn generate_answer(&self, request: &GeminiRequest) -> Result<String, AttemptError> {
        let response = self.generate_content(request).await?;

        response
            .answer_text()
            .map(str::to_owned)
            .ok_or(AttemptError::MissingAnswer)
    }
}
