use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Capability flags sent alongside the prompt. Only search grounding is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiTool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl GeminiTool {
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleSearch {}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text at `candidates[0].content.parts[0].text`, if present and non-empty.
    pub fn answer_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// Error envelope Gemini returns alongside 4xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_gemini_wire_names() {
        let request = GeminiRequest {
            contents: vec![GeminiContent::text("hello")],
            system_instruction: Some(GeminiContent::text("be brief")),
            tools: Some(vec![GeminiTool::google_search()]),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] },
                "tools": [{ "google_search": {} }]
            })
        );
    }

    #[test]
    fn bare_request_omits_optional_fields() {
        let request = GeminiRequest {
            contents: vec![GeminiContent::text("hi")],
            system_instruction: None,
            tools: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.answer_text(), Some("first"));
    }

    #[test]
    fn missing_or_empty_text_yields_none() {
        let no_candidates: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(no_candidates.answer_text(), None);

        let no_content: GeminiResponse =
            serde_json::from_value(json!({ "candidates": [{}] })).unwrap();
        assert_eq!(no_content.answer_text(), None);

        let empty_text: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }))
        .unwrap();
        assert_eq!(empty_text.answer_text(), None);
    }
}
