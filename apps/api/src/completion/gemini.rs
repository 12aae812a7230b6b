//! Gemini backend for the completion chain.
//!
//! One [`GeminiClient`] per configured model name: the chain holds several of
//! these, all sharing the same API key but pointed at different models, so a
//! retired model id only knocks out one chain entry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerateError, TextGenerator};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Per-call deadline. A hung provider must not stall the whole chain.
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    /// Returns `None` when the response carries no text at all.
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for one Gemini model via the `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(CALL_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerateError::Other(format!("request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() == 429 {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::RateLimited(body));
        }
        if status.as_u16() == 404 {
            return Err(GenerateError::ModelNotFound(self.model.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Other(format!("status {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Other(format!("unreadable response body: {e}")))?;

        parsed
            .first_text()
            .ok_or_else(|| GenerateError::Other("response contained no text parts".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_reads_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_first_text_none_when_no_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_text(), None);
    }

    #[test]
    fn test_first_text_none_when_parts_have_no_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.first_text(), None);
    }
}
