//! Gemini AI provider implementation.
//!
//! Talks to the `generateContent` endpoint of Google's Generative Language
//! API with a multi-turn `contents` array.

use super::{ChatProvider, ChatTurn, ProviderError, Role};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Gemini chat provider.
pub struct GeminiChatProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiChatProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            method,
            self.config.api_key
        )
    }

    fn build_request(
        system_prompt: &str,
        prior_turns: &[ChatTurn],
        user_message: &str,
    ) -> GenerateContentRequest {
        let mut contents = Vec::with_capacity(prior_turns.len() + 2);
        contents.push(Content::new(Role::User, system_prompt));
        contents.extend(prior_turns.iter().map(|t| Content::new(t.role, &t.text)));
        contents.push(Content::new(Role::User, user_message));

        GenerateContentRequest { contents }
    }
}

#[async_trait]
impl ChatProvider for GeminiChatProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn send_chat(
        &self,
        system_prompt: &str,
        prior_turns: &[ChatTurn],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let request = Self::build_request(system_prompt, prior_turns, user_message);
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            turns = request.contents.len(),
            message_len = user_message.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            // Prefer the structured message over the raw body when present.
            let detail = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, detail
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_reply(api_response)
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_reply(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_ref())
        .is_some()
    {
        return Err(ProviderError::ContentFiltered);
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(ProviderError::ContentFiltered);
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(text)
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn new(role: Role, text: &str) -> Self {
        Self {
            role: Some(role.as_str().to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn request_places_system_prompt_first_and_message_last() {
        let request = GeminiChatProvider::build_request(
            "persona",
            &[ChatTurn::model("ack")],
            "hello",
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "persona" }] },
                    { "role": "model", "parts": [{ "text": "ack" }] },
                    { "role": "user", "parts": [{ "text": "hello" }] }
                ]
            })
        );
    }

    #[test]
    fn reply_joins_all_text_parts_of_first_candidate() {
        let response = parse(serde_json::json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Halo, " }, { "text": "apa kabar?" }] },
                  "finishReason": "STOP" },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }));

        assert_eq!(extract_reply(response).unwrap(), "Halo, apa kabar?");
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let response = parse(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }));

        assert!(matches!(
            extract_reply(response),
            Err(ProviderError::ContentFiltered)
        ));
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let response = parse(serde_json::json!({ "candidates": [] }));

        assert!(matches!(
            extract_reply(response),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = GeminiChatProvider::new(GeminiConfig {
            api_key: String::new(),
            model: "gemini-2.0-flash-lite".to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            timeout: Duration::from_secs(5),
        });

        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
