//! Gemini API Provider
//!
//! LLM provider using Google's Generative Language `generateContent` API.
//! The answer is the concatenated text parts of the first candidate.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use super::{
    LlmProvider, LlmResponse, ResponseMetadata, ResponseTiming, TokenUsage, http_client,
    resolve_api_key,
};
use crate::config::LlmConfig;
use crate::constants::env as env_keys;
use crate::types::{
    ErrorCategory, ErrorClassifier, GenerationError, GenerationResult, Result,
};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const PROVIDER_NAME: &str = "gemini";

/// Gemini API Provider with secure API key handling
pub struct GeminiProvider {
    /// Read once at construction; `None` fails each call instead
    api_key: Option<SecretString>,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key: resolve_api_key(config, env_keys::GEMINI_API_KEY),
            api_base,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client: http_client()?,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> GenerationResult<LlmResponse> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            GenerationError::missing_credential(
                PROVIDER_NAME,
                &[env_keys::API_KEY, env_keys::GEMINI_API_KEY],
            )
        })?;

        info!(
            "Generating with Gemini (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt);

        debug!("Sending request to Gemini API ({} prompt chars)", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ErrorClassifier::classify_transport(&e, PROVIDER_NAME))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorClassifier::classify_http_status(
                status.as_u16(),
                &format!("Gemini API error ({}): {}", status, body),
                PROVIDER_NAME,
            ));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::with_provider(
                ErrorCategory::Malformed,
                format!("Failed to parse Gemini response: {}", e),
                PROVIDER_NAME,
            )
        })?;

        let (text, usage) = extract_text(body)?;
        let elapsed = start_time.elapsed();

        debug!(
            "Gemini responded in {}ms ({} tokens)",
            elapsed.as_millis(),
            usage.total()
        );

        Ok(LlmResponse {
            text,
            usage,
            timing: ResponseTiming::from_duration(elapsed),
            metadata: ResponseMetadata {
                model: self.model.clone(),
                provider: PROVIDER_NAME.to_string(),
            },
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Pull the answer out of a decoded response.
///
/// A response with no candidate text (for example a blocked prompt) is
/// malformed from the caller's point of view.
fn extract_text(body: GenerateContentResponse) -> GenerationResult<(String, TokenUsage)> {
    let usage = body
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    let parts: Vec<String> = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if parts.is_empty() {
        let reason = body
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GenerationError::with_provider(
            ErrorCategory::Malformed,
            format!("No text in Gemini response: {}", reason),
            PROVIDER_NAME,
        ));
    }

    Ok((parts.concat(), usage))
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(&LlmConfig {
            api_key: Some("test-key".to_string()),
            api_base: Some("https://example.test/v1beta/".to_string()),
            ..LlmConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            provider().endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = provider().build_request("What is the leave policy?");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "What is the leave policy?"
        );
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_extract_text_concatenates_parts_verbatim() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "12 "}, {"text": "days\n"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 3}
        }))
        .unwrap();

        let (text, usage) = extract_text(body).unwrap();
        assert_eq!(text, "12 days\n");
        assert_eq!(usage.total(), 43);
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        let err = extract_text(body).unwrap_err();
        assert_eq!(err.category, ErrorCategory::Malformed);
        assert!(err.message.contains("SAFETY"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", provider());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-key"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_at_call_time() {
        let provider = GeminiProvider {
            api_key: None,
            ..provider()
        };
        let err = provider.generate("hello").await.unwrap_err();
        assert_eq!(err.category, ErrorCategory::MissingCredential);
    }
}
