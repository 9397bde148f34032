//! OpenAI API Provider
//!
//! LLM provider using OpenAI's Chat Completions API (or any compatible
//! endpoint via `llm.api_base`).

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

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const PROVIDER_NAME: &str = "openai";

/// OpenAI API Provider with secure API key handling
pub struct OpenAiProvider {
    api_key: Option<SecretString>,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key: resolve_api_key(config, env_keys::OPENAI_API_KEY),
            api_base,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client: http_client()?,
        })
    }

    /// The whole composed prompt travels as a single user message.
    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> GenerationResult<LlmResponse> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            GenerationError::missing_credential(
                PROVIDER_NAME,
                &[env_keys::API_KEY, env_keys::OPENAI_API_KEY],
            )
        })?;

        info!(
            "Generating with OpenAI (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let request = self.build_request(prompt);
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| ErrorClassifier::classify_transport(&e, PROVIDER_NAME))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorClassifier::classify_http_status(
                status.as_u16(),
                &format!("OpenAI API error ({}): {}", status, body),
                PROVIDER_NAME,
            ));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            GenerationError::with_provider(
                ErrorCategory::Malformed,
                format!("Failed to parse OpenAI response: {}", e),
                PROVIDER_NAME,
            )
        })?;

        let (text, usage) = extract_text(body)?;
        let elapsed = start_time.elapsed();

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

fn extract_text(body: ChatCompletionResponse) -> GenerationResult<(String, TokenUsage)> {
    let usage = body
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    let text = body
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            GenerationError::with_provider(
                ErrorCategory::Malformed,
                "No content in OpenAI response",
                PROVIDER_NAME,
            )
        })?;

    Ok((text, usage))
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> OpenAiProvider {
        OpenAiProvider::new(&LlmConfig {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: Some("sk-test".to_string()),
            ..LlmConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_request_is_single_user_message() {
        let value = serde_json::to_value(provider().build_request("prompt body")).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "prompt body");
    }

    #[test]
    fn test_extract_text() {
        let body: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "12 days"}}],
            "usage": {"prompt_tokens": 100, "completion_tokens": 2}
        }))
        .unwrap();
        let (text, usage) = extract_text(body).unwrap();
        assert_eq!(text, "12 days");
        assert_eq!(usage.total(), 102);
    }

    #[test]
    fn test_extract_text_without_choices() {
        let body: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        let err = extract_text(body).unwrap_err();
        assert_eq!(err.category, ErrorCategory::Malformed);
    }
}
