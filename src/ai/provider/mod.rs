//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait: one prompt in, one plain-text answer out.
//! Every failure is a [`GenerationError`]; providers never retry.
//!
//! ## Modules
//!
//! - `gemini`: Google Generative Language API (default)
//! - `openai`: OpenAI-compatible Chat Completions API

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::LlmConfig;
use crate::constants::{env as env_keys, network};
use crate::types::{DeskError, GenerationResult, Result};

// =============================================================================
// LLM Response with Usage Metrics
// =============================================================================

/// Complete LLM response
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Generated text, exactly as returned by the service
    pub text: String,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Response timing
    pub timing: ResponseTiming,
    /// Provider and model info
    pub metadata: ResponseMetadata,
}

impl LlmResponse {
    /// Create response with text only (usage unknown)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
            timing: ResponseTiming::default(),
            metadata: ResponseMetadata::default(),
        }
    }
}

/// Token usage metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (response)
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Response timing metrics
#[derive(Debug, Clone, Default)]
pub struct ResponseTiming {
    /// Total response time in milliseconds (wall clock)
    pub total_ms: u64,
}

impl ResponseTiming {
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Response metadata
#[derive(Debug, Clone, Default)]
pub struct ResponseMetadata {
    /// Model used
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared LLM provider type for concurrent access across sessions.
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

// =============================================================================
// LLM Provider Trait
// =============================================================================

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Issue exactly one generation call for `prompt`.
    ///
    /// On success the response text is returned untouched.
    async fn generate(&self, prompt: &str) -> GenerationResult<LlmResponse>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create a shared provider from configuration
///
/// A missing API key is not an error here; the provider reports it when
/// `generate` is first called.
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiProvider::new(config)?)),
        "openai" => Ok(Arc::new(OpenAiProvider::new(config)?)),
        _ => Err(DeskError::Config(format!(
            "Unknown provider: {}. Supported: gemini, openai",
            config.provider
        ))),
    }
}

/// Resolve the API key once: config value, then `API_KEY`, then the
/// provider-specific variable.
pub(crate) fn resolve_api_key(config: &LlmConfig, provider_var: &str) -> Option<SecretString> {
    let key = config
        .api_key
        .clone()
        .or_else(|| std::env::var(env_keys::API_KEY).ok())
        .or_else(|| std::env::var(provider_var).ok())
        .filter(|k| !k.trim().is_empty());

    if key.is_none() {
        debug!(
            "No API key found in config, {} or {}",
            env_keys::API_KEY,
            provider_var
        );
    }

    key.map(SecretString::from)
}

/// HTTP client shared by the providers.
///
/// Only the connect phase is bounded here; the whole call is bounded by the
/// controller's timeout.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(network::CONNECTION_TIMEOUT_SECS))
        .build()
        .map_err(|e| DeskError::Config(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let config = LlmConfig {
            provider: "bard".to_string(),
            ..LlmConfig::default()
        };
        assert!(matches!(
            create_provider(&config),
            Err(DeskError::Config(_))
        ));
    }

    #[test]
    fn test_missing_key_does_not_fail_construction() {
        let config = LlmConfig {
            api_key: None,
            ..LlmConfig::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_config_key_takes_precedence() {
        use secrecy::ExposeSecret;
        let config = LlmConfig {
            api_key: Some("from-config".to_string()),
            ..LlmConfig::default()
        };
        let key = resolve_api_key(&config, "HRDESK_TEST_UNSET_VAR").unwrap();
        assert_eq!(key.expose_secret(), "from-config");
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let config = LlmConfig {
            api_key: Some("   ".to_string()),
            ..LlmConfig::default()
        };
        // Falls through to the environment; only assert the blank value is not used.
        if let Some(key) = resolve_api_key(&config, "HRDESK_TEST_UNSET_VAR") {
            use secrecy::ExposeSecret;
            assert_ne!(key.expose_secret().trim(), "");
        }
    }
}
