//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{admin, network, session};
use crate::types::{DeskError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Generation service settings
    pub llm: LlmConfig,

    /// Knowledge store sources
    pub knowledge: KnowledgeConfig,

    /// Admin gate settings
    pub admin: AdminConfig,

    /// Chat session settings
    pub chat: ChatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            knowledge: KnowledgeConfig::default(),
            admin: AdminConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `DeskError::Config` on validation failure.
    ///
    /// The API key is deliberately not checked here; a missing key only
    /// shows up when the first request is made.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(DeskError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(DeskError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if let Some(base) = &self.llm.api_base {
            url::Url::parse(base).map_err(|e| {
                DeskError::Config(format!("LLM api_base '{}' is not a valid URL: {}", base, e))
            })?;
        }

        if self.chat.event_buffer == 0 {
            return Err(DeskError::Config(
                "Chat event_buffer must be greater than 0".to_string(),
            ));
        }

        if let Some(digest) = &self.admin.password_sha256
            && (digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(DeskError::Config(
                "admin.password_sha256 must be a 64-character hex digest".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: "gemini" or "openai"
    pub provider: String,

    /// Model name
    pub model: String,

    /// Upper bound on a single generation call, in seconds
    pub timeout_secs: u64,

    /// Temperature for generation (0.0 = deterministic)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,

    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,

    /// API key. Never serialized to output.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: 0.2,
            max_tokens: 2048,
            api_base: None,
            api_key: None,
        }
    }
}

// =============================================================================
// Knowledge Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Load the built-in IndiaSportsHub policy documents
    pub include_builtin: bool,

    /// Additional plain-text policy files loaded once at start
    pub files: Vec<PathBuf>,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            files: Vec::new(),
        }
    }
}

// =============================================================================
// Admin Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Shared secret compared verbatim. Never serialized to output.
    #[serde(skip_serializing)]
    pub password: String,

    /// SHA-256 hex digest of the secret; takes precedence over `password`
    pub password_sha256: Option<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"[REDACTED]")
            .field("password_sha256", &self.password_sha256)
            .finish()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: admin::DEFAULT_PASSWORD.to_string(),
            password_sha256: None,
        }
    }
}

// =============================================================================
// Chat Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Capacity of each session's event channel. A receiver that falls
    /// further behind skips progress events; answers come from the
    /// controller's return value and are never lost.
    pub event_buffer: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            event_buffer: session::DEFAULT_EVENT_BUFFER,
        }
    }
}
