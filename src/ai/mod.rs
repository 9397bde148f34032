//! AI Integration Layer
//!
//! Prompt composition and the generation client.

pub mod prompt;
pub mod provider;
pub mod timeout;

pub use prompt::{PromptBuilder, PromptSection, PromptTemplates, build_policy_prompt};
pub use provider::{
    GeminiProvider, LlmProvider, LlmResponse, OpenAiProvider, ResponseMetadata, ResponseTiming,
    SharedProvider, TokenUsage, create_provider,
};
pub use timeout::with_timeout;
