//! hrdesk - Policy-Grounded HR Assistant
//!
//! Answers employee questions from a fixed body of HR policy text using a
//! hosted language model instructed to stay within that text.
//!
//! ## Core Features
//!
//! - **Grounded Prompting**: every question is sent with the full policy text
//! - **Session Log**: ordered, append-only conversation per session
//! - **Single Failure Kind**: any generation failure becomes a fixed reply
//! - **Admin Panel**: pluggable credential check in front of policy uploads
//!
//! ## Quick Start
//!
//! ```ignore
//! use hrdesk::{ChatController, ChatSession, Config, KnowledgeBase, KnowledgeStore};
//!
//! let config = Config::default();
//! let knowledge = KnowledgeBase::new(KnowledgeStore::builtin());
//! let controller = ChatController::from_config(&config, knowledge)?;
//!
//! let session = ChatSession::new();
//! let answer = controller.submit(&session, "How many leave days?").await?;
//! println!("{}", answer.content());
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: prompt composition and generation providers
//! - [`chat`]: request/response cycle
//! - [`session`]: turns, session log and per-session state
//! - [`knowledge`]: policy documents and the shared snapshot
//! - [`admin`]: credential gate and document management
//! - [`config`]: layered configuration

pub mod admin;
pub mod ai;
pub mod chat;
pub mod cli;
pub mod config;
pub mod constants;
pub mod knowledge;
pub mod session;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{DeskError, ErrorCategory, GenerationError, Result};

// Chat
pub use chat::{ChatController, Reply};
pub use session::{ChatEvent, ChatSession, ChatState, Role, SessionLog, SessionRegistry, Turn};

// Knowledge
pub use knowledge::{KnowledgeBase, KnowledgeStore, PolicyDocument};

// Admin
pub use admin::{AdminPanel, CredentialVerifier, UploadControl, UploadReceipt};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{LlmProvider, LlmResponse, SharedProvider, build_policy_prompt, with_timeout};
