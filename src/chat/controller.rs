//! Chat Controller
//!
//! Runs one request/response cycle against a session:
//!
//! 1. Idle → Processing (a second submission is refused while busy)
//! 2. Append the user turn, visible to subscribers before the call is made
//! 3. Compose the prompt from the current knowledge snapshot
//! 4. One generation call, bounded by a timeout and abortable via
//!    [`ChatSession::cancel`]
//! 5. Append exactly one assistant turn: the response text, or the fixed
//!    fallback reply on any failure
//! 6. Processing → Idle
//!
//! The future returned by [`ChatController::submit`] must be driven to
//! completion; use `cancel` rather than dropping it, or the user turn is left
//! without an answer.

use futures::future::{AbortHandle, Abortable};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::ai::{SharedProvider, build_policy_prompt, create_provider, with_timeout};
use crate::config::Config;
use crate::constants::messages::FALLBACK_REPLY;
use crate::knowledge::KnowledgeBase;
use crate::session::{ChatEvent, ChatSession, Turn};
use crate::types::{GenerationError, Result};

/// Outcome of one submission: the assistant turn that was logged and, when
/// generation failed, the operator detail that was kept out of the log
#[derive(Debug, Clone)]
pub struct Reply {
    turn: Turn,
    failure: Option<String>,
}

impl Reply {
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn content(&self) -> &str {
        self.turn.content()
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

pub struct ChatController {
    provider: SharedProvider,
    knowledge: KnowledgeBase,
    request_timeout: Duration,
}

impl ChatController {
    pub fn new(provider: SharedProvider, knowledge: KnowledgeBase, request_timeout: Duration) -> Self {
        Self {
            provider,
            knowledge,
            request_timeout,
        }
    }

    /// Controller with the provider and timeout described by configuration
    pub fn from_config(config: &Config, knowledge: KnowledgeBase) -> Result<Self> {
        let provider = create_provider(&config.llm)?;
        info!(
            "Using provider {} (model: {})",
            provider.name(),
            provider.model()
        );
        Ok(Self::new(
            provider,
            knowledge,
            Duration::from_secs(config.llm.timeout_secs),
        ))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Submit a question and return the assistant turn that answered it.
    ///
    /// Generation failures do not surface as errors; they become the
    /// fallback reply and are reported in [`Reply::failure`]. The only error
    /// is `SessionBusy`.
    pub async fn submit(&self, session: &ChatSession, question: &str) -> Result<Reply> {
        let guard = session.begin_request()?;

        session.append(Turn::user(question));

        let snapshot = self.knowledge.snapshot();
        let prompt = build_policy_prompt(snapshot.text(), question);
        debug!(
            session = %session.id(),
            documents = snapshot.len(),
            prompt_chars = prompt.len(),
            "Composed prompt"
        );

        let (handle, registration) = AbortHandle::new_pair();
        guard.register_abort(handle);
        session.emit(ChatEvent::RequestStarted);

        let call = with_timeout(
            self.request_timeout,
            self.provider.generate(&prompt),
            "generation request",
        );
        let outcome = match Abortable::new(call, registration).await {
            Ok(result) => result,
            Err(_aborted) => Err(GenerationError::cancelled()),
        };

        let (content, failure) = match outcome {
            Ok(response) => {
                debug!(
                    session = %session.id(),
                    tokens = response.usage.total(),
                    elapsed_ms = response.timing.total_ms,
                    "Generation succeeded"
                );
                (response.text, None)
            }
            Err(err) => {
                let err = match err.provider {
                    Some(_) => err,
                    None => err.provider(self.provider.name()),
                };
                error!(session = %session.id(), "Generation failed: {}", err);
                let detail = err.to_string();
                session.emit(ChatEvent::GenerationFailed {
                    detail: detail.clone(),
                });
                (FALLBACK_REPLY.to_string(), Some(detail))
            }
        };

        let turn = Turn::assistant(content);
        session.append(turn.clone());
        session.emit(ChatEvent::RequestFinished {
            ok: failure.is_none(),
        });
        drop(guard);

        Ok(Reply { turn, failure })
    }
}
