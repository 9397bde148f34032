//! Per-Session Context
//!
//! A [`ChatSession`] owns one conversation: its log, its Idle/Processing
//! state, the abort handle of the request in flight and an event channel
//! for display surfaces. Sessions share nothing with each other.

use chrono::{DateTime, Utc};
use futures::future::AbortHandle;
use std::sync::{Mutex, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

use super::log::{SessionLog, Turn};
use crate::constants::session as session_constants;
use crate::types::{DeskError, Result, SessionId};

/// Controller state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Waiting for input
    Idle,
    /// One request in flight
    Processing,
}

/// Session events for display and operator surfaces
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A turn was appended to the log
    TurnAppended(Turn),
    /// The generation call is about to be issued
    RequestStarted,
    /// Generation failed; `detail` is for operators and never enters the log
    GenerationFailed { detail: String },
    /// The request resolved and the session is about to return to Idle
    RequestFinished { ok: bool },
}

pub struct ChatSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    log: RwLock<SessionLog>,
    state: Mutex<ChatState>,
    in_flight: Mutex<Option<AbortHandle>>,
    events: broadcast::Sender<ChatEvent>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .field("turns", &self.len())
            .field("state", &self.state())
            .finish()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_capacity(SessionId::generate(), session_constants::DEFAULT_EVENT_BUFFER)
    }

    /// Session with a given ID and event channel capacity
    pub fn with_capacity(id: SessionId, event_buffer: usize) -> Self {
        let (events, _) = broadcast::channel(event_buffer.max(1));
        debug!("Session {} started", id);
        Self {
            id,
            started_at: Utc::now(),
            log: RwLock::new(SessionLog::new()),
            state: Mutex::new(ChatState::Idle),
            in_flight: Mutex::new(None),
            events,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> ChatState {
        *self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a turn and announce it
    pub fn append(&self, turn: Turn) {
        self.log
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .append(turn.clone());
        self.emit(ChatEvent::TurnAppended(turn));
    }

    /// Copy of the full ordered log
    pub fn all_turns(&self) -> Vec<Turn> {
        self.log
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .all_turns()
            .to_vec()
    }

    pub fn len(&self) -> usize {
        self.log
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Abort the request in flight, if any. Returns whether one was aborted.
    pub fn cancel(&self) -> bool {
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match handle {
            Some(handle) => {
                debug!("Session {}: cancelling request in flight", self.id);
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn emit(&self, event: ChatEvent) {
        // No receivers when no view is attached
        let _ = self.events.send(event);
    }

    /// Idle → Processing. Fails with `SessionBusy` if a request is in flight.
    pub(crate) fn begin_request(&self) -> Result<RequestGuard<'_>> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *state == ChatState::Processing {
            return Err(DeskError::SessionBusy);
        }
        *state = ChatState::Processing;
        Ok(RequestGuard { session: self })
    }

    fn set_in_flight(&self, handle: Option<AbortHandle>) {
        *self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = handle;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Held while a session is Processing; returns it to Idle when dropped.
pub(crate) struct RequestGuard<'a> {
    session: &'a ChatSession,
}

impl RequestGuard<'_> {
    pub(crate) fn register_abort(&self, handle: AbortHandle) {
        self.session.set_in_flight(Some(handle));
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.session.set_in_flight(None);
        *self
            .session
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = ChatState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_append_emits_event() {
        let session = ChatSession::new();
        let mut rx = session.subscribe();

        session.append(Turn::user("hello"));

        match rx.try_recv().unwrap() {
            ChatEvent::TurnAppended(turn) => {
                assert_eq!(turn.role(), Role::User);
                assert_eq!(turn.content(), "hello");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_busy_guard() {
        let session = ChatSession::new();
        assert_eq!(session.state(), ChatState::Idle);

        let guard = session.begin_request().unwrap();
        assert_eq!(session.state(), ChatState::Processing);
        assert!(matches!(
            session.begin_request(),
            Err(DeskError::SessionBusy)
        ));

        drop(guard);
        assert_eq!(session.state(), ChatState::Idle);
        assert!(session.begin_request().is_ok());
    }

    #[test]
    fn test_cancel_without_request() {
        let session = ChatSession::new();
        assert!(!session.cancel());
    }

    #[test]
    fn test_cancel_aborts_registered_handle() {
        let session = ChatSession::new();
        let guard = session.begin_request().unwrap();
        let (handle, _registration) = AbortHandle::new_pair();
        guard.register_abort(handle.clone());

        assert!(session.cancel());
        assert!(handle.is_aborted());
        assert!(!session.cancel());
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = ChatSession::new();
        let b = ChatSession::new();
        a.append(Turn::user("only in a"));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        assert_ne!(a.id(), b.id());
    }
}
