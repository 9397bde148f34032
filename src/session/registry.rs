//! Session Registry
//!
//! Holds independent sessions keyed by ID for hosts that serve more than one
//! user. Owned by the host; there is no process-wide instance.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::context::ChatSession;
use crate::constants::session as session_constants;
use crate::types::SessionId;

pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<ChatSession>>,
    event_buffer: usize,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_event_buffer(session_constants::DEFAULT_EVENT_BUFFER)
    }

    pub fn with_event_buffer(event_buffer: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            event_buffer,
        }
    }

    /// Start a new, empty session
    pub fn open(&self) -> Arc<ChatSession> {
        let session = Arc::new(ChatSession::with_capacity(
            SessionId::generate(),
            self.event_buffer,
        ));
        self.sessions
            .insert(session.id().clone(), Arc::clone(&session));
        debug!("Opened session {} ({} active)", session.id(), self.len());
        session
    }

    pub fn get(&self, id: &SessionId) -> Option<Arc<ChatSession>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// End a session. Its log is dropped once the last handle goes away.
    pub fn close(&self, id: &SessionId) -> Option<Arc<ChatSession>> {
        let removed = self.sessions.remove(id).map(|(_, session)| session);
        if let Some(session) = &removed {
            session.cancel();
            debug!("Closed session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Turn;

    #[test]
    fn test_open_get_close() {
        let registry = SessionRegistry::new();
        let session = registry.open();
        let id = session.id().clone();

        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());

        assert!(registry.close(&id).is_some());
        assert!(registry.get(&id).is_none());
        assert!(registry.is_empty());
        assert!(registry.close(&id).is_none());
    }

    #[test]
    fn test_sessions_do_not_share_logs() {
        let registry = SessionRegistry::new();
        let a = registry.open();
        let b = registry.open();

        a.append(Turn::user("question for a"));

        assert_eq!(registry.get(a.id()).unwrap().len(), 1);
        assert_eq!(registry.get(b.id()).unwrap().len(), 0);
    }
}
