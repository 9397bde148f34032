pub mod error;

pub use error::{
    DeskError, ErrorCategory, ErrorClassifier, GenerationError, GenerationResult, Result,
};

// =============================================================================
// Domain Newtypes
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for session IDs
///
/// Prevents accidental mixing of session IDs with other string types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random session ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type-safe wrapper for policy document IDs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod newtype_tests {
    use super::*;

    #[test]
    fn test_session_id() {
        let id = SessionId::new("sess-123");
        assert_eq!(id.as_str(), "sess-123");
        assert_eq!(format!("{}", id), "sess-123");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
        assert_ne!(DocumentId::generate(), DocumentId::generate());
    }

    #[test]
    fn test_document_id_serializes_transparently() {
        let id = DocumentId::new("doc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"doc-1\"");
    }
}
