//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Generation Failures
//!
//! Every failure of the external generation call (transport, auth, quota,
//! malformed response, timeout, cancellation) is a single [`GenerationError`].
//! Callers treat it as one undifferentiated failure; the attached
//! [`ErrorCategory`] exists only so operators can tell causes apart in logs.

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Diagnostic categories for generation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credential rejected by the service
    Auth,
    /// Quota or rate limit reached
    RateLimit,
    /// Connectivity issues
    Network,
    /// Call exceeded the configured bound
    Timeout,
    /// Aborted by the session before it resolved
    Cancelled,
    /// Service-side failure
    Unavailable,
    /// Request rejected as invalid
    BadRequest,
    /// Response body could not be interpreted
    Malformed,
    /// No credential was configured
    MissingCredential,
    /// Anything else
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "AUTH"),
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Network => write!(f, "NETWORK"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Malformed => write!(f, "MALFORMED"),
            Self::MissingCredential => write!(f, "MISSING_CREDENTIAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// =============================================================================
// Generation Error
// =============================================================================

/// The one failure kind of the generation client
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// Diagnostic category (operator use only)
    pub category: ErrorCategory,
    /// Detailed error message
    pub message: String,
    /// Provider that produced the error
    pub provider: Option<String>,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(provider) = &self.provider {
            write!(f, "[{}:{}] {}", provider, self.category, self.message)
        } else {
            write!(f, "[{}] {}", self.category, self.message)
        }
    }
}

impl std::error::Error for GenerationError {}

impl GenerationError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            provider: None,
        }
    }

    pub fn with_provider(
        category: ErrorCategory,
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            provider: Some(provider.into()),
        }
    }

    /// Add provider context to existing error
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn timeout(operation: &str, duration: Duration) -> Self {
        Self::new(
            ErrorCategory::Timeout,
            format!("{} timed out after {:?}", operation, duration),
        )
    }

    pub fn cancelled() -> Self {
        Self::new(ErrorCategory::Cancelled, "request cancelled by session")
    }

    pub fn missing_credential(provider: &str, vars: &[&str]) -> Self {
        Self::with_provider(
            ErrorCategory::MissingCredential,
            format!("API key not configured (checked: {})", vars.join(", ")),
            provider,
        )
    }
}

// =============================================================================
// Error Classifier
// =============================================================================

/// Maps transport-level observations to diagnostic categories
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Classify HTTP status code
    pub fn classify_http_status(status: u16, message: &str, provider: &str) -> GenerationError {
        let category = match status {
            401 | 403 => ErrorCategory::Auth,
            429 => ErrorCategory::RateLimit,
            400 | 404 | 422 => ErrorCategory::BadRequest,
            500..=599 => ErrorCategory::Unavailable,
            _ => ErrorCategory::Unknown,
        };
        GenerationError::with_provider(category, message, provider)
    }

    /// Classify a transport error from the HTTP client
    pub fn classify_transport(err: &reqwest::Error, provider: &str) -> GenerationError {
        let category = if err.is_timeout() {
            ErrorCategory::Timeout
        } else if err.is_connect() || err.is_request() {
            ErrorCategory::Network
        } else if err.is_decode() || err.is_body() {
            ErrorCategory::Malformed
        } else {
            ErrorCategory::Unknown
        };
        GenerationError::with_provider(category, err.to_string(), provider)
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Session is busy: a request is already in flight")]
    SessionBusy,

    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Unauthorized: admin access required")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, DeskError>;

/// Result of a single generation attempt
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

impl DeskError {
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload(message.into())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::RateLimit.to_string(), "RATE_LIMIT");
        assert_eq!(ErrorCategory::Auth.to_string(), "AUTH");
        assert_eq!(
            ErrorCategory::MissingCredential.to_string(),
            "MISSING_CREDENTIAL"
        );
    }

    #[test]
    fn test_classify_http_status() {
        let auth = ErrorClassifier::classify_http_status(401, "Unauthorized", "gemini");
        assert_eq!(auth.category, ErrorCategory::Auth);

        let quota = ErrorClassifier::classify_http_status(429, "Quota exceeded", "gemini");
        assert_eq!(quota.category, ErrorCategory::RateLimit);

        let server = ErrorClassifier::classify_http_status(503, "Overloaded", "openai");
        assert_eq!(server.category, ErrorCategory::Unavailable);

        let odd = ErrorClassifier::classify_http_status(418, "teapot", "openai");
        assert_eq!(odd.category, ErrorCategory::Unknown);
    }

    #[test]
    fn test_generation_error_display() {
        let err =
            GenerationError::with_provider(ErrorCategory::RateLimit, "Too many requests", "gemini");
        assert_eq!(err.to_string(), "[gemini:RATE_LIMIT] Too many requests");

        let err_no_provider = GenerationError::new(ErrorCategory::Network, "Connection failed");
        assert_eq!(err_no_provider.to_string(), "[NETWORK] Connection failed");
    }

    #[test]
    fn test_missing_credential_lists_vars() {
        let err = GenerationError::missing_credential("gemini", &["API_KEY", "GEMINI_API_KEY"]);
        assert_eq!(err.category, ErrorCategory::MissingCredential);
        assert!(err.message.contains("API_KEY, GEMINI_API_KEY"));
    }

    #[test]
    fn test_desk_error_from_generation() {
        let err: DeskError = GenerationError::cancelled().into();
        assert!(matches!(err, DeskError::Generation(_)));
        assert!(err.to_string().contains("CANCELLED"));
    }
}
