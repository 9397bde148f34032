//! Global Constants
//!
//! Centralized constants for user-facing text, credentials and tuning.

/// Fixed user-facing strings
pub mod messages {
    /// Assistant reply recorded whenever generation fails for any reason
    pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error connecting to the HR module.";

    /// Acknowledgment shown after a successful policy upload
    pub const UPLOAD_ACK: &str = "File uploaded and indexed.";

    /// Shown after a successful admin unlock
    pub const ADMIN_AUTHENTICATED: &str = "Authenticated";

    /// Input hint for the chat prompt
    pub const INPUT_HINT: &str = "Ask a question about IndiaSportsHub policies...";
}

/// Admin gate constants
pub mod admin {
    /// Default shared secret for the admin panel
    pub const DEFAULT_PASSWORD: &str = "admin123";

    /// Only plain-text uploads are accepted
    pub const UPLOAD_EXTENSION: &str = "txt";
}

/// Credential environment variables, checked in order
pub mod env {
    /// Generic key read by every provider first
    pub const API_KEY: &str = "API_KEY";

    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

    /// Prefix for configuration overrides (HRDESK_LLM__MODEL -> llm.model)
    pub const CONFIG_PREFIX: &str = "HRDESK_";
}

/// HTTP/Network constants
pub mod network {
    /// Default bound on a single generation call (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 15;
}

/// Session constants
pub mod session {
    /// Default capacity of the per-session event channel
    pub const DEFAULT_EVENT_BUFFER: usize = 64;
}
