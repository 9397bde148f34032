//! Admin Credential Verification
//!
//! The admin gate asks a [`CredentialVerifier`] and nothing else, so the
//! backing secret store can change without touching the chat path.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::config::AdminConfig;

pub trait CredentialVerifier: Send + Sync {
    /// Whether `secret` unlocks the admin panel
    fn verify(&self, secret: &str) -> bool;
}

pub type SharedVerifier = Arc<dyn CredentialVerifier>;

/// Exact comparison against a configured shared secret
pub struct StaticCredential {
    secret: SecretString,
}

impl StaticCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::from(secret.into()),
        }
    }
}

impl CredentialVerifier for StaticCredential {
    fn verify(&self, secret: &str) -> bool {
        constant_time_eq(self.secret.expose_secret().as_bytes(), secret.as_bytes())
    }
}

/// Comparison against a SHA-256 hex digest of the secret
pub struct Sha256Credential {
    digest: String,
}

impl Sha256Credential {
    /// `digest` is 64 hex characters; case is ignored
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into().to_ascii_lowercase(),
        }
    }

    pub fn digest_of(secret: &str) -> String {
        format!("{:x}", Sha256::digest(secret.as_bytes()))
    }
}

impl CredentialVerifier for Sha256Credential {
    fn verify(&self, secret: &str) -> bool {
        constant_time_eq(Self::digest_of(secret).as_bytes(), self.digest.as_bytes())
    }
}

/// Verifier described by configuration. A digest takes precedence.
pub fn verifier_from_config(config: &AdminConfig) -> SharedVerifier {
    match &config.password_sha256 {
        Some(digest) => Arc::new(Sha256Credential::new(digest.clone())),
        None => Arc::new(StaticCredential::new(config.password.clone())),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::admin::DEFAULT_PASSWORD;

    #[test]
    fn test_static_credential_exact_match_only() {
        let verifier = StaticCredential::new("admin123");
        assert!(verifier.verify("admin123"));
        assert!(!verifier.verify("admin1234"));
        assert!(!verifier.verify("Admin123"));
        assert!(!verifier.verify(" admin123"));
        assert!(!verifier.verify(""));
    }

    #[test]
    fn test_sha256_credential() {
        let digest = Sha256Credential::digest_of("s3cret");
        assert_eq!(digest.len(), 64);

        let verifier = Sha256Credential::new(digest.to_ascii_uppercase());
        assert!(verifier.verify("s3cret"));
        assert!(!verifier.verify("s3cret "));
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            Sha256Credential::digest_of("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_from_config_prefers_digest() {
        let default = verifier_from_config(&AdminConfig::default());
        assert!(default.verify(DEFAULT_PASSWORD));

        let config = AdminConfig {
            password: DEFAULT_PASSWORD.to_string(),
            password_sha256: Some(Sha256Credential::digest_of("rotated")),
        };
        let verifier = verifier_from_config(&config);
        assert!(verifier.verify("rotated"));
        assert!(!verifier.verify(DEFAULT_PASSWORD));
    }
}
