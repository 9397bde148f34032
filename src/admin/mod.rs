//! Admin Panel
//!
//! Gate in front of policy document management. A secret accepted by the
//! configured [`CredentialVerifier`] yields an [`UploadControl`]; anything
//! else yields nothing.

mod credential;
mod upload;

pub use credential::{
    CredentialVerifier, Sha256Credential, SharedVerifier, StaticCredential, verifier_from_config,
};
pub use upload::{UploadControl, UploadReceipt};

use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::knowledge::KnowledgeBase;

pub struct AdminPanel {
    verifier: SharedVerifier,
    knowledge: KnowledgeBase,
}

impl AdminPanel {
    pub fn new(verifier: SharedVerifier, knowledge: KnowledgeBase) -> Self {
        Self {
            verifier,
            knowledge,
        }
    }

    pub fn from_config(config: &AdminConfig, knowledge: KnowledgeBase) -> Self {
        Self::new(verifier_from_config(config), knowledge)
    }

    /// Exchange a secret for the upload control
    pub fn unlock(&self, secret: &str) -> Option<UploadControl> {
        if self.verifier.verify(secret) {
            info!("Admin panel unlocked");
            Some(UploadControl::new(self.knowledge.clone()))
        } else {
            warn!("Admin unlock rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::admin::DEFAULT_PASSWORD;
    use crate::knowledge::KnowledgeStore;
    use proptest::prelude::*;
    use std::sync::Arc;

    struct DenyAll;

    impl CredentialVerifier for DenyAll {
        fn verify(&self, _secret: &str) -> bool {
            false
        }
    }

    fn panel() -> AdminPanel {
        AdminPanel::from_config(
            &AdminConfig::default(),
            KnowledgeBase::new(KnowledgeStore::empty()),
        )
    }

    #[test]
    fn test_unlock_with_default_secret() {
        assert!(panel().unlock(DEFAULT_PASSWORD).is_some());
        assert!(panel().unlock("wrong").is_none());
    }

    #[test]
    fn test_verifier_is_pluggable() {
        let panel = AdminPanel::new(
            Arc::new(DenyAll),
            KnowledgeBase::new(KnowledgeStore::empty()),
        );
        assert!(panel.unlock(DEFAULT_PASSWORD).is_none());
    }

    #[test]
    fn test_uploads_reach_shared_knowledge() {
        let knowledge = KnowledgeBase::new(KnowledgeStore::empty());
        let panel = AdminPanel::from_config(&AdminConfig::default(), knowledge.clone());

        let control = panel.unlock(DEFAULT_PASSWORD).unwrap();
        control.upload("leave.txt", b"Leave policy: 12 days/year.").unwrap();

        assert!(knowledge.snapshot().text().contains("12 days/year"));
    }

    proptest! {
        #[test]
        fn prop_only_exact_secret_unlocks(secret in ".*") {
            let unlocked = panel().unlock(&secret).is_some();
            prop_assert_eq!(unlocked, secret == DEFAULT_PASSWORD);
        }
    }
}
