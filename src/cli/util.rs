//! CLI Common Utilities
//!
//! Shared initialization for the commands that talk to the assistant.

use std::path::Path;

use crate::admin::AdminPanel;
use crate::chat::ChatController;
use crate::config::{Config, ConfigLoader};
use crate::knowledge::{KnowledgeBase, KnowledgeStore};
use crate::session::SessionRegistry;
use crate::types::Result;

/// Command execution context
///
/// Everything a chat surface needs, built once from the resolved
/// configuration. Sessions are opened from `sessions`; all of them share
/// `knowledge` and `controller`.
pub struct CommandContext {
    pub config: Config,
    pub knowledge: KnowledgeBase,
    pub controller: ChatController,
    pub sessions: SessionRegistry,
}

impl CommandContext {
    /// Load config, knowledge and provider
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load_with(config_path)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let knowledge = load_knowledge(&config)?;
        let controller = ChatController::from_config(&config, knowledge.clone())?;
        let sessions = SessionRegistry::with_event_buffer(config.chat.event_buffer);
        Ok(Self {
            config,
            knowledge,
            controller,
            sessions,
        })
    }

    pub fn admin_panel(&self) -> AdminPanel {
        AdminPanel::from_config(&self.config.admin, self.knowledge.clone())
    }
}

/// Knowledge only, without constructing a provider
pub fn load_knowledge(config: &Config) -> Result<KnowledgeBase> {
    Ok(KnowledgeBase::new(KnowledgeStore::load(&config.knowledge)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::admin::DEFAULT_PASSWORD;

    #[test]
    fn test_context_from_default_config() {
        let ctx = CommandContext::from_config(Config::default()).unwrap();
        assert_eq!(ctx.knowledge.snapshot().len(), 2);
        assert!(ctx.sessions.is_empty());
        assert!(ctx.admin_panel().unlock(DEFAULT_PASSWORD).is_some());
    }

    #[test]
    fn test_admin_uploads_visible_to_controller() {
        let ctx = CommandContext::from_config(Config::default()).unwrap();
        let control = ctx.admin_panel().unlock(DEFAULT_PASSWORD).unwrap();
        control.upload("travel.txt", b"Travel: economy.").unwrap();

        assert!(
            ctx.controller
                .knowledge()
                .snapshot()
                .text()
                .contains("Travel: economy.")
        );
    }
}
