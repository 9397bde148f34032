//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (<config dir>/hrdesk/config.toml)
//! 3. Project config (.hrdesk/config.toml)
//! 4. Explicit config file
//! 5. Environment variables (HRDESK_* prefix, `__` separates sections)

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::env as env_keys;
use crate::types::{DeskError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_with(None)
    }

    /// Same as [`load`](Self::load), with an explicit file merged after the
    /// project config and before the environment.
    pub fn load_with(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DeskError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // HRDESK_LLM__MODEL -> llm.model
        figment = figment.merge(Env::prefixed(env_keys::CONFIG_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DeskError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DeskError::Config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Global config directory (e.g. ~/.config/hrdesk/)
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hrdesk").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".hrdesk/config.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render the effective configuration
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| DeskError::Config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a default global config. Existing files are kept unless `force`.
    /// Returns the path and whether it was written.
    pub fn init_global(force: bool) -> Result<(PathBuf, bool)> {
        let path = Self::global_config_path().ok_or_else(|| {
            DeskError::Config("Cannot determine global config directory".to_string())
        })?;
        let written = Self::write_default(&path, force)?;
        Ok((path, written))
    }

    /// Write a default config to `path`. Returns false when an existing file
    /// was left in place.
    pub fn write_default(path: &Path, force: bool) -> Result<bool> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(false);
        }

        fs::write(path, Self::default_config())?;
        info!("Created config: {}", path.display());
        Ok(true)
    }

    fn default_config() -> &'static str {
        r#"# hrdesk configuration

version = "1.0"

# Generation service. The API key is read from API_KEY (or GEMINI_API_KEY /
# OPENAI_API_KEY) when the process starts.
[llm]
provider = "gemini"
model = "gemini-1.5-flash"
timeout_secs = 60
temperature = 0.2

# Policy text sent with every question
[knowledge]
include_builtin = true
files = []

# Admin gate. Prefer password_sha256 over a plain password.
[admin]
# password_sha256 = "<hex digest>"
"#
    }
}
