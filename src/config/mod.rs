//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (<config dir>/hrdesk/config.toml)
//! 3. Project config (.hrdesk/config.toml)
//! 4. Explicit file passed with `--config`
//! 5. Environment variables (HRDESK_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
