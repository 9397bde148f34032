//! Config Command
//!
//! Manage hrdesk configuration.
//!
//! Usage:
//!   hrdesk config show [-g] [-f json]
//!   hrdesk config path
//!   hrdesk config init [-g] [--force]

use std::path::Path;

use crate::config::{Config, ConfigLoader};
use crate::types::Result;

/// Show configuration
pub fn show(config: &Config, global: bool, format: &str) -> Result<()> {
    if global {
        match ConfigLoader::global_config_path() {
            Some(global_path) if global_path.exists() => {
                // Rendered rather than echoed so secrets stay out of the output
                let global = ConfigLoader::load_from_file(&global_path)?;
                println!("# Global Config: {}\n", global_path.display());
                println!("{}", ConfigLoader::render(&global, format == "json")?);
            }
            Some(_) => {
                println!("No global config found.");
                println!("Run 'hrdesk config init --global' to create one.");
            }
            None => println!("Cannot determine global config directory."),
        }
    } else {
        // Merged effective config, secrets omitted
        println!("{}", ConfigLoader::render(config, format == "json")?);
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let (path, written) = ConfigLoader::init_global(force)?;
    report_init("global", &path, written);
    Ok(())
}

/// Initialize project configuration
pub fn init_project(force: bool) -> Result<()> {
    let path = ConfigLoader::project_config_path();
    let written = ConfigLoader::write_default(&path, force)?;
    report_init("project", &path, written);
    Ok(())
}

fn report_init(scope: &str, path: &Path, written: bool) {
    if written {
        println!("✓ Initialized {} configuration", scope);
    } else {
        println!("Existing {} configuration kept (use --force to overwrite)", scope);
    }
    println!("  Config: {}", path.display());
}
