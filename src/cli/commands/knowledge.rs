//! Knowledge Command
//!
//! Inspect the policy documents the assistant answers from.
//!
//! Usage:
//!   hrdesk knowledge [--full] [-f json]

use crate::cli::ui::{Output, format_document};
use crate::cli::util::load_knowledge;
use crate::config::Config;
use crate::types::Result;

pub fn run(config: &Config, full: bool, format: &str) -> Result<()> {
    let snapshot = load_knowledge(config)?.snapshot();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(snapshot.documents())?);
        return Ok(());
    }

    if full {
        println!("{}", snapshot.text());
        return Ok(());
    }

    let output = Output::new();
    output.section(&format!("Policy documents ({})", snapshot.len()));
    if snapshot.is_empty() {
        output.warning("No policy documents loaded; every answer will be \"I don't know\"");
    }
    for doc in snapshot.documents() {
        println!("  {}", format_document(doc));
    }
    println!(
        "\n  {} characters sent with every question",
        snapshot.text().chars().count()
    );
    Ok(())
}
