use console::style;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

use crate::knowledge::PolicyDocument;
use crate::session::{ChatEvent, Role, Turn};

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Chat View
// =============================================================================

/// Terminal rendering of a chat session.
///
/// Turns are printed from what the controller returns; events only carry
/// progress and failure diagnostics.
pub struct ChatView;

impl ChatView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_turn(&self, turn: &Turn) {
        println!("{}", format_turn(turn));
    }

    /// Render one session event
    pub fn render_event(&self, event: &ChatEvent) {
        match event {
            ChatEvent::RequestStarted => {
                eprintln!("{}", style("HR Bot is thinking...").dim());
            }
            ChatEvent::GenerationFailed { detail } => {
                // Operator diagnostic; the log holds only the fallback reply
                eprintln!("{} {}", style("⚠").yellow(), style(detail).dim());
            }
            ChatEvent::TurnAppended(_) | ChatEvent::RequestFinished { .. } => {}
        }
    }

    /// Render a full transcript
    pub fn render_history(&self, turns: &[Turn]) {
        if turns.is_empty() {
            println!("{}", style("(no messages yet)").dim());
            return;
        }
        for turn in turns {
            self.render_turn(turn);
        }
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

/// Take every event still buffered on `events`.
///
/// Events overwritten while the receiver lagged are skipped rather than
/// ending the drain.
pub fn drain_events(events: &mut broadcast::Receiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut drained = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => drained.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                debug!("Event receiver lagged, skipped {} events", skipped);
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    drained
}

/// `You: ...` / `HR Bot: ...` with the content untouched
pub fn format_turn(turn: &Turn) -> String {
    match turn.role() {
        Role::User => format!("{} {}", style("You:").cyan().bold(), turn.content()),
        Role::Assistant => format!("{} {}", style("HR Bot:").green().bold(), turn.content()),
    }
}

/// One line per document: id, name, category and size
pub fn format_document(doc: &PolicyDocument) -> String {
    let category = doc
        .category
        .as_deref()
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default();
    format!(
        "{}  {}{}  ({} chars)",
        style(doc.id.as_str()).dim(),
        doc.name,
        category,
        doc.content.chars().count()
    )
}
