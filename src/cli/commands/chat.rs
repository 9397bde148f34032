//! Chat Command
//!
//! Interactive session with the HR assistant.
//!
//! Usage:
//!   hrdesk chat
//!
//! Plain lines are questions; lines starting with `/` are commands (see
//! `/help`). Ctrl-C while a question is pending cancels it; at the prompt it
//! exits.

use console::{Term, style};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::debug;

use crate::admin::UploadControl;
use crate::cli::ui::{ChatView, Output, drain_events, format_document};
use crate::cli::util::CommandContext;
use crate::constants::messages;
use crate::session::{ChatEvent, ChatSession};
use crate::types::{DeskError, DocumentId, Result};

const HELP: &str = "\
Commands:
  /help            Show this help
  /history         Show the conversation so far
  /new             Start a new conversation
  /admin           Unlock policy management
  /upload <path>   Upload a .txt policy file (admin)
  /docs            List policy documents (admin)
  /update <id> <path>
                   Replace a policy document from a .txt file (admin)
  /remove <id>     Remove a policy document (admin)
  /logout          Lock policy management
  /quit            Exit";

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    Help,
    History,
    New,
    Admin,
    Upload(PathBuf),
    Docs,
    Update { id: String, path: PathBuf },
    Remove(String),
    Logout,
    Quit,
    Empty,
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return Self::Ask(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name, arg.is_empty()) {
            ("help" | "h" | "?", _) => Self::Help,
            ("history", _) => Self::History,
            ("new", _) => Self::New,
            ("admin", _) => Self::Admin,
            ("upload", false) => Self::Upload(PathBuf::from(arg)),
            ("upload", true) => Self::Invalid("usage: /upload <path>".to_string()),
            ("docs", _) => Self::Docs,
            ("update", false) => match arg.split_once(char::is_whitespace) {
                Some((id, path)) => Self::Update {
                    id: id.to_string(),
                    path: PathBuf::from(path.trim()),
                },
                None => Self::Invalid("usage: /update <id> <path>".to_string()),
            },
            ("update", true) => Self::Invalid("usage: /update <id> <path>".to_string()),
            ("remove", false) => Self::Remove(arg.to_string()),
            ("remove", true) => Self::Invalid("usage: /remove <id>".to_string()),
            ("logout", _) => Self::Logout,
            ("quit" | "exit" | "q", _) => Self::Quit,
            _ => Self::Invalid(format!("unknown command: /{}", name)),
        }
    }
}

struct Repl {
    ctx: CommandContext,
    session: Arc<ChatSession>,
    control: Option<UploadControl>,
    view: ChatView,
    output: Output,
}

pub async fn run(ctx: CommandContext) -> Result<()> {
    let session = ctx.sessions.open();
    let mut repl = Repl {
        ctx,
        session,
        control: None,
        view: ChatView::new(),
        output: Output::new(),
    };

    repl.output.header("IndiaSportsHub HR Assistant");
    println!("{}", style(messages::INPUT_HINT).dim());
    println!("{}", style("Type /help for commands, /quit to exit.").dim());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", style(">").cyan().bold());
        std::io::Write::flush(&mut std::io::stdout())?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            println!();
            break;
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Ask(question) => repl.ask(&question).await?,
            command => repl.handle(command).await,
        }
    }

    repl.ctx.sessions.close(repl.session.id());
    Ok(())
}

impl Repl {
    async fn ask(&self, question: &str) -> Result<()> {
        let mut events = self.session.subscribe();
        let submit = self.ctx.controller.submit(&self.session, question);
        tokio::pin!(submit);

        let result = loop {
            tokio::select! {
                result = &mut submit => break result,
                event = events.recv() => self.render(event),
                _ = tokio::signal::ctrl_c() => {
                    if self.session.cancel() {
                        eprintln!("{}", style("Cancelling...").dim());
                    }
                }
            }
        };

        for event in drain_events(&mut events) {
            self.view.render_event(&event);
        }

        match result {
            Ok(reply) => {
                self.view.render_turn(reply.turn());
                Ok(())
            }
            Err(DeskError::SessionBusy) => {
                self.output.warning("Still waiting for the previous answer");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn render(&self, event: std::result::Result<ChatEvent, broadcast::error::RecvError>) {
        match event {
            Ok(event) => self.view.render_event(&event),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!("View lagged behind by {} events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => {}
        }
    }

    async fn handle(&mut self, command: ReplCommand) {
        if let Err(e) = self.dispatch(command).await {
            self.output.error(&e.to_string());
        }
    }

    async fn dispatch(&mut self, command: ReplCommand) -> Result<()> {
        match command {
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::History => {
                self.output.section(&format!(
                    "Conversation started {}",
                    self.session.started_at().format("%Y-%m-%d %H:%M UTC")
                ));
                self.view.render_history(&self.session.all_turns());
            }
            ReplCommand::New => {
                self.ctx.sessions.close(self.session.id());
                self.session = self.ctx.sessions.open();
                self.output.info("Started a new conversation");
            }
            ReplCommand::Admin => self.unlock().await?,
            ReplCommand::Upload(path) => {
                let receipt = self.control()?.upload_path(&path)?;
                self.output
                    .success(&format!("{} ({})", receipt.message, receipt.file_name));
            }
            ReplCommand::Docs => {
                let documents = self.control()?.documents();
                self.output
                    .section(&format!("Policy documents ({})", documents.len()));
                for doc in &documents {
                    println!("  {}", format_document(doc));
                }
            }
            ReplCommand::Update { id, path } => {
                let id = DocumentId::from(id);
                self.control()?.update_path(&id, &path)?;
                self.output.success(&format!("Updated {}", id));
            }
            ReplCommand::Remove(id) => {
                let removed = self.control()?.remove(&DocumentId::from(id))?;
                self.output.success(&format!("Removed {}", removed.name));
            }
            ReplCommand::Logout => {
                if self.control.take().is_some() {
                    self.output.info("Admin panel locked");
                }
            }
            ReplCommand::Invalid(message) => self.output.warning(&message),
            ReplCommand::Ask(_) | ReplCommand::Empty | ReplCommand::Quit => {}
        }
        Ok(())
    }

    async fn unlock(&mut self) -> Result<()> {
        if self.control.is_some() {
            self.output.info("Admin panel already unlocked");
            return Ok(());
        }

        let secret = tokio::task::spawn_blocking(|| {
            let term = Term::stderr();
            term.write_str("Admin password: ")?;
            term.read_secure_line()
        })
        .await
        .map_err(|e| DeskError::Io(std::io::Error::other(e)))??;

        match self.ctx.admin_panel().unlock(&secret) {
            Some(control) => {
                self.control = Some(control);
                self.output.success(messages::ADMIN_AUTHENTICATED);
            }
            None => self.output.error("Invalid password"),
        }
        Ok(())
    }

    fn control(&self) -> Result<&UploadControl> {
        self.control.as_ref().ok_or(DeskError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_questions() {
        assert_eq!(
            ReplCommand::parse("How many leave days?"),
            ReplCommand::Ask("How many leave days?".to_string())
        );
        assert_eq!(
            ReplCommand::parse("  padded question \n"),
            ReplCommand::Ask("  padded question ".to_string())
        );
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/admin"), ReplCommand::Admin);
        assert_eq!(
            ReplCommand::parse("/upload  policies/leave.txt "),
            ReplCommand::Upload(PathBuf::from("policies/leave.txt"))
        );
        assert_eq!(
            ReplCommand::parse("/remove doc-onboarding"),
            ReplCommand::Remove("doc-onboarding".to_string())
        );
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            ReplCommand::parse("/update doc-benefits  policies/benefits v2.txt "),
            ReplCommand::Update {
                id: "doc-benefits".to_string(),
                path: PathBuf::from("policies/benefits v2.txt"),
            }
        );
        assert!(matches!(ReplCommand::parse("/update doc-benefits"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/update"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(ReplCommand::parse("/upload"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/frobnicate"), ReplCommand::Invalid(_)));
    }
}
