//! Ask Command
//!
//! One question, one answer, printed to stdout.
//!
//! Usage:
//!   hrdesk ask "How many days of annual leave do I get?" [-f json]

use crate::chat::Reply;
use crate::cli::ui::{ChatView, drain_events};
use crate::cli::util::CommandContext;
use crate::types::{Result, SessionId};

pub async fn run(ctx: CommandContext, question: &str, format: &str) -> Result<()> {
    let session = ctx.sessions.open();
    let mut events = session.subscribe();

    let reply = ctx.controller.submit(&session, question).await?;

    if format == "json" {
        println!("{}", render_json(session.id(), question, &reply)?);
    } else {
        let view = ChatView::new();
        for event in drain_events(&mut events) {
            view.render_event(&event);
        }
        println!("{}", reply.content());
    }

    ctx.sessions.close(session.id());
    Ok(())
}

fn render_json(session: &SessionId, question: &str, reply: &Reply) -> Result<String> {
    let output = serde_json::json!({
        "session": session.as_str(),
        "question": question,
        "answer": reply.content(),
        "ok": reply.is_ok(),
        "error": reply.failure(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
