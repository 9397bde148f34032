//! Chat Sessions
//!
//! Turns, the append-only session log and the per-session context passed to
//! the chat controller.

mod context;
mod log;
mod registry;

pub use context::{ChatEvent, ChatSession, ChatState};
pub use log::{Role, SessionLog, Turn};
pub use registry::SessionRegistry;
