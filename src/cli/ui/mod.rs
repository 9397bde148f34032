mod output;

pub use output::{ChatView, Output, drain_events, format_document, format_turn};
