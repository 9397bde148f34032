//! Chat
//!
//! Request/response cycle between a session and the generation provider.

mod controller;

pub use controller::{ChatController, Reply};
