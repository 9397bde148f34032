//! Policy Knowledge
//!
//! The policy text supplied to the model as its only source of truth.
//! Documents are sent whole on every request; nothing is chunked or indexed.

pub mod policies;
mod store;

pub use store::{DocumentKind, KnowledgeBase, KnowledgeStore, PolicyDocument};
