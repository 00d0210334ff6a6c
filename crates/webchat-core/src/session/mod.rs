//! Chat session: panel state, conversation history, and the single-flight
//! request/response cycle with the webhook.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{SendOutcome, SkipReason};
