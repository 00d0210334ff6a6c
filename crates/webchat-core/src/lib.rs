//! Chat session core for webchat.
//!
//! Provides:
//! - `ChatSession`: panel state, single-flight send, lifecycle events
//! - `WebhookClient` trait with a reqwest-backed `HttpWebhookClient`
//! - Reply extraction for arbitrarily shaped webhook replies
//! - HTML escaping for rendering surfaces
//! - `UserIdentity` with pluggable key/value storage

pub mod escape;
pub mod identity;
pub mod reply;
pub mod session;
pub mod webhook;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use escape::{escape_html, MessageView};
pub use identity::{FileStore, KeyValueStore, MemoryStore, UserIdentity};
pub use reply::{extract_reply, FALLBACK_REPLY, PLACEHOLDER_REPLY};
pub use session::{ChatSession, SendOutcome, SkipReason};
pub use webhook::{HttpWebhookClient, WebhookClientConfig};

/// Transport seam for the outbound chat call.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// POST one chat request and return the parsed JSON reply.
    async fn post(&self, request: &ChatRequest) -> Result<serde_json::Value, WebhookError>;
}

/// Wire body of the outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// ISO-8601 UTC.
    pub timestamp: String,
    pub user_id: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: webchat_common::iso_timestamp_now(),
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
    #[error("Empty reply")]
    EmptyReply,
}

impl From<WebhookError> for webchat_common::WebchatError {
    fn from(e: WebhookError) -> Self {
        webchat_common::WebchatError::Webhook(e.to_string())
    }
}
