//! Webhook endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where chat messages are POSTed and how long to wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: String,
    /// Whole-request deadline in seconds. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// Connect deadline in seconds. `None` uses the transport default.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5678/webhook/chat".into(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}
