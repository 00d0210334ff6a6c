//! Webhook client configuration.

use std::time::Duration;

/// Where to POST and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookClientConfig {
    pub url: String,
    /// Whole-request deadline. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl WebhookClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: None,
            connect_timeout: None,
            use_system_proxy: true,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}
