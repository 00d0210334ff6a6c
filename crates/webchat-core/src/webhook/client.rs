//! Webhook client struct and error mapping.

use crate::WebhookError;

use super::config::WebhookClientConfig;

/// Longest slice of an error body kept in `WebhookError::Status`.
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

/// reqwest-backed webhook client.
pub struct HttpWebhookClient {
    pub(crate) config: WebhookClientConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpWebhookClient {
    pub fn new(config: WebhookClientConfig) -> Result<Self, WebhookError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| WebhookError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> WebhookError {
    if e.is_timeout() {
        WebhookError::Timeout
    } else {
        WebhookError::Network(e.to_string())
    }
}

pub(crate) fn map_body_error(e: reqwest::Error) -> WebhookError {
    if e.is_timeout() {
        WebhookError::Timeout
    } else {
        WebhookError::Parse(e.to_string())
    }
}
