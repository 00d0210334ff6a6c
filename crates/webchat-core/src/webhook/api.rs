//! WebhookClient trait implementation for HttpWebhookClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatRequest, WebhookClient, WebhookError};

use super::client::{map_body_error, map_transport_error, HttpWebhookClient, ERROR_BODY_LIMIT};

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post(&self, request: &ChatRequest) -> Result<serde_json::Value, WebhookError> {
        debug!(url = %self.config.url, "Webhook request");

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = text.chars().take(ERROR_BODY_LIMIT).collect::<String>();
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response.json().await.map_err(map_body_error)?;
        debug!(reply = %json, "Webhook response");
        Ok(json)
    }
}
