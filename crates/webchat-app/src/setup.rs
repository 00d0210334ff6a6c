//! Builds a `ChatSession` from configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use webchat_common::WebchatError;
use webchat_config::schema::{IdentityConfig, WebhookConfig};
use webchat_config::WebchatConfig;
use webchat_core::{ChatSession, FileStore, HttpWebhookClient, UserIdentity, WebhookClientConfig};

pub fn client_config(webhook: &WebhookConfig) -> WebhookClientConfig {
    let mut config = WebhookClientConfig::new(webhook.url.trim());
    if let Some(secs) = webhook.request_timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = webhook.connect_timeout_secs {
        config = config.with_connect_timeout(Duration::from_secs(secs));
    }
    config
}

/// Identity backed by the configured file store, or an ephemeral one when
/// persistence is off or no storage location can be resolved.
pub fn build_identity(config: &IdentityConfig) -> UserIdentity {
    let identity = if !config.persist {
        UserIdentity::ephemeral()
    } else {
        let path = match &config.store_path {
            Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => FileStore::default_path(),
        };
        match path {
            Ok(path) => {
                info!("identity store at {}", path.display());
                UserIdentity::new(Arc::new(FileStore::new(path)))
            }
            Err(e) => {
                warn!(error = %e, "no identity store, user id will not persist");
                UserIdentity::ephemeral()
            }
        }
    };

    identity
        .with_key(config.storage_key.clone())
        .with_prefix(config.prefix.clone())
}

pub fn build_session(config: &WebchatConfig) -> Result<ChatSession, WebchatError> {
    let client = HttpWebhookClient::new(client_config(&config.webhook))?;
    let identity = build_identity(&config.identity);

    let session = ChatSession::new(Arc::new(client), identity)
        .with_event_capacity(config.widget.event_capacity as usize);
    Ok(session)
}
