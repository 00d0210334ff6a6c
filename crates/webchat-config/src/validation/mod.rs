//! Configuration validation.
//!
//! Each section is checked independently and all errors are collected into
//! a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::WebchatConfig;
use helpers::{validate_non_empty, validate_range};
use webchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WebchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_webhook(&mut errors, config);
    validate_identity(&mut errors, config);
    validate_widget(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_webhook(errors: &mut Vec<String>, config: &WebchatConfig) {
    let url = config.webhook.url.trim();
    if url.is_empty() {
        errors.push("webhook.url is empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!("webhook.url = {url:?} must use http:// or https://"));
    }

    if let Some(secs) = config.webhook.request_timeout_secs {
        validate_range(errors, "webhook.request_timeout_secs", secs, 1, 600);
    }
    if let Some(secs) = config.webhook.connect_timeout_secs {
        validate_range(errors, "webhook.connect_timeout_secs", secs, 1, 600);
    }
}

fn validate_identity(errors: &mut Vec<String>, config: &WebchatConfig) {
    validate_non_empty(errors, "identity.storage_key", &config.identity.storage_key);
    validate_non_empty(errors, "identity.prefix", &config.identity.prefix);
}

fn validate_widget(errors: &mut Vec<String>, config: &WebchatConfig) {
    validate_range(
        errors,
        "widget.event_capacity",
        u64::from(config.widget.event_capacity),
        1,
        4096,
    );
}
