//! Tests for the validation pipeline.

use super::*;
use crate::schema::WebchatConfig;

#[test]
fn default_config_validates() {
    let config = WebchatConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_url() {
    let mut config = WebchatConfig::default();
    config.webhook.url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.url is empty"));
}

#[test]
fn catches_non_http_url() {
    let mut config = WebchatConfig::default();
    config.webhook.url = "ws://example.com/chat".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.url"));
}

#[test]
fn accepts_https_url() {
    let mut config = WebchatConfig::default();
    config.webhook.url = "https://example.ngrok-free.dev/webhook/portfolio-chat".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_timeout() {
    let mut config = WebchatConfig::default();
    config.webhook.request_timeout_secs = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.request_timeout_secs"));
}

#[test]
fn catches_huge_connect_timeout() {
    let mut config = WebchatConfig::default();
    config.webhook.connect_timeout_secs = Some(3600);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.connect_timeout_secs"));
}

#[test]
fn catches_blank_identity_fields() {
    let mut config = WebchatConfig::default();
    config.identity.storage_key = String::new();
    config.identity.prefix = " ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("identity.storage_key"));
    assert!(err.contains("identity.prefix"));
}

#[test]
fn catches_event_capacity_out_of_range() {
    let mut config = WebchatConfig::default();
    config.widget.event_capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("widget.event_capacity"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WebchatConfig::default();
    config.webhook.url = String::new();
    config.widget.event_capacity = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("; "));
}
