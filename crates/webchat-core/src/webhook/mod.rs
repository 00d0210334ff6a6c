//! HTTP webhook client.
//!
//! Implements the `WebhookClient` trait over reqwest: POST a JSON
//! `ChatRequest`, accept any JSON reply, and collapse every failure
//! (network, non-2xx, unparseable body) into a `WebhookError`.

mod api;
mod client;
mod config;


pub use client::HttpWebhookClient;
pub use config::WebhookClientConfig;
