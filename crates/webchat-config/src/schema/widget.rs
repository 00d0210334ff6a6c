//! Chat panel presentation and event settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub status_line: String,
    /// Greeting shown when the panel first opens. Not part of history.
    pub welcome: String,
    pub start_open: bool,
    /// Event bus buffer per subscriber.
    pub event_capacity: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "AI Assistant".into(),
            status_line: "Online - Ask me anything!".into(),
            welcome: "Hi! I'm your AI assistant. How can I help you today?".into(),
            start_open: false,
            event_capacity: 64,
        }
    }
}
