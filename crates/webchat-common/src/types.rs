//! Conversation data model shared by the session core and renderers.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Single-letter avatar shown next to a bubble.
    pub fn avatar(&self) -> char {
        match self {
            Sender::User => 'U',
            Sender::Bot => 'M',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

/// One entry in the conversation history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    sender: Sender,
    /// ISO-8601 UTC, millisecond precision.
    timestamp: String,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: iso_timestamp_now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    /// Raw, unescaped text. Renderers must escape it before display.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Local wall-clock label such as `3:07 PM`.
    ///
    /// Falls back to the raw timestamp if it cannot be parsed.
    pub fn display_time(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(ts) => ts.with_timezone(&Local).format("%-I:%M %p").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

/// Snapshot of a session's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub is_open: bool,
    pub is_sending: bool,
    pub history: Vec<Message>,
}

/// Current time as an ISO-8601 UTC string, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
