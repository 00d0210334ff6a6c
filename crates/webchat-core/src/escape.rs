//! HTML escaping for rendering surfaces.
//!
//! Reply text comes from an untrusted remote endpoint, so every renderer
//! goes through `MessageView`, which only ever exposes escaped text.

use webchat_common::{Message, Sender};

/// Escape HTML special characters so text is never interpreted as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render-ready view of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub sender: Sender,
    pub avatar: char,
    /// HTML-escaped message text.
    pub text: String,
    /// Short local clock label, e.g. `3:07 PM`.
    pub time: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            sender: message.sender(),
            avatar: message.sender().avatar(),
            text: escape_html(message.text()),
            time: message.display_time(),
        }
    }
}
