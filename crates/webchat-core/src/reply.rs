//! Reply extraction.
//!
//! Webhook backends answer in whatever shape they like. The display text is
//! found by walking `EXTRACTION_RULES` in order; the first rule whose value
//! is truthy wins. Reordering the rules changes which backends interoperate.

use serde_json::{Map, Value};

/// Bot message appended when the webhook call fails.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again or contact me directly via email.";

/// Used when a reply object carries no usable value at all.
pub const PLACEHOLDER_REPLY: &str = "I received your message! Let me help you with that.";

/// One probe into a reply object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Top-level key.
    Key(&'static str),
    /// Key inside a nested object.
    Nested(&'static str, &'static str),
}

pub const EXTRACTION_RULES: &[Rule] = &[
    Rule::Key("response"),
    Rule::Key("message"),
    Rule::Key("output"),
    Rule::Key("text"),
    Rule::Key("reply"),
    Rule::Nested("data", "response"),
    Rule::Nested("data", "message"),
];

impl Rule {
    fn probe<'a>(&self, obj: &'a Map<String, Value>) -> Option<&'a Value> {
        match *self {
            Rule::Key(key) => obj.get(key).filter(|v| is_truthy(v)),
            Rule::Nested(outer, inner) => obj
                .get(outer)
                .and_then(Value::as_object)
                .and_then(|nested| nested.get(inner))
                .filter(|v| is_truthy(v)),
        }
    }
}

/// Find the display text in a parsed webhook reply.
///
/// Returns `None` only for a JSON `null` reply, which the session treats as
/// a failed call.
pub fn extract_reply(reply: &Value) -> Option<String> {
    match reply {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => {
            if let Some(value) = EXTRACTION_RULES.iter().find_map(|rule| rule.probe(obj)) {
                return Some(display_text(value));
            }
            Some(first_value_or_placeholder(obj.values().next()))
        }
        Value::Array(items) => Some(first_value_or_placeholder(items.first())),
        Value::Bool(_) | Value::Number(_) => Some(PLACEHOLDER_REPLY.to_string()),
    }
}

fn first_value_or_placeholder(value: Option<&Value>) -> String {
    value
        .filter(|v| is_truthy(v))
        .map(display_text)
        .unwrap_or_else(|| PLACEHOLDER_REPLY.to_string())
}

/// Render a matched value as display text.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
