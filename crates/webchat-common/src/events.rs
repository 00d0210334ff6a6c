use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Message;

/// Lifecycle events a rendering layer draws against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChatEvent {
    VisibilityChanged { open: bool },
    MessageAdded(Message),
    TypingStarted,
    TypingStopped,
    Error { message: String },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ChatEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ChatEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ChatEvent::TypingStarted);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ChatEvent::TypingStarted));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChatEvent::VisibilityChanged { open: true });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, ChatEvent::VisibilityChanged { open: true }));
        assert!(matches!(e2, ChatEvent::VisibilityChanged { open: true }));
    }

    #[tokio::test]
    async fn events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ChatEvent::MessageAdded(Message::user("hello")));
        bus.publish(ChatEvent::TypingStarted);
        bus.publish(ChatEvent::Error {
            message: "HTTP 500".into(),
        });
        bus.publish(ChatEvent::TypingStopped);

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, ChatEvent::MessageAdded(ref m) if m.text() == "hello"));
        assert!(matches!(rx.recv().await.unwrap(), ChatEvent::TypingStarted));
        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, ChatEvent::Error { ref message } if message == "HTTP 500"));
        assert!(matches!(rx.recv().await.unwrap(), ChatEvent::TypingStopped));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(ChatEvent::TypingStopped);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(ChatEvent::TypingStarted);
        assert_eq!(count, 2);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let bus = EventBus::new(0);
        let _rx = bus.subscribe();
        assert_eq!(bus.publish(ChatEvent::TypingStarted), 1);
    }

    #[test]
    fn event_json_shape() {
        let json = serde_json::to_string(&ChatEvent::VisibilityChanged { open: false }).unwrap();
        assert_eq!(json, r#"{"type":"VisibilityChanged","data":{"open":false}}"#);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: ChatEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, ChatEvent::Unknown));
    }
}
