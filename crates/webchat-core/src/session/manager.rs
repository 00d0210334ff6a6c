//! ChatSession struct, panel state, and history.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::debug;
use webchat_common::{ChatEvent, ConversationState, EventBus, Message, SessionId};

use crate::identity::UserIdentity;
use crate::WebhookClient;

/// One conversation with a webhook.
///
/// Owned by whatever composes the UI; share it behind an `Arc` when the
/// renderer and the input loop live in different tasks.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn WebhookClient>,
    pub(super) identity: UserIdentity,
    pub(super) events: EventBus,
    pub(super) open: AtomicBool,
    /// Whether a webhook call is in flight.
    pub(super) sending: AtomicBool,
    /// Append-only conversation history.
    pub(super) history: Mutex<Vec<Message>>,
}

impl ChatSession {
    pub fn new(client: Arc<dyn WebhookClient>, identity: UserIdentity) -> Self {
        Self {
            id: SessionId::new(),
            client,
            identity,
            events: EventBus::default(),
            open: AtomicBool::new(false),
            sending: AtomicBool::new(false),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Replace the event bus with one of the given capacity. Call before
    /// subscribing.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.events = EventBus::new(capacity);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Open the panel. No event if it is already open.
    pub fn open(&self) {
        if self
            .open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            debug!(session = %self.id, "panel opened");
            self.events.publish(ChatEvent::VisibilityChanged { open: true });
        }
    }

    /// Close the panel. No event if it is already closed.
    pub fn close(&self) {
        if self
            .open
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            debug!(session = %self.id, "panel closed");
            self.events.publish(ChatEvent::VisibilityChanged { open: false });
        }
    }

    /// Flip the panel and return the new state.
    pub fn toggle(&self) -> bool {
        let open = !self.open.fetch_xor(true, Ordering::AcqRel);
        debug!(session = %self.id, open, "panel toggled");
        self.events.publish(ChatEvent::VisibilityChanged { open });
        open
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::Acquire)
    }

    /// Copy of the conversation so far, oldest first.
    pub fn history(&self) -> Vec<Message> {
        self.lock_history().clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock_history().len()
    }

    pub fn state(&self) -> ConversationState {
        ConversationState {
            is_open: self.is_open(),
            is_sending: self.is_sending(),
            history: self.history(),
        }
    }

    /// The correlation token sent as `userId`.
    pub fn user_id(&self) -> String {
        self.identity.get_or_create()
    }

    pub(super) fn append(&self, message: Message) {
        self.lock_history().push(message.clone());
        self.events.publish(ChatEvent::MessageAdded(message));
    }

    fn lock_history(&self) -> MutexGuard<'_, Vec<Message>> {
        // History is only ever pushed to, so a poisoned lock still holds
        // a consistent vector.
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
