//! Send outcomes and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use webchat_common::{ChatEvent, EventBus, Message};

use crate::WebhookError;

/// Why a `send` did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Input was empty after trimming.
    Empty,
    /// Another send is still in flight.
    Busy,
}

/// Result of one `ChatSession::send` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Skipped(SkipReason),
    /// The webhook answered; the extracted bot message was appended.
    Replied(Message),
    /// The call failed; the fallback bot message was appended.
    Failed {
        message: Message,
        error: WebhookError,
    },
}

impl SendOutcome {
    /// The bot message this send appended, if any.
    pub fn bot_message(&self) -> Option<&Message> {
        match self {
            SendOutcome::Skipped(_) => None,
            SendOutcome::Replied(message) | SendOutcome::Failed { message, .. } => Some(message),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SendOutcome::Skipped(_))
    }
}

/// Holds the session's `sending` flag for the lifetime of one request.
///
/// Dropping the guard clears the flag and emits `TypingStopped`, so both
/// happen on every exit path, including when the send future is dropped.
pub(crate) struct SendingGuard<'a> {
    flag: &'a AtomicBool,
    events: &'a EventBus,
}

impl<'a> SendingGuard<'a> {
    /// Returns `None` if a send is already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool, events: &'a EventBus) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag, events })
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.events.publish(ChatEvent::TypingStopped);
    }
}
