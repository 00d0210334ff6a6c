//! The send cycle.

use tracing::{debug, warn};
use webchat_common::{new_correlation_id, ChatEvent, Message};

use crate::reply::{extract_reply, FALLBACK_REPLY};
use crate::{ChatRequest, WebhookError};

use super::manager::ChatSession;
use super::types::{SendOutcome, SkipReason, SendingGuard};

impl ChatSession {
    /// Send one user message and wait for the reply.
    ///
    /// Blank input and calls made while another send is in flight are
    /// no-ops. Failures are recovered locally: the error is published as
    /// `ChatEvent::Error` and a fallback bot message is appended. Never
    /// retries.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Skipped(SkipReason::Empty);
        }

        let Some(guard) = SendingGuard::acquire(&self.sending, &self.events) else {
            debug!(session = %self.id, "send ignored, request already in flight");
            return SendOutcome::Skipped(SkipReason::Busy);
        };

        self.append(Message::user(text));
        self.events.publish(ChatEvent::TypingStarted);

        let request = ChatRequest::new(text, self.identity.get_or_create());
        let request_id = new_correlation_id();
        debug!(session = %self.id, request = %request_id, "sending message to webhook");

        let result = self.client.post(&request).await.and_then(|reply| {
            extract_reply(&reply).ok_or(WebhookError::EmptyReply)
        });

        let outcome = match result {
            Ok(reply) => {
                let message = Message::bot(reply);
                self.append(message.clone());
                SendOutcome::Replied(message)
            }
            Err(error) => {
                warn!(session = %self.id, request = %request_id, error = %error, "error sending message");
                self.events.publish(ChatEvent::Error {
                    message: error.to_string(),
                });
                let message = Message::bot(FALLBACK_REPLY);
                self.append(message.clone());
                SendOutcome::Failed { message, error }
            }
        };

        drop(guard);
        outcome
    }
}
