//! Line-oriented input loop.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, warn};
use webchat_common::WebchatError;
use webchat_core::{ChatSession, MessageView, SendOutcome, SkipReason};

use crate::commands::{Command, HELP};
use crate::renderer::format_message;

fn print_line(line: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

fn print_history(session: &ChatSession) {
    let history = session.history();
    if history.is_empty() {
        print_line("(no messages yet)");
    }
    for message in &history {
        print_line(&format_message(&MessageView::from(message)));
    }
}

fn spawn_send(sends: &mut JoinSet<()>, session: &Arc<ChatSession>, text: String) {
    let session = Arc::clone(session);
    sends.spawn(async move {
        if let SendOutcome::Skipped(SkipReason::Busy) = session.send(&text).await {
            print_line("(still waiting for the previous reply)");
        }
    });
}

/// Read commands from `input` until `/quit` or end of input.
///
/// Sends run as background tasks so commands stay responsive while a reply
/// is pending. Before returning, every in-flight send is awaited.
pub async fn run<R>(session: Arc<ChatSession>, input: R) -> Result<(), WebchatError>
where
    R: AsyncBufRead + Unpin,
{
    let mut sends = JoinSet::new();
    let mut lines = input.lines();

    let result = loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break Ok(()),
            Err(e) => break Err(WebchatError::Io(e)),
        };

        match Command::parse(&line) {
            Command::Open => session.open(),
            Command::Close => session.close(),
            Command::Toggle => {
                session.toggle();
            }
            Command::History => print_history(&session),
            Command::WhoAmI => print_line(&session.user_id()),
            Command::Help => print_line(HELP),
            Command::Quit => break Ok(()),
            Command::Send(text) => {
                if text.trim().is_empty() {
                    continue;
                }
                session.open();
                spawn_send(&mut sends, &session, text);
            }
        }
    };

    if !sends.is_empty() {
        debug!(pending = sends.len(), "waiting for in-flight replies");
    }
    while let Some(joined) = sends.join_next().await {
        if let Err(e) = joined {
            warn!("send task failed: {e}");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use webchat_common::ConversationState;
    use webchat_config::schema::WidgetConfig;
    use webchat_core::{ChatRequest, UserIdentity, WebhookClient, WebhookError};

    use super::*;
    use crate::renderer::{self, TerminalRenderer};

    /// Answers every request after a short delay.
    #[derive(Default)]
    struct SlowClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WebhookClient for SlowClient {
        async fn post(&self, request: &ChatRequest) -> Result<Value, WebhookError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(json!({ "response": format!("echo: {}", request.message) }))
        }
    }

    fn session_with(client: Arc<SlowClient>) -> Arc<ChatSession> {
        Arc::new(ChatSession::new(client, UserIdentity::ephemeral()))
    }

    /// Run the loop over `input`, then drop the session so the renderer
    /// sees the bus close. Returns what was drawn and the final state.
    async fn transcript(
        session: Arc<ChatSession>,
        input: &'static [u8],
    ) -> (String, ConversationState) {
        let renderer = TerminalRenderer::new(Vec::new(), WidgetConfig::default());
        let render_task = tokio::spawn(renderer::run(renderer, session.subscribe()));

        run(Arc::clone(&session), input).await.unwrap();
        let state = session.state();
        drop(session);

        let out = String::from_utf8(render_task.await.unwrap().unwrap()).unwrap();
        (out, state)
    }

    #[tokio::test]
    async fn pending_reply_is_rendered_after_input_ends() {
        let client = Arc::new(SlowClient::default());

        let (out, state) = transcript(session_with(client.clone()), b"hello\n").await;

        assert!(out.contains("You: hello"), "{out}");
        assert!(out.contains("Bot: echo: hello"), "{out}");
        assert_eq!(state.history.len(), 2);
        assert!(!state.is_sending);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn send_opens_the_panel() {
        let client = Arc::new(SlowClient::default());

        let (out, state) = transcript(session_with(client), b"hi\n").await;

        assert!(state.is_open);
        assert!(out.starts_with("== AI Assistant =="), "{out}");
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let client = Arc::new(SlowClient::default());

        let (_, state) = transcript(session_with(client.clone()), b"/quit\nhello\n").await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert!(state.history.is_empty());
    }

    #[tokio::test]
    async fn commands_and_blank_lines_are_not_sent() {
        let client = Arc::new(SlowClient::default());

        let (_, state) = transcript(
            session_with(client.clone()),
            b"/open\n   \n/close\n/toggle\n",
        )
        .await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert!(state.is_open);
    }

    #[tokio::test]
    async fn second_line_while_waiting_is_dropped() {
        let client = Arc::new(SlowClient::default());

        let (out, state) = transcript(session_with(client.clone()), b"first\nsecond\n").await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.history.len(), 2);
        assert_eq!(out.matches("Bot: echo: ").count(), 1, "{out}");
    }
}
