//! Terminal rendering of session events.
//!
//! Message text only ever reaches the terminal through `MessageView`, so it
//! is HTML-escaped like on any other surface.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;
use webchat_common::{ChatEvent, ErrorBanner, Message, Sender};
use webchat_config::schema::WidgetConfig;
use webchat_core::MessageView;

/// Draws `ChatEvent`s as lines of text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    widget: WidgetConfig,
    banner: ErrorBanner,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, widget: WidgetConfig) -> Self {
        Self {
            out,
            widget,
            banner: ErrorBanner::default(),
        }
    }

    pub fn render(&mut self, event: &ChatEvent) -> io::Result<()> {
        match event {
            ChatEvent::VisibilityChanged { open: true } => self.render_header(),
            ChatEvent::VisibilityChanged { open: false } => writeln!(self.out, "[chat closed]"),
            ChatEvent::MessageAdded(message) => self.render_message(message),
            ChatEvent::TypingStarted => {
                self.banner.dismiss();
                writeln!(self.out, "{} is typing...", Sender::Bot.avatar())
            }
            ChatEvent::TypingStopped => Ok(()),
            ChatEvent::Error { .. } => {
                self.banner.show();
                writeln!(self.out, "! {}", self.banner.text())
            }
            ChatEvent::Unknown => Ok(()),
        }?;
        self.out.flush()
    }

    pub fn render_message(&mut self, message: &Message) -> io::Result<()> {
        writeln!(self.out, "{}", format_message(&MessageView::from(message)))
    }

    fn render_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "== {} ==", self.widget.title)?;
        writeln!(self.out, "   {}", self.widget.status_line)?;
        let welcome = webchat_core::escape_html(&self.widget.welcome);
        writeln!(self.out, "{}: {}", Sender::Bot.label(), welcome)
    }

    /// Hide the banner if its TTL has lapsed.
    pub fn expire_banner(&mut self, now: Instant) -> io::Result<()> {
        if self.banner.expire(now) {
            writeln!(self.out, "[error cleared]")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn banner_deadline(&self) -> Option<Instant> {
        self.banner.deadline()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `[3:07 PM] Bot: text`
pub fn format_message(view: &MessageView) -> String {
    format!("[{}] {}: {}", view.time, view.sender.label(), view.text)
}

/// Render events until the session's bus closes, auto-dismissing the
/// error banner when its TTL runs out. Returns the writer once every
/// event has been drawn.
pub async fn run<W: Write>(
    mut renderer: TerminalRenderer<W>,
    mut events: broadcast::Receiver<ChatEvent>,
) -> io::Result<W> {
    loop {
        let wake = renderer
            .banner_deadline()
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(|| tokio::time::Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => renderer.render(&event)?,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "renderer fell behind, events dropped");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::time::sleep_until(wake), if renderer.banner_deadline().is_some() => {
                renderer.expire_banner(Instant::now())?;
            }
        }
    }
    Ok(renderer.into_inner())
}
