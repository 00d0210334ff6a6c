use std::time::{Duration, Instant};

/// How long the error banner stays up before auto-dismissing.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);

/// Default banner copy shown while a send failure is visible.
pub const ERROR_BANNER_TEXT: &str = "Failed to send message. Please try again.";

/// Error banner bookkeeping for a rendering layer.
///
/// Shown on a session error, hidden once its TTL lapses or when the next
/// send starts.
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    text: String,
    shown_at: Option<Instant>,
    ttl: Duration,
}

impl ErrorBanner {
    pub fn new(ttl: Duration) -> Self {
        Self {
            text: ERROR_BANNER_TEXT.to_string(),
            shown_at: None,
            ttl,
        }
    }

    /// Shows the banner, restarting the TTL if it is already up.
    pub fn show(&mut self) {
        self.show_at(Instant::now());
    }

    pub fn show_at(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn dismiss(&mut self) {
        self.shown_at = None;
    }

    /// Returns `true` while the banner is up and its TTL has not lapsed.
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.ttl)
    }

    /// Instant at which the banner should auto-dismiss, if shown.
    pub fn deadline(&self) -> Option<Instant> {
        self.shown_at.map(|at| at + self.ttl)
    }

    /// Drops the banner once its TTL has lapsed. Returns `true` if it was
    /// dismissed by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible_at(now) {
            self.shown_at = None;
            return true;
        }
        false
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new(ERROR_BANNER_TTL)
    }
}
