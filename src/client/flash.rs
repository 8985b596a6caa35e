//! Ephemeral status messages
//!
//! A message is plain data; whether it is still shown is a function of the
//! current instant, so view states never need a timer to mutate them.

use std::time::{Duration, Instant};

/// How long create and delete feedback stays visible
pub const FEEDBACK_TTL: Duration = Duration::from_secs(5);

/// Delay between a successful update and navigating back to the list
pub const NAVIGATION_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub shown_at: Instant,
    /// `None` keeps the message until it is replaced
    pub ttl: Option<Duration>,
}

impl Flash {
    /// Message that clears itself after `ttl`
    pub fn transient(text: impl Into<String>, shown_at: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at,
            ttl: Some(ttl),
        }
    }

    /// Message that stays until replaced
    pub fn sticky(text: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            text: text.into(),
            shown_at,
            ttl: None,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.saturating_duration_since(self.shown_at) < ttl,
            None => true,
        }
    }
}

/// Text of `flash` if it is still visible at `now`
pub fn visible_text(flash: &Option<Flash>, now: Instant) -> Option<&str> {
    flash
        .as_ref()
        .filter(|f| f.is_visible(now))
        .map(|f| f.text.as_str())
}
