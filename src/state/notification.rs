//! Transient toast driven by server flash state

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot message the backend attaches to a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(rename = "type")]
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Toast state: the current message and when it was shown
#[derive(Debug, Clone)]
pub struct Notification {
    current: Option<Flash>,
    shown_at: Option<Instant>,
    duration: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(None, Instant::now())
    }
}

impl Notification {
    /// Build from the flash state delivered with the current page
    pub fn new(flash: Option<Flash>, now: Instant) -> Self {
        Self::with_duration(flash, now, TOAST_DURATION)
    }

    pub fn with_duration(flash: Option<Flash>, now: Instant, duration: Duration) -> Self {
        let shown_at = flash.as_ref().map(|_| now);
        Self {
            current: flash,
            shown_at,
            duration,
        }
    }

    /// Show `flash` and restart the timer
    pub fn rearm(&mut self, flash: Flash, now: Instant) {
        tracing::debug!(kind = ?flash.kind, message = %flash.message, "showing toast");
        self.current = Some(flash);
        self.shown_at = Some(now);
    }

    /// Hide the toast once its time is up. Returns whether it is still visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(shown_at) = self.shown_at {
            if now.saturating_duration_since(shown_at) >= self.duration {
                self.dismiss();
            }
        }
        self.is_visible()
    }

    /// Close the toast early
    pub fn dismiss(&mut self) {
        self.current = None;
        self.shown_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Flash> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flash_deserializes_type_field() {
        let json = r#"{"type": "error", "message": "Payment failed"}"#;
        let flash: Flash = serde_json::from_str(json).unwrap();
        assert_eq!(flash, Flash::error("Payment failed"));
    }

    #[test]
    fn test_new_without_flash_is_hidden() {
        let toast = Notification::new(None, Instant::now());
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_new_with_flash_is_visible() {
        let toast = Notification::new(Some(Flash::success("Saved")), Instant::now());
        assert!(toast.is_visible());
        assert_eq!(toast.current().unwrap().message, "Saved");
    }

    #[test]
    fn test_hides_after_five_seconds() {
        let start = Instant::now();
        let mut toast = Notification::new(Some(Flash::success("Saved")), start);
        assert!(toast.tick(start + Duration::from_millis(4_999)));
        assert!(!toast.tick(start + Duration::from_secs(5)));
        assert!(toast.current().is_none());
    }

    #[test]
    fn test_dismiss_early() {
        let mut toast = Notification::new(Some(Flash::success("Saved")), Instant::now());
        toast.dismiss();
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_rearm_restarts_timer() {
        let start = Instant::now();
        let mut toast = Notification::new(Some(Flash::success("First")), start);
        let later = start + Duration::from_secs(4);
        toast.rearm(Flash::error("Second"), later);
        assert!(toast.tick(start + Duration::from_secs(6)));
        assert_eq!(toast.current().unwrap().message, "Second");
        assert!(!toast.tick(later + Duration::from_secs(5)));
    }
}
