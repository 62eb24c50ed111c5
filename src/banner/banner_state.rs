//! Banner state management
//!
//! Owns the transient state for the in-app notification toast: which
//! notification id was shown last (for de-duplication) and the active
//! display window. Time is passed in explicitly so expiry is exact and
//! testable without sleeping.

use std::time::{Duration, Instant};

use crate::config::BannerConfig;
use crate::push::NotificationEvent;

/// Total display window, fade-in included. Armed once per display,
/// never as fade-delay-plus-hold.
pub const DISPLAY_WINDOW: Duration = Duration::from_millis(4500);

/// The active toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    /// A toast is dismissed the moment its full window has elapsed
    fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Banner state: `Hidden` when `current` is `None`, `Visible` otherwise.
///
/// The dismissal deadline lives inside the active toast and is overwritten
/// whenever a novel event supersedes it, so a superseded display can never
/// hide its successor early.
#[derive(Debug)]
pub struct BannerState {
    current: Option<Toast>,
    last_shown_id: Option<String>,
    dedup: bool,
    duration: Duration,
    attached: bool,
}

impl Default for BannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerState {
    pub fn new() -> Self {
        Self {
            current: None,
            last_shown_id: None,
            dedup: true,
            duration: DISPLAY_WINDOW,
            attached: true,
        }
    }

    pub fn from_config(config: &BannerConfig) -> Self {
        Self {
            current: None,
            last_shown_id: None,
            dedup: config.dedup,
            duration: Duration::from_millis(config.duration_ms),
            attached: config.enabled,
        }
    }

    /// Handle one inbound notification at time `now`.
    ///
    /// A duplicate of the last displayed id is dropped entirely: no
    /// re-display, no window reset. A novel id always supersedes whatever
    /// is currently displayed and re-arms the full window.
    pub fn on_notification(&mut self, event: &NotificationEvent, now: Instant) {
        if !self.attached {
            return;
        }

        if self.dedup && self.last_shown_id.as_deref() == Some(event.id.as_str()) {
            log::debug!("Duplicate notification {:?} dropped", event.id);
            return;
        }

        self.current = Some(Toast {
            message: event.message.clone(),
            shown_at: now,
            duration: self.duration,
        });
        self.last_shown_id = Some(event.id.clone());
    }

    /// Clear the toast once its window has elapsed, returns true if cleared
    pub fn clear_expired(&mut self, now: Instant) -> bool {
        if let Some(ref toast) = self.current
            && toast.expired_at(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Get the active toast if one is displayed
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Whether a toast is displayed (drives render scheduling)
    pub fn has_active(&self) -> bool {
        self.current.is_some()
    }

    /// Id of the most recently displayed notification
    pub fn last_shown_id(&self) -> Option<&str> {
        self.last_shown_id.as_deref()
    }

    /// Get the active toast message (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }
}

#[cfg(test)]
#[path = "banner_state_tests.rs"]
mod banner_state_tests;
