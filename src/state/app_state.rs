//! Application state definitions

use crate::state::{ContactForm, Notification, ReviewPanel, Severity, SubmissionAttempt};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Delay before an offline fallback fabricates its demo success
pub const FALLBACK_DELAY: Duration = Duration::from_secs(2);

/// Color theme preference, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Submit control state during one submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

/// A scheduled demo-success outcome after a failed transport call.
/// Pending fallbacks are never cancelled; each fires when its deadline
/// passes and the latest one wins by replacing the single display slots.
#[derive(Debug, Clone)]
pub struct PendingFallback {
    pub attempt: SubmissionAttempt,
    deadline: Instant,
}

impl PendingFallback {
    pub fn new(attempt: SubmissionAttempt) -> Self {
        Self::new_at(attempt, Instant::now() + FALLBACK_DELAY)
    }

    pub fn new_at(attempt: SubmissionAttempt, deadline: Instant) -> Self {
        Self { attempt, deadline }
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Shared UI state: the form plus the single notification and review slots
#[derive(Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub form: ContactForm,
    pub submit_status: SubmitStatus,
    pub notification: Option<Notification>,
    pub review: Option<ReviewPanel>,
    pub pending_fallbacks: Vec<PendingFallback>,
}

impl UiState {
    /// Show a notification, replacing any currently displayed one (no queue)
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notification = Some(Notification::new(message, severity));
    }

    /// Dismiss the current notification. Idempotent: dismissing when none
    /// is shown is a no-op.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Replace the review panel with an escaped echo of `attempt`
    pub fn show_review(&mut self, attempt: &SubmissionAttempt) {
        self.review = Some(ReviewPanel::from_attempt(attempt));
    }

    /// Toggle the theme and return the new value for persistence
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Drop the notification once its auto-dismiss window has elapsed
    pub fn expire_notification_at(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }

    /// Remove and return all fallbacks whose deadline has passed,
    /// preserving arrival order
    pub fn take_due_fallbacks_at(&mut self, now: Instant) -> Vec<PendingFallback> {
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending_fallbacks
            .drain(..)
            .partition(|f| f.is_due_at(now));
        self.pending_fallbacks = pending;
        due
    }
}
