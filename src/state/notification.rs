//! Transient toast notifications

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long a notification stays on screen without an explicit close
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Notification severity, controlling icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        }
    }
}

/// A single on-screen notification. Only one is displayed at a time;
/// showing a new one replaces the current one outright.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    /// True once the auto-dismiss window has elapsed at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= AUTO_DISMISS
    }
}
