//! Submission attempt capture and the rendered review panel

use chrono::{DateTime, Utc};

/// The four field values captured at the moment of submit.
/// Lives only for the duration of one submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAttempt {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Read-only echo of the last successful (or demo-successful) submission.
/// Content is always stored HTML-escaped; raw input never renders as markup.
#[derive(Debug, Clone)]
pub struct ReviewPanel {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ReviewPanel {
    pub fn from_attempt(attempt: &SubmissionAttempt) -> Self {
        Self {
            name: escape_html(&attempt.name),
            email: escape_html(&attempt.email),
            subject: escape_html(&attempt.subject),
            message: escape_html(&attempt.message),
            received_at: Utc::now(),
        }
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}
