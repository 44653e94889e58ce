//! Transient user notices.
//!
//! Ephemeral, non-blocking feedback: a notice carries a message and a
//! severity, auto-dismisses after a fixed duration, and multiple notices
//! stack and expire independently. There is no background timer; expiry is
//! swept cooperatively from the event path. No persistence, no queue bound,
//! no failure paths.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Notice severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Lowercase label used in logs and plain output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single transient notice.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// When the notice was raised.
    pub raised_at: Instant,
}

/// Sink for notices raised by core operations.
///
/// Core code emits through this seam so it never owns a display surface;
/// the CLI prints to stderr, tests collect into a board.
pub trait NoticeSink {
    /// Raise a notice.
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Stacking notice board with fixed-duration auto-dismiss.
#[derive(Debug)]
pub struct NoticeBoard {
    active: Vec<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    /// Create a board whose notices dismiss after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            active: Vec::new(),
            ttl,
        }
    }

    /// Push a notice timestamped now.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(severity, message, Instant::now());
    }

    /// Push a notice with an explicit timestamp (injectable for tests).
    pub fn push_at(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(severity = severity.as_str(), %message, "notice raised");
        self.active.push(Notice {
            message,
            severity,
            raised_at: now,
        });
    }

    /// Drop every notice older than the dismiss duration.
    ///
    /// Each notice expires independently of the others in the stack.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.active
            .retain(|n| now.duration_since(n.raised_at) < ttl);
    }

    /// Currently displayed notices, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Notice] {
        &self.active
    }
}

impl NoticeSink for NoticeBoard {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.push(severity, message);
    }
}
