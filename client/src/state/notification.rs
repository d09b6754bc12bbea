//! Transient top-right notification (snackbar) state.
//!
//! DESIGN
//! ======
//! Each `show` bumps `seq`. Auto-dismiss timers capture the seq they were
//! started for and call `dismiss_if`, so a timer from an older notification
//! never closes a newer one.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// How long a notification stays open without manual close.
pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    #[default]
    Error,
}

impl Severity {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "snackbar--success",
            Self::Error => "snackbar--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    pub seq: u64,
}

impl NotificationState {
    /// Open `notification`, replacing any visible one. Returns its seq.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    /// Manual close.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timer close: only closes if nothing newer has been shown since `seq`.
    pub fn dismiss_if(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
