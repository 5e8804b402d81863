//! Notification text for phase completions.

use crate::types::Phase;

/// Title of every desktop notification.
pub const NOTIFICATION_TITLE: &str = "Pomodoro";

/// Title of the in-window dialog shown when a notification cannot be sent.
pub const FALLBACK_TITLE: &str = "Notice";

/// Kind of phase-completion notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// A focus interval ended.
    FocusComplete,
    /// A short or long break ended.
    BreakComplete,
}

impl NotificationType {
    /// Picks the notification for the phase that just completed.
    pub fn for_completed(phase: Phase) -> Self {
        if phase.is_break() {
            NotificationType::BreakComplete
        } else {
            NotificationType::FocusComplete
        }
    }

    /// Returns the message body.
    pub fn message(&self) -> &'static str {
        match self {
            NotificationType::FocusComplete => "Focus period ended. Time to take a break!",
            NotificationType::BreakComplete => "Break is over. Time to focus again!",
        }
    }
}
