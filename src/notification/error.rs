//! Notification system error types.

use thiserror::Error;

/// Errors that can occur while delivering a desktop notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notification service rejected or failed to deliver the message.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// Invalid input provided to the notification system.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl NotificationError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "check that a notification daemon is running",
            Self::InvalidInput(_) => "check the notification title and message",
        }
    }
}
