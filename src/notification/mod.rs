//! Desktop notification delivery.
//!
//! This module provides:
//!
//! - The `Notifier` trait consumed by the controller
//! - `DesktopNotifier`, backed by `notify-rust`
//! - `MockNotifier` for tests
//!
//! Delivery is best-effort. Callers log failures and show an in-window
//! dialog instead; nothing here retries.
//!
//! # Example
//!
//! ```rust,no_run
//! use pomotick::notification::{DesktopNotifier, Notifier};
//!
//! let notifier = DesktopNotifier::new();
//! if let Err(e) = notifier.notify("Pomodoro", "Focus period ended. Time to take a break!") {
//!     eprintln!("{}: {}", e, e.suggestion());
//! }
//! ```

mod content;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use notify_rust::Notification;

pub use self::content::{NotificationType, FALLBACK_TITLE, NOTIFICATION_TITLE};
pub use self::error::NotificationError;

/// Application name reported to the notification service.
const APP_NAME: &str = "pomotick";

/// Trait for notification delivery.
pub trait Notifier: Send + Sync {
    /// Shows a notification with the given title and message.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification service is unavailable or
    /// rejects the notification.
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

/// Sends notifications through the platform notification service.
#[derive(Debug, Default, Clone)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Creates a new notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        if title.is_empty() {
            return Err(NotificationError::InvalidInput(
                "notification title is empty".to_string(),
            ));
        }

        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .show()
            .map(|_| ())
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<(String, String)>>,
    attempts: Mutex<usize>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Successfully delivered `(title, message)` pairs.
    #[must_use]
    pub fn get_notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }

    /// Number of delivery attempts, failed ones included.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        *self.attempts.lock().unwrap() += 1;
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}
