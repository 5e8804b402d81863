//! Audible alert for the Pomodoro timer.
//!
//! The controller only needs one operation, `beep()`, which is best-effort:
//! failures are reported to the caller for logging and never stop the timer.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pomotick::sound::{RodioSoundPlayer, SoundPlayer};
//!
//! let player = RodioSoundPlayer::new();
//! if let Err(e) = player.beep() {
//!     eprintln!("Could not beep: {}", e);
//! }
//! ```

mod error;
mod player;

pub use error::SoundError;
pub use player::{RodioSoundPlayer, DEFAULT_DURATION, DEFAULT_FREQUENCY};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Trait for audible alert implementations.
///
/// Allows the controller to run against rodio in the binary and against a
/// mock in tests.
pub trait SoundPlayer: Send + Sync {
    /// Plays the alert tone without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the tone could not be started.
    fn beep(&self) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn beep(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::beep(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    beep_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of beep attempts, failed ones included.
    #[must_use]
    pub fn beep_count(&self) -> usize {
        self.beep_calls.load(Ordering::SeqCst)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn beep(&self) -> Result<(), SoundError> {
        self.beep_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }
}
