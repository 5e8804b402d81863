//! Pomotick Library
//!
//! This library provides the core functionality for the pomotick timer.
//! It includes:
//! - Timer state, phases and duration presets
//! - Tick scheduler and the countdown controller
//! - Terminal window and the handle used to update it
//! - Desktop notifications and the audible alert
//! - CLI flag parsing

pub mod cli;
pub mod engine;
pub mod notification;
pub mod sound;
pub mod types;
pub mod window;

// Re-export commonly used types for convenience
pub use types::{format_timer, DurationUnit, Phase, PomodoroConfig, TimerState};

pub use engine::{
    Controller, ControllerCommand, ControllerStatus, IntervalScheduler, MockTickSource,
    TickSource,
};

pub use notification::{
    DesktopNotifier, MockNotifier, NotificationError, NotificationType, Notifier,
};

pub use sound::{MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};

pub use window::{ButtonLabel, RenderData, UiHandle, UiUpdate, Window, WindowAction};
