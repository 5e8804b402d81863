//! Timer engine for the Pomodoro timer.
//!
//! This module contains the non-visual core:
//! - `scheduler`: Restartable one-second tick source
//! - `controller`: State machine reacting to buttons and ticks

pub mod controller;
pub mod scheduler;

pub use controller::{Controller, ControllerCommand, ControllerStatus};
pub use scheduler::{IntervalScheduler, MockTickSource, TickSource};
