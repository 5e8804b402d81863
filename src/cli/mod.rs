//! CLI module for the Pomodoro timer.
//!
//! - `commands`: Command-line flags using clap derive
//! - `display`: Messages printed outside the window

pub mod commands;
pub mod display;

pub use commands::Cli;
pub use display::Display;
