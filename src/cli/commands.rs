//! Command definitions for the Pomodoro timer.
//!
//! Uses clap derive macro for argument parsing.

use clap::Parser;

use crate::types::PomodoroConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro timer in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomotick",
    version,
    about = "A Pomodoro timer that runs in your terminal",
    long_about = "A Pomodoro timer that runs in your terminal.\n\
                  Alternates 25-minute focus sessions with 5-minute short breaks and a \
                  15-minute long break every fourth session."
)]
pub struct Cli {
    /// Enable development mode (1 minute = 1 second)
    #[arg(long)]
    pub dev: bool,
}

impl Cli {
    /// Builds the timer configuration selected by the flags.
    pub fn config(&self) -> PomodoroConfig {
        PomodoroConfig::for_mode(self.dev)
    }
}

// ============================================================================
// Tests
// ============================================================================
