//! Text shown in the timer window.
//!
//! This module handles:
//! - The window title, with a suffix in dev mode
//! - Button captions
//! - The three render strings derived from the timer state
//!
//! Everything here is pure and fully testable.

use std::fmt;

use crate::types::{format_timer, TimerState};

// ============================================================================
// Constants
// ============================================================================

/// Base window title.
pub const WINDOW_TITLE: &str = "Pomodoro";

/// Suffix appended to the title in dev mode.
const DEV_MODE_SUFFIX: &str = " (Dev Mode)";

/// Returns the window title for the given mode.
pub fn window_title(dev: bool) -> String {
    if dev {
        format!("{}{}", WINDOW_TITLE, DEV_MODE_SUFFIX)
    } else {
        WINDOW_TITLE.to_string()
    }
}

/// Returns the session counter text, e.g. `Session: 3`.
pub fn session_text(session: u32) -> String {
    format!("Session: {}", session)
}

// ============================================================================
// ButtonLabel
// ============================================================================

/// Captions of the two window buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLabel {
    #[default]
    Start,
    Pause,
    Resume,
    Reset,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::Start => "Start",
            ButtonLabel::Pause => "Pause",
            ButtonLabel::Resume => "Resume",
            ButtonLabel::Reset => "Reset",
        }
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RenderData
// ============================================================================

/// The three strings handed to the window on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderData {
    /// "Focus", "Short Break" or "Long Break"
    pub phase_label: String,
    /// Remaining time as `MM:SS`
    pub timer_text: String,
    /// Session counter text
    pub session_text: String,
}

impl RenderData {
    /// Builds render data from the timer state.
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            phase_label: state.phase.label().to_string(),
            timer_text: format_timer(state.remaining),
            session_text: session_text(state.session),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
