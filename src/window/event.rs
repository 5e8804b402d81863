//! Events crossing the window boundary.
//!
//! This module handles:
//! - `UiUpdate`: messages from the controller, applied on the UI thread
//! - `WindowAction`: what a key press means to the window
//!
//! The key mapping is platform-independent and fully testable.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::labels::{ButtonLabel, RenderData};

// ============================================================================
// UiUpdate
// ============================================================================

/// Updates sent from the controller to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Refresh the phase label, timer and session counter
    Render(RenderData),
    /// Change the caption of the Start/Pause/Resume button
    SetStartLabel(ButtonLabel),
    /// Show an information dialog inside the window
    ShowMessage {
        title: String,
        message: String,
    },
    /// The controller has stopped; close the window
    Shutdown,
}

// ============================================================================
// WindowAction
// ============================================================================

/// Actions triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    /// Press the Start/Pause/Resume button
    Start,
    /// Press the Reset button
    Reset,
    /// Close the information dialog
    DismissMessage,
    /// Close the window
    Quit,
}

impl fmt::Display for WindowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowAction::Start => write!(f, "start"),
            WindowAction::Reset => write!(f, "reset"),
            WindowAction::DismissMessage => write!(f, "dismiss"),
            WindowAction::Quit => write!(f, "quit"),
        }
    }
}

impl WindowAction {
    /// Maps a key press to an action.
    ///
    /// While a dialog is open it is modal: only dismiss and quit keys do
    /// anything.
    pub fn from_key(key: KeyEvent, dialog_open: bool) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(WindowAction::Quit);
        }

        if dialog_open {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(WindowAction::DismissMessage),
                KeyCode::Char('q') => Some(WindowAction::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('s') | KeyCode::Char(' ') => Some(WindowAction::Start),
            KeyCode::Char('r') => Some(WindowAction::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(WindowAction::Quit),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
