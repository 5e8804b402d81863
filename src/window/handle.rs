//! Controller-side handle to the window.
//!
//! The controller never touches widget state. Every presentation request is
//! queued onto the UI thread through a crossbeam channel and applied there.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;

use super::event::UiUpdate;
use super::labels::{ButtonLabel, RenderData};

/// Sends presentation requests to the UI thread.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: Sender<UiUpdate>,
}

impl UiHandle {
    pub fn new(tx: Sender<UiUpdate>) -> Self {
        Self { tx }
    }

    /// Requests a redraw of the phase label, timer and session counter.
    pub fn render(&self, phase_label: &str, timer_text: &str, session_text: &str) -> Result<()> {
        self.send(UiUpdate::Render(RenderData {
            phase_label: phase_label.to_string(),
            timer_text: timer_text.to_string(),
            session_text: session_text.to_string(),
        }))
        .context("Failed to send render update")
    }

    /// Changes the caption of the Start/Pause/Resume button.
    pub fn set_start_label(&self, label: ButtonLabel) -> Result<()> {
        self.send(UiUpdate::SetStartLabel(label))
            .context("Failed to send button label update")
    }

    /// Opens an information dialog in the window.
    pub fn show_message(&self, title: &str, message: &str) -> Result<()> {
        self.send(UiUpdate::ShowMessage {
            title: title.to_string(),
            message: message.to_string(),
        })
        .context("Failed to send message dialog")
    }

    /// Asks the window to close.
    pub fn shutdown(&self) -> Result<()> {
        self.send(UiUpdate::Shutdown)
            .context("Failed to send shutdown")
    }

    fn send(&self, update: UiUpdate) -> Result<()> {
        self.tx
            .send(update)
            .map_err(|_| anyhow::anyhow!("window channel closed"))
    }
}
