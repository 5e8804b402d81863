//! Timer window for the Pomodoro timer.
//!
//! This module provides:
//! - The widget state shown in the window (`WindowModel`)
//! - The UI-thread event loop (`Window::run`)
//! - The controller-side handle that marshals updates onto the UI thread
//!
//! # Architecture
//!
//! The window runs on the main thread and is the only code that mutates
//! widget state. The controller runs in a tokio task and sends `UiUpdate`s
//! through a crossbeam channel; the window drains that channel before every
//! frame. Button presses travel the other way as `ControllerCommand`s.
//!
//! ```text
//! ┌──────────────┐  ControllerCommand  ┌──────────────┐
//! │    Window    │ ──────────────────▶ │  Controller  │
//! │ (main thread)│ ◀────────────────── │ (tokio task) │
//! └──────────────┘      UiUpdate       └──────────────┘
//! ```

pub mod event;
pub mod handle;
pub mod labels;
pub mod view;

pub use event::{UiUpdate, WindowAction};
pub use handle::UiHandle;
pub use labels::{window_title, ButtonLabel, RenderData};

use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self as term_event, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc::UnboundedSender;

use crate::engine::ControllerCommand;
use crate::types::TimerState;

/// How long the event loop waits for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// WindowModel
// ============================================================================

/// An information dialog shown inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMessage {
    pub title: String,
    pub message: String,
}

/// Everything the window displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowModel {
    pub title: String,
    pub phase_label: String,
    pub timer_text: String,
    pub session_text: String,
    pub start_label: ButtonLabel,
    pub message: Option<InfoMessage>,
}

impl WindowModel {
    /// Creates the model for a freshly started timer.
    pub fn new(state: &TimerState) -> Self {
        let data = RenderData::from_state(state);
        Self {
            title: window_title(state.config.is_dev()),
            phase_label: data.phase_label,
            timer_text: data.timer_text,
            session_text: data.session_text,
            start_label: ButtonLabel::Start,
            message: None,
        }
    }

    /// Applies an update from the controller.
    ///
    /// Returns `false` when the update asks the window to close.
    pub fn apply(&mut self, update: UiUpdate) -> bool {
        match update {
            UiUpdate::Render(data) => {
                self.phase_label = data.phase_label;
                self.timer_text = data.timer_text;
                self.session_text = data.session_text;
            }
            UiUpdate::SetStartLabel(label) => {
                self.start_label = label;
            }
            UiUpdate::ShowMessage { title, message } => {
                self.message = Some(InfoMessage { title, message });
            }
            UiUpdate::Shutdown => return false,
        }
        true
    }
}

// ============================================================================
// Window
// ============================================================================

/// Owns the widget state and runs the UI event loop.
pub struct Window {
    model: WindowModel,
    update_rx: Receiver<UiUpdate>,
    commands: UnboundedSender<ControllerCommand>,
    closed: bool,
}

impl Window {
    /// Creates a new window.
    ///
    /// # Arguments
    ///
    /// * `state` - Initial timer state, used for the first frame
    /// * `update_rx` - Channel receiving updates from the controller
    /// * `commands` - Channel delivering button presses to the controller
    pub fn new(
        state: &TimerState,
        update_rx: Receiver<UiUpdate>,
        commands: UnboundedSender<ControllerCommand>,
    ) -> Self {
        Self {
            model: WindowModel::new(state),
            update_rx,
            commands,
            closed: false,
        }
    }

    /// Returns the current widget state.
    pub fn model(&self) -> &WindowModel {
        &self.model
    }

    /// Returns whether the window has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies every update queued by the controller.
    ///
    /// Returns the number of updates processed.
    pub fn process_pending_updates(&mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.update_rx.try_recv() {
                Ok(update) => {
                    processed += 1;
                    if !self.model.apply(update) {
                        tracing::info!("Controller requested window shutdown");
                        self.closed = true;
                        return processed;
                    }
                }
                Err(TryRecvError::Empty) => return processed,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Window update channel disconnected");
                    self.closed = true;
                    return processed;
                }
            }
        }
    }

    /// Handles a user action.
    pub fn dispatch(&mut self, action: WindowAction) {
        tracing::debug!(action = %action, "Window action");

        let command = match action {
            WindowAction::Start => ControllerCommand::StartPressed,
            WindowAction::Reset => ControllerCommand::ResetPressed,
            WindowAction::DismissMessage => {
                self.model.message = None;
                return;
            }
            WindowAction::Quit => {
                self.closed = true;
                return;
            }
        };

        if self.commands.send(command).is_err() {
            tracing::warn!("Controller is no longer running, closing window");
            self.closed = true;
        }
    }

    /// Runs the event loop until the window is closed.
    ///
    /// Must be called on the thread that owns the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.process_pending_updates();
            if self.closed {
                return Ok(());
            }

            terminal.draw(|f| view::draw(f, &self.model))?;

            if term_event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = term_event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) =
                            WindowAction::from_key(key, self.model.message.is_some())
                        {
                            self.dispatch(action);
                        }
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("model", &self.model)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PomodoroConfig;
    use crossbeam_channel::unbounded;
    use tokio::sync::mpsc;

    fn create_window() -> (
        Window,
        crossbeam_channel::Sender<UiUpdate>,
        mpsc::UnboundedReceiver<ControllerCommand>,
    ) {
        let (ui_tx, ui_rx) = unbounded();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let state = TimerState::new(PomodoroConfig::default());
        (Window::new(&state, ui_rx, cmd_tx), ui_tx, cmd_rx)
    }

    // ------------------------------------------------------------------------
    // WindowModel Tests
    // ------------------------------------------------------------------------

    mod model_tests {
        use super::*;

        #[test]
        fn test_new_model() {
            let model = WindowModel::new(&TimerState::new(PomodoroConfig::default()));

            assert_eq!(model.title, "Pomodoro");
            assert_eq!(model.phase_label, "Focus");
            assert_eq!(model.timer_text, "25:00");
            assert_eq!(model.session_text, "Session: 1");
            assert_eq!(model.start_label, ButtonLabel::Start);
            assert!(model.message.is_none());
        }

        #[test]
        fn test_new_model_dev_mode() {
            let model = WindowModel::new(&TimerState::new(PomodoroConfig::for_mode(true)));

            assert_eq!(model.title, "Pomodoro (Dev Mode)");
            assert_eq!(model.timer_text, "00:25");
        }

        #[test]
        fn test_apply_render() {
            let mut model = WindowModel::new(&TimerState::new(PomodoroConfig::default()));

            let keep_open = model.apply(UiUpdate::Render(RenderData {
                phase_label: "Short Break".to_string(),
                timer_text: "04:59".to_string(),
                session_text: "Session: 2".to_string(),
            }));

            assert!(keep_open);
            assert_eq!(model.phase_label, "Short Break");
            assert_eq!(model.timer_text, "04:59");
            assert_eq!(model.session_text, "Session: 2");
        }

        #[test]
        fn test_apply_label_and_message() {
            let mut model = WindowModel::new(&TimerState::new(PomodoroConfig::default()));

            model.apply(UiUpdate::SetStartLabel(ButtonLabel::Pause));
            model.apply(UiUpdate::ShowMessage {
                title: "Notice".to_string(),
                message: "hello".to_string(),
            });

            assert_eq!(model.start_label, ButtonLabel::Pause);
            assert_eq!(
                model.message,
                Some(InfoMessage {
                    title: "Notice".to_string(),
                    message: "hello".to_string(),
                })
            );
        }

        #[test]
        fn test_apply_shutdown() {
            let mut model = WindowModel::new(&TimerState::new(PomodoroConfig::default()));
            assert!(!model.apply(UiUpdate::Shutdown));
        }
    }

    // ------------------------------------------------------------------------
    // Window Tests
    // ------------------------------------------------------------------------

    mod window_tests {
        use super::*;

        #[test]
        fn test_process_pending_updates_empty() {
            let (mut window, _ui_tx, _cmd_rx) = create_window();
            assert_eq!(window.process_pending_updates(), 0);
            assert!(!window.is_closed());
        }

        #[test]
        fn test_process_pending_updates_in_order() {
            let (mut window, ui_tx, _cmd_rx) = create_window();

            ui_tx
                .send(UiUpdate::SetStartLabel(ButtonLabel::Pause))
                .unwrap();
            ui_tx
                .send(UiUpdate::SetStartLabel(ButtonLabel::Resume))
                .unwrap();

            assert_eq!(window.process_pending_updates(), 2);
            assert_eq!(window.model().start_label, ButtonLabel::Resume);
        }

        #[test]
        fn test_shutdown_closes_window() {
            let (mut window, ui_tx, _cmd_rx) = create_window();

            ui_tx.send(UiUpdate::Shutdown).unwrap();
            window.process_pending_updates();

            assert!(window.is_closed());
        }

        #[test]
        fn test_disconnect_closes_window() {
            let (mut window, ui_tx, _cmd_rx) = create_window();
            drop(ui_tx);

            window.process_pending_updates();

            assert!(window.is_closed());
        }

        #[test]
        fn test_dispatch_forwards_buttons() {
            let (mut window, _ui_tx, mut cmd_rx) = create_window();

            window.dispatch(WindowAction::Start);
            window.dispatch(WindowAction::Reset);

            assert_eq!(cmd_rx.try_recv().unwrap(), ControllerCommand::StartPressed);
            assert_eq!(cmd_rx.try_recv().unwrap(), ControllerCommand::ResetPressed);
            assert!(!window.is_closed());
        }

        #[test]
        fn test_dispatch_dismiss_clears_message() {
            let (mut window, ui_tx, mut cmd_rx) = create_window();

            ui_tx
                .send(UiUpdate::ShowMessage {
                    title: "Notice".to_string(),
                    message: "hello".to_string(),
                })
                .unwrap();
            window.process_pending_updates();
            assert!(window.model().message.is_some());

            window.dispatch(WindowAction::DismissMessage);

            assert!(window.model().message.is_none());
            assert!(cmd_rx.try_recv().is_err());
        }

        #[test]
        fn test_dispatch_quit() {
            let (mut window, _ui_tx, _cmd_rx) = create_window();
            window.dispatch(WindowAction::Quit);
            assert!(window.is_closed());
        }

        #[test]
        fn test_dispatch_after_controller_gone_closes_window() {
            let (mut window, _ui_tx, cmd_rx) = create_window();
            drop(cmd_rx);

            window.dispatch(WindowAction::Start);

            assert!(window.is_closed());
        }

        #[test]
        fn test_debug() {
            let (window, _ui_tx, _cmd_rx) = create_window();
            let debug = format!("{:?}", window);
            assert!(debug.contains("Window"));
            assert!(debug.contains("closed"));
        }
    }
}
