//! Countdown state machine.
//!
//! The controller is the single owner of the timer state. Button presses
//! from the window and ticks from the scheduler arrive on one command
//! channel, so state changes are applied strictly one at a time:
//! - Start toggles Idle → Running → Paused → Running
//! - Reset returns to the first focus session from any state
//! - Each tick removes one second; reaching zero completes the phase

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use super::scheduler::TickSource;
use crate::notification::{NotificationType, Notifier, FALLBACK_TITLE, NOTIFICATION_TITLE};
use crate::sound::SoundPlayer;
use crate::types::{PomodoroConfig, TimerState};
use crate::window::{ButtonLabel, RenderData, UiHandle};

// ============================================================================
// ControllerCommand
// ============================================================================

/// Inputs to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCommand {
    /// The Start/Pause/Resume button was pressed
    StartPressed,
    /// The Reset button was pressed
    ResetPressed,
    /// One tick elapsed in the scheduler run with this generation
    Tick {
        generation: u64,
    },
}

// ============================================================================
// ControllerStatus
// ============================================================================

/// Run state derived from the timer flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerStatus {
    Idle,
    Running,
    Paused,
}

impl ControllerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerStatus::Idle => "idle",
            ControllerStatus::Running => "running",
            ControllerStatus::Paused => "paused",
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Drives the timer state in response to button presses and ticks.
pub struct Controller {
    state: TimerState,
    scheduler: Box<dyn TickSource>,
    ui: UiHandle,
    notifier: Arc<dyn Notifier>,
    sound: Arc<dyn SoundPlayer>,
    /// Generation of the scheduler run whose ticks are accepted
    active_generation: Option<u64>,
}

impl Controller {
    /// Creates an idle controller at the first focus session.
    pub fn new(
        config: PomodoroConfig,
        scheduler: Box<dyn TickSource>,
        ui: UiHandle,
        notifier: Arc<dyn Notifier>,
        sound: Arc<dyn SoundPlayer>,
    ) -> Self {
        Self {
            state: TimerState::new(config),
            scheduler,
            ui,
            notifier,
            sound,
            active_generation: None,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the current run state.
    pub fn status(&self) -> ControllerStatus {
        match (self.state.running, self.state.paused) {
            (false, _) => ControllerStatus::Idle,
            (true, false) => ControllerStatus::Running,
            (true, true) => ControllerStatus::Paused,
        }
    }

    /// Processes commands until every sender is dropped.
    ///
    /// Sends one render before the first command so the window shows the
    /// initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the window stops accepting updates.
    pub async fn run(mut self, mut commands: UnboundedReceiver<ControllerCommand>) -> Result<()> {
        let result = self.process(&mut commands).await;

        self.stop_ticking();
        if result.is_ok() {
            // The window may already be gone; nothing left to tell it then
            let _ = self.ui.shutdown();
        }
        debug!("Controller loop finished");
        result
    }

    async fn process(&mut self, commands: &mut UnboundedReceiver<ControllerCommand>) -> Result<()> {
        self.render()?;
        while let Some(command) = commands.recv().await {
            self.handle(command)?;
        }
        Ok(())
    }

    /// Applies a single command.
    pub fn handle(&mut self, command: ControllerCommand) -> Result<()> {
        match command {
            ControllerCommand::StartPressed => self.start_pressed(),
            ControllerCommand::ResetPressed => self.reset_pressed(),
            ControllerCommand::Tick { generation } => self.on_tick(generation),
        }
    }

    /// Handles the Start/Pause/Resume button.
    pub fn start_pressed(&mut self) -> Result<()> {
        match self.status() {
            ControllerStatus::Idle => {
                self.state.running = true;
                self.start_ticking();
                self.ui.set_start_label(ButtonLabel::Pause)?;
                info!(phase = %self.state.phase, session = self.state.session, "Timer started");
            }
            ControllerStatus::Running => {
                self.stop_ticking();
                self.state.paused = true;
                self.ui.set_start_label(ButtonLabel::Resume)?;
                info!(remaining_secs = self.state.remaining.as_secs(), "Timer paused");
            }
            ControllerStatus::Paused => {
                self.state.paused = false;
                self.start_ticking();
                self.ui.set_start_label(ButtonLabel::Pause)?;
                info!(remaining_secs = self.state.remaining.as_secs(), "Timer resumed");
            }
        }
        Ok(())
    }

    /// Handles the Reset button.
    pub fn reset_pressed(&mut self) -> Result<()> {
        // Stop first so a queued tick cannot touch the reset state
        self.stop_ticking();
        self.state.reset();
        self.ui.set_start_label(ButtonLabel::Start)?;
        self.render()?;
        info!("Timer reset");
        Ok(())
    }

    /// Handles one scheduler tick.
    pub fn on_tick(&mut self, generation: u64) -> Result<()> {
        if self.active_generation != Some(generation) || !self.state.is_ticking() {
            debug!(
                generation,
                active = ?self.active_generation,
                "Ignoring stale tick"
            );
            return Ok(());
        }

        let completed = self.state.tick();
        self.render()?;

        if completed {
            self.stop_ticking();
            self.state.running = false;
            self.ui.set_start_label(ButtonLabel::Start)?;
            self.complete_phase()?;
            self.render()?;
        }

        Ok(())
    }

    /// Alerts the user and moves to the next phase.
    fn complete_phase(&mut self) -> Result<()> {
        let alert = self.alert(NotificationType::for_completed(self.state.phase));

        let completed = self.state.complete_phase();
        info!(
            completed = %completed,
            next = %self.state.phase,
            session = self.state.session,
            "Phase completed"
        );

        alert
    }

    /// Sends the desktop notification and beeps.
    ///
    /// A failed notification falls back to an in-window message. The beep is
    /// attempted either way.
    fn alert(&self, kind: NotificationType) -> Result<()> {
        let message = kind.message();

        let fallback = match self.notifier.notify(NOTIFICATION_TITLE, message) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, suggestion = e.suggestion(), "Notification failed, showing message in window");
                self.ui.show_message(FALLBACK_TITLE, message)
            }
        };

        if let Err(e) = self.sound.beep() {
            warn!(error = %e, suggestion = e.suggestion(), "Beep failed");
        }

        fallback
    }

    fn render(&self) -> Result<()> {
        let data = RenderData::from_state(&self.state);
        self.ui
            .render(&data.phase_label, &data.timer_text, &data.session_text)
    }

    fn start_ticking(&mut self) {
        self.active_generation = Some(self.scheduler.start());
    }

    fn stop_ticking(&mut self) {
        if self.scheduler.is_active() {
            self.scheduler.stop();
        }
        self.active_generation = None;
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("status", &self.status())
            .field("active_generation", &self.active_generation)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
