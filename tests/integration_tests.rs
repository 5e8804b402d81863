//! Integration tests for the window and the controller.
//!
//! These tests drive the timer the way a user does: key presses go through
//! `WindowAction` into the window, the window forwards button commands to
//! the controller, and the controller's updates come back into the window
//! model. Ticks are injected by hand through `MockTickSource`.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use pomotick::engine::{Controller, ControllerCommand, ControllerStatus, MockTickSource, TickSource};
use pomotick::notification::{MockNotifier, NotificationType, FALLBACK_TITLE};
use pomotick::sound::MockSoundPlayer;
use pomotick::types::{Phase, PomodoroConfig};
use pomotick::window::{ButtonLabel, UiHandle, Window, WindowAction};

// ============================================================================
// Test Helpers
// ============================================================================

/// Window and controller wired together without a runtime.
struct App {
    window: Window,
    controller: Controller,
    commands: mpsc::UnboundedReceiver<ControllerCommand>,
    ticks: MockTickSource,
    notifier: Arc<MockNotifier>,
    sound: Arc<MockSoundPlayer>,
}

impl App {
    fn new(config: PomodoroConfig) -> Self {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = crossbeam_channel::unbounded();
        let ticks = MockTickSource::new();
        let notifier = Arc::new(MockNotifier::new());
        let sound = Arc::new(MockSoundPlayer::new());

        let controller = Controller::new(
            config,
            Box::new(ticks.clone()),
            UiHandle::new(ui_tx),
            notifier.clone(),
            sound.clone(),
        );
        let window = Window::new(controller.state(), ui_rx, command_tx);

        Self {
            window,
            controller,
            commands,
            ticks,
            notifier,
            sound,
        }
    }

    fn dev() -> Self {
        Self::new(PomodoroConfig::for_mode(true))
    }

    /// Presses a key in the window and lets both sides settle.
    fn press(&mut self, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let dialog_open = self.window.model().message.is_some();
        if let Some(action) = WindowAction::from_key(key, dialog_open) {
            self.window.dispatch(action);
        }
        self.pump();
    }

    /// Delivers `n` ticks from the current scheduler run.
    fn tick(&mut self, n: u64) {
        for _ in 0..n {
            let generation = self.ticks.generation();
            self.controller
                .handle(ControllerCommand::Tick { generation })
                .unwrap();
        }
        self.pump();
    }

    fn pump(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.controller.handle(command).unwrap();
        }
        self.window.process_pending_updates();
    }

    fn shows(&self, phase: &str, timer: &str, session: &str) -> bool {
        let model = self.window.model();
        model.phase_label == phase && model.timer_text == timer && model.session_text == session
    }
}

// ============================================================================
// Start / Pause / Resume
// ============================================================================

#[test]
fn test_start_pause_resume_through_keys() {
    let mut app = App::dev();

    app.press(KeyCode::Char('s'));
    assert_eq!(app.window.model().start_label, ButtonLabel::Pause);
    assert_eq!(app.controller.status(), ControllerStatus::Running);

    app.tick(3);
    assert!(app.shows("Focus", "00:22", "Session: 1"));

    app.press(KeyCode::Char(' '));
    assert_eq!(app.window.model().start_label, ButtonLabel::Resume);
    assert_eq!(app.controller.status(), ControllerStatus::Paused);

    app.press(KeyCode::Char('s'));
    assert_eq!(app.window.model().start_label, ButtonLabel::Pause);
    app.tick(1);
    assert!(app.shows("Focus", "00:21", "Session: 1"));
}

#[test]
fn test_normal_mode_counts_minutes() {
    let mut app = App::new(PomodoroConfig::default());
    assert!(app.shows("Focus", "25:00", "Session: 1"));

    app.press(KeyCode::Char('s'));
    app.tick(61);

    assert!(app.shows("Focus", "23:59", "Session: 1"));
}

// ============================================================================
// Phase Completion
// ============================================================================

#[test]
fn test_focus_completion_updates_window() {
    let mut app = App::dev();

    app.press(KeyCode::Char('s'));
    app.tick(25);

    assert!(app.shows("Short Break", "00:05", "Session: 2"));
    assert_eq!(app.window.model().start_label, ButtonLabel::Start);
    assert!(app.window.model().message.is_none());
    assert_eq!(app.notifier.attempt_count(), 1);
    assert_eq!(app.sound.beep_count(), 1);
}

#[test]
fn test_break_completion_returns_to_focus() {
    let mut app = App::dev();
    app.press(KeyCode::Char('s'));
    app.tick(25);

    app.press(KeyCode::Char('s'));
    app.tick(5);

    assert!(app.shows("Focus", "00:25", "Session: 2"));
    let notifications = app.notifier.get_notifications();
    assert_eq!(
        notifications.last().map(|(_, message)| message.as_str()),
        Some(NotificationType::BreakComplete.message())
    );
}

#[test]
fn test_long_break_when_session_reaches_four() {
    let mut app = App::dev();
    let mut phases = Vec::new();

    for _ in 0..4 {
        app.press(KeyCode::Char('s'));
        app.tick(app.controller.state().remaining.as_secs());
        phases.push(app.controller.state().phase);

        app.press(KeyCode::Char('s'));
        app.tick(app.controller.state().remaining.as_secs());
    }

    assert_eq!(
        phases,
        vec![
            Phase::ShortBreak,
            Phase::ShortBreak,
            Phase::LongBreak,
            Phase::ShortBreak,
        ]
    );
    assert_eq!(app.controller.state().session, 5);
}

#[test]
fn test_long_break_duration_in_window() {
    let mut app = App::dev();

    for _ in 0..3 {
        app.press(KeyCode::Char('s'));
        app.tick(app.controller.state().remaining.as_secs());
        if app.controller.state().phase == Phase::LongBreak {
            break;
        }
        app.press(KeyCode::Char('s'));
        app.tick(app.controller.state().remaining.as_secs());
    }

    assert!(app.shows("Long Break", "00:15", "Session: 4"));
}

// ============================================================================
// Notification Fallback
// ============================================================================

#[test]
fn test_notification_failure_opens_dialog() {
    let mut app = App::dev();
    app.notifier.set_should_fail(true);

    app.press(KeyCode::Char('s'));
    app.tick(25);

    let message = app.window.model().message.clone().unwrap();
    assert_eq!(message.title, FALLBACK_TITLE);
    assert_eq!(message.message, NotificationType::FocusComplete.message());
    assert_eq!(app.sound.beep_count(), 1);
}

#[test]
fn test_dialog_is_modal_until_dismissed() {
    let mut app = App::dev();
    app.notifier.set_should_fail(true);
    app.press(KeyCode::Char('s'));
    app.tick(25);

    // Start is swallowed while the dialog is open
    app.press(KeyCode::Char('s'));
    assert_eq!(app.controller.status(), ControllerStatus::Idle);

    app.press(KeyCode::Enter);
    assert!(app.window.model().message.is_none());
    assert!(!app.window.is_closed());

    app.press(KeyCode::Char('s'));
    assert_eq!(app.controller.status(), ControllerStatus::Running);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_through_keys() {
    let mut app = App::dev();
    app.press(KeyCode::Char('s'));
    app.tick(25);
    app.press(KeyCode::Char('s'));
    app.tick(2);

    app.press(KeyCode::Char('r'));

    assert!(app.shows("Focus", "00:25", "Session: 1"));
    assert_eq!(app.window.model().start_label, ButtonLabel::Start);
    assert_eq!(app.controller.status(), ControllerStatus::Idle);
    assert!(!app.ticks.is_active());
}

#[test]
fn test_reset_while_paused_then_start() {
    let mut app = App::dev();
    app.press(KeyCode::Char('s'));
    app.tick(4);
    app.press(KeyCode::Char('s'));

    app.press(KeyCode::Char('r'));
    app.press(KeyCode::Char('s'));
    app.tick(1);

    assert!(app.shows("Focus", "00:24", "Session: 1"));
    assert_eq!(
        app.controller.state().remaining,
        Duration::from_secs(24)
    );
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn test_quit_keys_close_window() {
    let mut app = App::dev();
    app.press(KeyCode::Char('q'));
    assert!(app.window.is_closed());

    let mut app = App::dev();
    app.press(KeyCode::Esc);
    assert!(app.window.is_closed());
}
