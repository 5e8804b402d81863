//! Core data types for the Pomodoro timer.
//!
//! This module defines:
//! - The three timer phases and their labels
//! - The fixed duration presets and the dev-mode unit switch
//! - The mutable timer state and its phase transitions

use std::fmt;
use std::time::Duration;

/// Focus duration, in units of [`DurationUnit`].
pub const FOCUS_TIME: u32 = 25;

/// Short break duration, in units of [`DurationUnit`].
pub const SHORT_BREAK_TIME: u32 = 5;

/// Long break duration, in units of [`DurationUnit`].
pub const LONG_BREAK_TIME: u32 = 15;

/// Every n-th session routes to a long break instead of a short one.
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// Amount of time removed from the countdown per tick.
pub const TICK_UNIT: Duration = Duration::from_secs(1);

// ============================================================================
// Phase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Focused work interval
    #[default]
    Focus,
    /// Short break after a focus interval
    ShortBreak,
    /// Long break after every fourth focus interval
    LongBreak,
}

impl Phase {
    /// Returns the label shown in the window.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    /// Returns true for either break phase.
    pub fn is_break(&self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// DurationUnit
// ============================================================================

/// Unit applied to the fixed duration presets.
///
/// Dev mode keeps the same numbers but counts them in seconds, so a full
/// focus/break cycle can be checked by hand in under a minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    #[default]
    Minutes,
    Seconds,
}

impl DurationUnit {
    /// Converts a preset value into a duration.
    pub fn scale(&self, value: u32) -> Duration {
        match self {
            DurationUnit::Minutes => Duration::from_secs(u64::from(value) * 60),
            DurationUnit::Seconds => Duration::from_secs(u64::from(value)),
        }
    }
}

// ============================================================================
// PomodoroConfig
// ============================================================================

/// Configuration for the Pomodoro timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroConfig {
    /// Focus length in `unit`s
    pub focus: u32,
    /// Short break length in `unit`s
    pub short_break: u32,
    /// Long break length in `unit`s
    pub long_break: u32,
    /// Unit the three lengths are measured in
    pub unit: DurationUnit,
    /// Wall-clock time between scheduler ticks
    pub tick_period: Duration,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus: FOCUS_TIME,
            short_break: SHORT_BREAK_TIME,
            long_break: LONG_BREAK_TIME,
            unit: DurationUnit::Minutes,
            tick_period: Duration::from_secs(1),
        }
    }
}

impl PomodoroConfig {
    /// Builds the preset for normal or dev mode.
    pub fn for_mode(dev: bool) -> Self {
        let unit = if dev {
            DurationUnit::Seconds
        } else {
            DurationUnit::Minutes
        };
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Overrides the scheduler tick period.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Returns true when durations are counted in seconds.
    pub fn is_dev(&self) -> bool {
        self.unit == DurationUnit::Seconds
    }

    /// Default duration of the given phase.
    pub fn duration_for(&self, phase: Phase) -> Duration {
        let value = match phase {
            Phase::Focus => self.focus,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        };
        self.unit.scale(value)
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Current phase
    pub phase: Phase,
    /// Completed focus intervals + 1
    pub session: u32,
    /// Time left in the current phase
    pub remaining: Duration,
    /// Start has been pressed and the timer has not finished or been reset
    pub running: bool,
    /// Ticking is suspended while running
    pub paused: bool,
    /// Duration presets
    pub config: PomodoroConfig,
}

impl TimerState {
    /// Creates a new state at the first focus session, not running.
    pub fn new(config: PomodoroConfig) -> Self {
        Self {
            phase: Phase::Focus,
            session: 1,
            remaining: config.duration_for(Phase::Focus),
            running: false,
            paused: false,
            config,
        }
    }

    /// Removes one tick unit from the countdown.
    ///
    /// Returns true once the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(TICK_UNIT);
        self.remaining.is_zero()
    }

    /// Moves to the phase that follows the current one.
    ///
    /// Returns the phase that just completed.
    pub fn complete_phase(&mut self) -> Phase {
        let completed = self.phase;
        self.phase = match completed {
            Phase::Focus => {
                self.session += 1;
                if self.session % LONG_BREAK_INTERVAL == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };
        self.remaining = self.config.duration_for(self.phase);
        completed
    }

    /// Returns to the initial state: first focus session, not running.
    pub fn reset(&mut self) {
        self.phase = Phase::Focus;
        self.session = 1;
        self.remaining = self.config.duration_for(Phase::Focus);
        self.running = false;
        self.paused = false;
    }

    /// Returns true while the countdown is actively ticking.
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }
}

/// Formats a duration as `MM:SS`.
///
/// Minutes are not capped at 59; 90 minutes renders as `90:00`.
pub fn format_timer(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

// ============================================================================
// Tests
// ============================================================================
