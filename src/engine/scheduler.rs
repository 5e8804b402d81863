//! Tick source for the timer.
//!
//! Each `start()` spawns a fresh tokio task that delivers
//! `ControllerCommand::Tick` into the controller's command channel at a fixed
//! period. `stop()` aborts that task. Every run is tagged with a new
//! generation number so the controller can drop ticks that were already
//! queued when the run was stopped.

use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use super::controller::ControllerCommand;

// ============================================================================
// TickSource
// ============================================================================

/// A restartable source of timer ticks.
pub trait TickSource: Send {
    /// Begins a new tick stream and returns its generation.
    ///
    /// Any stream that is still running is stopped first.
    fn start(&mut self) -> u64;

    /// Stops the current tick stream, if any.
    fn stop(&mut self);

    /// Returns true while a tick stream is running.
    fn is_active(&self) -> bool;
}

// ============================================================================
// IntervalScheduler
// ============================================================================

/// Tick source backed by `tokio::time::interval`.
pub struct IntervalScheduler {
    runtime: Handle,
    period: Duration,
    /// Weak so that a running scheduler never keeps the command channel open
    tick_tx: WeakUnboundedSender<ControllerCommand>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalScheduler {
    /// Creates a stopped scheduler.
    ///
    /// # Arguments
    ///
    /// * `runtime` - Runtime the tick tasks are spawned on
    /// * `period` - Time between ticks
    /// * `tick_tx` - Controller command channel
    pub fn new(
        runtime: Handle,
        period: Duration,
        tick_tx: &UnboundedSender<ControllerCommand>,
    ) -> Self {
        Self {
            runtime,
            period,
            tick_tx: tick_tx.downgrade(),
            task: None,
            generation: 0,
        }
    }

    /// Returns the generation of the most recent run.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalScheduler {
    fn start(&mut self) -> u64 {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        let tick_tx = self.tick_tx.clone();

        self.task = Some(self.runtime.spawn(async move {
            // First tick one full period after start, like a wall-clock ticker
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let Some(tx) = tick_tx.upgrade() else {
                    debug!(generation, "Command channel closed, tick task exiting");
                    break;
                };
                if tx.send(ControllerCommand::Tick { generation }).is_err() {
                    debug!(generation, "Controller gone, tick task exiting");
                    break;
                }
            }
        }));

        debug!(generation, period_ms = period.as_millis() as u64, "Scheduler started");
        generation
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = self.generation, "Scheduler stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("period", &self.period)
            .field("generation", &self.generation)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MockTickSource
// ============================================================================

#[derive(Debug, Default)]
struct MockTickCounters {
    starts: usize,
    stops: usize,
    generation: u64,
    active: bool,
}

/// Tick source that never ticks on its own, for driving the controller by hand.
///
/// Clones share their counters, so a test can keep one clone while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTickSource {
    counters: Arc<Mutex<MockTickCounters>>,
}

impl MockTickSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `start()` calls.
    #[must_use]
    pub fn start_count(&self) -> usize {
        self.counters.lock().unwrap().starts
    }

    /// Number of `stop()` calls that stopped a running stream.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.counters.lock().unwrap().stops
    }

    /// Generation returned by the latest `start()`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.counters.lock().unwrap().generation
    }
}

impl TickSource for MockTickSource {
    fn start(&mut self) -> u64 {
        let mut counters = self.counters.lock().unwrap();
        counters.starts += 1;
        counters.generation += 1;
        counters.active = true;
        counters.generation
    }

    fn stop(&mut self) {
        let mut counters = self.counters.lock().unwrap();
        if counters.active {
            counters.stops += 1;
            counters.active = false;
        }
    }

    fn is_active(&self) -> bool {
        self.counters.lock().unwrap().active
    }
}

// ============================================================================
// Tests
// ============================================================================
