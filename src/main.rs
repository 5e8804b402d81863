//! Pomotick - a Pomodoro timer for the terminal
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after every 4th session

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use pomotick::cli::{Cli, Display};
use pomotick::engine::{Controller, IntervalScheduler};
use pomotick::notification::DesktopNotifier;
use pomotick::sound::RodioSoundPlayer;
use pomotick::window::{UiHandle, Window};

/// How long to wait for the controller after the window closes.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Main entry point
fn main() {
    // Initialize logging
    let log_path = init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %format!("{:#}", e), "Exiting with error");
        Display::show_error(&format!("{:#}", e));
        if let Some(path) = &log_path {
            Display::show_log_hint(path);
        }
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// The window owns the terminal, so events go to a file in the user's cache
/// directory. Returns the file path, or `None` when logging is discarded.
fn init_tracing() -> Option<PathBuf> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(false);

    match open_log_file() {
        Some((path, file)) => {
            builder.with_writer(Mutex::new(file)).init();
            Some(path)
        }
        None => {
            builder.with_writer(io::sink).init();
            None
        }
    }
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let dir = dirs::cache_dir()?.join("pomotick");
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join("pomotick.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}

/// Wires the controller to the window and runs until the window closes.
fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    info!(dev = config.is_dev(), "Starting pomotick");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (ui_tx, ui_rx) = crossbeam_channel::unbounded();

    let scheduler =
        IntervalScheduler::new(runtime.handle().clone(), config.tick_period, &command_tx);
    let controller = Controller::new(
        config,
        Box::new(scheduler),
        UiHandle::new(ui_tx),
        Arc::new(DesktopNotifier::new()),
        Arc::new(RodioSoundPlayer::new()),
    );

    let mut window = Window::new(controller.state(), ui_rx, command_tx);
    let controller_task = runtime.spawn(controller.run(command_rx));

    let ui_result = run_window(&mut window);

    // Dropping the window drops the last command sender and ends the controller
    drop(window);
    match runtime.block_on(async { tokio::time::timeout(SHUTDOWN_TIMEOUT, controller_task).await }) {
        Ok(Ok(Ok(()))) => debug!("Controller stopped"),
        Ok(Ok(Err(e))) => debug!(error = %format!("{:#}", e), "Controller stopped after window closed"),
        Ok(Err(e)) => warn!(error = %e, "Controller task failed"),
        Err(_) => warn!("Controller did not stop in time"),
    }
    runtime.shutdown_timeout(Duration::from_millis(100));

    info!("Window closed");
    ui_result
}

/// Runs the window on the current thread inside the alternate screen.
fn run_window(window: &mut Window) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle(&window.model().title)) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let result = window.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    let restored = restore_terminal();
    result?;
    restored
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
