//! Alert tone playback using rodio.

use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tracing::debug;

use super::error::SoundError;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY: f32 = 587.0;

/// Default tone length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Output volume applied to the sine wave.
const VOLUME: f32 = 0.2;

/// Plays a short sine tone on the default output device.
///
/// The audio stream is opened on a dedicated thread for every beep and lives
/// only until the tone has finished, so the player itself is `Send + Sync`
/// and holds no device handle.
#[derive(Debug, Clone)]
pub struct RodioSoundPlayer {
    frequency: f32,
    duration: Duration,
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RodioSoundPlayer {
    /// Creates a player with the default tone.
    pub fn new() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            duration: DEFAULT_DURATION,
        }
    }

    /// Creates a player with a custom tone.
    pub fn with_tone(frequency: f32, duration: Duration) -> Self {
        Self {
            frequency,
            duration,
        }
    }

    /// Returns the tone frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Returns the tone length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts the alert tone.
    ///
    /// Blocks only until the output device has been opened; the tone itself
    /// plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if no output device or stream can be opened.
    pub fn beep(&self) -> Result<(), SoundError> {
        let (ready_tx, ready_rx) = crossbeam_channel::bounded(1);
        let frequency = self.frequency;
        let duration = self.duration;

        thread::Builder::new()
            .name("beep".to_string())
            .spawn(move || {
                // The stream must stay alive until the sink has drained.
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => pair,
                    Err(e) => {
                        let _ = ready_tx.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
                        return;
                    }
                };
                let sink = match Sink::try_new(&handle) {
                    Ok(sink) => sink,
                    Err(e) => {
                        let _ = ready_tx.send(Err(SoundError::StreamError(e.to_string())));
                        return;
                    }
                };

                sink.append(
                    SineWave::new(frequency)
                        .take_duration(duration)
                        .amplify(VOLUME),
                );
                let _ = ready_tx.send(Ok(()));
                sink.sleep_until_end();
                debug!("Beep finished");
            })
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?
    }
}
