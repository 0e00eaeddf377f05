use std::env;

use crate::error::ReplayError;
use crate::playback::Speed;

const DEFAULT_COMMAND_BUFFER: usize = 32;

/// Replay session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Initial autoplay speed
    pub autoplay_speed: Speed,
    /// Start autoplay as soon as the session is spawned
    pub autoplay_on_start: bool,
    /// Capacity of the session command channel
    pub command_buffer: usize,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            autoplay_speed: Speed::Normal,
            autoplay_on_start: false,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl ReplayConfig {
    /// Builds the config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ReplayError> {
        Ok(Self {
            autoplay_speed: autoplay_speed()?,
            autoplay_on_start: autoplay_on_start()?,
            command_buffer: command_buffer()?,
        })
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.autoplay_speed = speed;
        self
    }

    pub fn with_autoplay_on_start(mut self, on: bool) -> Self {
        self.autoplay_on_start = on;
        self
    }
}

/// Get autoplay speed from environment (defaults to 1x)
fn autoplay_speed() -> Result<Speed, ReplayError> {
    match env::var("REPLAY_AUTOPLAY_SPEED") {
        Ok(raw) => raw.parse().map_err(|_| {
            ReplayError::config(format!(
                "REPLAY_AUTOPLAY_SPEED must be 0.5, 1 or 2, but got: '{raw}'"
            ))
        }),
        Err(_) => Ok(Speed::Normal),
    }
}

/// Get autoplay-on-start flag from environment (defaults to false)
fn autoplay_on_start() -> Result<bool, ReplayError> {
    let Ok(raw) = env::var("REPLAY_AUTOPLAY_ON_START") else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ReplayError::config(format!(
            "REPLAY_AUTOPLAY_ON_START must be a boolean, but got: '{raw}'"
        ))),
    }
}

/// Get command channel capacity from environment (defaults to 32)
fn command_buffer() -> Result<usize, ReplayError> {
    let Ok(raw) = env::var("REPLAY_COMMAND_BUFFER") else {
        return Ok(DEFAULT_COMMAND_BUFFER);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ReplayError::config(format!(
            "REPLAY_COMMAND_BUFFER must be a positive integer, but got: '{raw}'"
        ))),
    }
}
