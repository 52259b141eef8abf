//! Host settings
//!
//! Gameplay constants are fixed; these only tune how a host runs the game.
//! Nothing here is ever written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible serves (random when absent)
    pub seed: Option<u64>,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: String,
    /// Frame rate of the native headless loop (0 runs unpaced)
    pub frame_hz: u32,
    /// Native headless loop gives up after this many frames
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
            frame_hz: 60,
            max_frames: 1_000_000,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Configured log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level {:?}, using info", self.log_level);
            log::LevelFilter::Info
        })
    }

    /// Time between native frames, `None` when unpaced
    pub fn frame_interval(&self) -> Option<Duration> {
        (self.frame_hz > 0).then(|| Duration::from_secs_f64(1.0 / self.frame_hz as f64))
    }
}
