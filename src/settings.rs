//! Game settings and preferences
//!
//! Read from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::ConfigError;
use crate::round::RoundConfig;
use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible rounds (None = time-based)
    pub seed: Option<u64>,
    /// Loop cadence
    pub target_fps: u32,
    /// Let the autopilot steer
    pub demo: bool,
    /// Rounds the host plays before exiting
    pub rounds: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Diagnostics ===
    /// Frames between log dumps of the render frame
    pub log_every_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            target_fps: TARGET_FPS,
            demo: false,
            rounds: 1,

            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,

            log_every_frames: 60,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be positive"));
        }
        // Frame budget is whole milliseconds
        if self.target_fps > 1000 {
            return Err(ConfigError::Invalid("target_fps must not exceed 1000"));
        }
        if self.rounds == 0 {
            return Err(ConfigError::Invalid("rounds must be positive"));
        }
        Ok(())
    }

    /// Seed to use for the next round
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Round parameters derived from these settings
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            difficulty: self.difficulty,
            seed: self.effective_seed(),
            frame_ms: 1000 / self.target_fps.max(1) as u64,
            idle_mode: self.demo,
        }
    }
}
