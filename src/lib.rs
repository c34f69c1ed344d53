//! Hexfall - A hexagonal arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, spawning, collisions, round state)
//! - `round`: Frame-paced game loop and end-of-round epilogue
//! - `audio`: Music/cue service handed to the round by the host
//! - `render`: Per-frame data handed to the host's renderer
//! - `settings`: JSON-backed configuration

pub mod audio;
pub mod error;
pub mod input;
pub mod records;
pub mod render;
pub mod round;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, RoundError, SetupError};
pub use records::BestTimes;
pub use round::{RoundConfig, RoundSummary, run_round};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the game loop
    pub const TARGET_FPS: u32 = 60;
    /// Frame budget in whole milliseconds
    pub const FRAME_MS: u64 = 1000 / TARGET_FPS as u64;

    /// Arena dimensions
    pub const INNER_CIRCLE_RADIUS: f32 = 50.0;
    /// Walls spawn at the arena's outer edge
    pub const WALL_SPAWN_DISTANCE: f32 = 500.0;
    /// Radial thickness of a wall band
    pub const WALL_THICKNESS: f32 = 10.0;
    /// Walls closer than `INNER_CIRCLE_RADIUS - PRUNE_MARGIN` are gone
    pub const PRUNE_MARGIN: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_DISTANCE: f32 = 70.0;
    /// Degrees turned per left/right event
    pub const ROTATION_STEP: f32 = 5.0;

    /// Zones
    pub const ZONE_COUNT: u8 = 6;
    pub const ZONE_ARC: f32 = 360.0 / ZONE_COUNT as f32;

    /// Epilogue timings
    pub const GAME_OVER_CUE_MS: u64 = 5_000;
    pub const OUTRO_MS: u64 = 10_000;

    /// Number of in-game music tracks
    pub const PLAYLIST_LEN: usize = 7;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
