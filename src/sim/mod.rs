//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick wall movement only
//! - Seeded RNG only
//! - Stable wall ordering (by distance, then spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timeline;
pub mod zone;

pub use clock::{Clock, ManualClock, SystemClock, TimeSource};
pub use collision::{CollisionResult, check_collision, inflated_radius};
pub use spawner::{SpawnSchedule, batch_size, spawn_interval, wall_speed};
pub use state::{Difficulty, GameEvent, GamePhase, GameState, Player, Wall};
pub use tick::{TickInput, advance, resolve, tick};
pub use timeline::WallTimeline;
pub use zone::Zone;
