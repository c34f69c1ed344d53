//! Game state and core simulation types
//!
//! Everything one round owns lives here: the player, the wall timeline,
//! the clock, the spawn schedule and the seeded RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::spawner::{self, SpawnSchedule};
use super::timeline::WallTimeline;
use super::zone::Zone;
use crate::consts::*;
use crate::normalize_degrees;

/// Difficulty level picked before a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Walls moving, player steering
    Playing,
    /// A wall hit the player; the round is over
    Collided,
}

/// Something the simulation wants the outer layers to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player asked for another music track
    TrackChange,
    /// A spawn batch was appended to the timeline
    WallsSpawned { count: usize },
    /// Expired walls were dropped
    WallsCleared { count: usize },
    /// The player hit the given wall
    Collision { wall_id: u32 },
}

/// The rotating player token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Current angle (degrees, [0, 360))
    pub angle: f32,
    /// Fixed radial offset from the arena centre
    pub distance: f32,
    /// Token diameter
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            angle: 0.0,
            distance: PLAYER_DISTANCE,
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    /// Rotate by `delta` degrees, wrapping into [0, 360)
    pub fn rotate(&mut self, delta: f32) {
        self.angle = normalize_degrees(self.angle + delta);
    }

    /// Zone the player currently occupies
    pub fn zone(&self) -> Zone {
        Zone::from_angle(self.angle)
    }
}

/// A wall closing in on the centre inside one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u32,
    pub zone: Zone,
    /// Distance of the inner edge from the centre
    pub distance: f32,
    /// Distance lost per tick
    pub speed: f32,
}

impl Wall {
    /// A fresh wall at the outer edge of the arena
    pub fn spawn(id: u32, difficulty: Difficulty, rng: &mut Pcg32) -> Self {
        let zone = Zone::ALL[rng.random_range(0..ZONE_COUNT as usize)];
        Self {
            id,
            zone,
            distance: WALL_SPAWN_DISTANCE,
            speed: spawner::wall_speed(difficulty, rng),
        }
    }

    /// Outer edge of the wall band
    #[inline]
    pub fn outer_distance(&self) -> f32 {
        self.distance + WALL_THICKNESS
    }

    /// Wall has reached the inner circle and no longer matters
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.distance <= INNER_CIRCLE_RADIUS - PRUNE_MARGIN
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    pub difficulty: Difficulty,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub walls: WallTimeline,
    pub clock: Clock,
    pub schedule: SpawnSchedule,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Walls created over the round, initial pair included
    pub walls_spawned: u64,
    /// Walls that reached the centre without hitting the player
    pub walls_cleared: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new round state, seeded with two walls so collision always has data
    pub fn new(difficulty: Difficulty, seed: u64, now_ms: u64) -> Self {
        let mut state = Self {
            difficulty,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player: Player::default(),
            walls: WallTimeline::new(),
            clock: Clock::start(now_ms),
            schedule: SpawnSchedule::new(difficulty),
            time_ticks: 0,
            walls_spawned: 0,
            walls_cleared: 0,
            next_id: 1,
        };

        state.spawn_walls(2);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append `count` freshly randomized walls to the tail
    pub fn spawn_walls(&mut self, count: usize) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let wall = Wall::spawn(id, self.difficulty, &mut self.rng);
            self.walls.push(wall);
        }
        self.walls_spawned += count as u64;
    }

    #[inline]
    pub fn collided(&self) -> bool {
        self.phase == GamePhase::Collided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_seeded_with_two_walls() {
        let state = GameState::new(Difficulty::Hard, 7, 1_000);
        assert_eq!(state.walls.len(), 2);
        assert_eq!(state.walls_spawned, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.clock.timer, 0);
        for wall in state.walls.iter() {
            assert_eq!(wall.distance, WALL_SPAWN_DISTANCE);
            assert!(wall.zone.index() < ZONE_COUNT);
        }
    }

    #[test]
    fn test_same_seed_same_walls() {
        let a = GameState::new(Difficulty::Medium, 42, 0);
        let b = GameState::new(Difficulty::Medium, 42, 0);
        let za: Vec<_> = a.walls.iter().map(|w| (w.zone, w.speed)).collect();
        let zb: Vec<_> = b.walls.iter().map(|w| (w.zone, w.speed)).collect();
        assert_eq!(za, zb);
    }

    #[test]
    fn test_opening_walls_come_from_the_seed() {
        let state = GameState::new(Difficulty::Hard, 99, 0);
        let mut rng = Pcg32::seed_from_u64(99);
        let expected: Vec<Wall> = (1..=2).map(|id| Wall::spawn(id, Difficulty::Hard, &mut rng)).collect();
        assert_eq!(state.walls.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_player_rotation_wraps() {
        let mut player = Player::default();
        player.rotate(-ROTATION_STEP);
        assert_eq!(player.angle, 355.0);
        player.rotate(10.0);
        assert_eq!(player.angle, 5.0);
        assert_eq!(player.zone().index(), 0);
    }

    #[test]
    fn test_wall_expiry_threshold() {
        let mut wall = Wall {
            id: 1,
            zone: Zone::ALL[0],
            distance: 40.5,
            speed: 0.5,
        };
        assert!(!wall.is_expired());
        wall.distance = 40.0;
        assert!(wall.is_expired());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
