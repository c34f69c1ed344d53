//! Difficulty-driven wall spawning policy
//!
//! Decides how often spawn batches fire, how fast new walls move and how
//! many walls each batch contains.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Difficulty;

/// Milliseconds between spawn batches.
///
/// Medium is slower than Easy; kept as tuned.
pub fn spawn_interval(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::Easy => 4000,
        Difficulty::Medium => 6500,
        Difficulty::Hard => 3000,
    }
}

/// Per-tick speed for a newly spawned wall
pub fn wall_speed(difficulty: Difficulty, rng: &mut Pcg32) -> f32 {
    match difficulty {
        Difficulty::Easy => 0.5,
        Difficulty::Medium => {
            let speed = rng.random_range(0..5u8) as f32 / 10.0;
            // A stalled wall would never arrive
            if speed == 0.0 { 0.5 } else { speed }
        }
        Difficulty::Hard => (rng.random_range(0..5u8) + 5) as f32 / 10.0,
    }
}

/// Walls per batch, growing with the round-wide spawn threshold
pub fn batch_size(next_appearance_ms: u64) -> usize {
    match next_appearance_ms {
        0..15_000 => 2,
        15_000..30_000 => 3,
        30_000..45_000 => 4,
        _ => 5,
    }
}

/// When the next spawn batch fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    /// Elapsed-time threshold (ms) for the next batch
    pub next_appearance: u64,
    /// Gap between batches (ms), fixed for the round
    pub interval: u64,
}

impl SpawnSchedule {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            next_appearance: 0,
            interval: spawn_interval(difficulty),
        }
    }

    /// Batch size if a batch is due at `timer_ms`, rescheduling the next one
    pub fn poll(&mut self, timer_ms: u64) -> Option<usize> {
        if self.next_appearance < timer_ms {
            let count = batch_size(self.next_appearance);
            self.next_appearance += self.interval;
            Some(count)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_intervals() {
        assert_eq!(spawn_interval(Difficulty::Easy), 4000);
        assert_eq!(spawn_interval(Difficulty::Medium), 6500);
        assert_eq!(spawn_interval(Difficulty::Hard), 3000);
    }

    #[test]
    fn test_wall_speed_ranges() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let medium = [0.5, 0.1, 0.2, 0.3, 0.4];
        let hard = [0.5, 0.6, 0.7, 0.8, 0.9];
        for _ in 0..500 {
            assert_eq!(wall_speed(Difficulty::Easy, &mut rng), 0.5);

            let m = wall_speed(Difficulty::Medium, &mut rng);
            assert!(medium.iter().any(|v| (v - m).abs() < 1e-6), "medium {m}");
            assert!(m > 0.0);

            let h = wall_speed(Difficulty::Hard, &mut rng);
            assert!(hard.iter().any(|v| (v - h).abs() < 1e-6), "hard {h}");
        }
    }

    #[test]
    fn test_hard_speed_covers_all_values() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let h = wall_speed(Difficulty::Hard, &mut rng);
            let slot = ((h * 10.0).round() as usize) - 5;
            seen[slot] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_batch_size_thresholds() {
        assert_eq!(batch_size(0), 2);
        assert_eq!(batch_size(14_999), 2);
        assert_eq!(batch_size(15_000), 3);
        assert_eq!(batch_size(29_999), 3);
        assert_eq!(batch_size(30_000), 4);
        assert_eq!(batch_size(44_999), 4);
        assert_eq!(batch_size(45_000), 5);
        assert_eq!(batch_size(1_000_000), 5);
    }

    #[test]
    fn test_batch_size_is_monotonic() {
        let mut last = 0;
        for t in (0..120_000).step_by(250) {
            let size = batch_size(t);
            assert!(size >= last);
            last = size;
        }
    }

    #[test]
    fn test_schedule_fires_once_per_interval() {
        let mut schedule = SpawnSchedule::new(Difficulty::Easy);
        assert_eq!(schedule.poll(0), None);
        assert_eq!(schedule.poll(16), Some(2));
        assert_eq!(schedule.next_appearance, 4000);
        assert_eq!(schedule.poll(4000), None);
        assert_eq!(schedule.poll(4001), Some(2));
        assert_eq!(schedule.next_appearance, 8000);
    }

    #[test]
    fn test_schedule_batches_grow_over_round() {
        let mut schedule = SpawnSchedule::new(Difficulty::Hard);
        let mut sizes = Vec::new();
        let mut t = 1;
        while t < 60_000 {
            if let Some(n) = schedule.poll(t) {
                sizes.push(n);
            }
            t += 16;
        }
        assert_eq!(sizes.first(), Some(&2));
        assert_eq!(sizes.last(), Some(&5));
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }
}
