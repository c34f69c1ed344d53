//! Best survival times for the current session
//!
//! Kept in memory only; the list lives as long as the host process.

use serde::Serialize;

use crate::round::RoundSummary;
use crate::sim::Difficulty;

/// Maximum number of entries to keep
pub const MAX_BEST_TIMES: usize = 10;

/// Session leaderboard, longest survival first
#[derive(Debug, Clone, Default, Serialize)]
pub struct BestTimes {
    pub entries: Vec<RoundSummary>,
}

impl BestTimes {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a survival time makes the list
    pub fn qualifies(&self, survival_ms: u64) -> bool {
        if survival_ms == 0 {
            return false;
        }
        if self.entries.len() < MAX_BEST_TIMES {
            return true;
        }
        self.entries
            .last()
            .map(|e| survival_ms > e.survival_ms)
            .unwrap_or(true)
    }

    /// Rank a time would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, survival_ms: u64) -> Option<usize> {
        if !self.qualifies(survival_ms) {
            return None;
        }
        let rank = self.entries.iter().position(|e| survival_ms > e.survival_ms);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished round; returns the rank achieved, if any
    pub fn add(&mut self, summary: RoundSummary) -> Option<usize> {
        let rank = self.potential_rank(summary.survival_ms)?;
        self.entries.insert(rank - 1, summary);
        self.entries.truncate(MAX_BEST_TIMES);
        Some(rank)
    }

    /// Longest survival on a given difficulty
    pub fn best_for(&self, difficulty: Difficulty) -> Option<&RoundSummary> {
        self.entries.iter().find(|e| e.difficulty == difficulty)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
