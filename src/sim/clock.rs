//! Round clock and time sources
//!
//! The round clock only ever stores elapsed milliseconds since the round
//! began. Where "now" comes from is a `TimeSource`, so tests can drive the
//! loop with a manual clock.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Provides the current time and blocking waits to the game loop
pub trait TimeSource {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
    /// Block for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall-clock time
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Clock that only moves when told to; sleeping advances it
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
    /// Total time spent in `sleep_ms`
    pub slept_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: start_ms,
            slept_ms: 0,
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.now += ms;
        self.slept_ms += ms;
    }
}

/// Elapsed time of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Epoch of round start
    pub timer_begin: u64,
    /// Elapsed milliseconds as of the last update
    pub timer: u64,
}

impl Clock {
    pub fn start(now_ms: u64) -> Self {
        Self {
            timer_begin: now_ms,
            timer: 0,
        }
    }

    /// Recompute elapsed time; never runs backwards
    pub fn update(&mut self, now_ms: u64) {
        self.timer = self.timer.max(now_ms.saturating_sub(self.timer_begin));
    }
}
