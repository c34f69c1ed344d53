//! Angular zones of the hexagonal arena
//!
//! Six contiguous 60° sectors starting at 0°: zone `i` spans `[60i, 60(i+1))`.

use serde::{Deserialize, Serialize};

use crate::consts::{ZONE_ARC, ZONE_COUNT};
use crate::normalize_degrees;

/// Start angle (degrees) of each zone
pub const ZONE_START: [f32; ZONE_COUNT as usize] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];
/// End angle (degrees, exclusive) of each zone
pub const ZONE_END: [f32; ZONE_COUNT as usize] = [60.0, 120.0, 180.0, 240.0, 300.0, 360.0];

/// One of the six arena sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Zone(u8);

impl Zone {
    /// All zones in angular order
    pub const ALL: [Zone; ZONE_COUNT as usize] =
        [Zone(0), Zone(1), Zone(2), Zone(3), Zone(4), Zone(5)];

    /// Build a zone from its index, `None` when out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < ZONE_COUNT).then_some(Self(index))
    }

    /// Zone containing the given angle (degrees, any range)
    pub fn from_angle(angle: f32) -> Self {
        let angle = normalize_degrees(angle);
        let index = (angle / ZONE_ARC) as u8;
        Self(index.min(ZONE_COUNT - 1))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn start_deg(self) -> f32 {
        ZONE_START[self.0 as usize]
    }

    #[inline]
    pub fn end_deg(self) -> f32 {
        ZONE_END[self.0 as usize]
    }

    /// Angle at the middle of the arc
    pub fn center_deg(self) -> f32 {
        self.start_deg() + ZONE_ARC / 2.0
    }

    /// Check if an angle falls inside this zone's half-open arc
    pub fn contains_angle(self, angle: f32) -> bool {
        let angle = normalize_degrees(angle);
        angle >= self.start_deg() && angle < self.end_deg()
    }
}
