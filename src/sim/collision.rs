//! Collision detection between the player token and incoming walls
//!
//! The player is a triangle at a fixed radius; for hit testing it is
//! approximated by a circle whose radius covers the triangle's far corner.
//! A hit needs the player's zone to match the wall's zone and the player's
//! radial span to overlap the wall's radial band.

use super::state::{Player, Wall};
use crate::consts::WALL_THICKNESS;

/// Result of a collision scan
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Wall that was hit (0 on a miss)
    pub wall_id: u32,
    /// Radial overlap between the player span and the wall band
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            wall_id: 0,
            penetration: 0.0,
        }
    }
}

/// Hit radius of the player triangle: `sqrt((size/2)^2 + size^2)`
#[inline]
pub fn inflated_radius(size: f32) -> f32 {
    let half = size / 2.0;
    (half * half + size * size).sqrt()
}

/// Radial overlap of the player span and the wall band, if any
pub fn radial_overlap(player: &Player, wall: &Wall) -> Option<f32> {
    let player_inner = player.distance;
    let player_outer = player.distance + inflated_radius(player.size);
    let wall_inner = wall.distance;
    let wall_outer = wall.distance + WALL_THICKNESS;

    let overlap = player_outer.min(wall_outer) - player_inner.max(wall_inner);
    (overlap >= 0.0).then_some(overlap)
}

/// Check a single wall against the player
pub fn player_wall_collision(player: &Player, wall: &Wall) -> CollisionResult {
    if !wall.zone.contains_angle(player.angle) {
        return CollisionResult::miss();
    }
    match radial_overlap(player, wall) {
        Some(penetration) => CollisionResult {
            hit: true,
            wall_id: wall.id,
            penetration,
        },
        None => CollisionResult::miss(),
    }
}

/// Scan walls nearest-first until one is out of the player's reach.
///
/// `walls` must be sorted by ascending distance; everything behind the first
/// out-of-reach wall is farther still and cannot collide yet.
pub fn check_collision(player: &Player, walls: &[Wall]) -> CollisionResult {
    let reach = player.distance + player.size;
    for wall in walls {
        if wall.distance > reach {
            break;
        }
        let result = player_wall_collision(player, wall);
        if result.hit {
            return result;
        }
    }
    CollisionResult::miss()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::zone::Zone;

    fn player(angle: f32) -> Player {
        Player {
            angle,
            distance: 70.0,
            size: 30.0,
        }
    }

    fn wall(id: u32, zone: u8, distance: f32) -> Wall {
        Wall {
            id,
            zone: Zone::new(zone).unwrap(),
            distance,
            speed: 0.5,
        }
    }

    #[test]
    fn test_inflated_radius() {
        let r = inflated_radius(30.0);
        assert!((r - 1125.0f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_hit_in_same_zone() {
        let result = check_collision(&player(0.0), &[wall(1, 0, 75.0)]);
        assert!(result.hit);
        assert_eq!(result.wall_id, 1);
        assert!(result.penetration > 0.0);
    }

    #[test]
    fn test_miss_in_opposite_zone() {
        let result = check_collision(&player(0.0), &[wall(1, 3, 75.0)]);
        assert!(!result.hit);
        assert_eq!(result, CollisionResult::miss());
    }

    #[test]
    fn test_empty_timeline_never_collides() {
        assert!(!check_collision(&player(10.0), &[]).hit);
    }

    #[test]
    fn test_single_wall_out_of_reach() {
        assert!(!check_collision(&player(10.0), &[wall(1, 0, 101.0)]).hit);
    }

    #[test]
    fn test_wall_already_inside_player_span() {
        // Band [55, 65] touches nothing of [70, 103.5]
        assert!(!check_collision(&player(10.0), &[wall(1, 0, 55.0)]).hit);
        // Band [62, 72] straddles the player's inner edge
        assert!(check_collision(&player(10.0), &[wall(1, 0, 62.0)]).hit);
    }

    #[test]
    fn test_scan_skips_other_zones_before_hit() {
        let walls = [wall(1, 2, 72.0), wall(2, 5, 80.0), wall(3, 1, 90.0)];
        let result = check_collision(&player(75.0), &walls);
        assert!(result.hit);
        assert_eq!(result.wall_id, 3);
    }

    #[test]
    fn test_scan_stops_at_first_far_wall() {
        // Sorted timeline: the far wall ends the scan before the unreachable tail
        let walls = [wall(1, 4, 90.0), wall(2, 0, 150.0), wall(3, 0, 160.0)];
        assert!(!check_collision(&player(0.0), &walls).hit);
    }

    #[test]
    fn test_no_overlap_in_any_zone() {
        for zone in Zone::ALL {
            let angle = zone.center_deg();
            let walls = [wall(1, zone.index(), 45.0), wall(2, zone.index(), 200.0)];
            assert!(!check_collision(&player(angle), &walls).hit, "zone {zone:?}");
        }
    }

    #[test]
    fn test_every_zone_detects_its_own_wall() {
        for zone in Zone::ALL {
            let walls = [wall(1, zone.index(), 80.0)];
            assert!(check_collision(&player(zone.center_deg()), &walls).hit);
            let other = Zone::new((zone.index() + 1) % 6).unwrap();
            assert!(!check_collision(&player(other.center_deg()), &walls).hit);
        }
    }
}
