//! Idle/demo steering
//!
//! Heads for the zone whose nearest wall is farthest away, one rotation step
//! per tick, taking the short way round.

use super::state::{Player, Wall};
use super::zone::Zone;
use crate::consts::ZONE_COUNT;
use crate::normalize_degrees;

/// Nearest wall distance per zone (`INFINITY` for an empty zone)
pub fn nearest_per_zone(walls: &[Wall]) -> [f32; ZONE_COUNT as usize] {
    let mut nearest = [f32::INFINITY; ZONE_COUNT as usize];
    for wall in walls {
        let slot = &mut nearest[wall.zone.index() as usize];
        *slot = slot.min(wall.distance);
    }
    nearest
}

/// Zone the autopilot wants to sit in
pub fn safest_zone(player: &Player, walls: &[Wall]) -> Zone {
    let nearest = nearest_per_zone(walls);
    let mut best = player.zone();
    for zone in Zone::ALL {
        if nearest[zone.index() as usize] > nearest[best.index() as usize] {
            best = zone;
        }
    }
    best
}

/// Rotation steps for this tick: +1 turns left (angle up), -1 right, 0 stays
pub fn steer(player: &Player, walls: &[Wall]) -> i32 {
    let target = safest_zone(player, walls);
    if target == player.zone() {
        return 0;
    }
    let delta = normalize_degrees(target.center_deg() - player.angle);
    if delta <= 180.0 { 1 } else { -1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(zone: u8, distance: f32) -> Wall {
        Wall {
            id: 0,
            zone: Zone::new(zone).unwrap(),
            distance,
            speed: 0.5,
        }
    }

    #[test]
    fn test_stays_when_current_zone_is_empty() {
        let player = Player::default();
        assert_eq!(steer(&player, &[wall(1, 80.0), wall(5, 90.0)]), 0);
    }

    #[test]
    fn test_moves_toward_empty_zone_short_way() {
        let player = Player::default();
        // Zone 0 threatened; zones 1..4 busy, zone 5 free -> turn right (angle down)
        let walls = [
            wall(0, 80.0),
            wall(1, 90.0),
            wall(2, 90.0),
            wall(3, 90.0),
            wall(4, 90.0),
        ];
        assert_eq!(safest_zone(&player, &walls).index(), 5);
        assert_eq!(steer(&player, &walls), -1);
    }

    #[test]
    fn test_moves_left_toward_neighbour() {
        let player = Player {
            angle: 30.0,
            ..Player::default()
        };
        let walls = [
            wall(0, 80.0),
            wall(1, 400.0),
            wall(2, 90.0),
            wall(3, 90.0),
            wall(4, 90.0),
            wall(5, 90.0),
        ];
        assert_eq!(steer(&player, &walls), 1);
    }
}
