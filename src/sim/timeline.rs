//! Ordered collection of active walls
//!
//! Walls are appended at the tail as they spawn and kept sorted by
//! distance-to-centre after every resort, so the head is always the wall
//! nearest the player.

use super::state::Wall;

#[derive(Debug, Clone, Default)]
pub struct WallTimeline {
    walls: Vec<Wall>,
}

impl WallTimeline {
    pub fn new() -> Self {
        Self { walls: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Head of the timeline (nearest wall once sorted)
    pub fn first(&self) -> Option<&Wall> {
        self.walls.first()
    }

    /// Tail of the timeline (most recently spawned, or farthest once sorted)
    pub fn last(&self) -> Option<&Wall> {
        self.walls.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wall> {
        self.walls.iter()
    }

    pub fn as_slice(&self) -> &[Wall] {
        &self.walls
    }

    /// Append a wall at the tail
    pub fn push(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    /// Move every wall inward by its per-tick speed
    pub fn advance(&mut self) {
        for wall in &mut self.walls {
            wall.distance -= wall.speed;
        }
    }

    /// Drop walls that reached the inner circle, returning how many went
    pub fn prune_expired(&mut self) -> usize {
        let before = self.walls.len();
        self.walls.retain(|w| !w.is_expired());
        before - self.walls.len()
    }

    /// Stable sort by ascending distance; equal distances keep spawn order
    pub fn resort(&mut self) {
        self.walls.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// Drop every wall (round teardown)
    pub fn clear(&mut self) {
        self.walls.clear();
    }
}

impl FromIterator<Wall> for WallTimeline {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        Self {
            walls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WallTimeline {
    type Item = &'a Wall;
    type IntoIter = std::slice::Iter<'a, Wall>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}
