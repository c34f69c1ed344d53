//! Data handed to the host's renderer each frame
//!
//! Drawing itself belongs to the host. The round only builds a
//! `RenderFrame` snapshot: player triangle, walls in draw order and the
//! elapsed-time text.

use glam::Vec2;
use serde::Serialize;

use crate::error::SetupError;
use crate::polar_to_cartesian;
use crate::sim::{GameState, Zone};

/// Player token as drawn
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub angle: f32,
    pub distance: f32,
    pub size: f32,
    /// Triangle corners relative to the arena centre, tip first
    pub vertices: [Vec2; 3],
}

/// One wall as drawn
#[derive(Debug, Clone, Serialize)]
pub struct WallView {
    pub zone: Zone,
    pub start_deg: f32,
    pub end_deg: f32,
    pub inner: f32,
    pub outer: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub tick: u64,
    pub elapsed_ms: u64,
    pub elapsed_text: String,
    pub player: PlayerView,
    /// Farthest first, so nearer walls paint over farther ones
    pub walls: Vec<WallView>,
}

impl RenderFrame {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        let theta = player.angle.to_radians();
        let centre = polar_to_cartesian(player.distance, theta);
        let corner = |offset: f32| centre + polar_to_cartesian(player.size / 2.0, theta + offset);
        let third = std::f32::consts::TAU / 3.0;

        let walls = state
            .walls
            .iter()
            .rev()
            .map(|w| WallView {
                zone: w.zone,
                start_deg: w.zone.start_deg(),
                end_deg: w.zone.end_deg(),
                inner: w.distance,
                outer: w.outer_distance(),
            })
            .collect();

        Self {
            tick: state.time_ticks,
            elapsed_ms: state.clock.timer,
            elapsed_text: format_elapsed(state.clock.timer),
            player: PlayerView {
                angle: player.angle,
                distance: player.distance,
                size: player.size,
                vertices: [corner(0.0), corner(third), corner(-third)],
            },
            walls,
        }
    }
}

/// `MM:SS` display of elapsed milliseconds
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let seconds = elapsed_ms / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Host-side renderer
pub trait Renderer {
    /// Acquire per-round resources (fonts, textures). Failing here aborts the round.
    fn prepare(&mut self) -> Result<(), SetupError> {
        Ok(())
    }

    /// Paint one frame
    fn render(&mut self, frame: &RenderFrame);

    /// Release per-round resources
    fn release(&mut self) {}
}

/// Renderer that dumps every Nth frame to the log
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u32,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &RenderFrame) {
        if self.frames % self.every as u64 == 0 {
            let nearest = frame.walls.last().map(|w| (w.zone.index(), w.inner));
            log::debug!(
                "[{}] angle {:.0}° zone {} walls {} nearest {:?}",
                frame.elapsed_text,
                frame.player.angle,
                Zone::from_angle(frame.player.angle).index(),
                frame.walls.len(),
                nearest
            );
        }
        self.frames += 1;
    }
}
