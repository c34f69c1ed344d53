//! Fixed-cadence simulation tick
//!
//! One tick: apply input, move walls, spawn, prune, resort, then (after the
//! host has rendered) test for collision and update the clock. Wall speeds
//! are per tick, so the tick rate is the game speed.

use super::autopilot;
use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::ROTATION_STEP;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Net rotation steps: positive turns left (angle up), negative right
    pub turns: i32,
    /// Ask the audio layer for another track
    pub change_track: bool,
    /// Idle/demo mode - autopilot steers the player
    pub idle_mode: bool,
}

/// Steps before rendering: input, advance, spawn, prune, resort
pub fn advance(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Collided {
        return events;
    }

    state.time_ticks += 1;

    let turns = if input.idle_mode {
        input.turns + autopilot::steer(&state.player, state.walls.as_slice())
    } else {
        input.turns
    };
    if turns != 0 {
        state.player.rotate(turns as f32 * ROTATION_STEP);
    }
    if input.change_track {
        events.push(GameEvent::TrackChange);
    }

    state.walls.advance();

    if let Some(count) = state.schedule.poll(state.clock.timer) {
        state.spawn_walls(count);
        log::debug!(
            "Spawned {} walls at {}ms (next batch at {}ms, {} active)",
            count,
            state.clock.timer,
            state.schedule.next_appearance,
            state.walls.len()
        );
        events.push(GameEvent::WallsSpawned { count });
    }

    let cleared = state.walls.prune_expired();
    if cleared > 0 {
        state.walls_cleared += cleared as u64;
        events.push(GameEvent::WallsCleared { count: cleared });
    }

    state.walls.resort();

    events
}

/// Steps after rendering: collision test and clock update
pub fn resolve(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::Playing {
        if state.walls.is_empty() {
            log::warn!("No walls on the timeline at tick {}", state.time_ticks);
        }
        let result = check_collision(&state.player, state.walls.as_slice());
        if result.hit {
            log::info!(
                "Collision with wall {} at {:.1}° after {}ms",
                result.wall_id,
                state.player.angle,
                state.clock.timer
            );
            state.phase = GamePhase::Collided;
            events.push(GameEvent::Collision {
                wall_id: result.wall_id,
            });
        }
    }

    state.clock.update(now_ms);
}

/// Advance the game state by one full tick with no render in between
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let mut events = advance(state, input);
    resolve(state, now_ms, &mut events);
    events
}
