//! Input events supplied by the host
//!
//! The host's event loop turns key presses into `InputEvent`s; the round
//! drains them once per frame and folds them into a `TickInput`.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Discrete input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Turn counter-clockwise (angle up)
    RotateLeft,
    /// Turn clockwise (angle down)
    RotateRight,
    /// Switch to another music track
    ChangeTrack,
    /// Window close / quit request
    Quit,
}

/// Per-frame source of pending input
pub trait EventSource {
    /// Drain every event queued since the last call (non-blocking)
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Source that never produces input
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl EventSource for NoInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Replays a fixed list of per-frame event batches, then goes quiet
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet replayed
    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Fold a frame's events into tick input; the flag reports a quit request
pub fn fold_events(events: &[InputEvent], idle_mode: bool) -> (TickInput, bool) {
    let mut input = TickInput {
        idle_mode,
        ..Default::default()
    };
    let mut quit = false;
    for event in events {
        match event {
            InputEvent::RotateLeft => input.turns += 1,
            InputEvent::RotateRight => input.turns -= 1,
            InputEvent::ChangeTrack => input.change_track = true,
            InputEvent::Quit => quit = true,
        }
    }
    (input, quit)
}
