//! One round of play, from the first frame to the return to the menu
//!
//! The round runs a frame-paced loop: poll input, advance the simulation,
//! hand a frame to the renderer, test for collision, then sleep out the rest
//! of the frame budget. After a collision the same loop drives a short
//! scripted epilogue (game-over cue, pause, outro track, menu music) as a
//! sequence of phases rather than nested waits.

use serde::Serialize;

use crate::audio::{AudioBackend, AudioManager, SoundEffect};
use crate::consts::{FRAME_MS, GAME_OVER_CUE_MS, OUTRO_MS};
use crate::error::RoundError;
use crate::input::{EventSource, fold_events};
use crate::render::{RenderFrame, Renderer};
use crate::sim::{Difficulty, GameEvent, GameState, TimeSource, tick};

/// Parameters fixed at round start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub difficulty: Difficulty,
    pub seed: u64,
    /// Frame budget in milliseconds
    pub frame_ms: u64,
    /// Autopilot steers the player
    pub idle_mode: bool,
}

impl RoundConfig {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            seed,
            frame_ms: FRAME_MS,
            idle_mode: false,
        }
    }
}

/// Where the round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    /// Collision detected; epilogue not started yet
    Collided,
    /// Game-over cue playing
    CueDelay { until_ms: u64 },
    /// Game-over track playing
    Outro { until_ms: u64 },
    /// Resources released on the next step
    MenuReturn,
    Finished,
}

/// What the host learns when a round ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub seed: u64,
    pub survival_ms: u64,
    pub ticks: u64,
    pub walls_spawned: u64,
    pub walls_cleared: u64,
    /// A quit event arrived during play; the host decides what to do with it
    pub quit_requested: bool,
}

/// Host-side collaborators lent to a round
pub struct Host<'a, B: AudioBackend> {
    pub renderer: &'a mut dyn Renderer,
    pub events: &'a mut dyn EventSource,
    pub audio: &'a mut AudioManager<B>,
    pub clock: &'a mut dyn TimeSource,
}

/// A round in progress
pub struct Round {
    config: RoundConfig,
    state: GameState,
    phase: RoundPhase,
    quit_requested: bool,
}

impl Round {
    /// Acquire resources and start the music. Nothing runs if this fails.
    pub fn start<B: AudioBackend>(
        config: RoundConfig,
        host: &mut Host<'_, B>,
    ) -> Result<Self, RoundError> {
        if config.frame_ms == 0 {
            return Err(RoundError::InvalidConfig("frame budget must be positive"));
        }

        host.renderer.prepare()?;
        if let Err(err) = host.audio.prepare() {
            host.renderer.release();
            return Err(err.into());
        }

        let state = GameState::new(config.difficulty, config.seed, host.clock.now_ms());
        log::info!(
            "Round started: {} (seed {}, spawn every {}ms)",
            config.difficulty.as_str(),
            config.seed,
            state.schedule.interval
        );
        host.audio.play_random_track();

        Ok(Self {
            config,
            state,
            phase: RoundPhase::Playing,
            quit_requested: false,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            difficulty: self.config.difficulty,
            seed: self.config.seed,
            survival_ms: self.state.clock.timer,
            ticks: self.state.time_ticks,
            walls_spawned: self.state.walls_spawned,
            walls_cleared: self.state.walls_cleared,
            quit_requested: self.quit_requested,
        }
    }

    /// Run one frame of the loop, throttled to the frame budget
    pub fn step<B: AudioBackend>(&mut self, host: &mut Host<'_, B>) -> RoundPhase {
        if self.phase == RoundPhase::Finished {
            return self.phase;
        }

        let frame_begin = host.clock.now_ms();

        self.phase = match self.phase {
            RoundPhase::Playing => self.play_frame(host),
            RoundPhase::Collided => {
                host.audio.stop();
                host.audio.play(SoundEffect::GameOver);
                RoundPhase::CueDelay {
                    until_ms: frame_begin + GAME_OVER_CUE_MS,
                }
            }
            RoundPhase::CueDelay { until_ms } if frame_begin >= until_ms => {
                host.audio.play_game_over();
                RoundPhase::Outro {
                    until_ms: frame_begin + OUTRO_MS,
                }
            }
            RoundPhase::Outro { until_ms } if frame_begin >= until_ms => {
                host.audio.stop();
                RoundPhase::MenuReturn
            }
            RoundPhase::MenuReturn => {
                self.state.walls.clear();
                host.renderer.release();
                host.audio.play_menu();
                log::info!("Round over, back to the menu");
                RoundPhase::Finished
            }
            waiting => waiting,
        };

        if self.phase != RoundPhase::Finished {
            self.throttle(host.clock, frame_begin);
        }
        self.phase
    }

    fn play_frame<B: AudioBackend>(&mut self, host: &mut Host<'_, B>) -> RoundPhase {
        let pending = host.events.poll_events();
        let (input, quit) = fold_events(&pending, self.config.idle_mode);
        if quit && !self.quit_requested {
            log::info!("Quit requested; the round plays on until it ends");
            self.quit_requested = true;
        }

        let mut events = tick::advance(&mut self.state, &input);
        if events.contains(&GameEvent::TrackChange) {
            host.audio.change_track();
            log::debug!("Now playing playlist track {:?}", host.audio.current_track());
        }

        host.renderer.render(&RenderFrame::from_state(&self.state));

        tick::resolve(&mut self.state, host.clock.now_ms(), &mut events);
        if self.state.collided() {
            let summary = self.summary();
            log::info!(
                "Survived {}ms ({} ticks, {} walls dodged)",
                summary.survival_ms,
                summary.ticks,
                summary.walls_cleared
            );
            RoundPhase::Collided
        } else {
            host.audio.update();
            RoundPhase::Playing
        }
    }

    fn throttle(&self, clock: &mut dyn TimeSource, frame_begin: u64) {
        let spent = clock.now_ms().saturating_sub(frame_begin);
        if spent < self.config.frame_ms {
            clock.sleep_ms(self.config.frame_ms - spent);
        } else if self.phase == RoundPhase::Playing && spent > self.config.frame_ms {
            log::warn!(
                "Frame took {}ms (budget {}ms)",
                spent,
                self.config.frame_ms
            );
        }
    }
}

/// Start a round and run it to completion, epilogue included
pub fn run_round<B: AudioBackend>(
    config: RoundConfig,
    host: &mut Host<'_, B>,
) -> Result<RoundSummary, RoundError> {
    let mut round = Round::start(config, host)?;
    while !round.is_finished() {
        round.step(host);
    }
    Ok(round.summary())
}
