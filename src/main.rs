//! Hexfall entry point
//!
//! Headless native host: loads settings, plays rounds with a logging
//! renderer and audio backend, and prints each round's summary.

use std::process::ExitCode;

use hexfall::audio::{AudioManager, LogBackend};
use hexfall::input::NoInput;
use hexfall::render::LogRenderer;
use hexfall::round::{Host, run_round};
use hexfall::sim::{Difficulty, SystemClock};
use hexfall::{BestTimes, Settings};

fn load_settings() -> Result<Settings, hexfall::ConfigError> {
    let mut settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Ok(name) = std::env::var("HEXFALL_DIFFICULTY") {
        match Difficulty::from_str(&name) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!("Unknown difficulty {:?}, keeping {}", name, settings.difficulty.as_str()),
        }
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hexfall (native) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut audio = AudioManager::new(LogBackend::default(), settings.effective_seed());
    audio.apply_settings(&settings);
    audio.play_menu();

    let mut renderer = LogRenderer::new(settings.log_every_frames);
    let mut events = NoInput;
    let mut clock = SystemClock::new();
    let mut best = BestTimes::new();

    for round in 1..=settings.rounds {
        let config = settings.round_config();
        let mut host = Host {
            renderer: &mut renderer,
            events: &mut events,
            audio: &mut audio,
            clock: &mut clock,
        };

        let summary = match run_round(config, &mut host) {
            Ok(summary) => summary,
            Err(err) => {
                log::error!("Round {round} could not start: {err}");
                return ExitCode::FAILURE;
            }
        };

        match serde_json::to_string(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("Cannot encode round summary: {err}"),
        }
        if let Some(rank) = best.add(summary) {
            log::info!("Round {round} ranks #{rank} this session");
        }
    }

    log::info!("Rendered {} frames", renderer.frames_rendered());
    if let Some(top) = best.entries.first() {
        println!(
            "Best: {} on {}",
            hexfall::render::format_elapsed(top.survival_ms),
            top.difficulty.as_str()
        );
    }
    ExitCode::SUCCESS
}
