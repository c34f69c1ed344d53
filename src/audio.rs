//! Music and sound-effect service
//!
//! The host builds one `AudioManager` at startup and lends it to each round.
//! Actual playback is a backend concern; the manager decides what plays
//! when and at what volume.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PLAYLIST_LEN;
use crate::error::SetupError;
use crate::settings::Settings;

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Menu,
    GameOver,
    /// In-game playlist entry
    Playlist(usize),
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player hit a wall
    GameOver,
}

/// Playback device
pub trait AudioBackend {
    /// Load sounds. Failing here aborts the round.
    fn prepare(&mut self) -> Result<(), SetupError> {
        Ok(())
    }
    /// Start a track on loop, replacing whatever was playing
    fn play_track(&mut self, track: Track, volume: f32);
    /// Stop the current track
    fn halt_track(&mut self);
    /// Fire a one-shot effect
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
    /// Whether a track is currently playing
    fn is_playing(&self) -> bool;
}

/// Backend that only logs what would play
#[derive(Debug, Clone, Default)]
pub struct LogBackend {
    current: Option<Track>,
}

impl AudioBackend for LogBackend {
    fn play_track(&mut self, track: Track, volume: f32) {
        log::info!("♪ {:?} (volume {:.2})", track, volume);
        self.current = Some(track);
    }

    fn halt_track(&mut self) {
        if let Some(track) = self.current.take() {
            log::info!("♪ stop {:?}", track);
        }
    }

    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("♫ {:?} (volume {:.2})", effect, volume);
    }

    fn is_playing(&self) -> bool {
        self.current.is_some()
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    rng: Pcg32,
    current_track: Option<usize>,
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, seed: u64) -> Self {
        Self {
            backend,
            rng: Pcg32::seed_from_u64(seed),
            current_track: None,
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volumes and mute state from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_music_volume(settings.music_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn music_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    fn sfx_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn prepare(&mut self) -> Result<(), SetupError> {
        self.backend.prepare()
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.sfx_level();
        self.backend.play_effect(effect, vol);
    }

    /// Start a uniformly random playlist track
    pub fn play_random_track(&mut self) {
        let index = self.rng.random_range(0..PLAYLIST_LEN);
        let vol = self.music_level();
        self.backend.play_track(Track::Playlist(index), vol);
        self.current_track = Some(index);
    }

    /// Halt the current track and pick another at random
    pub fn change_track(&mut self) {
        self.backend.halt_track();
        self.play_random_track();
    }

    /// Per-frame upkeep: restart the playlist if the track ended
    pub fn update(&mut self) {
        if !self.backend.is_playing() {
            self.play_random_track();
        }
    }

    pub fn stop(&mut self) {
        self.backend.halt_track();
        self.current_track = None;
    }

    pub fn play_menu(&mut self) {
        let vol = self.music_level();
        self.backend.play_track(Track::Menu, vol);
        self.current_track = None;
    }

    pub fn play_game_over(&mut self) {
        let vol = self.music_level();
        self.backend.play_track(Track::GameOver, vol);
        self.current_track = None;
    }

    /// Playlist index of the track playing, if it is a playlist track
    pub fn current_track(&self) -> Option<usize> {
        self.current_track
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

/// Backend that records every call, for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<AudioCall>,
    pub playing: bool,
    pub fail_prepare: bool,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AudioCall {
    Play(Track, f32),
    Halt,
    Effect(SoundEffect, f32),
}

#[cfg(test)]
impl AudioBackend for RecordingBackend {
    fn prepare(&mut self) -> Result<(), SetupError> {
        if self.fail_prepare {
            Err(SetupError::Audio("game over sample missing".into()))
        } else {
            Ok(())
        }
    }

    fn play_track(&mut self, track: Track, volume: f32) {
        self.calls.push(AudioCall::Play(track, volume));
        self.playing = true;
    }

    fn halt_track(&mut self) {
        self.calls.push(AudioCall::Halt);
        self.playing = false;
    }

    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        self.calls.push(AudioCall::Effect(effect, volume));
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> AudioManager<RecordingBackend> {
        AudioManager::new(RecordingBackend::default(), 5)
    }

    #[test]
    fn test_random_track_within_playlist() {
        let mut audio = manager();
        for _ in 0..100 {
            audio.play_random_track();
            let index = audio.current_track().unwrap();
            assert!(index < PLAYLIST_LEN);
        }
    }

    #[test]
    fn test_change_track_halts_then_plays() {
        let mut audio = manager();
        audio.play_random_track();
        audio.change_track();
        let calls = &audio.backend().calls;
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1], AudioCall::Halt);
        assert!(matches!(calls[2], AudioCall::Play(Track::Playlist(_), _)));
    }

    #[test]
    fn test_update_restarts_finished_track() {
        let mut audio = manager();
        audio.update();
        assert_eq!(audio.backend().calls.len(), 1);
        // Still playing: nothing to do
        audio.update();
        assert_eq!(audio.backend().calls.len(), 1);
        audio.backend_mut().playing = false;
        audio.update();
        assert_eq!(audio.backend().calls.len(), 2);
    }

    #[test]
    fn test_volumes_and_mute() {
        let mut audio = manager();
        audio.set_master_volume(0.5);
        audio.set_music_volume(2.0);
        audio.set_sfx_volume(0.5);
        audio.play_menu();
        audio.play(SoundEffect::GameOver);
        audio.set_muted(true);
        audio.play(SoundEffect::GameOver);
        assert_eq!(
            audio.backend().calls,
            vec![
                AudioCall::Play(Track::Menu, 0.5),
                AudioCall::Effect(SoundEffect::GameOver, 0.25),
                AudioCall::Effect(SoundEffect::GameOver, 0.0),
            ]
        );
    }

    #[test]
    fn test_stop_clears_current_track() {
        let mut audio = manager();
        audio.play_random_track();
        audio.stop();
        assert!(audio.current_track().is_none());
        assert!(!audio.backend().playing);
    }
}
