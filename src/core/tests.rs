//! Core domain: tests for settings, bindings and the run record.

use bevy::prelude::{KeyCode, MouseButton};

use super::{BackgroundMusic, BindAction, Binding, GameSettings, KeyBindings, MusicTrack, RunRecord};
use crate::difficulty::Difficulty;

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.get(BindAction::Fire1), Binding::Mouse(MouseButton::Left));
    assert_eq!(bindings.get(BindAction::Fire2), Binding::Mouse(MouseButton::Right));
    assert_eq!(bindings.get(BindAction::Dash), Binding::Key(KeyCode::ShiftLeft));
    assert_eq!(bindings.get(BindAction::Jump), Binding::Key(KeyCode::Space));
}

#[test]
fn test_rebind_refuses_escape() {
    let mut bindings = KeyBindings::default();
    assert!(!bindings.try_rebind(BindAction::Jump, Binding::Key(KeyCode::Escape)));
    assert_eq!(bindings.jump, Binding::Key(KeyCode::Space));
}

#[test]
fn test_rebind_refuses_input_bound_elsewhere() {
    let mut bindings = KeyBindings::default();
    assert!(!bindings.try_rebind(BindAction::Jump, Binding::Key(KeyCode::ShiftLeft)));
    assert_eq!(bindings.jump, Binding::Key(KeyCode::Space));
}

#[test]
fn test_rebind_accepts_free_input() {
    let mut bindings = KeyBindings::default();
    assert!(bindings.try_rebind(BindAction::Dash, Binding::Key(KeyCode::KeyJ)));
    assert_eq!(bindings.dash, Binding::Key(KeyCode::KeyJ));
}

#[test]
fn test_settings_clamp_difficulty_and_volume() {
    let mut settings = GameSettings::default();
    settings.apply_difficulty(7);
    assert_eq!(settings.difficulty, Difficulty::Nightmare);

    settings.apply_music_volume(1.8);
    assert_eq!(settings.music_volume, 1.0);
    settings.apply_music_volume(-0.2);
    assert_eq!(settings.music_volume, 0.0);
}

#[test]
fn test_run_record_flawless_until_hit() {
    let mut record = RunRecord::default();
    assert!(record.is_flawless());

    record.record_hit(10);
    record.record_hit(5);
    assert!(!record.is_flawless());
    assert_eq!(record.damage_taken, 15);
    assert_eq!(record.hits_taken, 2);

    record.reset();
    assert!(record.is_flawless());
}

#[test]
fn test_music_cue_tracks_latest_track() {
    let mut music = BackgroundMusic::default();
    assert_eq!(music.current, MusicTrack::Silent);

    music.play(MusicTrack::Boss);
    music.play(MusicTrack::Boss);
    assert_eq!(music.current, MusicTrack::Boss);

    music.play(MusicTrack::Normal);
    assert_eq!(music.current, MusicTrack::Normal);
}
