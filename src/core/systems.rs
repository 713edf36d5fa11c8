//! Core domain: flow systems for boot, loading, pause and run setup.

use bevy::prelude::*;
use rand::Rng;

use crate::core::resources::{RunConfig, RunRecord};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Loading);
}

/// Roll a fresh seed and clear the run record before the arena is built.
pub(crate) fn initialize_run(mut run_config: ResMut<RunConfig>, mut record: ResMut<RunRecord>) {
    run_config.seed = rand::rng().random();
    record.reset();

    info!("Starting new run with seed: {}", run_config.seed);
}

pub(crate) fn finish_loading(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Gameplay);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Gameplay => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Gameplay),
        _ => {}
    }
}

/// Freeze virtual time so physics and timers hold still while paused.
pub(crate) fn pause_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

pub(crate) fn resume_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
