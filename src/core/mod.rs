//! Core domain: game flow states, settings and run bookkeeping.

mod music;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use music::{BackgroundMusic, MusicTrack};
pub use resources::{BindAction, Binding, GameSettings, KeyBindings, RunConfig, RunRecord};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::music::{apply_arena_music, play_normal_music, play_victory_music, stop_music};
use crate::core::systems::{
    finish_boot, finish_loading, initialize_run, pause_time, resume_time, setup_camera,
    toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameSettings>()
            .init_resource::<KeyBindings>()
            .init_resource::<RunConfig>()
            .init_resource::<RunRecord>()
            .init_resource::<BackgroundMusic>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Boot), finish_boot)
            .add_systems(
                OnEnter(GameState::Loading),
                (initialize_run, play_normal_music),
            )
            .add_systems(OnEnter(GameState::Paused), pause_time)
            .add_systems(OnExit(GameState::Paused), resume_time)
            .add_systems(OnEnter(GameState::Dead), stop_music)
            .add_systems(OnEnter(GameState::Victory), play_victory_music)
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(Update, (toggle_pause, apply_arena_music));
    }
}
