//! Core domain: game state definitions for the fight flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Arena is being (re)built; passes straight through to Gameplay
    Loading,
    Gameplay,
    Paused,
    Dead,
    Victory,
}
