//! Movement domain: player locomotion, grounding and the charge dash.

mod components;
mod resources;
mod systems;


pub use components::{
    DashCharges, DashState, DashTrail, Facing, GameLayer, Ground, MovementState,
    PLAYER_FRICTION, Player, TrailVariant, edge_trail_variant,
};
pub use resources::{MovementInput, MovementTuning};
pub use systems::is_ground_contact;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_dash, apply_gravity, apply_horizontal_movement, apply_jump, detect_ground,
    fade_dash_trails, read_input, refill_dash_charges, spawn_dash_trails, update_facing,
    update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                FixedUpdate,
                (detect_ground, refill_dash_charges)
                    .chain()
                    .run_if(in_state(GameState::Gameplay)),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    update_timers,
                    apply_horizontal_movement,
                    apply_jump,
                    apply_dash,
                    apply_gravity,
                    update_facing,
                    spawn_dash_trails,
                )
                    .chain()
                    .run_if(in_state(GameState::Gameplay)),
            )
            .add_systems(Update, fade_dash_trails);
    }
}
