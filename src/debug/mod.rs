//! Debug mode for fast iteration and testing.
//!
//! Features:
//! - F1-F4 switch difficulty and rebuild the arena
//! - F5 toggles invincibility
//! - F6 deals 100 damage to the boss

mod state;
mod systems;
mod ui;


pub use state::{DEBUG_BOSS_DAMAGE, DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{apply_invincibility, handle_debug_hotkeys, update_status_message};
use crate::debug::ui::{spawn_debug_info_overlay, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_info_overlay)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    apply_invincibility,
                    update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
