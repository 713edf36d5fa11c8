//! Debug domain: hotkeys and runtime tweaks.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{Boss, DamageEvent, Invincible};
use crate::core::{GameSettings, GameState};
use crate::debug::state::{DEBUG_BOSS_DAMAGE, DebugAction, DebugState};
use crate::movement::Player;

const HOTKEYS: [KeyCode; 6] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
];

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut settings: ResMut<GameSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    bosses: Query<Entity, With<Boss>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for key in HOTKEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        let Some(action) = DebugAction::from_key(key) else {
            continue;
        };

        match action {
            DebugAction::SetDifficulty(difficulty) => {
                settings.difficulty = difficulty;
                next_state.set(GameState::Loading);
                debug_state.set_message(format!("Difficulty: {}", difficulty.label()), 2.0);
                info!("[DEBUG] Reloading on {}", difficulty.label());
            }
            DebugAction::ToggleInvincible => {
                debug_state.invincible = !debug_state.invincible;
                let msg = if debug_state.invincible {
                    "Invincibility ON"
                } else {
                    "Invincibility OFF"
                };
                debug_state.set_message(msg, 2.0);
                info!("[DEBUG] {}", msg);
            }
            DebugAction::DamageBoss => {
                for boss in &bosses {
                    damage_events.write(DamageEvent {
                        source: boss,
                        target: boss,
                        amount: DEBUG_BOSS_DAMAGE,
                    });
                }
                debug_state.set_message(format!("Boss -{}", DEBUG_BOSS_DAMAGE), 2.0);
                info!("[DEBUG] Boss damaged by {}", DEBUG_BOSS_DAMAGE);
            }
        }
    }
}

/// Keep the player's `Invincible` tag in step with the debug flag.
pub(crate) fn apply_invincibility(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    players: Query<(Entity, Has<Invincible>), With<Player>>,
) {
    for (player, invincible) in &players {
        if debug_state.invincible && !invincible {
            commands.entity(player).insert(Invincible);
        } else if !debug_state.invincible && invincible {
            commands.entity(player).remove::<Invincible>();
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}
