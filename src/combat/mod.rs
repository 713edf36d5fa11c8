//! Combat domain: damage, the player's parry and slash, projectiles, shooters
//! and the boss encounter.

pub mod ai;
pub mod boss;
mod components;
mod events;
pub mod player;
pub mod projectiles;
mod resources;
pub mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    Boss, DamageFlash, Enemy, Health, Invincible, Lifetime, PlayerStats, Team,
};
pub use events::{
    BoomerangReturning, BossArenaEvent, BossDefeatedEvent, BossFireEvent, DamageEvent,
    DamagePopupEvent, DeathEvent, ParrySuccessEvent,
};
pub use player::{MeleeState, ParryState};
pub use resources::{BossArenaConfig, CombatInput, PlayerCombatTuning};

use bevy::prelude::*;

use crate::combat::ai::{
    apply_boss_aura, remove_disabled_ground_enemies, remove_disabled_shooters,
    update_ground_enemies, update_shooters,
};
use crate::combat::boss::{
    apply_boomerang_returns, apply_boss_rage, despawn_defeated_boss, handle_boss_death,
    spawn_boss_projectiles, tick_boss_directors,
};
use crate::combat::player::{
    detect_slash_hits, process_slash_input, read_combat_input, update_parry_state,
};
use crate::combat::projectiles::{detect_projectile_hits, move_projectiles};
use crate::combat::systems::{
    apply_damage, cleanup_expired, handle_enemy_death, handle_player_death, update_damage_flash,
};
use crate::core::GameState;
use crate::progress::UnlockAchievement;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerCombatTuning>()
            .init_resource::<BossArenaConfig>()
            .init_resource::<CombatInput>()
            .add_message::<DamageEvent>()
            .add_message::<DamagePopupEvent>()
            .add_message::<DeathEvent>()
            .add_message::<BossArenaEvent>()
            .add_message::<BossDefeatedEvent>()
            .add_message::<ParrySuccessEvent>()
            .add_message::<BossFireEvent>()
            .add_message::<BoomerangReturning>()
            .add_message::<UnlockAchievement>()
            .add_systems(
                Update,
                (
                    // Player actions
                    (read_combat_input, update_parry_state, process_slash_input).chain(),
                    // Hits and damage
                    (
                        detect_slash_hits,
                        detect_projectile_hits,
                        apply_boss_aura,
                        apply_damage,
                        handle_player_death,
                        handle_enemy_death,
                        handle_boss_death,
                        apply_boss_rage,
                    )
                        .chain(),
                    // Boss and hostile fire
                    (
                        apply_boomerang_returns,
                        tick_boss_directors,
                        spawn_boss_projectiles,
                        move_projectiles,
                        remove_disabled_shooters,
                        update_shooters,
                        remove_disabled_ground_enemies,
                        update_ground_enemies,
                    )
                        .chain(),
                    (update_damage_flash, cleanup_expired, despawn_defeated_boss),
                )
                    .chain()
                    .run_if(in_state(GameState::Gameplay)),
            );
    }
}
