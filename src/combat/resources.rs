//! Combat domain: tuning resources and sampled combat input.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Player combat parameters, loaded from the `player.combat` section of combat.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerCombatTuning {
    pub max_health: i32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    pub crit_chance: f32,
    pub crit_multiplier: f32,
    pub slash_width: f32,
    pub slash_height: f32,
    /// Distance in front of the player where the slash hitbox is centred
    pub slash_offset: f32,
    pub slash_lifetime: f32,
    pub parry_window: f32,
    pub parry_radius: f32,
    pub parry_success_cooldown: f32,
    pub parry_fail_cooldown: f32,
    /// Parry cooldown pickups never reduce a cooldown below this
    pub parry_cooldown_floor: f32,
    pub damage_flash_duration: f32,
}

impl Default for PlayerCombatTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            attack_damage: 10,
            attack_cooldown: 0.3,
            crit_chance: 0.1,
            crit_multiplier: 1.5,
            slash_width: 48.0,
            slash_height: 40.0,
            slash_offset: 30.0,
            slash_lifetime: 0.15,
            parry_window: 0.2,
            parry_radius: 96.0,
            parry_success_cooldown: 5.0,
            parry_fail_cooldown: 7.0,
            parry_cooldown_floor: 0.5,
            damage_flash_duration: 0.2,
        }
    }
}

/// Fixed boss arena parameters, loaded from the `boss` section of combat.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BossArenaConfig {
    /// Health before the difficulty multiplier
    pub base_health: i32,
    pub activation_radius: f32,
    pub intro_delay: f32,
    /// A returning boomerang despawns this close to the boss
    pub arrive_distance: f32,
    pub projectile_radius: f32,
    pub rage_clip_seconds: f32,
    pub defeat_clip_seconds: f32,
}

impl Default for BossArenaConfig {
    fn default() -> Self {
        Self {
            base_health: 1000,
            activation_radius: 384.0,
            intro_delay: 1.0,
            arrive_distance: 10.0,
            projectile_radius: 6.0,
            rage_clip_seconds: 0.6,
            defeat_clip_seconds: 1.2,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack: bool,
    pub parry: bool,
}
