//! Combat domain: components shared by the player, enemies and the boss.

use bevy::prelude::*;

use crate::combat::PlayerCombatTuning;
use crate::movement::MovementTuning;

/// Health component for damageable entities. Damage is never clamped at zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn heal_full(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Marks shooter enemies and the boss as slash targets
#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Component, Debug)]
pub struct Boss;

/// Tints the sprite for a short time after a hit
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub remaining: f32,
    pub duration: f32,
    pub base_color: Color,
}

impl DamageFlash {
    pub const COLOR: Color = Color::srgb(1.0, 0.2, 0.2);

    pub fn new(duration: f32, base_color: Color) -> Self {
        Self {
            remaining: 0.0,
            duration,
            base_color,
        }
    }

    pub fn trigger(&mut self) {
        self.remaining = self.duration;
    }
}

/// Despawn timer for transient combat entities
#[derive(Component, Debug)]
pub struct Lifetime(pub f32);

/// Dev toggle: incoming damage is ignored
#[derive(Component, Debug)]
pub struct Invincible;

/// Stats that start from tuning and grow with collectibles.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub attack_damage: i32,
    pub crit_chance: f32,
    pub crit_multiplier: f32,
    pub move_speed: f32,
    pub jump_force: f32,
    pub parry_success_cooldown: f32,
    pub parry_fail_cooldown: f32,
}

impl PlayerStats {
    pub fn from_tuning(combat: &PlayerCombatTuning, movement: &MovementTuning) -> Self {
        Self {
            attack_damage: combat.attack_damage,
            crit_chance: combat.crit_chance,
            crit_multiplier: combat.crit_multiplier,
            move_speed: movement.move_speed,
            jump_force: movement.jump_force,
            parry_success_cooldown: combat.parry_success_cooldown,
            parry_fail_cooldown: combat.parry_fail_cooldown,
        }
    }

    /// Shorten both parry cooldowns, never below `floor`.
    pub fn reduce_parry_cooldowns(&mut self, amount: f32, floor: f32) {
        self.parry_success_cooldown = (self.parry_success_cooldown - amount).max(floor);
        self.parry_fail_cooldown = (self.parry_fail_cooldown - amount).max(floor);
    }
}
