//! Combat domain: player parry and melee slash.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::animation::{AnimCue, AnimationTrigger};
use crate::combat::events::{DamageEvent, DamagePopupEvent};
use crate::combat::{CombatInput, Enemy, Lifetime, PlayerCombatTuning, PlayerStats, Team};
use crate::core::KeyBindings;
use crate::movement::{GameLayer, MovementState, Player};
use crate::progress::{Achievement, UnlockAchievement};

/// Parry streak at which the second milestone unlocks.
pub const PARRY_STREAK_MILESTONE: u32 = 10;

/// Result of a blocked hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParrySuccess {
    pub streak: u32,
    /// Milestones reached for the first time this run
    pub first_parry: bool,
    pub streak_milestone: bool,
}

#[derive(Component, Debug, Clone, Default)]
pub struct ParryState {
    pub active: bool,
    pub window_remaining: f32,
    pub cooldown: f32,
    /// Length of the cooldown currently running, for the HUD fill
    pub cooldown_duration: f32,
    pub streak: u32,
    pub first_parry_unlocked: bool,
    pub streak_milestone_unlocked: bool,
}

impl ParryState {
    pub fn can_start(&self) -> bool {
        !self.active && self.cooldown <= 0.0
    }

    pub fn start(&mut self, window: f32) -> bool {
        if !self.can_start() {
            return false;
        }
        self.active = true;
        self.window_remaining = window;
        true
    }

    /// Convert an incoming hit into a success if the window is open.
    pub fn try_block(&mut self, success_cooldown: f32) -> Option<ParrySuccess> {
        if !self.active {
            return None;
        }

        self.active = false;
        self.window_remaining = 0.0;
        self.streak += 1;
        self.set_cooldown(success_cooldown);

        let first_parry = self.streak >= 1 && !self.first_parry_unlocked;
        self.first_parry_unlocked |= first_parry;
        let streak_milestone =
            self.streak >= PARRY_STREAK_MILESTONE && !self.streak_milestone_unlocked;
        self.streak_milestone_unlocked |= streak_milestone;

        Some(ParrySuccess {
            streak: self.streak,
            first_parry,
            streak_milestone,
        })
    }

    /// Advance timers. Returns true when an open window expired unused.
    pub fn tick(&mut self, dt: f32, fail_cooldown: f32) -> bool {
        if self.active {
            self.window_remaining -= dt;
            if self.window_remaining <= 0.0 {
                self.active = false;
                self.streak = 0;
                self.set_cooldown(fail_cooldown);
                return true;
            }
            return false;
        }
        self.cooldown = (self.cooldown - dt).max(0.0);
        false
    }

    /// 0 right after a parry, 1 when ready again.
    pub fn readiness(&self) -> f32 {
        if self.cooldown <= 0.0 || self.cooldown_duration <= 0.0 {
            return 1.0;
        }
        1.0 - self.cooldown / self.cooldown_duration
    }

    fn set_cooldown(&mut self, seconds: f32) {
        self.cooldown = seconds;
        self.cooldown_duration = seconds;
    }
}

#[derive(Component, Debug, Default)]
pub struct MeleeState {
    pub cooldown: f32,
}

/// A single hit landed by a slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashHit {
    pub damage: i32,
    pub crit: bool,
    /// This hit was the second unique target of the slash
    pub multi_slash: bool,
}

/// Short-lived sensor in front of the player. Each target is hit at most once.
#[derive(Component, Debug, Clone)]
pub struct SlashHitbox {
    pub owner: Entity,
    pub base_damage: i32,
    pub crit_chance: f32,
    pub crit_multiplier: f32,
    pub hits: Vec<Entity>,
}

impl SlashHitbox {
    /// Register a hit on `target`. `roll` is a uniform sample in [0, 1).
    pub fn register_hit(&mut self, target: Entity, roll: f32) -> Option<SlashHit> {
        if self.hits.contains(&target) {
            return None;
        }
        self.hits.push(target);

        let crit = roll < self.crit_chance;
        let damage = if crit {
            (self.base_damage as f32 * self.crit_multiplier).round() as i32
        } else {
            self.base_damage
        };

        Some(SlashHit {
            damage,
            crit,
            multi_slash: self.hits.len() == 2,
        })
    }
}

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<CombatInput>,
) {
    input.attack = bindings.fire1.just_pressed(&keyboard, &mouse);
    input.parry = bindings.fire2.just_pressed(&keyboard, &mouse);
}

pub(crate) fn update_parry_state(
    time: Res<Time>,
    input: Res<CombatInput>,
    tuning: Res<PlayerCombatTuning>,
    mut query: Query<(&mut ParryState, &PlayerStats), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut parry, stats) in &mut query {
        if parry.tick(dt, stats.parry_fail_cooldown) {
            debug!("Parry window expired, streak reset");
        }
        if input.parry && parry.start(tuning.parry_window) {
            debug!("Parry window opened for {}s", tuning.parry_window);
        }
    }
}

pub(crate) fn process_slash_input(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<CombatInput>,
    tuning: Res<PlayerCombatTuning>,
    mut query: Query<
        (Entity, &Transform, &MovementState, &PlayerStats, &mut MeleeState),
        With<Player>,
    >,
    mut animations: MessageWriter<AnimationTrigger>,
) {
    let dt = time.delta_secs();

    for (entity, transform, movement, stats, mut melee) in &mut query {
        melee.cooldown = (melee.cooldown - dt).max(0.0);
        if !input.attack || melee.cooldown > 0.0 {
            continue;
        }
        melee.cooldown = tuning.attack_cooldown;

        animations.write(AnimationTrigger {
            entity,
            cue: AnimCue::Attack,
        });

        let facing = movement.facing.sign();
        let position =
            transform.translation.truncate() + Vec2::new(facing * tuning.slash_offset, 0.0);

        commands.spawn((
            SlashHitbox {
                owner: entity,
                base_damage: stats.attack_damage,
                crit_chance: stats.crit_chance,
                crit_multiplier: stats.crit_multiplier,
                hits: Vec::new(),
            },
            Team::Player,
            Lifetime(tuning.slash_lifetime),
            Sprite {
                color: Color::srgba(0.9, 0.95, 1.0, 0.5),
                custom_size: Some(Vec2::new(tuning.slash_width, tuning.slash_height)),
                flip_x: facing < 0.0,
                ..default()
            },
            Transform::from_translation(position.extend(1.0)),
            Collider::rectangle(tuning.slash_width, tuning.slash_height),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
        ));
    }
}

/// Damage numbers start a little above the centre of whatever was hit.
const POPUP_OFFSET: Vec2 = Vec2::new(0.0, 24.0);

pub(crate) fn detect_slash_hits(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut popups: MessageWriter<DamagePopupEvent>,
    mut achievements: MessageWriter<UnlockAchievement>,
    mut slashes: Query<&mut SlashHitbox>,
    targets: Query<&Transform, With<Enemy>>,
) {
    let mut rng = rand::rng();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (slash_entity, target) in pairs {
            let Ok(mut slash) = slashes.get_mut(slash_entity) else {
                continue;
            };
            let Ok(target_transform) = targets.get(target) else {
                continue;
            };
            let Some(hit) = slash.register_hit(target, rng.random()) else {
                continue;
            };

            if hit.crit {
                debug!("Critical slash for {}", hit.damage);
            }
            popups.write(DamagePopupEvent {
                position: target_transform.translation.truncate() + POPUP_OFFSET,
                amount: hit.damage,
                crit: hit.crit,
            });
            if hit.multi_slash {
                achievements.write(UnlockAchievement(Achievement::MultiSlash));
            }
            damage_events.write(DamageEvent {
                source: slash.owner,
                target,
                amount: hit.damage,
            });
        }
    }
}
