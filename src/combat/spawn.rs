//! Combat domain: enemy and boss spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimCue, Animator};
use crate::combat::ai::{GroundEnemy, PushAura, Shooter};
use crate::combat::boss::{BossDirector, RageThresholds};
use crate::combat::{Boss, BossArenaConfig, DamageFlash, Enemy, Health, Team};
use crate::difficulty::{BossTuning, EnemyTuning, GroundEnemyTuning};
use crate::movement::GameLayer;

pub const BOSS_SIZE: Vec2 = Vec2::new(64.0, 80.0);
pub const SHOOTER_SIZE: Vec2 = Vec2::new(24.0, 24.0);
pub const GROUND_ENEMY_SIZE: Vec2 = Vec2::new(28.0, 36.0);

const BOSS_COLOR: Color = Color::srgb(0.55, 0.15, 0.2);
const SHOOTER_COLOR: Color = Color::srgb(0.85, 0.45, 0.2);
const GROUND_ENEMY_COLOR: Color = Color::srgb(0.45, 0.5, 0.3);

/// Boss health after the difficulty multiplier, never below one.
pub fn boss_max_health(config: &BossArenaConfig, tuning: &BossTuning) -> i32 {
    ((config.base_health as f32 * tuning.health_multiplier).round() as i32).max(1)
}

/// Bundle for spawning a shooter enemy
#[derive(Bundle)]
pub struct ShooterBundle {
    pub enemy: Enemy,
    pub shooter: Shooter,
    pub team: Team,
    pub health: Health,
    pub flash: DamageFlash,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl ShooterBundle {
    pub fn new(position: Vec2, tuning: &EnemyTuning, flash_duration: f32) -> Self {
        Self {
            enemy: Enemy,
            shooter: Shooter::default(),
            team: Team::Enemy,
            health: Health::new(tuning.max_health),
            flash: DamageFlash::new(flash_duration, SHOOTER_COLOR),
            sprite: Sprite {
                color: SHOOTER_COLOR,
                custom_size: Some(SHOOTER_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(SHOOTER_SIZE.x, SHOOTER_SIZE.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::PlayerHitbox],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            // Shooters hover
            gravity_scale: GravityScale(0.0),
        }
    }
}

/// Bundle for spawning a melee walker
#[derive(Bundle)]
pub struct GroundEnemyBundle {
    pub enemy: Enemy,
    pub walker: GroundEnemy,
    pub team: Team,
    pub health: Health,
    pub flash: DamageFlash,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
    pub friction: Friction,
}

impl GroundEnemyBundle {
    pub fn new(position: Vec2, tuning: &GroundEnemyTuning, flash_duration: f32) -> Self {
        Self {
            enemy: Enemy,
            walker: GroundEnemy::default(),
            team: Team::Enemy,
            health: Health::new(tuning.max_health),
            flash: DamageFlash::new(flash_duration, GROUND_ENEMY_COLOR),
            sprite: Sprite {
                color: GROUND_ENEMY_COLOR,
                custom_size: Some(GROUND_ENEMY_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(GROUND_ENEMY_SIZE.x, GROUND_ENEMY_SIZE.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::PlayerHitbox],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            // Gravity comes from update_ground_enemies
            gravity_scale: GravityScale(0.0),
            friction: Friction::new(0.0),
        }
    }
}

/// Spawn the boss with its director seeded for this run
pub fn spawn_boss(
    commands: &mut Commands,
    position: Vec2,
    config: &BossArenaConfig,
    tuning: &BossTuning,
    seed: u64,
    flash_duration: f32,
) -> Entity {
    let max_health = boss_max_health(config, tuning);
    info!("Spawning boss with {} health", max_health);

    commands
        .spawn((
            // Identity & Combat
            (
                Boss,
                Enemy,
                Team::Enemy,
                Health::new(max_health),
                DamageFlash::new(flash_duration, BOSS_COLOR),
            ),
            // Boss AI
            (
                BossDirector::new(config.activation_radius, config.intro_delay, seed),
                RageThresholds::default(),
                PushAura::default(),
                Animator::default()
                    .with_clip(AnimCue::Rage, config.rage_clip_seconds)
                    .with_clip(AnimCue::Defeat, config.defeat_clip_seconds),
            ),
            // Rendering
            (
                Sprite {
                    color: BOSS_COLOR,
                    custom_size: Some(BOSS_SIZE),
                    ..default()
                },
                Transform::from_xyz(position.x, position.y, 0.0),
            ),
            // Physics: the boss never moves, it only needs to be hittable
            (
                RigidBody::Dynamic,
                Collider::rectangle(BOSS_SIZE.x, BOSS_SIZE.y),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::PlayerHitbox]),
                LockedAxes::ALL_LOCKED,
                GravityScale(0.0),
            ),
        ))
        .id()
}
