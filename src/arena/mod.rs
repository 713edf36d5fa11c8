//! Arena domain: builds the boss arena for each run and tears it down on reload.

pub mod layout;
pub mod pickups;

#[cfg(test)]
mod tests;

pub use pickups::{Pickup, PickupCollected, PickupTarget, apply_pickup};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::arena::layout::{
    BOSS_POSITION, Block, FLOOR, GROUND_ENEMY_POSITIONS, PICKUP_SIZE, PICKUPS, PLATFORMS,
    PLAYER_SIZE, PLAYER_START, SHOOTER_POSITIONS, WALLS,
};
use crate::arena::pickups::collect_pickups;
use crate::combat::player::SlashHitbox;
use crate::combat::projectiles::Projectile;
use crate::combat::spawn::{GroundEnemyBundle, ShooterBundle, spawn_boss};
use crate::combat::{
    BossArenaConfig, DamageFlash, Health, MeleeState, ParryState, PlayerCombatTuning,
    PlayerStats, Team,
};
use crate::core::{GameState, RunConfig};
use crate::difficulty::ActiveTuning;
use crate::movement::{
    DashCharges, DashState, DashTrail, GameLayer, Ground, MovementState, MovementTuning,
    PLAYER_FRICTION, Player,
};

const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.95);
const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.35);

/// Everything spawned for one run of the arena.
#[derive(Component, Debug)]
pub struct ArenaEntity;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PickupCollected>()
            .add_systems(OnEnter(GameState::Loading), cleanup_arena)
            .add_systems(OnExit(GameState::Loading), spawn_arena)
            .add_systems(
                Update,
                collect_pickups.run_if(in_state(GameState::Gameplay)),
            );
    }
}

fn spawn_block(commands: &mut Commands, block: Block, color: Color) {
    commands.spawn((
        ArenaEntity,
        Ground,
        Sprite {
            color,
            custom_size: Some(block.size),
            ..default()
        },
        Transform::from_translation(block.center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(block.size.x, block.size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));
}

/// Spawn ground, player, boss, enemies and pickups.
pub(crate) fn spawn_arena(
    mut commands: Commands,
    tuning: Res<ActiveTuning>,
    run_config: Res<RunConfig>,
    arena: Res<BossArenaConfig>,
    combat: Res<PlayerCombatTuning>,
    movement: Res<MovementTuning>,
) {
    info!(
        "Building arena on {} (seed: {})",
        tuning.difficulty.label(),
        run_config.seed
    );

    spawn_block(&mut commands, FLOOR, GROUND_COLOR);
    for wall in WALLS {
        spawn_block(&mut commands, wall, WALL_COLOR);
    }
    for platform in PLATFORMS {
        spawn_block(&mut commands, platform, GROUND_COLOR);
    }

    commands.spawn((
        // Identity & Movement
        (
            ArenaEntity,
            Player,
            Team::Player,
            MovementState::default(),
            DashCharges::new(movement.max_dash_charges),
            DashState::new(movement.dash_unlocked),
        ),
        // Combat
        (
            Health::new(combat.max_health),
            PlayerStats::from_tuning(&combat, &movement),
            ParryState::default(),
            MeleeState::default(),
            DamageFlash::new(combat.damage_flash_duration, PLAYER_COLOR),
            Animator::default(),
        ),
        // Rendering
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_START.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the movement systems
            Friction::new(PLAYER_FRICTION),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Projectile, GameLayer::Sensor],
            ),
        ),
    ));

    let boss = spawn_boss(
        &mut commands,
        BOSS_POSITION,
        &arena,
        tuning.boss(),
        run_config.seed,
        combat.damage_flash_duration,
    );
    commands.entity(boss).insert(ArenaEntity);

    for position in SHOOTER_POSITIONS {
        commands.spawn((
            ArenaEntity,
            ShooterBundle::new(position, tuning.enemy(), combat.damage_flash_duration),
        ));
    }

    for position in GROUND_ENEMY_POSITIONS {
        commands.spawn((
            ArenaEntity,
            GroundEnemyBundle::new(position, tuning.ground_enemy(), combat.damage_flash_duration),
        ));
    }

    for (pickup, position) in PICKUPS {
        commands.spawn((
            ArenaEntity,
            pickup,
            Sprite {
                color: pickup.color(),
                custom_size: Some(Vec2::splat(PICKUP_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            Collider::rectangle(PICKUP_SIZE, PICKUP_SIZE),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }
}

/// Remove the previous run, including transient combat entities.
pub(crate) fn cleanup_arena(
    mut commands: Commands,
    query: Query<
        Entity,
        Or<(
            With<ArenaEntity>,
            With<Projectile>,
            With<SlashHitbox>,
            With<DashTrail>,
        )>,
    >,
) {
    let mut removed = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        removed += 1;
    }
    if removed > 0 {
        debug!("Cleared {} arena entities", removed);
    }
}
