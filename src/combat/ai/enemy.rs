//! Combat domain: ranged shooter enemies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Enemy;
use crate::combat::projectiles::{ProjectileMotion, ProjectileSpawn, spawn_projectile};
use crate::difficulty::{ActiveTuning, EnemyTuning};
use crate::movement::Player;

/// Shooters ignore the player beyond this distance.
pub const DETECTION_RADIUS: f32 = 256.0;
/// Shooters close in until they are this near.
pub const PREFERRED_DISTANCE: f32 = 96.0;
/// Shooters back off when the player is nearer than this.
pub const TOO_CLOSE_DISTANCE: f32 = 48.0;

const SHOT_LIFETIME: f32 = 5.0;
const SHOT_RADIUS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterIntent {
    /// Player out of range
    Idle,
    Chase,
    Retreat,
    /// Inside the comfort band
    Hold,
}

pub fn shooter_intent(distance: f32) -> ShooterIntent {
    if distance > DETECTION_RADIUS {
        ShooterIntent::Idle
    } else if distance > PREFERRED_DISTANCE {
        ShooterIntent::Chase
    } else if distance < TOO_CLOSE_DISTANCE {
        ShooterIntent::Retreat
    } else {
        ShooterIntent::Hold
    }
}

/// New velocity for a shooter given the vector from it to the player.
pub fn shooter_velocity(current: Vec2, to_player: Vec2, tuning: &EnemyTuning, dt: f32) -> Vec2 {
    let direction = to_player.normalize_or_zero();
    match shooter_intent(to_player.length()) {
        ShooterIntent::Chase => direction * tuning.chase_speed,
        ShooterIntent::Retreat => -direction * tuning.retreat_speed,
        ShooterIntent::Idle | ShooterIntent::Hold => {
            current.lerp(Vec2::ZERO, (tuning.stop_smoothing * dt).min(1.0))
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct Shooter {
    /// Seconds until the next shot; the first shot is immediate
    pub fire_timer: f32,
}

impl Shooter {
    /// Count down while the player is in range. Returns true when a shot is due.
    pub fn tick(&mut self, dt: f32, interval: f32) -> bool {
        self.fire_timer -= dt;
        if self.fire_timer > 0.0 {
            return false;
        }
        self.fire_timer = interval;
        true
    }
}

/// Shooters switched off for this difficulty leave as soon as they appear.
pub(crate) fn remove_disabled_shooters(
    mut commands: Commands,
    tuning: Res<ActiveTuning>,
    shooters: Query<Entity, Added<Shooter>>,
) {
    if tuning.enemy().enabled {
        return;
    }
    for entity in &shooters {
        debug!("Shooter disabled on {}", tuning.difficulty.label());
        commands.entity(entity).despawn();
    }
}

pub(crate) fn update_shooters(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<ActiveTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut shooters: Query<
        (&Transform, &mut LinearVelocity, &mut Shooter, &mut Sprite),
        (With<Enemy>, Without<Player>),
    >,
) {
    let dt = time.delta_secs();
    let enemy = tuning.enemy();

    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, mut velocity, mut shooter, mut sprite) in &mut shooters {
        let position = transform.translation.truncate();
        let to_player = player_pos - position;

        velocity.0 = shooter_velocity(velocity.0, to_player, enemy, dt);

        if shooter_intent(to_player.length()) == ShooterIntent::Idle {
            continue;
        }

        let direction = to_player.normalize_or_zero();
        if direction == Vec2::ZERO {
            continue;
        }
        sprite.flip_x = direction.x < 0.0;

        if shooter.tick(dt, enemy.fire_interval) {
            spawn_projectile(
                &mut commands,
                ProjectileSpawn {
                    origin: position,
                    damage: enemy.projectile_damage,
                    motion: ProjectileMotion::Straight {
                        velocity: direction * enemy.projectile_speed,
                    },
                    lifetime: Some(SHOT_LIFETIME),
                    radius: SHOT_RADIUS,
                    color: Color::srgb(1.0, 0.55, 0.3),
                },
            );
        }
    }
}
