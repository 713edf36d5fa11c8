//! Combat domain: hostile projectiles and their motion rules.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::events::{BoomerangReturning, DamageEvent};
use crate::combat::{BossArenaConfig, Team};
use crate::movement::{GameLayer, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoomerangPhase {
    Outbound,
    /// Holding at the arena edge before turning back
    Waiting { remaining: f32 },
    Returning,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileMotion {
    Straight {
        velocity: Vec2,
    },
    Homing {
        heading: Vec2,
        speed: f32,
        /// Degrees per second
        turn_rate: f32,
    },
    Boomerang {
        owner: Entity,
        routine: u32,
        velocity: Vec2,
        return_speed: f32,
        return_delay: f32,
        phase: BoomerangPhase,
    },
}

impl ProjectileMotion {
    pub fn started_return(&self) -> bool {
        matches!(
            self,
            ProjectileMotion::Boomerang {
                phase: BoomerangPhase::Returning,
                ..
            }
        )
    }
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub damage: i32,
    pub motion: ProjectileMotion,
    /// Seconds left before expiry; boomerangs live until they get home
    pub lifetime: Option<f32>,
}

/// Parry sweeps destroy projectiles carrying this tag
#[derive(Component, Debug)]
pub struct Parryable;

/// Positions a motion step may need.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub dt: f32,
    pub target: Option<Vec2>,
    pub owner: Option<Vec2>,
    pub activation_radius: f32,
    pub arrive_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// Boomerang flipped to its return flight this step
    StartedReturn,
    /// Boomerang reached its owner
    Arrived,
    OwnerMissing,
}

/// Rotate `heading` toward `desired` by at most `max_radians`.
pub fn steer_toward(heading: Vec2, desired: Vec2, max_radians: f32) -> Vec2 {
    let angle = heading.perp_dot(desired).atan2(heading.dot(desired));
    let turn = angle.clamp(-max_radians, max_radians);
    Vec2::from_angle(turn).rotate(heading).normalize_or_zero()
}

/// Advance one projectile. Returns its new position and what happened.
pub fn step(motion: &mut ProjectileMotion, position: Vec2, ctx: MotionContext) -> (Vec2, StepOutcome) {
    match motion {
        ProjectileMotion::Straight { velocity } => {
            (position + *velocity * ctx.dt, StepOutcome::Continue)
        }
        ProjectileMotion::Homing {
            heading,
            speed,
            turn_rate,
        } => {
            if let Some(target) = ctx.target {
                let desired = (target - position).normalize_or_zero();
                if desired != Vec2::ZERO {
                    *heading = steer_toward(*heading, desired, turn_rate.to_radians() * ctx.dt);
                }
            }
            (position + *heading * *speed * ctx.dt, StepOutcome::Continue)
        }
        ProjectileMotion::Boomerang {
            velocity,
            return_speed,
            return_delay,
            phase,
            ..
        } => {
            let Some(owner) = ctx.owner else {
                return (position, StepOutcome::OwnerMissing);
            };
            match phase {
                BoomerangPhase::Outbound => {
                    let next = position + *velocity * ctx.dt;
                    if next.distance(owner) >= ctx.activation_radius {
                        *phase = BoomerangPhase::Waiting {
                            remaining: *return_delay,
                        };
                    }
                    (next, StepOutcome::Continue)
                }
                BoomerangPhase::Waiting { remaining } => {
                    *remaining -= ctx.dt;
                    if *remaining > 0.0 {
                        return (position, StepOutcome::Continue);
                    }
                    *phase = BoomerangPhase::Returning;
                    (position, StepOutcome::StartedReturn)
                }
                BoomerangPhase::Returning => {
                    let to_owner = owner - position;
                    let distance = to_owner.length();
                    let travel = *return_speed * ctx.dt;
                    let next = if travel >= distance {
                        owner
                    } else {
                        position + to_owner / distance * travel
                    };
                    if next.distance(owner) <= ctx.arrive_distance {
                        (next, StepOutcome::Arrived)
                    } else {
                        (next, StepOutcome::Continue)
                    }
                }
            }
        }
    }
}

/// Everything needed to put a hostile projectile into the world.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub origin: Vec2,
    pub damage: i32,
    pub motion: ProjectileMotion,
    pub lifetime: Option<f32>,
    pub radius: f32,
    pub color: Color,
}

pub fn spawn_projectile(commands: &mut Commands, spawn: ProjectileSpawn) -> Entity {
    commands
        .spawn((
            Projectile {
                damage: spawn.damage,
                motion: spawn.motion,
                lifetime: spawn.lifetime,
            },
            Parryable,
            Team::Enemy,
            Sprite {
                color: spawn.color,
                custom_size: Some(Vec2::splat(spawn.radius * 2.0)),
                ..default()
            },
            Transform::from_translation(spawn.origin.extend(2.0)),
            Collider::circle(spawn.radius),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Projectile, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn move_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    arena: Res<BossArenaConfig>,
    player_query: Query<&Transform, (With<Player>, Without<Projectile>)>,
    owner_query: Query<&Transform, Without<Projectile>>,
    mut projectiles: Query<(Entity, &mut Projectile, &mut Transform)>,
    mut returning: MessageWriter<BoomerangReturning>,
) {
    let dt = time.delta_secs();
    let target = player_query
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());

    for (entity, mut projectile, mut transform) in &mut projectiles {
        if let Some(lifetime) = projectile.lifetime.as_mut() {
            *lifetime -= dt;
            if *lifetime <= 0.0 {
                commands.entity(entity).try_despawn();
                continue;
            }
        }

        let owner = match projectile.motion {
            ProjectileMotion::Boomerang { owner, .. } => owner_query
                .get(owner)
                .ok()
                .map(|transform| transform.translation.truncate()),
            _ => None,
        };
        let ctx = MotionContext {
            dt,
            target,
            owner,
            activation_radius: arena.activation_radius,
            arrive_distance: arena.arrive_distance,
        };

        let position = transform.translation.truncate();
        let (next, outcome) = step(&mut projectile.motion, position, ctx);
        transform.translation = next.extend(transform.translation.z);

        match outcome {
            StepOutcome::Continue => {}
            StepOutcome::StartedReturn => {
                if let ProjectileMotion::Boomerang { owner, routine, .. } = projectile.motion {
                    returning.write(BoomerangReturning { owner, routine });
                }
            }
            StepOutcome::Arrived | StepOutcome::OwnerMissing => {
                commands.entity(entity).try_despawn();
            }
        }
    }
}

/// Any projectile touching the player deals its damage and disappears.
pub(crate) fn detect_projectile_hits(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    projectile_query: Query<&Projectile>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, target) in pairs {
            let Ok(projectile) = projectile_query.get(projectile_entity) else {
                continue;
            };
            if player_query.get(target).is_err() {
                continue;
            }

            damage_events.write(DamageEvent {
                source: projectile_entity,
                target,
                amount: projectile.damage,
            });
            commands.entity(projectile_entity).try_despawn();
        }
    }
}
