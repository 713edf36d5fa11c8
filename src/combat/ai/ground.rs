//! Combat domain: melee walkers that patrol, chase and swing after a wind-up.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Enemy;
use crate::combat::events::DamageEvent;
use crate::difficulty::{ActiveTuning, GroundEnemyTuning};
use crate::movement::{GameLayer, MovementTuning, Player};

/// How far past its own side a walker looks for a wall.
pub const WALL_CHECK_DISTANCE: f32 = 12.0;
/// How far below its leading foot a walker looks for the floor.
pub const LEDGE_CHECK_DISTANCE: f32 = 10.0;

const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(12.0, 24.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundIntent {
    Wander,
    Chase,
    Attack,
}

pub fn ground_intent(distance: f32, tuning: &GroundEnemyTuning) -> GroundIntent {
    if distance <= tuning.attack_range {
        GroundIntent::Attack
    } else if distance <= tuning.detection_radius {
        GroundIntent::Chase
    } else {
        GroundIntent::Wander
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundPhase {
    Roaming,
    WindingUp { remaining: f32 },
    Recovering { remaining: f32 },
}

#[derive(Component, Debug, Clone)]
pub struct GroundEnemy {
    pub phase: GroundPhase,
    /// 1.0 facing right, -1.0 facing left
    pub facing: f32,
}

impl Default for GroundEnemy {
    fn default() -> Self {
        Self {
            phase: GroundPhase::Roaming,
            facing: 1.0,
        }
    }
}

impl GroundEnemy {
    /// Planted walkers stand still until their swing is over.
    pub fn is_planted(&self) -> bool {
        !matches!(self.phase, GroundPhase::Roaming)
    }

    /// Horizontal direction to walk this tick, turning the walker as needed.
    /// `blocked` is a wall or ledge ahead and only matters while wandering.
    pub fn steer(
        &mut self,
        intent: GroundIntent,
        dx_to_player: f32,
        blocked: bool,
        windup: f32,
    ) -> f32 {
        if self.is_planted() {
            return 0.0;
        }
        match intent {
            GroundIntent::Wander => {
                if blocked {
                    self.facing = -self.facing;
                }
                self.facing
            }
            GroundIntent::Chase => {
                self.face(dx_to_player);
                self.facing
            }
            GroundIntent::Attack => {
                self.face(dx_to_player);
                self.phase = GroundPhase::WindingUp { remaining: windup };
                0.0
            }
        }
    }

    /// Advance the swing. Returns true on the tick the strike lands.
    pub fn tick(&mut self, dt: f32, recovery: f32) -> bool {
        match &mut self.phase {
            GroundPhase::Roaming => false,
            GroundPhase::WindingUp { remaining } => {
                *remaining -= dt;
                if *remaining > 0.0 {
                    return false;
                }
                self.phase = GroundPhase::Recovering {
                    remaining: recovery,
                };
                true
            }
            GroundPhase::Recovering { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.phase = GroundPhase::Roaming;
                }
                false
            }
        }
    }

    fn face(&mut self, dx: f32) {
        if dx != 0.0 {
            self.facing = dx.signum();
        }
    }
}

/// Centre of the strike circle in front of the walker.
pub fn strike_point(position: Vec2, facing: f32, reach: f32) -> Vec2 {
    position + Vec2::new(facing * reach, 0.0)
}

/// Circle against box overlap.
pub fn strike_hits(center: Vec2, radius: f32, target: Vec2, half_extents: Vec2) -> bool {
    let closest = center.clamp(target - half_extents, target + half_extents);
    closest.distance_squared(center) <= radius * radius
}

fn half_extents(collider: &Collider, fallback: Vec2) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => fallback,
    }
}

/// Wall directly ahead, or standing on ground that ends just ahead.
fn path_blocked(
    spatial_query: &SpatialQuery,
    filter: &SpatialQueryFilter,
    position: Vec2,
    half: Vec2,
    facing: f32,
) -> bool {
    let ahead = if facing >= 0.0 { Dir2::X } else { Dir2::NEG_X };
    if spatial_query
        .cast_ray(position, ahead, half.x + WALL_CHECK_DISTANCE, true, filter)
        .is_some()
    {
        return true;
    }

    let feet_y = position.y - half.y + 1.0;
    let below = Vec2::new(position.x, feet_y);
    let grounded = spatial_query
        .cast_ray(below, Dir2::NEG_Y, LEDGE_CHECK_DISTANCE + 1.0, true, filter)
        .is_some();
    if !grounded {
        return false;
    }
    let lead = Vec2::new(position.x + facing * (half.x + 2.0), feet_y);
    spatial_query
        .cast_ray(lead, Dir2::NEG_Y, LEDGE_CHECK_DISTANCE + 1.0, true, filter)
        .is_none()
}

pub(crate) fn remove_disabled_ground_enemies(
    mut commands: Commands,
    tuning: Res<ActiveTuning>,
    walkers: Query<Entity, Added<GroundEnemy>>,
) {
    if tuning.ground_enemy().enabled {
        return;
    }
    for entity in &walkers {
        debug!("Ground enemy disabled on {}", tuning.difficulty.label());
        commands.entity(entity).despawn();
    }
}

pub(crate) fn update_ground_enemies(
    time: Res<Time>,
    tuning: Res<ActiveTuning>,
    movement: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    player_query: Query<(Entity, &Transform, &Collider), With<Player>>,
    mut walkers: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut LinearVelocity,
            &mut GroundEnemy,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Player>),
    >,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    let dt = time.delta_secs();
    let walker_tuning = tuning.ground_enemy();
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let player = player_query.iter().next().map(|(entity, transform, collider)| {
        (
            entity,
            transform.translation.truncate(),
            half_extents(collider, PLAYER_HALF_EXTENTS),
        )
    });

    for (entity, transform, collider, mut velocity, mut walker, mut sprite) in &mut walkers {
        let position = transform.translation.truncate();
        let half = half_extents(collider, Vec2::splat(16.0));

        // Walkers fall the same way the player does
        velocity.y = (velocity.y - movement.gravity * dt).max(-movement.max_fall_speed);

        let Some((player_entity, player_pos, player_half)) = player else {
            velocity.x = 0.0;
            continue;
        };

        if walker.tick(dt, walker_tuning.attack_recovery) {
            let center = strike_point(position, walker.facing, half.x + walker_tuning.attack_reach);
            if strike_hits(center, walker_tuning.attack_radius, player_pos, player_half) {
                damage_events.write(DamageEvent {
                    source: entity,
                    target: player_entity,
                    amount: walker_tuning.attack_damage,
                });
            }
        }

        let to_player = player_pos - position;
        let intent = ground_intent(to_player.length(), walker_tuning);
        let blocked = intent == GroundIntent::Wander
            && !walker.is_planted()
            && path_blocked(&spatial_query, &ground_filter, position, half, walker.facing);

        let direction = walker.steer(intent, to_player.x, blocked, walker_tuning.attack_windup);
        velocity.x = direction * walker_tuning.move_speed;
        sprite.flip_x = walker.facing < 0.0;
    }
}
