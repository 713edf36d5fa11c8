//! Movement domain: locomotion systems for timers, jumping, dashing and gravity.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimCue, AnimationTrigger};
use crate::combat::PlayerStats;
use crate::movement::{
    DashCharges, DashState, DashTrail, Facing, MovementInput, MovementState, MovementTuning,
    PLAYER_FRICTION, Player, TrailVariant,
};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut DashState, &mut Friction), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut dash, mut friction) in &mut query {
        if dash.tick(dt) {
            *friction = Friction::new(PLAYER_FRICTION);
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    mut query: Query<(&DashState, &PlayerStats, &mut LinearVelocity), With<Player>>,
) {
    for (dash, stats, mut velocity) in &mut query {
        // Dash owns the velocity while it runs
        if dash.active {
            continue;
        }
        velocity.x = input.axis.x * stats.move_speed;
    }
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &mut MovementState, &DashState, &PlayerStats, &mut LinearVelocity),
        With<Player>,
    >,
    mut animations: MessageWriter<AnimationTrigger>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, dash, stats, mut velocity) in &mut query {
        if dash.active {
            continue;
        }

        if input.jump_just_pressed && state.grounded {
            velocity.y = stats.jump_force;
            state.jumping = true;
            state.jump_hold_timer = tuning.max_jump_hold;
            animations.write(AnimationTrigger {
                entity,
                cue: AnimCue::Jump,
            });
        } else if input.jump_held && state.jumping {
            // Holding extends the jump until the hold timer runs out
            if state.jump_hold_timer > 0.0 {
                velocity.y += tuning.jump_hold_force * dt;
                state.jump_hold_timer -= dt;
            } else {
                state.jumping = false;
            }
        }

        // Variable jump height - cut velocity when releasing jump
        if input.jump_just_released {
            state.jumping = false;
            if velocity.y > 0.0 {
                velocity.y *= 0.5;
            }
        }
    }
}

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&mut DashState, &mut DashCharges, &mut LinearVelocity, &mut Friction),
        With<Player>,
    >,
) {
    for (mut dash, mut charges, mut velocity, mut friction) in &mut query {
        if input.dash_just_pressed
            && dash.try_start(&mut charges, input.dash_direction(), &tuning)
        {
            *friction = Friction::new(0.0);
            debug!(
                "Dash started: dir={:?}, charges={}/{}",
                dash.direction, charges.current, charges.max
            );
        }

        if dash.active {
            velocity.0 = dash.direction * tuning.dash_speed;
        }
    }
}

pub(crate) fn spawn_dash_trails(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut DashState), With<Player>>,
) {
    for (transform, mut dash) in &mut query {
        if !dash.active || dash.trail_timer > 0.0 {
            continue;
        }
        dash.trail_timer += tuning.dash_trail_spacing;

        let origin = transform.translation.truncate();
        let perp = dash.direction.perp() * tuning.dash_trail_offset;
        let trails = [
            (origin, TrailVariant::Center),
            (origin + perp, dash.edge_variant),
            (origin - perp, dash.edge_variant),
        ];

        for (position, variant) in trails {
            commands.spawn((
                DashTrail {
                    variant,
                    remaining: tuning.dash_trail_lifetime,
                    lifetime: tuning.dash_trail_lifetime,
                },
                Sprite {
                    color: DashTrail::color(variant),
                    custom_size: Some(Vec2::new(16.0, 40.0)),
                    ..default()
                },
                Transform::from_translation(position.extend(-1.0)),
            ));
        }
    }
}

pub(crate) fn fade_dash_trails(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DashTrail, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut trail, mut sprite) in &mut query {
        trail.remaining -= dt;
        if trail.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = 0.6 * trail.remaining / trail.lifetime.max(f32::EPSILON);
        sprite.color = DashTrail::color(trail.variant).with_alpha(alpha);
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &DashState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, dash, mut velocity) in &mut query {
        // No gravity during dash
        if dash.active {
            continue;
        }

        velocity.y = (velocity.y - tuning.gravity * dt).max(-tuning.max_fall_speed);
        if !state.grounded && velocity.y < -0.1 {
            state.falling = true;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &DashState, &mut Sprite), With<Player>>,
) {
    for (mut state, dash, mut sprite) in &mut query {
        if dash.active {
            continue;
        }

        if input.axis.x > 0.1 {
            state.facing = Facing::Right;
        } else if input.axis.x < -0.1 {
            state.facing = Facing::Left;
        }
        sprite.flip_x = state.facing == Facing::Left;
    }
}
