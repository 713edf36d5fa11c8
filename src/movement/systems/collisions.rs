//! Movement domain: ground detection and dash refills.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimCue, AnimationTrigger};
use crate::movement::{DashCharges, DashState, GameLayer, MovementState, MovementTuning, Player};

/// A ray hit counts as floor only when it faces up enough and sits at the feet.
pub fn is_ground_contact(normal_y: f32, point_y: f32, bottom_y: f32, tuning: &MovementTuning) -> bool {
    normal_y >= tuning.ground_normal_min_y && bottom_y - point_y <= tuning.ground_point_tolerance
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
    mut animations: MessageWriter<AnimationTrigger>,
) {
    // Filter to only hit Ground layer entities (not enemies, pickups, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, collider, mut state) in &mut query {
        let was_grounded = state.grounded;

        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        // Start just inside the collider so the ray never begins inside the floor
        let bottom_y = transform.translation.y - player_half_height;
        let ray_origin = Vec2::new(transform.translation.x, bottom_y + 1.0);
        let ray_distance = tuning.ground_check_distance + 1.0;

        state.grounded = spatial_query
            .cast_ray(ray_origin, Dir2::NEG_Y, ray_distance, true, &ground_filter)
            .is_some_and(|hit| {
                let point_y = ray_origin.y - hit.distance;
                is_ground_contact(hit.normal.y, point_y, bottom_y, &tuning)
            });

        if state.grounded && !was_grounded {
            state.jumping = false;
            if state.falling {
                state.falling = false;
                animations.write(AnimationTrigger {
                    entity,
                    cue: AnimCue::Land,
                });
            }
            debug!("Landed at y={:.1}", transform.translation.y);
        }
    }
}

/// Refill charges when grounded, not dashing and past the refill lock.
pub(crate) fn refill_dash_charges(
    mut query: Query<(&MovementState, &DashState, &mut DashCharges), With<Player>>,
) {
    for (state, dash, mut charges) in &mut query {
        if state.grounded && dash.refill_allowed() && charges.current < charges.max {
            charges.refill();
        }
    }
}
