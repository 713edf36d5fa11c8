//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion parameters, loaded from the `player.movement` section of combat.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Seconds the jump button keeps adding lift after takeoff
    pub max_jump_hold: f32,
    pub jump_hold_force: f32,
    pub ground_check_distance: f32,
    /// Minimum y of a contact normal for it to count as floor
    pub ground_normal_min_y: f32,
    /// How far below the collider bottom a floor contact may lie
    pub ground_point_tolerance: f32,
    pub dash_unlocked: bool,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub max_dash_charges: u32,
    /// Extra seconds after a dash ends before ground contact may refill charges
    pub dash_refill_delay: f32,
    pub dash_trail_spacing: f32,
    pub dash_trail_offset: f32,
    pub dash_trail_lifetime: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 220.0,
            jump_force: 520.0,
            gravity: 1500.0,
            max_fall_speed: 900.0,
            max_jump_hold: 0.2,
            jump_hold_force: 640.0,
            ground_check_distance: 4.0,
            ground_normal_min_y: 0.6,
            ground_point_tolerance: 2.5,
            dash_unlocked: true,
            dash_speed: 640.0,
            dash_duration: 0.15,
            dash_cooldown: 1.0,
            max_dash_charges: 2,
            dash_refill_delay: 0.08,
            dash_trail_spacing: 0.05,
            dash_trail_offset: 10.0,
            dash_trail_lifetime: 1.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    /// Raw input direction, normalized only when longer than one.
    pub fn dash_direction(&self) -> Vec2 {
        if self.axis.length_squared() > 1.0 {
            self.axis.normalize()
        } else {
            self.axis
        }
    }
}
