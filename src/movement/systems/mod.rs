//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub use collisions::is_ground_contact;
pub(crate) use collisions::{detect_ground, refill_dash_charges};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_dash, apply_gravity, apply_horizontal_movement, apply_jump, fade_dash_trails,
    spawn_dash_trails, update_facing, update_timers,
};
