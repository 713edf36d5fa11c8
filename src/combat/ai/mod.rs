//! Combat domain: shooter and melee enemies plus the boss aura.

pub(crate) mod aura;
pub(crate) mod enemy;
pub(crate) mod ground;

pub use aura::{MIN_AURA_INTERVAL, PushAura, knockback_velocity};
pub use enemy::{
    DETECTION_RADIUS, PREFERRED_DISTANCE, Shooter, ShooterIntent, TOO_CLOSE_DISTANCE,
    shooter_intent, shooter_velocity,
};
pub use ground::{
    GroundEnemy, GroundIntent, GroundPhase, LEDGE_CHECK_DISTANCE, WALL_CHECK_DISTANCE,
    ground_intent, strike_hits, strike_point,
};

pub(crate) use aura::apply_boss_aura;
pub(crate) use enemy::{remove_disabled_shooters, update_shooters};
pub(crate) use ground::{remove_disabled_ground_enemies, update_ground_enemies};
