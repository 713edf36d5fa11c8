//! Arena domain: fixed positions for the single boss arena.

use bevy::prelude::*;

use crate::arena::pickups::Pickup;

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub const PICKUP_SIZE: f32 = 18.0;

/// A static block of ground: centre and size.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub center: Vec2,
    pub size: Vec2,
}

pub const FLOOR: Block = Block {
    center: Vec2::new(0.0, -300.0),
    size: Vec2::new(1600.0, 40.0),
};

pub const WALLS: [Block; 2] = [
    Block {
        center: Vec2::new(-800.0, 0.0),
        size: Vec2::new(40.0, 640.0),
    },
    Block {
        center: Vec2::new(800.0, 0.0),
        size: Vec2::new(40.0, 640.0),
    },
];

pub const PLATFORMS: [Block; 3] = [
    Block {
        center: Vec2::new(-420.0, -160.0),
        size: Vec2::new(200.0, 20.0),
    },
    Block {
        center: Vec2::new(-80.0, -60.0),
        size: Vec2::new(180.0, 20.0),
    },
    Block {
        center: Vec2::new(260.0, -150.0),
        size: Vec2::new(160.0, 20.0),
    },
];

pub const PLAYER_START: Vec2 = Vec2::new(-680.0, -250.0);
/// Far enough from the start that the fight begins only when the player walks in
pub const BOSS_POSITION: Vec2 = Vec2::new(520.0, -240.0);

pub const SHOOTER_POSITIONS: [Vec2; 2] = [Vec2::new(-260.0, 40.0), Vec2::new(100.0, 80.0)];

/// Walkers stand on the floor and on the middle platform.
pub const GROUND_ENEMY_POSITIONS: [Vec2; 2] = [Vec2::new(40.0, -262.0), Vec2::new(-30.0, -32.0)];

pub const PICKUPS: [(Pickup, Vec2); 5] = [
    (Pickup::DamagePlus5, Vec2::new(-520.0, -265.0)),
    (Pickup::ExtraDashCharge, Vec2::new(-420.0, -130.0)),
    (Pickup::ParryCooldownMinus1, Vec2::new(-80.0, -30.0)),
    (Pickup::MoveAndJumpBoost, Vec2::new(-300.0, -265.0)),
    (Pickup::FullHeal, Vec2::new(260.0, -120.0)),
];
