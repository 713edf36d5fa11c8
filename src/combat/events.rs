//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

/// Emitted once when a health pool first drops to zero or below.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

/// Edges of the player entering or leaving the boss arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossArenaEvent {
    Entered { boss: Entity },
    Exited { boss: Entity },
}

impl Message for BossArenaEvent {}

#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
}

impl Message for BossDefeatedEvent {}

#[derive(Debug)]
pub struct ParrySuccessEvent {
    pub parrier: Entity,
    pub streak: u32,
}

impl Message for ParrySuccessEvent {}

/// A boss routine asked for a projectile at `origin`.
#[derive(Debug)]
pub struct BossFireEvent {
    pub boss: Entity,
    pub origin: Vec2,
    pub command: crate::combat::boss::FireCommand,
}

impl Message for BossFireEvent {}

/// A boomerang finished waiting at the arena edge and began flying home.
#[derive(Debug)]
pub struct BoomerangReturning {
    pub owner: Entity,
    pub routine: u32,
}

impl Message for BoomerangReturning {}

/// A slash landed; the UI floats the number above `position`.
#[derive(Debug, Clone, Copy)]
pub struct DamagePopupEvent {
    pub position: Vec2,
    pub amount: i32,
    pub crit: bool,
}

impl Message for DamagePopupEvent {}
