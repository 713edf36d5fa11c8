//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::PhysicsLayer;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Friction the player collider uses outside of a dash.
pub const PLAYER_FRICTION: f32 = 0.2;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Boss and shooter enemies
    Enemy,
    /// Pickups - should not block movement
    Sensor,
    /// Player slash hitboxes (damage enemies)
    PlayerHitbox,
    /// Hostile projectiles (damage player)
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub facing: Facing,
    /// Lift is still being added while the jump button is held
    pub jumping: bool,
    pub jump_hold_timer: f32,
    /// Set while airborne and moving down, cleared on landing
    pub falling: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashCharges {
    pub current: u32,
    pub max: u32,
}

impl DashCharges {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Spend one charge. Returns false without changing anything when empty.
    pub fn spend(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Raise the cap by one and fill up.
    pub fn grant_extra(&mut self) {
        self.max += 1;
        self.current = self.max;
    }
}

/// Colour of the edge trails spawned beside a dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailVariant {
    /// Always spawned on the dash line itself
    Center,
    First,
    Second,
    /// The bonus dash on a body with three or more charges
    Final,
}

/// Pick the edge trail colour from the charges left after spending one.
pub fn edge_trail_variant(remaining: u32, max: u32) -> TrailVariant {
    if max >= 3 && remaining == 0 {
        TrailVariant::Final
    } else if remaining == 1 {
        TrailVariant::First
    } else {
        TrailVariant::Second
    }
}

#[derive(Component, Debug, Clone)]
pub struct DashState {
    pub unlocked: bool,
    pub active: bool,
    pub remaining: f32,
    pub direction: Vec2,
    pub cooldown: f32,
    /// Ground contact may not refill charges until this reaches zero
    pub refill_lock: f32,
    pub trail_timer: f32,
    pub edge_variant: TrailVariant,
}

impl DashState {
    pub fn new(unlocked: bool) -> Self {
        Self {
            unlocked,
            active: false,
            remaining: 0.0,
            direction: Vec2::ZERO,
            cooldown: 0.0,
            refill_lock: 0.0,
            trail_timer: 0.0,
            edge_variant: TrailVariant::Second,
        }
    }

    pub fn can_start(&self, charges: &DashCharges, direction: Vec2) -> bool {
        self.unlocked
            && !self.active
            && self.cooldown <= 0.0
            && charges.current >= 1
            && direction != Vec2::ZERO
    }

    /// Begin a dash if every gate passes. Spends a charge and locks refills.
    pub fn try_start(
        &mut self,
        charges: &mut DashCharges,
        direction: Vec2,
        tuning: &MovementTuning,
    ) -> bool {
        if !self.can_start(charges, direction) || !charges.spend() {
            return false;
        }

        self.active = true;
        self.remaining = tuning.dash_duration;
        self.direction = direction.normalize();
        self.cooldown = tuning.dash_cooldown;
        self.refill_lock = tuning.dash_duration + tuning.dash_refill_delay;
        self.trail_timer = 0.0;
        self.edge_variant = edge_trail_variant(charges.current, charges.max);
        true
    }

    /// Advance timers. Returns true on the tick the dash ends.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.cooldown = (self.cooldown - dt).max(0.0);
        self.refill_lock = (self.refill_lock - dt).max(0.0);

        if !self.active {
            return false;
        }
        self.remaining -= dt;
        self.trail_timer -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
            return true;
        }
        false
    }

    pub fn refill_allowed(&self) -> bool {
        !self.active && self.refill_lock <= 0.0
    }
}

/// A fading afterimage left by a dash.
#[derive(Component, Debug)]
pub struct DashTrail {
    pub variant: TrailVariant,
    pub remaining: f32,
    pub lifetime: f32,
}

impl DashTrail {
    pub fn color(variant: TrailVariant) -> Color {
        match variant {
            TrailVariant::Center | TrailVariant::Final => Color::srgba(1.0, 1.0, 1.0, 0.6),
            TrailVariant::First => Color::srgba(0.35, 0.6, 1.0, 0.6),
            TrailVariant::Second => Color::srgba(1.0, 0.45, 0.8, 0.6),
        }
    }
}
