//! Arena domain: collectibles that grow the player's stats, and the heal pickup.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{Health, PlayerCombatTuning, PlayerStats};
use crate::movement::{DashCharges, DashState, Player};

/// Units are 32 px; boosts are a fraction of a unit.
pub const MOVE_SPEED_BOOST: f32 = 0.6 * 32.0;
pub const JUMP_FORCE_BOOST: f32 = 32.0;
pub const DAMAGE_BOOST: i32 = 5;
pub const PARRY_COOLDOWN_REDUCTION: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    DamagePlus5,
    ExtraDashCharge,
    ParryCooldownMinus1,
    MoveAndJumpBoost,
    FullHeal,
}

impl Pickup {
    pub const ALL: [Pickup; 5] = [
        Pickup::DamagePlus5,
        Pickup::ExtraDashCharge,
        Pickup::ParryCooldownMinus1,
        Pickup::MoveAndJumpBoost,
        Pickup::FullHeal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pickup::DamagePlus5 => "Damage +5",
            Pickup::ExtraDashCharge => "Extra dash charge",
            Pickup::ParryCooldownMinus1 => "Parry cooldown -1s",
            Pickup::MoveAndJumpBoost => "Move and jump boost",
            Pickup::FullHeal => "Full heal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Pickup::DamagePlus5 => "Every slash deals 5 more damage.",
            Pickup::ExtraDashCharge => "Unlocks the dash and adds one charge.",
            Pickup::ParryCooldownMinus1 => "Parry recovers one second sooner.",
            Pickup::MoveAndJumpBoost => "Run faster and jump higher.",
            Pickup::FullHeal => "Restores all health.",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Pickup::DamagePlus5 => Color::srgb(0.95, 0.3, 0.3),
            Pickup::ExtraDashCharge => Color::srgb(0.3, 0.8, 1.0),
            Pickup::ParryCooldownMinus1 => Color::srgb(0.95, 0.85, 0.3),
            Pickup::MoveAndJumpBoost => Color::srgb(0.4, 0.95, 0.45),
            Pickup::FullHeal => Color::srgb(1.0, 0.55, 0.75),
        }
    }
}

/// Sent once per pickup the player walks into.
#[derive(Debug, Clone, Copy)]
pub struct PickupCollected {
    pub pickup: Pickup,
}

impl Message for PickupCollected {}

/// Player components a pickup may touch.
pub struct PickupTarget<'a> {
    pub stats: &'a mut PlayerStats,
    pub health: &'a mut Health,
    pub charges: &'a mut DashCharges,
    pub dash: &'a mut DashState,
}

pub fn apply_pickup(pickup: Pickup, target: PickupTarget, tuning: &PlayerCombatTuning) {
    match pickup {
        Pickup::DamagePlus5 => target.stats.attack_damage += DAMAGE_BOOST,
        Pickup::ExtraDashCharge => {
            target.charges.grant_extra();
            target.dash.unlocked = true;
        }
        Pickup::ParryCooldownMinus1 => target
            .stats
            .reduce_parry_cooldowns(PARRY_COOLDOWN_REDUCTION, tuning.parry_cooldown_floor),
        Pickup::MoveAndJumpBoost => {
            target.stats.move_speed += MOVE_SPEED_BOOST;
            target.stats.jump_force += JUMP_FORCE_BOOST;
        }
        Pickup::FullHeal => target.health.heal_full(),
    }
}

pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut collected_events: MessageWriter<PickupCollected>,
    tuning: Res<PlayerCombatTuning>,
    pickups: Query<&Pickup>,
    mut players: Query<
        (&mut PlayerStats, &mut Health, &mut DashCharges, &mut DashState),
        With<Player>,
    >,
) {
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pickup_entity, player) in pairs {
            let Ok(pickup) = pickups.get(pickup_entity) else {
                continue;
            };
            if collected.contains(&pickup_entity) {
                continue;
            }
            let Ok((mut stats, mut health, mut charges, mut dash)) = players.get_mut(player)
            else {
                continue;
            };

            apply_pickup(
                *pickup,
                PickupTarget {
                    stats: &mut stats,
                    health: &mut health,
                    charges: &mut charges,
                    dash: &mut dash,
                },
                &tuning,
            );
            info!("Collected {}", pickup.label());
            collected_events.write(PickupCollected { pickup: *pickup });

            collected.push(pickup_entity);
            commands.entity(pickup_entity).despawn();
        }
    }
}
