//! Arena domain: tests for pickup effects and the layout.

use super::layout::{
    BOSS_POSITION, FLOOR, GROUND_ENEMY_POSITIONS, PICKUPS, PLATFORMS, PLAYER_START,
};
use super::{Pickup, PickupTarget, apply_pickup};
use crate::combat::spawn::GROUND_ENEMY_SIZE;
use crate::combat::{BossArenaConfig, Health, PlayerCombatTuning, PlayerStats};
use crate::movement::{DashCharges, DashState, MovementTuning};

struct Fixture {
    stats: PlayerStats,
    health: Health,
    charges: DashCharges,
    dash: DashState,
}

impl Fixture {
    fn new() -> Self {
        Self {
            stats: PlayerStats::from_tuning(
                &PlayerCombatTuning::default(),
                &MovementTuning::default(),
            ),
            health: Health::new(100),
            charges: DashCharges::new(2),
            dash: DashState::new(false),
        }
    }

    fn apply(&mut self, pickup: Pickup) {
        apply_pickup(
            pickup,
            PickupTarget {
                stats: &mut self.stats,
                health: &mut self.health,
                charges: &mut self.charges,
                dash: &mut self.dash,
            },
            &PlayerCombatTuning::default(),
        );
    }
}

#[test]
fn test_damage_pickup_adds_five() {
    let mut fixture = Fixture::new();
    fixture.apply(Pickup::DamagePlus5);
    assert_eq!(fixture.stats.attack_damage, 15);
}

#[test]
fn test_dash_pickup_raises_cap_and_unlocks() {
    let mut fixture = Fixture::new();
    fixture.charges.spend();
    fixture.apply(Pickup::ExtraDashCharge);
    assert_eq!(fixture.charges.max, 3);
    assert_eq!(fixture.charges.current, 3);
    assert!(fixture.dash.unlocked);
}

#[test]
fn test_parry_pickup_stops_at_floor() {
    let mut fixture = Fixture::new();
    for _ in 0..8 {
        fixture.apply(Pickup::ParryCooldownMinus1);
    }
    assert_eq!(fixture.stats.parry_success_cooldown, 0.5);
    assert_eq!(fixture.stats.parry_fail_cooldown, 0.5);
}

#[test]
fn test_boost_pickup_raises_speed_and_jump() {
    let mut fixture = Fixture::new();
    let before = fixture.stats.clone();
    fixture.apply(Pickup::MoveAndJumpBoost);
    assert!(fixture.stats.move_speed > before.move_speed);
    assert!(fixture.stats.jump_force > before.jump_force);
}

#[test]
fn test_full_heal_restores_max() {
    let mut fixture = Fixture::new();
    fixture.health.take_damage(70);
    fixture.apply(Pickup::FullHeal);
    assert_eq!(fixture.health.current, 100);
}

#[test]
fn test_every_pickup_is_placed() {
    for pickup in Pickup::ALL {
        assert!(PICKUPS.iter().any(|(placed, _)| *placed == pickup));
    }
}

#[test]
fn test_player_starts_outside_boss_arena() {
    let radius = BossArenaConfig::default().activation_radius;
    assert!(PLAYER_START.distance(BOSS_POSITION) > radius);
}

#[test]
fn test_ground_enemies_start_on_ground() {
    let feet = GROUND_ENEMY_SIZE.y / 2.0;
    for position in GROUND_ENEMY_POSITIONS {
        let on_block = std::iter::once(FLOOR).chain(PLATFORMS).any(|block| {
            let top = block.center.y + block.size.y / 2.0;
            let half_width = block.size.x / 2.0;
            (position.y - feet - top).abs() < 0.01
                && (position.x - block.center.x).abs() < half_width
        });
        assert!(on_block, "walker at {:?} is not standing on ground", position);
    }
}

#[test]
fn test_every_pickup_has_a_description() {
    for pickup in Pickup::ALL {
        assert!(!pickup.description().is_empty());
        assert_ne!(pickup.description(), pickup.label());
    }
}
