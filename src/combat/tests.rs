//! Combat domain: tests for projectiles, parry, slash, enemies and the aura.

use bevy::prelude::*;

use super::ai::{
    GroundEnemy, GroundIntent, GroundPhase, PushAura, Shooter, ShooterIntent, ground_intent,
    knockback_velocity, shooter_intent, shooter_velocity, strike_hits, strike_point,
};
use super::player::{PARRY_STREAK_MILESTONE, ParryState, SlashHitbox};
use super::projectiles::{BoomerangPhase, MotionContext, ProjectileMotion, StepOutcome, step};
use super::spawn::boss_max_health;
use super::{BossArenaConfig, Health, PlayerCombatTuning, PlayerStats};
use crate::difficulty::{BossTuning, Difficulty, EnemyTuning, GroundEnemyTuning};
use crate::movement::MovementTuning;

fn context(dt: f32) -> MotionContext {
    MotionContext {
        dt,
        target: None,
        owner: None,
        activation_radius: 100.0,
        arrive_distance: 10.0,
    }
}

fn entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

fn slash(owner: Entity, base_damage: i32) -> SlashHitbox {
    SlashHitbox {
        owner,
        base_damage,
        crit_chance: 0.1,
        crit_multiplier: 1.5,
        hits: Vec::new(),
    }
}

#[test]
fn test_straight_projectile_moves_at_fixed_velocity() {
    let mut motion = ProjectileMotion::Straight {
        velocity: Vec2::new(100.0, -50.0),
    };
    let (next, outcome) = step(&mut motion, Vec2::ZERO, context(0.5));
    assert_eq!(next, Vec2::new(50.0, -25.0));
    assert_eq!(outcome, StepOutcome::Continue);
}

#[test]
fn test_homing_turn_is_capped_by_turn_rate() {
    let mut motion = ProjectileMotion::Homing {
        heading: Vec2::X,
        speed: 10.0,
        turn_rate: 90.0,
    };
    let ctx = MotionContext {
        target: Some(Vec2::new(0.0, 100.0)),
        ..context(0.5)
    };

    let (next, _) = step(&mut motion, Vec2::ZERO, ctx);
    let ProjectileMotion::Homing { heading, .. } = motion else {
        panic!("motion kind changed");
    };
    let expected = Vec2::from_angle(45f32.to_radians());
    assert!(heading.distance(expected) < 1e-4);
    assert!(next.distance(expected * 5.0) < 1e-3);
}

#[test]
fn test_boomerang_waits_then_returns_home() {
    let owner = entities(1)[0];
    let mut motion = ProjectileMotion::Boomerang {
        owner,
        routine: 3,
        velocity: Vec2::new(200.0, 0.0),
        return_speed: 400.0,
        return_delay: 0.5,
        phase: BoomerangPhase::Outbound,
    };
    let ctx = MotionContext {
        owner: Some(Vec2::ZERO),
        ..context(0.25)
    };

    let (pos, outcome) = step(&mut motion, Vec2::ZERO, ctx);
    assert_eq!((pos, outcome), (Vec2::new(50.0, 0.0), StepOutcome::Continue));
    let (pos, _) = step(&mut motion, pos, ctx);
    assert_eq!(pos, Vec2::new(100.0, 0.0));
    assert!(matches!(
        motion,
        ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Waiting { .. },
            ..
        }
    ));

    let (pos, outcome) = step(&mut motion, pos, ctx);
    assert_eq!(outcome, StepOutcome::Continue);
    assert!(!motion.started_return());

    let (pos, outcome) = step(&mut motion, pos, ctx);
    assert_eq!(outcome, StepOutcome::StartedReturn);
    assert!(motion.started_return());
    assert_eq!(pos, Vec2::new(100.0, 0.0));

    let (pos, outcome) = step(&mut motion, pos, ctx);
    assert_eq!(outcome, StepOutcome::Arrived);
    assert_eq!(pos, Vec2::ZERO);
}

#[test]
fn test_boomerang_without_owner_is_removed() {
    let owner = entities(1)[0];
    let mut motion = ProjectileMotion::Boomerang {
        owner,
        routine: 0,
        velocity: Vec2::X,
        return_speed: 1.0,
        return_delay: 1.0,
        phase: BoomerangPhase::Outbound,
    };
    let (_, outcome) = step(&mut motion, Vec2::ZERO, context(0.1));
    assert_eq!(outcome, StepOutcome::OwnerMissing);
}

#[test]
fn test_parry_success_uses_short_cooldown() {
    let mut parry = ParryState::default();
    assert!(parry.start(0.2));
    assert!(!parry.start(0.2));

    let success = parry.try_block(5.0).expect("window was open");
    assert_eq!(success.streak, 1);
    assert!(success.first_parry);
    assert!(!parry.active);
    assert!(!parry.can_start());
    assert_eq!(parry.readiness(), 0.0);

    parry.tick(2.5, 7.0);
    assert!((parry.readiness() - 0.5).abs() < 1e-6);
    parry.tick(2.5, 7.0);
    assert!(parry.can_start());
}

#[test]
fn test_block_without_window_does_nothing() {
    let mut parry = ParryState::default();
    assert!(parry.try_block(5.0).is_none());
    assert_eq!(parry.streak, 0);
}

#[test]
fn test_parry_window_expiry_resets_streak() {
    let mut parry = ParryState::default();
    parry.start(0.2);
    parry.try_block(1.0);
    parry.tick(1.0, 7.0);
    assert_eq!(parry.streak, 1);

    parry.start(0.2);
    assert!(!parry.tick(0.1, 7.0));
    assert!(parry.tick(0.15, 7.0));
    assert_eq!(parry.streak, 0);
    assert_eq!(parry.cooldown, 7.0);
}

#[test]
fn test_parry_milestones_fire_once_per_run() {
    let mut parry = ParryState::default();
    let mut first = 0;
    let mut milestone_at = Vec::new();

    for _ in 0..PARRY_STREAK_MILESTONE {
        parry.start(0.2);
        let success = parry.try_block(1.0).expect("window was open");
        first += success.first_parry as u32;
        if success.streak_milestone {
            milestone_at.push(success.streak);
        }
        parry.tick(1.0, 7.0);
    }
    assert_eq!(first, 1);
    assert_eq!(milestone_at, vec![PARRY_STREAK_MILESTONE]);

    // Break the streak and build it up again
    parry.start(0.2);
    parry.tick(0.5, 1.0);
    parry.tick(1.0, 1.0);
    for _ in 0..PARRY_STREAK_MILESTONE {
        parry.start(0.2);
        let success = parry.try_block(1.0).expect("window was open");
        assert!(!success.first_parry);
        assert!(!success.streak_milestone);
        parry.tick(1.0, 7.0);
    }
    assert_eq!(parry.streak, PARRY_STREAK_MILESTONE);
}

#[test]
fn test_slash_hits_each_target_once() {
    let ids = entities(3);
    let mut hitbox = slash(ids[0], 10);

    let first = hitbox.register_hit(ids[1], 0.9).expect("first hit lands");
    assert_eq!(first.damage, 10);
    assert!(!first.crit);
    assert!(!first.multi_slash);

    assert!(hitbox.register_hit(ids[1], 0.9).is_none());

    let second = hitbox.register_hit(ids[2], 0.9).expect("second target lands");
    assert!(second.multi_slash);
    assert_eq!(hitbox.hits.len(), 2);
}

#[test]
fn test_slash_crit_rounds_damage() {
    let ids = entities(2);
    let mut hitbox = slash(ids[0], 7);
    let hit = hitbox.register_hit(ids[1], 0.0).expect("hit lands");
    assert!(hit.crit);
    assert_eq!(hit.damage, 11);
}

#[test]
fn test_health_is_not_clamped() {
    let mut health = Health::new(10);
    health.take_damage(25);
    assert_eq!(health.current, -15);
    assert!(health.is_dead());
    assert!(health.fraction() < 0.0);

    health.heal_full();
    assert_eq!(health.current, 10);
}

#[test]
fn test_parry_cooldown_reduction_respects_floor() {
    let mut stats =
        PlayerStats::from_tuning(&PlayerCombatTuning::default(), &MovementTuning::default());
    assert_eq!(stats.parry_success_cooldown, 5.0);

    stats.reduce_parry_cooldowns(1.0, 0.5);
    assert_eq!(stats.parry_success_cooldown, 4.0);
    assert_eq!(stats.parry_fail_cooldown, 6.0);

    for _ in 0..10 {
        stats.reduce_parry_cooldowns(1.0, 0.5);
    }
    assert_eq!(stats.parry_success_cooldown, 0.5);
    assert_eq!(stats.parry_fail_cooldown, 0.5);
}

#[test]
fn test_shooter_intent_bands() {
    assert_eq!(shooter_intent(300.0), ShooterIntent::Idle);
    assert_eq!(shooter_intent(200.0), ShooterIntent::Chase);
    assert_eq!(shooter_intent(60.0), ShooterIntent::Hold);
    assert_eq!(shooter_intent(30.0), ShooterIntent::Retreat);
}

#[test]
fn test_shooter_velocity_chases_and_eases() {
    let tuning = EnemyTuning::preset(Difficulty::Normal);

    let chase = shooter_velocity(Vec2::ZERO, Vec2::new(200.0, 0.0), &tuning, 0.1);
    assert_eq!(chase, Vec2::new(tuning.chase_speed, 0.0));

    let retreat = shooter_velocity(Vec2::ZERO, Vec2::new(0.0, 20.0), &tuning, 0.1);
    assert_eq!(retreat, Vec2::new(0.0, -tuning.retreat_speed));

    let eased = shooter_velocity(Vec2::new(10.0, 0.0), Vec2::new(60.0, 0.0), &tuning, 0.1);
    assert!(eased.x < 10.0 && eased.x > 0.0);
}

#[test]
fn test_shooter_fires_immediately_then_waits() {
    let mut shooter = Shooter::default();
    assert!(shooter.tick(0.1, 1.2));
    assert!(!shooter.tick(0.6, 1.2));
    assert!(shooter.tick(0.6, 1.2));
}

#[test]
fn test_ground_intent_bands() {
    let tuning = GroundEnemyTuning::preset(Difficulty::Normal);
    assert_eq!(ground_intent(300.0, &tuning), GroundIntent::Wander);
    assert_eq!(ground_intent(tuning.detection_radius, &tuning), GroundIntent::Chase);
    assert_eq!(ground_intent(100.0, &tuning), GroundIntent::Chase);
    assert_eq!(ground_intent(tuning.attack_range, &tuning), GroundIntent::Attack);
}

#[test]
fn test_wandering_walker_turns_at_obstacles() {
    let mut walker = GroundEnemy::default();
    assert_eq!(walker.steer(GroundIntent::Wander, 0.0, false, 0.5), 1.0);
    assert_eq!(walker.steer(GroundIntent::Wander, 0.0, true, 0.5), -1.0);
    assert_eq!(walker.steer(GroundIntent::Wander, 0.0, false, 0.5), -1.0);
}

#[test]
fn test_chasing_walker_follows_player_side() {
    let mut walker = GroundEnemy::default();
    assert_eq!(walker.steer(GroundIntent::Chase, -50.0, false, 0.5), -1.0);
    // Directly above keeps the last facing
    assert_eq!(walker.steer(GroundIntent::Chase, 0.0, false, 0.5), -1.0);
    assert_eq!(walker.steer(GroundIntent::Chase, 50.0, true, 0.5), 1.0);
}

#[test]
fn test_walker_winds_up_strikes_once_then_recovers() {
    let mut walker = GroundEnemy::default();
    assert_eq!(walker.steer(GroundIntent::Attack, -20.0, false, 0.5), 0.0);
    assert_eq!(walker.facing, -1.0);
    assert!(walker.is_planted());

    // Planted walkers ignore new intents
    assert_eq!(walker.steer(GroundIntent::Chase, 80.0, false, 0.5), 0.0);
    assert_eq!(walker.facing, -1.0);

    assert!(!walker.tick(0.3, 0.1));
    assert!(walker.tick(0.3, 0.1));
    assert!(matches!(walker.phase, GroundPhase::Recovering { .. }));
    assert!(!walker.tick(0.05, 0.1));
    assert!(walker.is_planted());
    assert!(!walker.tick(0.06, 0.1));
    assert_eq!(walker.phase, GroundPhase::Roaming);
}

#[test]
fn test_strike_reaches_only_the_facing_side() {
    let position = Vec2::ZERO;
    let half = Vec2::new(12.0, 24.0);
    let right = strike_point(position, 1.0, 34.0);
    assert_eq!(right, Vec2::new(34.0, 0.0));

    assert!(strike_hits(right, 25.6, Vec2::new(40.0, 0.0), half));
    assert!(strike_hits(right, 25.6, Vec2::new(70.0, 10.0), half));
    assert!(!strike_hits(right, 25.6, Vec2::new(-40.0, 0.0), half));
    assert!(!strike_hits(right, 25.6, Vec2::new(40.0, 60.0), half));
}

#[test]
fn test_aura_interval_has_minimum() {
    let mut aura = PushAura::default();
    assert!(aura.try_hit(0.0));
    assert!(!aura.try_hit(0.0));
    aura.tick(0.05);
    assert!(aura.try_hit(0.0));
}

#[test]
fn test_knockback_pushes_up_when_coincident_and_clamps() {
    let up = knockback_velocity(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 10.0, 100.0);
    assert_eq!(up, Vec2::new(0.0, 10.0));

    let clamped = knockback_velocity(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::ZERO, 500.0, 320.0);
    assert!((clamped.length() - 320.0).abs() < 1e-3);
    assert!(clamped.x > 0.0);
}

#[test]
fn test_boss_health_scales_with_difficulty() {
    let config = BossArenaConfig::default();
    let mut tuning = BossTuning::preset(Difficulty::Normal);
    tuning.health_multiplier = 1.5;
    assert_eq!(boss_max_health(&config, &tuning), 1500);

    tuning.health_multiplier = 0.0;
    assert_eq!(boss_max_health(&config, &tuning), 1);
}
