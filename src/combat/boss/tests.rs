//! Combat domain: tests for boss selection, routines and the director.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    ActiveAttack, ArenaEdge, AttackPattern, AttackRoutine, BossDirector, DirectorInput,
    DirectorOutput, DirectorPhase, FireCommand, Heading, RageLevel, RageThresholds, ShotKind,
    attack_pool, select_attack, select_dual_pair,
};
use crate::difficulty::{BossTuning, Difficulty};

fn normal() -> BossTuning {
    BossTuning::preset(Difficulty::Normal)
}

fn run_to_end(routine: &mut AttackRoutine, rng: &mut ChaCha8Rng) -> (Vec<FireCommand>, f32) {
    let mut out = Vec::new();
    let mut elapsed = 0.0;
    routine.advance(0.0, false, rng, &mut out);
    while !routine.is_finished() && elapsed < 120.0 {
        routine.advance(0.05, false, rng, &mut out);
        elapsed += 0.05;
    }
    (out, elapsed)
}

#[test]
fn test_selection_never_repeats_last_attack() {
    let tuning = BossTuning::preset(Difficulty::Nightmare);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut last = None;
    for i in 0..500 {
        let fraction = [1.0, 0.4, 0.1][i % 3];
        let next = select_attack(fraction, last, &tuning, &mut rng);
        assert_ne!(Some(next), last);
        last = Some(next);
    }
}

#[test]
fn test_pool_at_full_health_is_base_minus_last() {
    let pool = attack_pool(1.0, Some(AttackPattern::CrossSpin), &normal(), 0.0);
    assert_eq!(
        pool,
        vec![AttackPattern::CircleWave, AttackPattern::RandomCircle]
    );
}

#[test]
fn test_homing_joins_at_half_health_only_when_enabled() {
    let pool = attack_pool(0.5, None, &normal(), 1.0);
    assert!(pool.contains(&AttackPattern::HomingShots));

    let easy = BossTuning::preset(Difficulty::Easy);
    let pool = attack_pool(0.5, None, &easy, 1.0);
    assert!(!pool.contains(&AttackPattern::HomingShots));
}

#[test]
fn test_dual_attack_never_with_zero_chance() {
    let mut tuning = normal();
    tuning.dual.chance = 0.0;
    // Even a roll of exactly zero must not pass a zero chance
    let pool = attack_pool(0.1, None, &tuning, 0.0);
    assert!(!pool.contains(&AttackPattern::DualAttack));
}

#[test]
fn test_dual_attack_follows_roll_at_low_health() {
    let tuning = normal();
    let chance = tuning.dual.chance;

    let pool = attack_pool(0.2, None, &tuning, chance);
    assert!(pool.contains(&AttackPattern::DualAttack));

    let pool = attack_pool(0.2, None, &tuning, chance + 0.01);
    assert!(!pool.contains(&AttackPattern::DualAttack));

    // Above 25% health the roll does not matter
    let pool = attack_pool(0.3, None, &tuning, 0.0);
    assert!(!pool.contains(&AttackPattern::DualAttack));
}

#[test]
fn test_dual_pair_is_distinct_base_patterns() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..100 {
        let (a, b) = select_dual_pair(&mut rng);
        assert_ne!(a, b);
        assert!(AttackPattern::BASE.contains(&a));
        assert!(AttackPattern::BASE.contains(&b));
    }
}

#[test]
fn test_rage_thresholds_fire_once() {
    let mut rage = RageThresholds::default();
    assert!(rage.observe(0.8).is_empty());
    assert_eq!(rage.observe(0.5), vec![RageLevel::Half]);
    assert!(rage.observe(0.45).is_empty());
    assert_eq!(rage.observe(0.2), vec![RageLevel::Quarter]);
    assert!(rage.observe(-0.5).is_empty());
}

#[test]
fn test_single_hit_can_cross_both_thresholds() {
    let mut rage = RageThresholds::default();
    assert_eq!(rage.observe(0.1), vec![RageLevel::Half, RageLevel::Quarter]);
}

#[test]
fn test_cross_spin_fires_four_spokes_per_burst_over_full_sweep() {
    let tuning = normal();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut routine =
        AttackRoutine::new(0, AttackPattern::CrossSpin, &tuning, false, &mut rng).unwrap();

    let mut first = Vec::new();
    routine.advance(0.0, false, &mut rng, &mut first);
    let angles: Vec<Heading> = first.iter().map(|c| c.heading).collect();
    assert_eq!(
        angles,
        vec![
            Heading::Angle(0.0),
            Heading::Angle(90.0),
            Heading::Angle(180.0),
            Heading::Angle(270.0)
        ]
    );

    let (rest, _) = run_to_end(&mut routine, &mut rng);
    // 0..=180 in 7.5 degree steps is 25 bursts
    assert_eq!(first.len() + rest.len(), 25 * 4);
    assert!(rest.iter().all(|c| c.speed == tuning.cross_spin.speed));
}

#[test]
fn test_cross_spin_extra_spokes_only_when_enabled_and_low() {
    let nightmare = BossTuning::preset(Difficulty::Nightmare);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut out = Vec::new();
    let mut low = AttackRoutine::new(0, AttackPattern::CrossSpin, &nightmare, true, &mut rng).unwrap();
    low.advance(0.0, false, &mut rng, &mut out);
    assert_eq!(out.len(), 8);

    out.clear();
    let mut high =
        AttackRoutine::new(1, AttackPattern::CrossSpin, &nightmare, false, &mut rng).unwrap();
    high.advance(0.0, false, &mut rng, &mut out);
    assert_eq!(out.len(), 4);
}

#[test]
fn test_circle_wave_rings_shift_each_wave() {
    let tuning = normal();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut routine =
        AttackRoutine::new(0, AttackPattern::CircleWave, &tuning, false, &mut rng).unwrap();

    let mut out = Vec::new();
    routine.advance(0.0, false, &mut rng, &mut out);
    assert_eq!(out.len(), 24);
    assert_eq!(out[0].heading, Heading::Angle(0.0));
    assert_eq!(out[1].heading, Heading::Angle(15.0));

    out.clear();
    routine.advance(tuning.circle_wave.delay, false, &mut rng, &mut out);
    assert_eq!(out.len(), 24);
    assert_eq!(out[0].heading, Heading::Angle(5.0));
}

#[test]
fn test_random_circle_matches_fixed_density() {
    let tuning = normal();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut routine =
        AttackRoutine::new(0, AttackPattern::RandomCircle, &tuning, false, &mut rng).unwrap();

    let (out, _) = run_to_end(&mut routine, &mut rng);
    assert_eq!(out.len() as u32, tuning.circle_wave.waves * 24);
    assert!(out.iter().all(|c| c.speed == tuning.circle_wave.random_speed));
    assert!(out.iter().all(|c| match c.heading {
        Heading::Angle(a) => (0.0..360.0).contains(&a),
        Heading::TowardPlayer => false,
    }));
}

#[test]
fn test_boomerang_wave_ends_when_a_boomerang_turns() {
    let tuning = BossTuning::preset(Difficulty::Nightmare);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut routine =
        AttackRoutine::new(4, AttackPattern::CircleWave, &tuning, false, &mut rng).unwrap();

    let mut out = Vec::new();
    routine.advance(0.0, false, &mut rng, &mut out);
    assert!(out.iter().all(|c| c.kind == ShotKind::Boomerang && c.routine == 4));
    assert!(!routine.is_finished());

    routine.advance(0.1, true, &mut rng, &mut out);
    assert!(routine.is_finished());
}

#[test]
fn test_boomerang_wave_gives_up_after_wait_limit() {
    let tuning = BossTuning::preset(Difficulty::Nightmare);
    let wave = &tuning.circle_wave;
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut routine =
        AttackRoutine::new(0, AttackPattern::CircleWave, &tuning, false, &mut rng).unwrap();

    let (_, elapsed) = run_to_end(&mut routine, &mut rng);
    assert!(routine.is_finished());
    let expected = wave.waves as f32 * wave.delay + wave.boomerang_wait_limit;
    assert!((elapsed - expected).abs() < 0.1);
}

#[test]
fn test_homing_count_depends_on_health() {
    let tuning = normal();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut routine =
        AttackRoutine::new(0, AttackPattern::HomingShots, &tuning, false, &mut rng).unwrap();
    let (out, _) = run_to_end(&mut routine, &mut rng);
    assert_eq!(out.len() as u32, tuning.homing.count);
    assert!(out.iter().all(|c| c.heading == Heading::TowardPlayer));

    let mut routine =
        AttackRoutine::new(1, AttackPattern::HomingShots, &tuning, true, &mut rng).unwrap();
    let (out, _) = run_to_end(&mut routine, &mut rng);
    assert_eq!(out.len() as u32, tuning.homing.low_hp_count);
}

#[test]
fn test_dual_attack_lasts_at_least_its_window() {
    let mut tuning = normal();
    tuning.homing.count = 1;
    tuning.homing.interval = 0.01;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let first = AttackRoutine::new(0, AttackPattern::HomingShots, &tuning, false, &mut rng).unwrap();
    let second = AttackRoutine::new(1, AttackPattern::HomingShots, &tuning, false, &mut rng).unwrap();
    let mut dual = ActiveAttack::Dual {
        first,
        second,
        elapsed: 0.0,
        window: 3.0,
    };

    let mut out = Vec::new();
    dual.advance(1.0, &[], &mut rng, &mut out);
    assert_eq!(out.len(), 2);
    assert!(!dual.is_finished());

    dual.advance(2.0, &[], &mut rng, &mut out);
    assert!(dual.is_finished());
    assert_eq!(dual.pattern(), AttackPattern::DualAttack);
}

#[test]
fn test_dual_routine_never_built_as_single() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(AttackRoutine::new(0, AttackPattern::DualAttack, &normal(), true, &mut rng).is_none());
}

fn input(dt: f32, distance: Option<f32>) -> DirectorInput {
    DirectorInput {
        dt,
        player_distance: distance,
        health_fraction: 1.0,
    }
}

#[test]
fn test_director_goes_dormant_without_player() {
    let mut director = BossDirector::new(384.0, 1.0, 5);
    let mut out = DirectorOutput::default();
    director.tick(input(0.1, None), &normal(), &mut out);
    assert_eq!(director.phase, DirectorPhase::Dormant);

    director.tick(input(5.0, Some(0.0)), &normal(), &mut out);
    assert_eq!(director.phase, DirectorPhase::Dormant);
    assert!(out.fire.is_empty());
}

#[test]
fn test_director_waits_for_intro_and_arena_entry() {
    let tuning = normal();
    let mut director = BossDirector::new(384.0, 1.0, 5);

    let mut out = DirectorOutput::default();
    director.tick(input(0.5, Some(100.0)), &tuning, &mut out);
    assert_eq!(director.phase, DirectorPhase::Intro);

    let mut out = DirectorOutput::default();
    director.tick(input(0.6, Some(1000.0)), &tuning, &mut out);
    assert_eq!(director.phase, DirectorPhase::WaitingForPlayer);
    assert_eq!(out.arena, None);

    let mut out = DirectorOutput::default();
    director.tick(input(0.1, Some(200.0)), &tuning, &mut out);
    assert_eq!(out.arena, Some(ArenaEdge::Entered));
    assert_eq!(director.phase, DirectorPhase::AttackExecuting);
    assert!(out.attack_started.is_some());
    assert!(!out.fire.is_empty());
    assert_eq!(director.last_attack, out.attack_started);
}

#[test]
fn test_leaving_during_cooldown_aborts_wait_and_emits_exit() {
    let tuning = normal();
    let mut director = BossDirector::new(384.0, 0.0, 5);

    let mut out = DirectorOutput::default();
    director.tick(input(0.0, Some(10.0)), &tuning, &mut out);
    assert_eq!(out.arena, Some(ArenaEdge::Entered));

    // Play the attack out with the player still inside
    for _ in 0..2000 {
        if director.phase == DirectorPhase::Cooldown {
            break;
        }
        let mut out = DirectorOutput::default();
        director.tick(input(0.05, Some(10.0)), &tuning, &mut out);
        assert_eq!(out.arena, None);
    }
    assert_eq!(director.phase, DirectorPhase::Cooldown);

    let mut out = DirectorOutput::default();
    director.tick(input(0.05, Some(1000.0)), &tuning, &mut out);
    assert_eq!(out.arena, Some(ArenaEdge::Exited));
    assert_eq!(director.phase, DirectorPhase::WaitingForPlayer);
    assert!(!director.in_arena);
}

#[test]
fn test_entered_only_on_edge() {
    let tuning = normal();
    let mut director = BossDirector::new(384.0, 0.0, 5);
    let mut entered = 0;
    for _ in 0..400 {
        let mut out = DirectorOutput::default();
        director.tick(input(0.05, Some(10.0)), &tuning, &mut out);
        if out.arena == Some(ArenaEdge::Entered) {
            entered += 1;
        }
    }
    assert_eq!(entered, 1);
}

#[test]
fn test_defeat_is_terminal_and_fires_once() {
    let tuning = normal();
    let mut director = BossDirector::new(384.0, 0.0, 5);
    let mut out = DirectorOutput::default();
    director.tick(input(0.0, Some(10.0)), &tuning, &mut out);

    assert!(director.defeat());
    assert!(!director.defeat());
    assert!(director.active.is_none());

    let mut out = DirectorOutput::default();
    director.tick(input(1.0, Some(10.0)), &tuning, &mut out);
    assert!(out.fire.is_empty());
    assert_eq!(director.phase, DirectorPhase::Defeated);
}

#[test]
fn test_director_cools_down_once_a_boomerang_turns() {
    let tuning = BossTuning::preset(Difficulty::Nightmare);
    let wave_delay = tuning.circle_wave.delay;

    // Find a seed whose opening attack is a boomerang circle wave
    let (mut director, routine) = (0..64)
        .find_map(|seed| {
            let mut director = BossDirector::new(384.0, 0.0, seed);
            let mut out = DirectorOutput::default();
            director.tick(input(0.0, Some(10.0)), &tuning, &mut out);
            if out.attack_started != Some(AttackPattern::CircleWave) {
                return None;
            }
            assert!(out.fire.iter().all(|c| c.kind == ShotKind::Boomerang));
            Some((director, out.fire[0].routine))
        })
        .expect("some seed opens with a circle wave");
    let mut untouched = director.clone();

    director.note_boomerang_returned(routine);
    let mut out = DirectorOutput::default();
    director.tick(input(wave_delay + 0.05, Some(10.0)), &tuning, &mut out);
    assert_eq!(director.phase, DirectorPhase::Cooldown);
    assert!(out.fire.is_empty());
    assert!(director.active.is_none());
    assert!(director.returned.is_empty());

    // Without the return the next wave goes out on the same tick
    let mut out = DirectorOutput::default();
    untouched.tick(input(wave_delay + 0.05, Some(10.0)), &tuning, &mut out);
    assert_eq!(untouched.phase, DirectorPhase::AttackExecuting);
    assert!(!out.fire.is_empty());
}
