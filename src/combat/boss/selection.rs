//! Combat domain: boss attack selection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::combat::boss::AttackPattern;
use crate::difficulty::BossTuning;

/// Health fraction at or below which homing shots join the pool.
pub const HALF_HEALTH: f32 = 0.5;
/// Health fraction at or below which the boss counts as low on health.
pub const LOW_HEALTH: f32 = 0.25;

/// Build the candidate pool. `dual_roll` is a uniform sample in [0, 1).
pub fn attack_pool(
    health_fraction: f32,
    last_attack: Option<AttackPattern>,
    tuning: &BossTuning,
    dual_roll: f32,
) -> Vec<AttackPattern> {
    let mut pool = AttackPattern::BASE.to_vec();

    if health_fraction <= HALF_HEALTH && tuning.homing.enabled {
        pool.push(AttackPattern::HomingShots);
    }

    let chance = tuning.dual.chance;
    if health_fraction <= LOW_HEALTH && chance > 0.0 && dual_roll <= chance {
        pool.push(AttackPattern::DualAttack);
    }

    if let Some(last) = last_attack {
        if pool.len() >= 2 {
            pool.retain(|pattern| *pattern != last);
        }
    }

    pool
}

/// Pick the next attack uniformly from the pool, never repeating the last one.
pub fn select_attack(
    health_fraction: f32,
    last_attack: Option<AttackPattern>,
    tuning: &BossTuning,
    rng: &mut ChaCha8Rng,
) -> AttackPattern {
    let dual_roll: f32 = rng.random();
    let pool = attack_pool(health_fraction, last_attack, tuning, dual_roll);
    pool[rng.random_range(0..pool.len())]
}

/// Two distinct sub-attacks for a DualAttack.
pub fn select_dual_pair(rng: &mut ChaCha8Rng) -> (AttackPattern, AttackPattern) {
    let base = AttackPattern::BASE;
    let first = rng.random_range(0..base.len());
    let second = (first + rng.random_range(1..base.len())) % base.len();
    (base[first], base[second])
}
