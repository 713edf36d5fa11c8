//! Difficulty domain: tests for the tuning table and difficulty tag.

use super::{ActiveTuning, Difficulty, DifficultyTable};

#[test]
fn test_from_index_clamps() {
    assert_eq!(Difficulty::from_index(-4), Difficulty::Easy);
    assert_eq!(Difficulty::from_index(0), Difficulty::Easy);
    assert_eq!(Difficulty::from_index(1), Difficulty::Normal);
    assert_eq!(Difficulty::from_index(2), Difficulty::Hard);
    assert_eq!(Difficulty::from_index(3), Difficulty::Nightmare);
    assert_eq!(Difficulty::from_index(12), Difficulty::Nightmare);
}

#[test]
fn test_index_round_trips_through_from_index() {
    for difficulty in Difficulty::ALL {
        assert_eq!(Difficulty::from_index(difficulty.index() as i32), difficulty);
    }
}

#[test]
fn test_table_lookup_returns_matching_record() {
    let table = DifficultyTable::default();
    assert_eq!(table.get(Difficulty::Hard), &table.hard);
    assert_eq!(table.get(Difficulty::Nightmare), &table.nightmare);
    assert_eq!(table.iter().count(), 4);
}

#[test]
fn test_only_nightmare_unlocks_boomerangs_and_extra_spokes() {
    let table = DifficultyTable::default();
    for (difficulty, tuning) in table.iter() {
        let nightmare = difficulty == Difficulty::Nightmare;
        assert_eq!(tuning.boss.circle_wave.boomerang_rings, nightmare);
        assert_eq!(tuning.boss.cross_spin.extra_spokes_at_low_hp, nightmare);
    }
}

#[test]
fn test_harder_difficulties_attack_more_often() {
    let table = DifficultyTable::default();
    let cooldowns: Vec<f32> = table
        .iter()
        .map(|(_, tuning)| tuning.boss.attack_cooldown)
        .collect();
    assert!(cooldowns.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn test_easy_never_rolls_dual_attack() {
    let table = DifficultyTable::default();
    assert_eq!(table.easy.boss.dual.chance, 0.0);
    assert!(!table.easy.boss.homing.enabled);
}

#[test]
fn test_active_tuning_copies_selected_record() {
    let mut table = DifficultyTable::default();
    table.hard.boss.attack_cooldown = 9.0;

    let active = ActiveTuning::select(&table, Difficulty::Hard);
    assert_eq!(active.difficulty, Difficulty::Hard);
    assert_eq!(active.boss().attack_cooldown, 9.0);
    assert_eq!(active.enemy(), &table.hard.enemy);
    assert_eq!(active.ground_enemy(), &table.hard.ground_enemy);
}

#[test]
fn test_walkers_wind_up_faster_and_hit_harder_on_higher_difficulties() {
    let table = DifficultyTable::default();
    let walkers: Vec<_> = table.iter().map(|(_, tuning)| &tuning.ground_enemy).collect();
    assert!(walkers.windows(2).all(|pair| pair[0].attack_windup > pair[1].attack_windup));
    assert!(walkers.windows(2).all(|pair| pair[0].attack_damage < pair[1].attack_damage));
    assert!(walkers.iter().all(|w| w.attack_range < w.detection_radius));
}

#[test]
fn test_fixed_ring_density_matches_random_ring() {
    let table = DifficultyTable::default();
    assert_eq!(table.normal.boss.circle_wave.projectiles_per_wave(), 24);
    assert_eq!(table.easy.boss.circle_wave.projectiles_per_wave(), 18);
}
