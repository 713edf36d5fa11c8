//! Content domain: tests for parsing and validating the combat config.

use super::*;
use crate::difficulty::{Difficulty, DifficultyTable};

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/combat.ron");

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = parse_combat_config(SHIPPED_CONFIG, "combat.ron").expect("shipped config parses");
    let errors = validate_config(&config);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(config.schema_version, COMBAT_SCHEMA_VERSION);
}

#[test]
fn test_shipped_config_matches_builtin_defaults() {
    let config = parse_combat_config(SHIPPED_CONFIG, "combat.ron").expect("shipped config parses");
    assert_eq!(config.difficulties, DifficultyTable::default());
    assert_eq!(config.boss, crate::combat::BossArenaConfig::default());
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&CombatConfig::default()).is_empty());
}

#[test]
fn test_omitted_sections_fall_back_to_defaults() {
    let config = parse_combat_config("(default_difficulty: Hard)", "inline").expect("parses");
    assert_eq!(config.default_difficulty, Difficulty::Hard);
    assert_eq!(config.boss.base_health, 1000);
    assert_eq!(config.difficulties, DifficultyTable::default());
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_combat_config("(boss: ", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_validation_reports_each_bad_value() {
    let mut config = CombatConfig::default();
    config.schema_version = 99;
    config.boss.base_health = 0;
    config.player.combat.crit_chance = 1.5;
    config.difficulties.hard.boss.circle_wave.waves = 0;
    config.difficulties.nightmare.boss.circle_wave.boomerang_return_speed = 0.0;
    config.difficulties.nightmare.boss.circle_wave.boomerang_wait_limit = -1.0;
    config.difficulties.normal.boss.circle_wave.delay = 0.0;
    config.difficulties.normal.boss.circle_wave.low_hp_delay = 0.0;
    config.difficulties.easy.boss.cross_spin.delay = 0.0;
    config.difficulties.easy.boss.cross_spin.low_hp_delay = -0.2;
    config.difficulties.normal.boss.homing.interval = 0.0;
    config.difficulties.hard.ground_enemy.attack_windup = 0.0;

    let errors = validate_config(&config);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    for field in [
        "schema_version",
        "base_health",
        "crit_chance",
        "circle_wave.waves",
        "circle_wave.boomerang_return_speed",
        "circle_wave.boomerang_wait_limit",
        "circle_wave.delay",
        "circle_wave.low_hp_delay",
        "cross_spin.delay",
        "cross_spin.low_hp_delay",
        "homing.interval",
        "ground_enemy.attack_windup",
    ] {
        assert!(fields.contains(&field), "missing error for {}", field);
    }
    assert_eq!(errors.len(), 12);

    let boomerang = errors
        .iter()
        .find(|e| e.field == "circle_wave.boomerang_return_speed")
        .expect("boomerang error");
    assert_eq!(boomerang.section, "difficulties.nightmare");

    let waves = errors
        .iter()
        .find(|e| e.field == "circle_wave.waves")
        .expect("waves error");
    assert_eq!(waves.section, "difficulties.hard");
}

#[test]
fn test_parry_cooldowns_must_be_ordered() {
    let mut config = CombatConfig::default();
    config.player.combat.parry_success_cooldown = 8.0;
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "parry_success_cooldown");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_combat_config(std::path::Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_boomerang_settings_ignored_without_boomerang_rings() {
    let mut config = CombatConfig::default();
    assert!(!config.difficulties.normal.boss.circle_wave.boomerang_rings);
    config.difficulties.normal.boss.circle_wave.boomerang_return_speed = 0.0;
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_ground_enemy_attack_must_start_inside_detection() {
    let mut config = CombatConfig::default();
    config.difficulties.easy.ground_enemy.attack_range = 500.0;
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_enemy.attack_range");
    assert_eq!(errors[0].section, "difficulties.easy");
}
