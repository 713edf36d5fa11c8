//! Validation for numeric ranges in the combat config.

use super::data::{COMBAT_SCHEMA_VERSION, CombatConfig};
use crate::difficulty::DifficultyTuning;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:literal, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                section: $section.to_string(),
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a probability lies in [0, 1]
macro_rules! check_unit {
    ($errors:expr, $section:expr, $field:literal, $value:expr) => {
        if !(0.0..=1.0).contains(&$value) {
            $errors.push(ValidationError {
                section: $section.to_string(),
                field: $field,
                message: format!("must be within [0, 1], got {}", $value),
            });
        }
    };
}

/// Validate the whole config. Returns every problem found.
pub fn validate_config(config: &CombatConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.schema_version != COMBAT_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "root".to_string(),
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                COMBAT_SCHEMA_VERSION, config.schema_version
            ),
        });
    }

    if config.boss.base_health <= 0 {
        errors.push(ValidationError {
            section: "boss".to_string(),
            field: "base_health",
            message: format!("must be positive, got {}", config.boss.base_health),
        });
    }
    check_positive!(errors, "boss", "activation_radius", config.boss.activation_radius);
    check_positive!(errors, "boss", "arrive_distance", config.boss.arrive_distance);

    let movement = &config.player.movement;
    check_positive!(errors, "player.movement", "move_speed", movement.move_speed);
    check_positive!(errors, "player.movement", "dash_duration", movement.dash_duration);
    check_positive!(errors, "player.movement", "dash_trail_spacing", movement.dash_trail_spacing);
    check_unit!(errors, "player.movement", "ground_normal_min_y", movement.ground_normal_min_y);

    let combat = &config.player.combat;
    check_unit!(errors, "player.combat", "crit_chance", combat.crit_chance);
    check_positive!(errors, "player.combat", "parry_window", combat.parry_window);
    if combat.parry_success_cooldown > combat.parry_fail_cooldown {
        errors.push(ValidationError {
            section: "player.combat".to_string(),
            field: "parry_success_cooldown",
            message: "must not exceed parry_fail_cooldown".to_string(),
        });
    }

    for (difficulty, tuning) in config.difficulties.iter() {
        validate_tuning(&mut errors, difficulty.label(), tuning);
    }

    errors
}

fn validate_tuning(errors: &mut Vec<ValidationError>, label: &str, tuning: &DifficultyTuning) {
    let section = format!("difficulties.{}", label);
    let boss = &tuning.boss;

    check_positive!(errors, section, "health_multiplier", boss.health_multiplier);
    check_positive!(errors, section, "cross_spin.angle_step", boss.cross_spin.angle_step);
    check_positive!(errors, section, "cross_spin.delay", boss.cross_spin.delay);
    check_positive!(errors, section, "cross_spin.low_hp_delay", boss.cross_spin.low_hp_delay);
    check_positive!(errors, section, "circle_wave.ring_step", boss.circle_wave.ring_step);
    check_positive!(errors, section, "circle_wave.delay", boss.circle_wave.delay);
    check_positive!(errors, section, "circle_wave.low_hp_delay", boss.circle_wave.low_hp_delay);
    check_unit!(errors, section, "dual.chance", boss.dual.chance);

    // A zero return speed or wait limit strands boomerangs at the arena edge
    if boss.circle_wave.boomerang_rings {
        check_positive!(
            errors,
            section,
            "circle_wave.boomerang_return_speed",
            boss.circle_wave.boomerang_return_speed
        );
        check_positive!(
            errors,
            section,
            "circle_wave.boomerang_wait_limit",
            boss.circle_wave.boomerang_wait_limit
        );
    }
    if boss.homing.enabled {
        check_positive!(errors, section, "homing.interval", boss.homing.interval);
    }

    if boss.circle_wave.waves == 0 {
        errors.push(ValidationError {
            section: section.clone(),
            field: "circle_wave.waves",
            message: "must fire at least one wave".to_string(),
        });
    }
    if boss.homing.enabled && boss.homing.count == 0 {
        errors.push(ValidationError {
            section: section.clone(),
            field: "homing.count",
            message: "enabled homing must fire at least one shot".to_string(),
        });
    }
    if tuning.enemy.enabled && tuning.enemy.max_health <= 0 {
        errors.push(ValidationError {
            section: section.clone(),
            field: "enemy.max_health",
            message: "enabled enemies need positive health".to_string(),
        });
    }

    let walker = &tuning.ground_enemy;
    if walker.enabled {
        if walker.max_health <= 0 {
            errors.push(ValidationError {
                section: section.clone(),
                field: "ground_enemy.max_health",
                message: "enabled enemies need positive health".to_string(),
            });
        }
        check_positive!(errors, section, "ground_enemy.move_speed", walker.move_speed);
        check_positive!(errors, section, "ground_enemy.attack_windup", walker.attack_windup);
        check_positive!(errors, section, "ground_enemy.attack_radius", walker.attack_radius);
        if walker.attack_range >= walker.detection_radius {
            errors.push(ValidationError {
                section,
                field: "ground_enemy.attack_range",
                message: "must be shorter than detection_radius".to_string(),
            });
        }
    }
}
