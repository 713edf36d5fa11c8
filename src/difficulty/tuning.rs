//! Difficulty domain: per-difficulty tuning records for the boss, enemies and aura.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Bundle of every difficulty-dependent parameter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyTuning {
    pub boss: BossTuning,
    pub enemy: EnemyTuning,
    pub ground_enemy: GroundEnemyTuning,
    pub aura: AuraTuning,
}

impl DifficultyTuning {
    pub fn preset(difficulty: Difficulty) -> Self {
        Self {
            boss: BossTuning::preset(difficulty),
            enemy: EnemyTuning::preset(difficulty),
            ground_enemy: GroundEnemyTuning::preset(difficulty),
            aura: AuraTuning::preset(difficulty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BossTuning {
    /// Multiplier applied to the base boss health from the arena config
    pub health_multiplier: f32,
    /// Seconds between attacks above 25% health
    pub attack_cooldown: f32,
    /// Seconds between attacks at or below 25% health
    pub low_hp_cooldown: f32,
    /// Damage dealt by every boss projectile
    pub projectile_damage: i32,
    /// Seconds before a straight projectile expires
    pub projectile_lifetime: f32,
    pub cross_spin: CrossSpinTuning,
    pub circle_wave: CircleWaveTuning,
    pub homing: HomingTuning,
    pub dual: DualAttackTuning,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CrossSpinTuning {
    /// Degrees the spokes rotate per burst
    pub angle_step: f32,
    /// Total sweep in degrees
    pub sweep: f32,
    pub delay: f32,
    pub low_hp_delay: f32,
    pub speed: f32,
    pub low_hp_speed: f32,
    /// Randomize clockwise/counter-clockwise sweep
    pub random_spin_direction: bool,
    /// Fire 8 spokes instead of 4 at or below 25% health
    pub extra_spokes_at_low_hp: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CircleWaveTuning {
    pub waves: u32,
    /// Degrees between projectiles in a fixed ring
    pub ring_step: f32,
    /// Extra rotation added to each successive fixed ring
    pub wave_offset_step: f32,
    pub delay: f32,
    pub low_hp_delay: f32,
    pub speed: f32,
    pub random_speed: f32,
    /// Ring projectiles fly out and come back to the boss
    pub boomerang_rings: bool,
    pub boomerang_return_speed: f32,
    pub boomerang_return_delay: f32,
    /// Upper bound on waiting for a boomerang to turn around after the last wave
    pub boomerang_wait_limit: f32,
}

impl CircleWaveTuning {
    /// Projectiles per wave, shared by the fixed and random variants.
    pub fn projectiles_per_wave(&self) -> u32 {
        if self.ring_step <= 0.0 {
            return 0;
        }
        (360.0 / self.ring_step).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HomingTuning {
    pub enabled: bool,
    pub count: u32,
    pub low_hp_count: u32,
    /// Seconds between consecutive homing shots
    pub interval: f32,
    pub speed: f32,
    /// Degrees per second
    pub turn_rate: f32,
    pub lifetime: f32,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DualAttackTuning {
    /// Probability the dual attack joins the pool at or below 25% health
    pub chance: f32,
    /// Minimum seconds the dual attack occupies the director
    pub window: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnemyTuning {
    /// Disabled enemies are removed as soon as they spawn
    pub enabled: bool,
    pub max_health: i32,
    pub chase_speed: f32,
    pub retreat_speed: f32,
    pub stop_smoothing: f32,
    pub fire_interval: f32,
    pub projectile_speed: f32,
    pub projectile_damage: i32,
}

/// Melee walker that patrols its ledge and swings after a wind-up.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroundEnemyTuning {
    pub enabled: bool,
    pub max_health: i32,
    pub move_speed: f32,
    /// Chases the player inside this distance, patrols outside it
    pub detection_radius: f32,
    /// Starts the wind-up inside this distance
    pub attack_range: f32,
    pub attack_windup: f32,
    /// Seconds the walker stays planted after the swing
    pub attack_recovery: f32,
    /// Radius of the swing circle
    pub attack_radius: f32,
    /// Swing circle offset in front of the walker
    pub attack_reach: f32,
    pub attack_damage: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuraTuning {
    pub radius: f32,
    pub contact_damage: i32,
    pub damage_interval: f32,
    pub knockback_impulse: f32,
    pub max_knockback_speed: f32,
}

impl BossTuning {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                health_multiplier: 0.75,
                attack_cooldown: 3.5,
                low_hp_cooldown: 2.0,
                projectile_damage: 8,
                projectile_lifetime: 5.0,
                cross_spin: CrossSpinTuning {
                    angle_step: 10.0,
                    delay: 0.45,
                    low_hp_delay: 0.3,
                    speed: 170.0,
                    low_hp_speed: 200.0,
                    ..CrossSpinTuning::base()
                },
                circle_wave: CircleWaveTuning {
                    waves: 2,
                    ring_step: 20.0,
                    ..CircleWaveTuning::base()
                },
                homing: HomingTuning {
                    enabled: false,
                    ..HomingTuning::base()
                },
                dual: DualAttackTuning {
                    chance: 0.0,
                    window: 3.0,
                },
            },
            Difficulty::Normal => Self {
                health_multiplier: 1.0,
                attack_cooldown: 3.0,
                low_hp_cooldown: 1.5,
                projectile_damage: 10,
                projectile_lifetime: 5.0,
                cross_spin: CrossSpinTuning::base(),
                circle_wave: CircleWaveTuning::base(),
                homing: HomingTuning::base(),
                dual: DualAttackTuning {
                    chance: 0.35,
                    window: 3.0,
                },
            },
            Difficulty::Hard => Self {
                health_multiplier: 1.25,
                attack_cooldown: 2.5,
                low_hp_cooldown: 1.25,
                projectile_damage: 12,
                projectile_lifetime: 5.5,
                cross_spin: CrossSpinTuning {
                    delay: 0.35,
                    low_hp_delay: 0.22,
                    speed: 208.0,
                    low_hp_speed: 240.0,
                    random_spin_direction: true,
                    ..CrossSpinTuning::base()
                },
                circle_wave: CircleWaveTuning {
                    waves: 4,
                    delay: 0.9,
                    low_hp_delay: 0.65,
                    speed: 208.0,
                    random_speed: 240.0,
                    ..CircleWaveTuning::base()
                },
                homing: HomingTuning {
                    low_hp_count: 4,
                    speed: 144.0,
                    turn_rate: 200.0,
                    ..HomingTuning::base()
                },
                dual: DualAttackTuning {
                    chance: 0.6,
                    window: 3.0,
                },
            },
            Difficulty::Nightmare => Self {
                health_multiplier: 1.5,
                attack_cooldown: 2.0,
                low_hp_cooldown: 1.0,
                projectile_damage: 15,
                projectile_lifetime: 6.0,
                cross_spin: CrossSpinTuning {
                    delay: 0.3,
                    low_hp_delay: 0.2,
                    speed: 224.0,
                    low_hp_speed: 256.0,
                    random_spin_direction: true,
                    extra_spokes_at_low_hp: true,
                    ..CrossSpinTuning::base()
                },
                circle_wave: CircleWaveTuning {
                    waves: 4,
                    delay: 0.8,
                    low_hp_delay: 0.6,
                    speed: 224.0,
                    random_speed: 256.0,
                    boomerang_rings: true,
                    ..CircleWaveTuning::base()
                },
                homing: HomingTuning {
                    count: 3,
                    low_hp_count: 4,
                    speed: 160.0,
                    turn_rate: 220.0,
                    damage: 15,
                    ..HomingTuning::base()
                },
                dual: DualAttackTuning {
                    chance: 1.0,
                    window: 3.0,
                },
            },
        }
    }
}

impl CrossSpinTuning {
    fn base() -> Self {
        Self {
            angle_step: 7.5,
            sweep: 180.0,
            delay: 0.4,
            low_hp_delay: 0.25,
            speed: 192.0,
            low_hp_speed: 224.0,
            random_spin_direction: false,
            extra_spokes_at_low_hp: false,
        }
    }
}

impl CircleWaveTuning {
    fn base() -> Self {
        Self {
            waves: 3,
            ring_step: 15.0,
            wave_offset_step: 5.0,
            delay: 1.0,
            low_hp_delay: 0.75,
            speed: 192.0,
            random_speed: 224.0,
            boomerang_rings: false,
            boomerang_return_speed: 256.0,
            boomerang_return_delay: 0.35,
            boomerang_wait_limit: 6.0,
        }
    }
}

impl HomingTuning {
    fn base() -> Self {
        Self {
            enabled: true,
            count: 2,
            low_hp_count: 3,
            interval: 0.3,
            speed: 128.0,
            turn_rate: 180.0,
            lifetime: 6.0,
            damage: 10,
        }
    }
}

impl EnemyTuning {
    pub fn preset(difficulty: Difficulty) -> Self {
        let base = Self {
            enabled: true,
            max_health: 50,
            chase_speed: 64.0,
            retreat_speed: 32.0,
            stop_smoothing: 5.0,
            fire_interval: 1.2,
            projectile_speed: 192.0,
            projectile_damage: 10,
        };
        match difficulty {
            Difficulty::Easy => Self {
                enabled: false,
                max_health: 35,
                fire_interval: 1.8,
                projectile_speed: 160.0,
                projectile_damage: 6,
                ..base
            },
            Difficulty::Normal => base,
            Difficulty::Hard => Self {
                max_health: 65,
                chase_speed: 80.0,
                fire_interval: 1.0,
                projectile_speed: 224.0,
                projectile_damage: 12,
                ..base
            },
            Difficulty::Nightmare => Self {
                max_health: 80,
                chase_speed: 96.0,
                retreat_speed: 48.0,
                stop_smoothing: 7.0,
                fire_interval: 0.8,
                projectile_speed: 256.0,
                projectile_damage: 15,
                ..base
            },
        }
    }
}

impl GroundEnemyTuning {
    pub fn preset(difficulty: Difficulty) -> Self {
        let base = Self {
            enabled: true,
            max_health: 50,
            move_speed: 64.0,
            detection_radius: 192.0,
            attack_range: 38.4,
            attack_windup: 0.5,
            attack_recovery: 0.1,
            attack_radius: 25.6,
            attack_reach: 20.0,
            attack_damage: 10,
        };
        match difficulty {
            Difficulty::Easy => Self {
                max_health: 35,
                move_speed: 48.0,
                attack_windup: 0.65,
                attack_damage: 6,
                ..base
            },
            Difficulty::Normal => base,
            Difficulty::Hard => Self {
                max_health: 65,
                move_speed: 80.0,
                attack_windup: 0.4,
                attack_damage: 12,
                ..base
            },
            Difficulty::Nightmare => Self {
                max_health: 80,
                move_speed: 96.0,
                detection_radius: 224.0,
                attack_windup: 0.35,
                attack_damage: 15,
                ..base
            },
        }
    }
}

impl AuraTuning {
    pub fn preset(difficulty: Difficulty) -> Self {
        let contact_damage = match difficulty {
            Difficulty::Easy => 3,
            Difficulty::Normal => 5,
            Difficulty::Hard => 7,
            Difficulty::Nightmare => 10,
        };
        Self {
            radius: 56.0,
            contact_damage,
            damage_interval: 0.45,
            knockback_impulse: 224.0,
            max_knockback_speed: 320.0,
        }
    }
}
