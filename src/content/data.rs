//! Data definitions for the combat RON content file.
//!
//! These structs mirror the structure in assets/data/combat.ron. Every
//! section falls back to the built-in defaults when omitted.

use serde::{Deserialize, Serialize};

use crate::combat::{BossArenaConfig, PlayerCombatTuning};
use crate::difficulty::{Difficulty, DifficultyTable};
use crate::movement::MovementTuning;

pub const COMBAT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Root (combat.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatConfig {
    pub schema_version: u32,
    /// Difficulty used until the settings change it
    pub default_difficulty: Difficulty,
    pub boss: BossArenaConfig,
    pub player: PlayerDef,
    pub difficulties: DifficultyTable,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            schema_version: COMBAT_SCHEMA_VERSION,
            default_difficulty: Difficulty::Normal,
            boss: BossArenaConfig::default(),
            player: PlayerDef::default(),
            difficulties: DifficultyTable::default(),
        }
    }
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    pub movement: MovementTuning,
    pub combat: PlayerCombatTuning,
}
