//! Difficulty domain: the global difficulty tag and the active tuning record.

mod tuning;

#[cfg(test)]
mod tests;

pub use tuning::{
    AuraTuning, BossTuning, CircleWaveTuning, CrossSpinTuning, DifficultyTuning,
    DualAttackTuning, EnemyTuning, GroundEnemyTuning, HomingTuning,
};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{GameSettings, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Nightmare,
    ];

    /// Map a settings index onto a difficulty, clamping out-of-range values.
    pub fn from_index(index: i32) -> Self {
        match index.clamp(0, 3) {
            0 => Difficulty::Easy,
            1 => Difficulty::Normal,
            2 => Difficulty::Hard,
            _ => Difficulty::Nightmare,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Nightmare => "nightmare",
        }
    }
}

/// Four parallel tuning records, looked up by difficulty tag.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyTable {
    pub easy: DifficultyTuning,
    pub normal: DifficultyTuning,
    pub hard: DifficultyTuning,
    pub nightmare: DifficultyTuning,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyTuning::preset(Difficulty::Easy),
            normal: DifficultyTuning::preset(Difficulty::Normal),
            hard: DifficultyTuning::preset(Difficulty::Hard),
            nightmare: DifficultyTuning::preset(Difficulty::Nightmare),
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, difficulty: Difficulty) -> &DifficultyTuning {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Nightmare => &self.nightmare,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &DifficultyTuning)> {
        Difficulty::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// The one tuning record in effect for the current run.
#[derive(Resource, Debug, Clone)]
pub struct ActiveTuning {
    pub difficulty: Difficulty,
    pub tuning: DifficultyTuning,
}

impl ActiveTuning {
    pub fn select(table: &DifficultyTable, difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tuning: table.get(difficulty).clone(),
        }
    }

    pub fn boss(&self) -> &BossTuning {
        &self.tuning.boss
    }

    pub fn enemy(&self) -> &EnemyTuning {
        &self.tuning.enemy
    }

    pub fn ground_enemy(&self) -> &GroundEnemyTuning {
        &self.tuning.ground_enemy
    }

    pub fn aura(&self) -> &AuraTuning {
        &self.tuning.aura
    }
}

impl Default for ActiveTuning {
    fn default() -> Self {
        Self::select(&DifficultyTable::default(), Difficulty::default())
    }
}

/// Replace the active record from the table and the current settings.
pub(crate) fn refresh_active_tuning(
    settings: Res<GameSettings>,
    table: Res<DifficultyTable>,
    mut active: ResMut<ActiveTuning>,
) {
    *active = ActiveTuning::select(&table, settings.difficulty);
    info!("Active difficulty: {}", settings.difficulty.label());
}

pub struct DifficultyPlugin;

impl Plugin for DifficultyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DifficultyTable>()
            .init_resource::<ActiveTuning>()
            .add_systems(OnEnter(GameState::Loading), refresh_active_tuning);
    }
}
