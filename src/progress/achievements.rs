//! Progress domain: achievement ids, the unlocked set and its save file.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::difficulty::Difficulty;

const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstParry,
    ParryStreak10,
    MultiSlash,
    BossDefeated(Difficulty),
    /// Boss cleared without taking a hit
    Flawless(Difficulty),
}

impl Achievement {
    /// Stable id written to the save file.
    pub fn id(self) -> String {
        match self {
            Achievement::FirstParry => "first_parry".to_string(),
            Achievement::ParryStreak10 => "parry_streak_10".to_string(),
            Achievement::MultiSlash => "multi_slash".to_string(),
            Achievement::BossDefeated(difficulty) => format!("boss_defeated_{}", difficulty.label()),
            Achievement::Flawless(difficulty) => format!("flawless_{}", difficulty.label()),
        }
    }
}

/// Fire-and-forget unlock request.
#[derive(Debug, Clone, Copy)]
pub struct UnlockAchievement(pub Achievement);

impl Message for UnlockAchievement {}

/// Achievements a boss defeat unlocks. Flawless only counts from Hard up.
pub fn defeat_achievements(difficulty: Difficulty, flawless: bool) -> Vec<Achievement> {
    let mut unlocked = vec![Achievement::BossDefeated(difficulty)];
    if flawless && difficulty >= Difficulty::Hard {
        unlocked.push(Achievement::Flawless(difficulty));
    }
    unlocked
}

/// Error type for save file failures.
#[derive(Debug)]
pub struct SaveError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to save {}: {}", self.file, self.message)
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct AchievementSave {
    version: u32,
    unlocked: Vec<String>,
}

/// Unlocked achievement ids, in unlock order.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Achievements {
    unlocked: Vec<String>,
}

impl Achievements {
    /// Returns true only the first time an achievement is unlocked.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        let id = achievement.id();
        if self.unlocked.contains(&id) {
            return false;
        }
        self.unlocked.push(id);
        true
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement.id())
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&AchievementSave {
            version: SAVE_VERSION,
            unlocked: self.unlocked.clone(),
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let save: AchievementSave = serde_json::from_str(contents)?;
        Ok(Self {
            unlocked: save.unlocked,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let file = path.display().to_string();
        let error = |message: String| SaveError {
            file: file.clone(),
            message,
        };

        let json = self.to_json().map_err(|e| error(format!("Encode error: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| error(format!("IO error: {}", e)))?;
        }
        fs::write(path, json).map_err(|e| error(format!("IO error: {}", e)))
    }

    /// Read a save file. A missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self, SaveError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| SaveError {
            file: file.clone(),
            message: format!("IO error: {}", e),
        })?;
        Self::from_json(&contents).map_err(|e| SaveError {
            file,
            message: format!("Parse error: {}", e),
        })
    }
}
