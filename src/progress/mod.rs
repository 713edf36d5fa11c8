//! Progress domain: achievement unlocks requested by combat and their save file.
//!
//! Combat writes [`UnlockAchievement`] and never reads anything back. Without
//! this plugin the messages are simply dropped.

mod achievements;


pub use achievements::{
    Achievement, Achievements, SaveError, UnlockAchievement, defeat_achievements,
};

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::path::Path;

use crate::combat::BossDefeatedEvent;
use crate::core::RunRecord;
use crate::difficulty::ActiveTuning;

pub const ACHIEVEMENTS_SAVE_PATH: &str = "saves/achievements.json";

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Achievements>()
            .add_message::<UnlockAchievement>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(Startup, load_achievements)
            .add_systems(Update, (unlock_on_boss_defeat, process_unlocks).chain());
    }
}

fn load_achievements(mut achievements: ResMut<Achievements>) {
    match Achievements::load(Path::new(ACHIEVEMENTS_SAVE_PATH)) {
        Ok(loaded) => {
            info!("Loaded {} unlocked achievements", loaded.len());
            *achievements = loaded;
        }
        Err(e) => warn!("{}", e),
    }
}

fn unlock_on_boss_defeat(
    mut defeated: MessageReader<BossDefeatedEvent>,
    tuning: Res<ActiveTuning>,
    record: Res<RunRecord>,
    mut unlocks: MessageWriter<UnlockAchievement>,
) {
    for _ in defeated.read() {
        for achievement in defeat_achievements(tuning.difficulty, record.is_flawless()) {
            unlocks.write(UnlockAchievement(achievement));
        }
    }
}

fn process_unlocks(
    mut unlocks: MessageReader<UnlockAchievement>,
    mut achievements: ResMut<Achievements>,
) {
    let mut changed = false;
    for UnlockAchievement(achievement) in unlocks.read() {
        if achievements.unlock(*achievement) {
            info!("Achievement unlocked: {}", achievement.id());
            changed = true;
        }
    }

    if changed {
        if let Err(e) = achievements.save(Path::new(ACHIEVEMENTS_SAVE_PATH)) {
            warn!("{}", e);
        }
    }
}
