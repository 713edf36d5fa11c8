//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

use crate::difficulty::Difficulty;

/// Damage dealt to the boss by the debug hotkey.
pub const DEBUG_BOSS_DAMAGE: i32 = 100;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether player is invincible; survives arena reloads
    pub invincible: bool,
    /// Message to display temporarily in the debug overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions bound to function keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    SetDifficulty(Difficulty),
    ToggleInvincible,
    DamageBoss,
}

impl DebugAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::F1 => Some(DebugAction::SetDifficulty(Difficulty::Easy)),
            KeyCode::F2 => Some(DebugAction::SetDifficulty(Difficulty::Normal)),
            KeyCode::F3 => Some(DebugAction::SetDifficulty(Difficulty::Hard)),
            KeyCode::F4 => Some(DebugAction::SetDifficulty(Difficulty::Nightmare)),
            KeyCode::F5 => Some(DebugAction::ToggleInvincible),
            KeyCode::F6 => Some(DebugAction::DamageBoss),
            _ => None,
        }
    }
}
