//! Core domain: settings, input bindings and per-run bookkeeping.

use bevy::prelude::*;
use rand::Rng;

use crate::difficulty::Difficulty;

/// Player-facing settings read by combat code.
#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub music_volume: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            music_volume: 1.0,
        }
    }
}

impl GameSettings {
    pub fn apply_difficulty(&mut self, index: i32) {
        self.difficulty = Difficulty::from_index(index);
    }

    pub fn apply_music_volume(&mut self, value: f32) {
        self.music_volume = value.clamp(0.0, 1.0);
    }
}

/// A single physical input a combat action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Binding {
    pub fn pressed(self, keys: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool {
        match self {
            Binding::Key(key) => keys.pressed(key),
            Binding::Mouse(button) => mouse.pressed(button),
        }
    }

    pub fn just_pressed(
        self,
        keys: &ButtonInput<KeyCode>,
        mouse: &ButtonInput<MouseButton>,
    ) -> bool {
        match self {
            Binding::Key(key) => keys.just_pressed(key),
            Binding::Mouse(button) => mouse.just_pressed(button),
        }
    }

    pub fn just_released(
        self,
        keys: &ButtonInput<KeyCode>,
        mouse: &ButtonInput<MouseButton>,
    ) -> bool {
        match self {
            Binding::Key(key) => keys.just_released(key),
            Binding::Mouse(button) => mouse.just_released(button),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindAction {
    /// Melee slash
    Fire1,
    /// Parry
    Fire2,
    Dash,
    Jump,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub fire1: Binding,
    pub fire2: Binding,
    pub dash: Binding,
    pub jump: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            fire1: Binding::Mouse(MouseButton::Left),
            fire2: Binding::Mouse(MouseButton::Right),
            dash: Binding::Key(KeyCode::ShiftLeft),
            jump: Binding::Key(KeyCode::Space),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, action: BindAction) -> Binding {
        match action {
            BindAction::Fire1 => self.fire1,
            BindAction::Fire2 => self.fire2,
            BindAction::Dash => self.dash,
            BindAction::Jump => self.jump,
        }
    }

    /// Rebind an action. Escape and inputs already bound elsewhere are refused.
    pub fn try_rebind(&mut self, action: BindAction, binding: Binding) -> bool {
        if binding == Binding::Key(KeyCode::Escape) || self.is_bound(binding) {
            return false;
        }

        match action {
            BindAction::Fire1 => self.fire1 = binding,
            BindAction::Fire2 => self.fire2 = binding,
            BindAction::Dash => self.dash = binding,
            BindAction::Jump => self.jump = binding,
        }
        true
    }

    fn is_bound(&self, binding: Binding) -> bool {
        [self.fire1, self.fire2, self.dash, self.jump].contains(&binding)
    }
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Facts about the current run used by progress hooks and the victory screen.
#[derive(Resource, Debug, Default)]
pub struct RunRecord {
    pub damage_taken: i32,
    pub hits_taken: u32,
    pub boss_defeated: bool,
}

impl RunRecord {
    pub fn record_hit(&mut self, amount: i32) {
        self.damage_taken += amount;
        self.hits_taken += 1;
    }

    pub fn is_flawless(&self) -> bool {
        self.hits_taken == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
