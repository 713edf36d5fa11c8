//! UI domain: victory screen and the new-run flow.

use bevy::prelude::*;

use crate::core::{GameSettings, GameState, RunRecord};
use crate::difficulty::{ActiveTuning, Difficulty};
use crate::ui::end_screen::{EndScreen, confirm_pressed, spawn_end_screen};

#[derive(Component)]
pub struct VictoryScreenUI;

#[derive(Component)]
pub struct NewRunButton;

/// Lines shown on the victory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryText {
    pub title: String,
    pub detail: String,
    pub new_run: String,
}

fn difficulty_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Normal => "Normal",
        Difficulty::Hard => "Hard",
        Difficulty::Nightmare => "Nightmare",
    }
}

pub fn victory_text(difficulty: Difficulty, flawless: bool) -> VictoryText {
    let new_run = match difficulty {
        Difficulty::Easy => "Try Normal Mode",
        Difficulty::Normal => "Try Hard Mode",
        Difficulty::Hard => "Nightmare Mode",
        Difficulty::Nightmare if flawless => "One More!",
        Difficulty::Nightmare => "You can do better!",
    };

    if difficulty == Difficulty::Nightmare && flawless {
        return VictoryText {
            title: "LEGENDARY!".to_string(),
            detail: "Nightmare cleared without taking damage.".to_string(),
            new_run: new_run.to_string(),
        };
    }

    VictoryText {
        title: "VICTORY!".to_string(),
        detail: format!("Cleared on {}.", difficulty_name(difficulty)),
        new_run: new_run.to_string(),
    }
}

/// One step harder, staying on Nightmare once there.
pub fn next_difficulty(difficulty: Difficulty) -> Difficulty {
    Difficulty::from_index(difficulty.index() as i32 + 1)
}

pub(crate) fn spawn_victory_screen(
    mut commands: Commands,
    tuning: Res<ActiveTuning>,
    record: Res<RunRecord>,
) {
    let text = victory_text(tuning.difficulty, record.is_flawless());
    info!("{} {}", text.title, text.detail);

    spawn_end_screen(
        &mut commands,
        VictoryScreenUI,
        NewRunButton,
        EndScreen {
            title: text.title,
            title_color: Color::srgb(0.95, 0.8, 0.3),
            detail: Some(text.detail),
            button_label: text.new_run,
            button_border: Color::srgb(0.6, 0.55, 0.3),
            hint: "Press [Enter] or click for a new run",
        },
    );
}

pub(crate) fn handle_new_run_button(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<NewRunButton>, Changed<Interaction>)>,
    mut settings: ResMut<GameSettings>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !confirm_pressed(&keyboard, button_query.iter()) {
        return;
    }

    settings.difficulty = next_difficulty(settings.difficulty);
    info!("New run on {}", settings.difficulty.label());
    next_state.set(GameState::Loading);
}
