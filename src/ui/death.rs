//! UI domain: death screen and retry flow.

use bevy::prelude::*;

use crate::combat::{Boss, Health};
use crate::core::GameState;
use crate::ui::end_screen::{EndScreen, confirm_pressed, spawn_end_screen};

#[derive(Component)]
pub struct DeathScreenUI;

#[derive(Component)]
pub struct RetryButton;

/// How far the fight got, or nothing when the boss was never reached.
pub fn death_detail(boss_health: Option<&Health>) -> Option<String> {
    let health = boss_health?;
    if health.current >= health.max {
        return None;
    }
    let left = (health.fraction().clamp(0.0, 1.0) * 100.0).ceil() as i32;
    Some(format!("The boss had {}% health left.", left))
}

pub(crate) fn spawn_death_screen(mut commands: Commands, bosses: Query<&Health, With<Boss>>) {
    let detail = death_detail(bosses.iter().next());
    spawn_end_screen(
        &mut commands,
        DeathScreenUI,
        RetryButton,
        EndScreen {
            title: "YOU DIED".to_string(),
            title_color: Color::srgb(0.8, 0.15, 0.15),
            detail,
            button_label: "RETRY".to_string(),
            button_border: Color::srgb(0.5, 0.5, 0.6),
            hint: "Press [Enter] or click to retry",
        },
    );
}

/// Retry rebuilds the whole arena at the same difficulty.
pub(crate) fn handle_retry_button(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RetryButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if confirm_pressed(&keyboard, button_query.iter()) {
        info!("Retrying run");
        next_state.set(GameState::Loading);
    }
}
