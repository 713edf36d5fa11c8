//! Debug domain: the always-on debug overlay.

use bevy::prelude::*;

use crate::combat::{Boss, Health};
use crate::core::{GameState, RunConfig};
use crate::debug::state::DebugState;
use crate::difficulty::ActiveTuning;

/// Marker for debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ZIndex(500),
    ));
}

/// Update the debug info overlay with the current run
pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    tuning: Res<ActiveTuning>,
    run_config: Res<RunConfig>,
    state: Res<State<GameState>>,
    bosses: Query<&Health, With<Boss>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let boss = bosses
        .iter()
        .next()
        .map(|health| format!("{}/{}", health.current, health.max))
        .unwrap_or_else(|| "-".to_string());
    let status = debug_state
        .status_message
        .as_ref()
        .map(|(message, _)| message.as_str())
        .unwrap_or("");

    **text = format!(
        "F1-F4 difficulty | F5 invincible | F6 boss -100\n\
         Difficulty: {}\nSeed: {}\nState: {:?}\nBoss: {}\nInvincible: {}\n{}",
        tuning.difficulty.label(),
        run_config.seed,
        state.get(),
        boss,
        debug_state.invincible,
        status
    );
}
