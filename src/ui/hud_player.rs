//! UI domain: player HUD with health, parry readiness and dash charges.

use bevy::prelude::*;

use crate::combat::{Health, ParryState};
use crate::movement::{DashCharges, Player};
use crate::ui::bar_percent;

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;

const PARRY_BAR_HEIGHT: f32 = 8.0;
const DASH_PIP_SIZE: f32 = 12.0;
/// Pips are pre-spawned; caps above this are not drawn
pub(crate) const MAX_DASH_PIPS: u32 = 8;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

#[derive(Component)]
pub struct ParryIndicatorFill;

#[derive(Component)]
pub struct DashPip(pub u32);

/// Green at full health through yellow to red.
pub fn player_health_color(fraction: f32) -> Color {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.5 {
        let t = (fraction - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = fraction * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Health bar
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_child((
                    PlayerHealthBarFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(player_health_color(1.0)),
                ));

            // Parry readiness
            parent
                .spawn((
                    Node {
                        width: Val::Percent(60.0),
                        height: Val::Px(PARRY_BAR_HEIGHT),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                ))
                .with_child((
                    ParryIndicatorFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.95, 0.85, 0.3)),
                ));

            // Dash pips
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|row| {
                    for index in 0..MAX_DASH_PIPS {
                        row.spawn((
                            DashPip(index),
                            Node {
                                width: Val::Px(DASH_PIP_SIZE),
                                height: Val::Px(DASH_PIP_SIZE),
                                display: Display::None,
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.8, 1.0)),
                        ));
                    }
                });
        });
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let fraction = health.fraction();
        node.width = Val::Percent(bar_percent(fraction));
        bg_color.0 = player_health_color(fraction);
    }
}

pub(crate) fn update_parry_indicator(
    player_query: Query<&ParryState, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<ParryIndicatorFill>>,
) {
    let Ok(parry) = player_query.single() else {
        return;
    };

    let readiness = parry.readiness();
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(bar_percent(readiness));
        bg_color.0 = if parry.active {
            Color::srgb(1.0, 1.0, 1.0)
        } else if readiness >= 1.0 {
            Color::srgb(0.95, 0.85, 0.3)
        } else {
            Color::srgb(0.5, 0.45, 0.2)
        };
    }
}

pub(crate) fn update_dash_pips(
    player_query: Query<&DashCharges, With<Player>>,
    mut pips: Query<(&DashPip, &mut Node, &mut BackgroundColor)>,
) {
    let Ok(charges) = player_query.single() else {
        return;
    };

    for (pip, mut node, mut bg_color) in &mut pips {
        node.display = if pip.0 < charges.max {
            Display::Flex
        } else {
            Display::None
        };
        bg_color.0 = if pip.0 < charges.current {
            Color::srgb(0.3, 0.8, 1.0)
        } else {
            Color::srgba(0.3, 0.8, 1.0, 0.25)
        };
    }
}
