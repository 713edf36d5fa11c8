//! UI domain: boss health bar, shown and hidden by arena events.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{Boss, BossArenaEvent, Health};
use crate::ui::bar_percent;

const BOSS_HEALTHBAR_WIDTH: f32 = 400.0;
const BOSS_HEALTHBAR_HEIGHT: f32 = 24.0;
const BOSS_HEALTHBAR_BOTTOM: f32 = 40.0;

/// Root of the boss health bar. `owner` is the boss it currently tracks.
#[derive(Component, Debug, Default)]
pub struct BossHealthBarUI {
    pub owner: Option<Entity>,
}

/// Marker for the boss health bar fill element
#[derive(Component)]
pub struct BossHealthBarFill;

/// Bar colour for a health fraction, darkening past each rage threshold.
pub fn boss_bar_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        Color::srgb(0.8, 0.1, 0.1)
    } else if fraction > 0.25 {
        Color::srgb(0.9, 0.4, 0.1)
    } else {
        Color::srgb(0.6, 0.0, 0.0)
    }
}

pub(crate) fn spawn_boss_healthbar(mut commands: Commands) {
    // Bottom centre, hidden until the player walks into the arena
    commands
        .spawn((
            BossHealthBarUI::default(),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(BOSS_HEALTHBAR_BOTTOM),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-BOSS_HEALTHBAR_WIDTH / 2.0)),
                width: Val::Px(BOSS_HEALTHBAR_WIDTH),
                height: Val::Px(BOSS_HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.05, 0.9)),
            BorderColor::all(Color::srgb(0.6, 0.1, 0.1)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                BossHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(boss_bar_color(1.0)),
            ));
            parent.spawn((
                Text::new("BOSS"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(BOSS_HEALTHBAR_HEIGHT + 4.0),
                    ..default()
                },
            ));
        });
}

pub(crate) fn apply_boss_arena_events(
    mut events: MessageReader<BossArenaEvent>,
    mut bars: Query<(&mut BossHealthBarUI, &mut Visibility)>,
) {
    for event in events.read() {
        for (mut bar, mut visibility) in &mut bars {
            match *event {
                BossArenaEvent::Entered { boss } => {
                    bar.owner = Some(boss);
                    *visibility = Visibility::Visible;
                }
                BossArenaEvent::Exited { .. } => {
                    bar.owner = None;
                    *visibility = Visibility::Hidden;
                }
            }
        }
    }
}

pub(crate) fn update_boss_healthbar(
    boss_query: Query<&Health, With<Boss>>,
    mut bars: Query<(&mut BossHealthBarUI, &mut Visibility)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<BossHealthBarFill>>,
) {
    for (mut bar, mut visibility) in &mut bars {
        let Some(owner) = bar.owner else {
            continue;
        };
        // The boss is gone once its defeat clip has played
        let Ok(health) = boss_query.get(owner) else {
            bar.owner = None;
            *visibility = Visibility::Hidden;
            continue;
        };

        let fraction = health.fraction();
        for (mut node, mut bg_color) in &mut fill_query {
            node.width = Val::Percent(bar_percent(fraction));
            bg_color.0 = boss_bar_color(fraction);
        }
    }
}

pub(crate) fn hide_boss_healthbar(mut bars: Query<(&mut BossHealthBarUI, &mut Visibility)>) {
    for (mut bar, mut visibility) in &mut bars {
        bar.owner = None;
        *visibility = Visibility::Hidden;
    }
}
