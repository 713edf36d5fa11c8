//! UI domain: icons for the pickups collected this run, with a hover tooltip.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::arena::{Pickup, PickupCollected};
use crate::ui::hud_player::PLAYER_HEALTHBAR_PADDING;

const ICON_SIZE: f32 = 22.0;
/// Below the health, parry and dash rows of the player HUD
const ROW_TOP: f32 = 84.0;

#[derive(Component)]
pub struct PickupIconRow;

#[derive(Component, Debug)]
pub struct PickupIcon(pub Pickup);

#[derive(Component)]
pub struct PickupTooltip;

#[derive(Component)]
pub struct PickupTooltipText;

/// The heal is used up on contact, so it leaves nothing to show.
pub fn shows_icon(pickup: Pickup) -> bool {
    pickup != Pickup::FullHeal
}

pub fn tooltip_text(pickup: Pickup) -> String {
    format!("{}\n{}", pickup.label(), pickup.description())
}

pub(crate) fn spawn_pickup_hud(mut commands: Commands) {
    commands.spawn((
        PickupIconRow,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_HEALTHBAR_PADDING),
            top: Val::Px(ROW_TOP),
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(6.0),
            ..default()
        },
    ));

    commands
        .spawn((
            PickupTooltip,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(ROW_TOP + ICON_SIZE + 8.0),
                padding: UiRect::all(Val::Px(8.0)),
                max_width: Val::Px(260.0),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.9)),
            ZIndex(10),
        ))
        .with_child((
            PickupTooltipText,
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));
}

pub(crate) fn add_pickup_icons(
    mut commands: Commands,
    mut collected: MessageReader<PickupCollected>,
    rows: Query<Entity, With<PickupIconRow>>,
) {
    let Ok(row) = rows.single() else {
        return;
    };
    for event in collected.read() {
        if !shows_icon(event.pickup) {
            continue;
        }
        commands.entity(row).with_child((
            PickupIcon(event.pickup),
            Button,
            Node {
                width: Val::Px(ICON_SIZE),
                height: Val::Px(ICON_SIZE),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(event.pickup.color()),
            BorderColor::all(Color::srgb(0.1, 0.1, 0.1)),
        ));
    }
}

pub(crate) fn update_pickup_tooltip(
    icons: Query<(&Interaction, &PickupIcon)>,
    mut tooltips: Query<&mut Node, With<PickupTooltip>>,
    mut texts: Query<&mut Text, With<PickupTooltipText>>,
) {
    let hovered = icons
        .iter()
        .find(|(interaction, _)| **interaction != Interaction::None)
        .map(|(_, icon)| icon.0);

    for mut node in &mut tooltips {
        node.display = if hovered.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if let Some(pickup) = hovered {
        for mut text in &mut texts {
            text.0 = tooltip_text(pickup);
        }
    }
}

/// A new run starts with an empty row.
pub(crate) fn clear_pickup_icons(mut commands: Commands, icons: Query<Entity, With<PickupIcon>>) {
    for entity in &icons {
        commands.entity(entity).despawn();
    }
}
