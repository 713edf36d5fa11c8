//! UI domain: shared layout for the death and victory overlays.

use bevy::prelude::*;

/// Content of a full-screen overlay that ends a run.
pub(crate) struct EndScreen {
    pub title: String,
    pub title_color: Color,
    pub detail: Option<String>,
    pub button_label: String,
    pub button_border: Color,
    pub hint: &'static str,
}

/// Spawn the overlay tagged with `screen`, its button tagged with `button`.
pub(crate) fn spawn_end_screen(
    commands: &mut Commands,
    screen: impl Component,
    button: impl Component,
    content: EndScreen,
) {
    let EndScreen {
        title,
        title_color,
        detail,
        button_label,
        button_border,
        hint,
    } = content;
    let title_gap = if detail.is_some() { 24.0 } else { 60.0 };

    commands
        .spawn((
            screen,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(title_gap)),
                    ..default()
                },
            ));

            if let Some(detail) = detail {
                parent.spawn((
                    Text::new(detail),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.8, 0.8, 0.8)),
                    Node {
                        margin: UiRect::bottom(Val::Px(48.0)),
                        ..default()
                    },
                ));
            }

            parent
                .spawn((
                    button,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(button_border),
                ))
                .with_child((
                    Text::new(button_label),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new(hint),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

/// Enter (either one) or a click on the overlay button.
pub(crate) fn confirm_pressed<'a>(
    keyboard: &ButtonInput<KeyCode>,
    mut interactions: impl Iterator<Item = &'a Interaction>,
) -> bool {
    keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || interactions.any(|interaction| *interaction == Interaction::Pressed)
}

pub(crate) fn despawn_end_screen<M: Component>(
    mut commands: Commands,
    query: Query<Entity, With<M>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
