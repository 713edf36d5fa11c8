//! UI domain: floating damage numbers over enemies hit by a slash.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::DamagePopupEvent;

/// Seconds a number stays on screen.
pub const POPUP_LIFETIME: f32 = 0.7;
/// Upward drift, 1.2 units per second.
pub const POPUP_FLOAT_SPEED: f32 = 1.2 * 32.0;
/// Fraction of the lifetime spent fading out at the end.
const FADE_PORTION: f32 = 0.4;

#[derive(Component, Debug)]
pub struct DamagePopup {
    pub remaining: f32,
    pub base_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupStyle {
    pub text: String,
    pub color: Color,
    pub font_size: f32,
}

/// Crits are bigger, gold and shouted.
pub fn popup_style(amount: i32, crit: bool) -> PopupStyle {
    if crit {
        PopupStyle {
            text: format!("{}!", amount),
            color: Color::srgb(1.0, 0.95, 0.2),
            font_size: 30.0,
        }
    } else {
        PopupStyle {
            text: amount.to_string(),
            color: Color::srgb(1.0, 0.1, 0.1),
            font_size: 22.0,
        }
    }
}

pub fn popup_alpha(remaining: f32) -> f32 {
    (remaining / (POPUP_LIFETIME * FADE_PORTION)).clamp(0.0, 1.0)
}

pub(crate) fn spawn_damage_popups(
    mut commands: Commands,
    mut popups: MessageReader<DamagePopupEvent>,
) {
    for popup in popups.read() {
        let style = popup_style(popup.amount, popup.crit);
        commands.spawn((
            DamagePopup {
                remaining: POPUP_LIFETIME,
                base_color: style.color,
            },
            Text2d::new(style.text),
            TextFont {
                font_size: style.font_size,
                ..default()
            },
            TextColor(style.color),
            Transform::from_translation(popup.position.extend(5.0)),
        ));
    }
}

pub(crate) fn float_damage_popups(
    mut commands: Commands,
    time: Res<Time>,
    mut popups: Query<(Entity, &mut Transform, &mut DamagePopup, &mut TextColor)>,
) {
    let dt = time.delta_secs();
    for (entity, mut transform, mut popup, mut color) in &mut popups {
        popup.remaining -= dt;
        if popup.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation.y += POPUP_FLOAT_SPEED * dt;
        color.0 = popup.base_color.with_alpha(popup_alpha(popup.remaining));
    }
}

pub(crate) fn clear_damage_popups(
    mut commands: Commands,
    popups: Query<Entity, With<DamagePopup>>,
) {
    for entity in &popups {
        commands.entity(entity).despawn();
    }
}
