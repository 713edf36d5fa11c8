//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::core::KeyBindings;
use crate::movement::MovementInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (only steers dashes)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed = bindings.jump.just_pressed(&keyboard, &mouse);
    input.jump_held = bindings.jump.pressed(&keyboard, &mouse);
    input.jump_just_released = bindings.jump.just_released(&keyboard, &mouse);
    input.dash_just_pressed = bindings.dash.just_pressed(&keyboard, &mouse);
}
