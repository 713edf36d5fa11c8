mod animation;
mod arena;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod difficulty;
mod movement;
mod progress;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Duskward".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        difficulty::DifficultyPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        animation::AnimationPlugin,
        progress::ProgressPlugin,
        arena::ArenaPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
