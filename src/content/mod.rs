//! Content domain: combat config loading and validation.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{COMBAT_SCHEMA_VERSION, CombatConfig, PlayerDef};
pub use loader::{ContentLoadError, load_combat_config, parse_combat_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameSettings;

pub const COMBAT_CONFIG_PATH: &str = "assets/data/combat.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load the combat config and publish its sections as resources.
/// Any failure keeps the built-in defaults.
fn load_content(mut commands: Commands, mut settings: ResMut<GameSettings>) {
    let config = match load_combat_config(Path::new(COMBAT_CONFIG_PATH)) {
        Ok(config) => {
            let errors = validate_config(&config);
            if errors.is_empty() {
                info!("Loaded combat config from {}", COMBAT_CONFIG_PATH);
                config
            } else {
                for error in &errors {
                    warn!("Content validation: {}", error);
                }
                warn!(
                    "{} validation errors in {}, using built-in defaults",
                    errors.len(),
                    COMBAT_CONFIG_PATH
                );
                CombatConfig::default()
            }
        }
        Err(e) => {
            warn!("{}, using built-in defaults", e);
            CombatConfig::default()
        }
    };

    settings.difficulty = config.default_difficulty;

    commands.insert_resource(config.difficulties);
    commands.insert_resource(config.boss);
    commands.insert_resource(config.player.movement);
    commands.insert_resource(config.player.combat);
}
