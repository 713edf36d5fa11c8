//! UI domain: in-run HUD elements, damage numbers, death and victory screens.

mod death;
mod end_screen;
mod hud_boss;
mod hud_pickups;
mod hud_player;
mod popups;
mod victory;

#[cfg(test)]
mod tests;

pub use death::death_detail;
pub use hud_boss::boss_bar_color;
pub use hud_pickups::{shows_icon, tooltip_text};
pub use hud_player::player_health_color;
pub use popups::{POPUP_LIFETIME, PopupStyle, popup_alpha, popup_style};
pub use victory::{VictoryText, next_difficulty, victory_text};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::death::{DeathScreenUI, handle_retry_button, spawn_death_screen};
use crate::ui::end_screen::despawn_end_screen;
use crate::ui::hud_boss::{
    apply_boss_arena_events, hide_boss_healthbar, spawn_boss_healthbar, update_boss_healthbar,
};
use crate::ui::hud_pickups::{
    add_pickup_icons, clear_pickup_icons, spawn_pickup_hud, update_pickup_tooltip,
};
use crate::ui::hud_player::{
    spawn_player_hud, update_dash_pips, update_parry_indicator, update_player_healthbar,
};
use crate::ui::popups::{clear_damage_popups, float_damage_popups, spawn_damage_popups};
use crate::ui::victory::{VictoryScreenUI, handle_new_run_button, spawn_victory_screen};

/// Width percentage for a fill bar. Health may be negative, the bar never is.
pub fn bar_percent(fraction: f32) -> f32 {
    fraction.clamp(0.0, 1.0) * 100.0
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_player_hud, spawn_pickup_hud, spawn_boss_healthbar),
        )
        .add_systems(
            OnEnter(GameState::Loading),
            (hide_boss_healthbar, clear_pickup_icons, clear_damage_popups),
        )
        .add_systems(OnEnter(GameState::Dead), spawn_death_screen)
        .add_systems(OnExit(GameState::Dead), despawn_end_screen::<DeathScreenUI>)
        .add_systems(OnEnter(GameState::Victory), spawn_victory_screen)
        .add_systems(OnExit(GameState::Victory), despawn_end_screen::<VictoryScreenUI>)
        .add_systems(
            Update,
            (
                update_player_healthbar,
                update_parry_indicator,
                update_dash_pips,
                (apply_boss_arena_events, update_boss_healthbar).chain(),
                (add_pickup_icons, update_pickup_tooltip).chain(),
                (spawn_damage_popups, float_damage_popups).chain(),
            ),
        )
        .add_systems(
            Update,
            handle_retry_button.run_if(in_state(GameState::Dead)),
        )
        .add_systems(
            Update,
            handle_new_run_button.run_if(in_state(GameState::Victory)),
        );
    }
}
