//! UI domain: tests for bar math, HUD text and end screen text.

use bevy::prelude::*;

use super::{
    POPUP_LIFETIME, bar_percent, boss_bar_color, death_detail, next_difficulty, popup_alpha,
    popup_style, shows_icon, tooltip_text, victory_text,
};
use crate::arena::Pickup;
use crate::combat::Health;
use crate::difficulty::Difficulty;

#[test]
fn test_bar_percent_clamps_negative_health() {
    assert_eq!(bar_percent(-0.4), 0.0);
    assert_eq!(bar_percent(0.25), 25.0);
    assert_eq!(bar_percent(1.3), 100.0);
}

#[test]
fn test_boss_bar_darkens_past_thresholds() {
    assert_ne!(boss_bar_color(0.6), boss_bar_color(0.4));
    assert_ne!(boss_bar_color(0.4), boss_bar_color(0.2));
    assert_eq!(boss_bar_color(0.5), boss_bar_color(0.3));
}

#[test]
fn test_flawless_nightmare_is_legendary() {
    let text = victory_text(Difficulty::Nightmare, true);
    assert_eq!(text.title, "LEGENDARY!");
    assert_eq!(text.new_run, "One More!");
}

#[test]
fn test_regular_victory_names_difficulty() {
    let text = victory_text(Difficulty::Hard, true);
    assert_eq!(text.title, "VICTORY!");
    assert_eq!(text.detail, "Cleared on Hard.");
    assert_eq!(text.new_run, "Nightmare Mode");

    let text = victory_text(Difficulty::Nightmare, false);
    assert_eq!(text.title, "VICTORY!");
    assert_eq!(text.new_run, "You can do better!");
}

#[test]
fn test_new_run_raises_difficulty_and_clamps() {
    assert_eq!(next_difficulty(Difficulty::Easy), Difficulty::Normal);
    assert_eq!(next_difficulty(Difficulty::Hard), Difficulty::Nightmare);
    assert_eq!(next_difficulty(Difficulty::Nightmare), Difficulty::Nightmare);
}

#[test]
fn test_death_detail_reports_boss_progress() {
    assert_eq!(death_detail(None), None);
    assert_eq!(death_detail(Some(&Health::new(1000))), None);

    let mut health = Health::new(1000);
    health.take_damage(601);
    assert_eq!(
        death_detail(Some(&health)).as_deref(),
        Some("The boss had 40% health left.")
    );
}

#[test]
fn test_crit_popup_is_larger_and_gold() {
    let normal = popup_style(12, false);
    let crit = popup_style(18, true);
    assert_eq!(normal.text, "12");
    assert_eq!(crit.text, "18!");
    assert!(crit.font_size > normal.font_size);
    assert_eq!(normal.color, Color::srgb(1.0, 0.1, 0.1));
    assert_eq!(crit.color, Color::srgb(1.0, 0.95, 0.2));
}

#[test]
fn test_popup_fades_only_near_the_end() {
    assert_eq!(popup_alpha(POPUP_LIFETIME), 1.0);
    assert!(popup_alpha(0.1) < 1.0 && popup_alpha(0.1) > 0.0);
    assert_eq!(popup_alpha(-0.1), 0.0);
}

#[test]
fn test_pickup_tooltip_has_title_then_description() {
    let text = tooltip_text(Pickup::ExtraDashCharge);
    let (title, description) = text.split_once('\n').expect("two lines");
    assert_eq!(title, Pickup::ExtraDashCharge.label());
    assert_eq!(description, Pickup::ExtraDashCharge.description());
}

#[test]
fn test_heal_leaves_no_icon() {
    assert!(!shows_icon(Pickup::FullHeal));
    assert!(shows_icon(Pickup::DamagePlus5));
}
