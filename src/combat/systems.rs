//! Combat domain: damage intake, deaths, hit flashes and cleanup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::events::{DamageEvent, DeathEvent, ParrySuccessEvent};
use crate::combat::player::ParryState;
use crate::combat::projectiles::Parryable;
use crate::combat::{
    Boss, DamageFlash, Enemy, Health, Invincible, Lifetime, PlayerCombatTuning, PlayerStats,
};
use crate::core::{GameState, RunRecord};
use crate::movement::Player;
use crate::progress::{Achievement, UnlockAchievement};

pub(crate) fn apply_damage(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut parry_events: MessageWriter<ParrySuccessEvent>,
    mut achievements: MessageWriter<UnlockAchievement>,
    tuning: Res<PlayerCombatTuning>,
    mut record: ResMut<RunRecord>,
    mut targets: Query<(
        &mut Health,
        &Transform,
        Option<&mut DamageFlash>,
        Option<&mut ParryState>,
        Option<&PlayerStats>,
        Has<Player>,
        Has<Invincible>,
    )>,
    parryables: Query<(Entity, &Transform), With<Parryable>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, transform, flash, parry, stats, is_player, invincible)) =
            targets.get_mut(event.target)
        else {
            continue;
        };

        // An open parry window turns the hit into a block
        if let (Some(mut parry), Some(stats)) = (parry, stats) {
            if let Some(success) = parry.try_block(stats.parry_success_cooldown) {
                let center = transform.translation.truncate();
                for (projectile, projectile_transform) in &parryables {
                    let distance = projectile_transform.translation.truncate().distance(center);
                    if distance <= tuning.parry_radius {
                        commands.entity(projectile).try_despawn();
                    }
                }

                info!("Parry! streak={}", success.streak);
                if success.first_parry {
                    achievements.write(UnlockAchievement(Achievement::FirstParry));
                }
                if success.streak_milestone {
                    achievements.write(UnlockAchievement(Achievement::ParryStreak10));
                }
                parry_events.write(ParrySuccessEvent {
                    parrier: event.target,
                    streak: success.streak,
                });
                continue;
            }
        }

        if invincible {
            continue;
        }

        let was_alive = !health.is_dead();
        health.take_damage(event.amount);
        if let Some(mut flash) = flash {
            flash.trigger();
        }
        if is_player {
            record.record_hit(event.amount);
        }

        debug!(
            "{:?} took {} damage ({}/{})",
            event.target, event.amount, health.current, health.max
        );

        if was_alive && health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn handle_player_death(
    mut death_events: MessageReader<DeathEvent>,
    players: Query<(), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if players.get(event.entity).is_ok() {
            info!("Player died");
            next_state.set(GameState::Dead);
        }
    }
}

/// Regular enemies vanish as soon as they die. The boss waits for its clip.
pub(crate) fn handle_enemy_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemies: Query<(), (With<Enemy>, Without<Boss>)>,
) {
    for event in death_events.read() {
        if enemies.get(event.entity).is_ok() {
            commands.entity(event.entity).despawn();
        }
    }
}

pub(crate) fn update_damage_flash(
    time: Res<Time>,
    mut query: Query<(&mut DamageFlash, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (mut flash, mut sprite) in &mut query {
        if flash.remaining <= 0.0 {
            continue;
        }
        flash.remaining -= dt;
        sprite.color = if flash.remaining > 0.0 {
            DamageFlash::COLOR
        } else {
            flash.base_color
        };
    }
}

pub(crate) fn cleanup_expired(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
