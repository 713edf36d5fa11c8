//! Combat domain: boss director systems, rage triggers and defeat handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{AnimCue, AnimationFinished, AnimationTrigger};
use crate::combat::boss::{
    ArenaEdge, BossDirector, DirectorInput, DirectorOutput, Heading, RageThresholds, ShotKind,
};
use crate::combat::events::{
    BoomerangReturning, BossArenaEvent, BossDefeatedEvent, BossFireEvent, DeathEvent,
};
use crate::combat::projectiles::{
    BoomerangPhase, ProjectileMotion, ProjectileSpawn, spawn_projectile,
};
use crate::combat::{Boss, BossArenaConfig, Health};
use crate::core::{GameState, RunRecord};
use crate::difficulty::ActiveTuning;
use crate::movement::Player;

pub(crate) fn apply_boomerang_returns(
    mut returning: MessageReader<BoomerangReturning>,
    mut bosses: Query<&mut BossDirector>,
) {
    for event in returning.read() {
        if let Ok(mut director) = bosses.get_mut(event.owner) {
            director.note_boomerang_returned(event.routine);
        }
    }
}

pub(crate) fn tick_boss_directors(
    time: Res<Time>,
    tuning: Res<ActiveTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut bosses: Query<(Entity, &Transform, &Health, &mut BossDirector), Without<Player>>,
    mut arena_events: MessageWriter<BossArenaEvent>,
    mut fire_events: MessageWriter<BossFireEvent>,
    mut animations: MessageWriter<AnimationTrigger>,
) {
    let player_pos = player_query
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());

    for (boss, transform, health, mut director) in &mut bosses {
        let origin = transform.translation.truncate();
        let input = DirectorInput {
            dt: time.delta_secs(),
            player_distance: player_pos.map(|pos| pos.distance(origin)),
            health_fraction: health.fraction(),
        };

        let mut out = DirectorOutput::default();
        director.tick(input, tuning.boss(), &mut out);

        match out.arena {
            Some(ArenaEdge::Entered) => {
                info!("Boss arena entered");
                arena_events.write(BossArenaEvent::Entered { boss });
            }
            Some(ArenaEdge::Exited) => {
                info!("Boss arena exited");
                arena_events.write(BossArenaEvent::Exited { boss });
            }
            None => {}
        }

        if let Some(pattern) = out.attack_started {
            info!("Boss starts {:?}", pattern);
            animations.write(AnimationTrigger {
                entity: boss,
                cue: AnimCue::Attack,
            });
        }

        for command in out.fire {
            fire_events.write(BossFireEvent {
                boss,
                origin,
                command,
            });
        }
    }
}

/// Turn fire commands into projectile entities.
pub(crate) fn spawn_boss_projectiles(
    mut commands: Commands,
    mut fire_events: MessageReader<BossFireEvent>,
    tuning: Res<ActiveTuning>,
    arena: Res<BossArenaConfig>,
    player_query: Query<&Transform, With<Player>>,
) {
    let boss_tuning = tuning.boss();
    let player_pos = player_query
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());

    for event in fire_events.read() {
        let command = event.command;
        let direction = match command.heading {
            Heading::Angle(degrees) => Vec2::from_angle(degrees.to_radians()),
            Heading::TowardPlayer => player_pos
                .map(|pos| (pos - event.origin).normalize_or_zero())
                .filter(|dir| *dir != Vec2::ZERO)
                .unwrap_or(Vec2::X),
        };

        let (motion, damage, lifetime, color) = match command.kind {
            ShotKind::Straight => (
                ProjectileMotion::Straight {
                    velocity: direction * command.speed,
                },
                boss_tuning.projectile_damage,
                Some(boss_tuning.projectile_lifetime),
                Color::srgb(1.0, 0.35, 0.25),
            ),
            ShotKind::Homing => (
                ProjectileMotion::Homing {
                    heading: direction,
                    speed: command.speed,
                    turn_rate: boss_tuning.homing.turn_rate,
                },
                boss_tuning.homing.damage,
                Some(boss_tuning.homing.lifetime),
                Color::srgb(0.8, 0.3, 1.0),
            ),
            ShotKind::Boomerang => (
                ProjectileMotion::Boomerang {
                    owner: event.boss,
                    routine: command.routine,
                    velocity: direction * command.speed,
                    return_speed: boss_tuning.circle_wave.boomerang_return_speed,
                    return_delay: boss_tuning.circle_wave.boomerang_return_delay,
                    phase: BoomerangPhase::Outbound,
                },
                boss_tuning.projectile_damage,
                None,
                Color::srgb(1.0, 0.75, 0.2),
            ),
        };

        spawn_projectile(
            &mut commands,
            ProjectileSpawn {
                origin: event.origin,
                damage,
                motion,
                lifetime,
                radius: arena.projectile_radius,
                color,
            },
        );
    }
}

pub(crate) fn apply_boss_rage(
    mut bosses: Query<(Entity, &Health, &mut RageThresholds), (With<Boss>, Changed<Health>)>,
    mut animations: MessageWriter<AnimationTrigger>,
) {
    for (boss, health, mut rage) in &mut bosses {
        for level in rage.observe(health.fraction()) {
            info!("Boss rage: {:?} at {}/{}", level, health.current, health.max);
            animations.write(AnimationTrigger {
                entity: boss,
                cue: AnimCue::Rage,
            });
        }
    }
}

pub(crate) fn handle_boss_death(
    mut death_events: MessageReader<DeathEvent>,
    mut bosses: Query<&mut BossDirector>,
    mut defeated_events: MessageWriter<BossDefeatedEvent>,
    mut animations: MessageWriter<AnimationTrigger>,
    mut record: ResMut<RunRecord>,
) {
    for event in death_events.read() {
        let Ok(mut director) = bosses.get_mut(event.entity) else {
            continue;
        };
        if !director.defeat() {
            continue;
        }

        info!("Boss defeated");
        record.boss_defeated = true;
        animations.write(AnimationTrigger {
            entity: event.entity,
            cue: AnimCue::Defeat,
        });
        defeated_events.write(BossDefeatedEvent { boss: event.entity });
    }
}

/// The boss is removed only once its defeat clip has played out.
pub(crate) fn despawn_defeated_boss(
    mut commands: Commands,
    mut finished: MessageReader<AnimationFinished>,
    bosses: Query<(), With<Boss>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in finished.read() {
        if event.cue != AnimCue::Defeat || bosses.get(event.entity).is_err() {
            continue;
        }
        commands.entity(event.entity).despawn();
        next_state.set(GameState::Victory);
    }
}
