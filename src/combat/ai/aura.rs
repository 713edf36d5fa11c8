//! Combat domain: the boss push aura.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Boss;
use crate::combat::boss::BossDirector;
use crate::combat::events::DamageEvent;
use crate::difficulty::ActiveTuning;
use crate::movement::Player;

/// Shortest allowed gap between two aura hits.
pub const MIN_AURA_INTERVAL: f32 = 0.05;

#[derive(Component, Debug, Default)]
pub struct PushAura {
    /// Seconds until the aura may hit again
    pub cooldown: f32,
}

impl PushAura {
    pub fn tick(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    /// Consume a hit if one is allowed and start the next interval.
    pub fn try_hit(&mut self, interval: f32) -> bool {
        if self.cooldown > 0.0 {
            return false;
        }
        self.cooldown = interval.max(MIN_AURA_INTERVAL);
        true
    }
}

/// Velocity after a knockback impulse pushing `target` away from `source`.
pub fn knockback_velocity(
    current: Vec2,
    target: Vec2,
    source: Vec2,
    impulse: f32,
    max_speed: f32,
) -> Vec2 {
    let away = target - source;
    let away = if away.length_squared() < 0.0001 {
        Vec2::Y
    } else {
        away.normalize()
    };
    (current + away * impulse).clamp_length_max(max_speed)
}

pub(crate) fn apply_boss_aura(
    time: Res<Time>,
    tuning: Res<ActiveTuning>,
    mut bosses: Query<(Entity, &Transform, &BossDirector, &mut PushAura), With<Boss>>,
    mut players: Query<(Entity, &Transform, &mut LinearVelocity), (With<Player>, Without<Boss>)>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    let dt = time.delta_secs();
    let aura = tuning.aura();

    for (boss, boss_transform, director, mut push) in &mut bosses {
        push.tick(dt);
        if director.is_defeated() {
            continue;
        }

        let boss_pos = boss_transform.translation.truncate();
        for (player, player_transform, mut velocity) in &mut players {
            let player_pos = player_transform.translation.truncate();
            if player_pos.distance(boss_pos) > aura.radius {
                continue;
            }
            if !push.try_hit(aura.damage_interval) {
                continue;
            }

            damage_events.write(DamageEvent {
                source: boss,
                target: player,
                amount: aura.contact_damage,
            });
            velocity.0 = knockback_velocity(
                velocity.0,
                player_pos,
                boss_pos,
                aura.knockback_impulse,
                aura.max_knockback_speed,
            );
        }
    }
}
