//! Animation domain: named triggers and timed clip completion callbacks.
//!
//! Gameplay code never waits on an animation. It fires an [`AnimationTrigger`]
//! and, where a clip has a known length, listens for [`AnimationFinished`].


use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimCue {
    Attack,
    Rage,
    Defeat,
    Jump,
    Land,
}

#[derive(Debug)]
pub struct AnimationTrigger {
    pub entity: Entity,
    pub cue: AnimCue,
}

impl Message for AnimationTrigger {}

/// Emitted when a timed clip runs to completion.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub cue: AnimCue,
}

impl Message for AnimationFinished {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayingClip {
    pub cue: AnimCue,
    pub remaining: f32,
}

/// Per-entity animation state. Only cues registered with a length are timed.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    clip_lengths: Vec<(AnimCue, f32)>,
    pub last_cue: Option<AnimCue>,
    pub playing: Option<PlayingClip>,
}

impl Animator {
    pub fn with_clip(mut self, cue: AnimCue, seconds: f32) -> Self {
        self.clip_lengths.retain(|(c, _)| *c != cue);
        self.clip_lengths.push((cue, seconds));
        self
    }

    pub fn clip_length(&self, cue: AnimCue) -> Option<f32> {
        self.clip_lengths
            .iter()
            .find(|(c, _)| *c == cue)
            .map(|(_, seconds)| *seconds)
    }

    /// Record a trigger. A running Defeat clip is never interrupted.
    pub fn play(&mut self, cue: AnimCue) {
        if matches!(self.playing, Some(PlayingClip { cue: AnimCue::Defeat, .. })) {
            return;
        }

        self.last_cue = Some(cue);
        if let Some(seconds) = self.clip_length(cue) {
            self.playing = Some(PlayingClip {
                cue,
                remaining: seconds,
            });
        }
    }

    /// Advance the running clip. Returns its cue on the tick it finishes.
    pub fn tick(&mut self, dt: f32) -> Option<AnimCue> {
        let clip = self.playing.as_mut()?;
        clip.remaining -= dt;
        if clip.remaining > 0.0 {
            return None;
        }

        let cue = clip.cue;
        self.playing = None;
        Some(cue)
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationTrigger>()
            .add_message::<AnimationFinished>()
            .add_systems(Update, (apply_triggers, tick_animators).chain());
    }
}

fn apply_triggers(
    mut triggers: MessageReader<AnimationTrigger>,
    mut animators: Query<&mut Animator>,
) {
    for trigger in triggers.read() {
        let Ok(mut animator) = animators.get_mut(trigger.entity) else {
            continue;
        };
        debug!("Animation trigger {:?} on {:?}", trigger.cue, trigger.entity);
        animator.play(trigger.cue);
    }
}

fn tick_animators(
    time: Res<Time>,
    mut animators: Query<(Entity, &mut Animator)>,
    mut finished: MessageWriter<AnimationFinished>,
) {
    let dt = time.delta_secs();
    for (entity, mut animator) in &mut animators {
        if let Some(cue) = animator.tick(dt) {
            finished.write(AnimationFinished { entity, cue });
        }
    }
}
