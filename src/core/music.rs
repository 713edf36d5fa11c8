//! Core domain: background music cue driven by arena and flow events.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::BossArenaEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicTrack {
    #[default]
    Silent,
    Normal,
    Boss,
    Victory,
}

/// The track the audio layer should be playing. Nothing in combat reads this back.
#[derive(Resource, Debug, Default)]
pub struct BackgroundMusic {
    pub current: MusicTrack,
}

impl BackgroundMusic {
    pub fn play(&mut self, track: MusicTrack) {
        if self.current != track {
            info!("Music: {:?} -> {:?}", self.current, track);
            self.current = track;
        }
    }
}

pub(crate) fn apply_arena_music(
    mut events: MessageReader<BossArenaEvent>,
    mut music: ResMut<BackgroundMusic>,
) {
    for event in events.read() {
        match event {
            BossArenaEvent::Entered { .. } => music.play(MusicTrack::Boss),
            BossArenaEvent::Exited { .. } => music.play(MusicTrack::Normal),
        }
    }
}

pub(crate) fn play_normal_music(mut music: ResMut<BackgroundMusic>) {
    music.play(MusicTrack::Normal);
}

pub(crate) fn stop_music(mut music: ResMut<BackgroundMusic>) {
    music.play(MusicTrack::Silent);
}

pub(crate) fn play_victory_music(mut music: ResMut<BackgroundMusic>) {
    music.play(MusicTrack::Victory);
}
