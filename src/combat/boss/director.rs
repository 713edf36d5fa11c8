//! Combat domain: the boss director state machine and rage thresholds.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::boss::selection::{HALF_HEALTH, LOW_HEALTH, select_attack, select_dual_pair};
use crate::combat::boss::{ActiveAttack, AttackPattern, AttackRoutine, FireCommand};
use crate::difficulty::BossTuning;

/// Upper bound on zero-time phase transitions resolved in a single tick.
const MAX_TRANSITIONS_PER_TICK: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorPhase {
    /// No player existed when the fight started; never activates
    Dormant,
    Intro,
    WaitingForPlayer,
    AttackSelection,
    AttackExecuting,
    Cooldown,
    Defeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaEdge {
    Entered,
    Exited,
}

/// What the world looks like to the director this tick.
#[derive(Debug, Clone, Copy)]
pub struct DirectorInput {
    pub dt: f32,
    /// Distance to the player, `None` when there is no player
    pub player_distance: Option<f32>,
    pub health_fraction: f32,
}

#[derive(Debug, Default)]
pub struct DirectorOutput {
    pub fire: Vec<FireCommand>,
    pub arena: Option<ArenaEdge>,
    pub attack_started: Option<AttackPattern>,
}

#[derive(Component, Debug, Clone)]
pub struct BossDirector {
    pub phase: DirectorPhase,
    pub timer: f32,
    pub activation_radius: f32,
    pub in_arena: bool,
    pub last_attack: Option<AttackPattern>,
    pub active: Option<ActiveAttack>,
    /// Routines with a boomerang that has started flying back
    pub returned: Vec<u32>,
    next_routine_id: u32,
    rng: ChaCha8Rng,
}

impl BossDirector {
    pub fn new(activation_radius: f32, intro_delay: f32, seed: u64) -> Self {
        Self {
            phase: DirectorPhase::Intro,
            timer: intro_delay,
            activation_radius,
            in_arena: false,
            last_attack: None,
            active: None,
            returned: Vec::new(),
            next_routine_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.phase == DirectorPhase::Defeated
    }

    /// Record that a boomerang fired by `routine` began its return flight.
    pub fn note_boomerang_returned(&mut self, routine: u32) {
        if !self.returned.contains(&routine) {
            self.returned.push(routine);
        }
    }

    /// Enter the terminal phase. Returns true only the first time.
    pub fn defeat(&mut self) -> bool {
        if self.is_defeated() {
            return false;
        }
        self.phase = DirectorPhase::Defeated;
        self.active = None;
        true
    }

    pub fn tick(
        &mut self,
        input: DirectorInput,
        tuning: &BossTuning,
        out: &mut DirectorOutput,
    ) {
        let in_range = input
            .player_distance
            .is_some_and(|distance| distance <= self.activation_radius);
        let low_hp = input.health_fraction <= LOW_HEALTH;
        let mut dt = input.dt;

        for _ in 0..MAX_TRANSITIONS_PER_TICK {
            match self.phase {
                DirectorPhase::Dormant | DirectorPhase::Defeated => return,
                DirectorPhase::Intro => {
                    if input.player_distance.is_none() {
                        warn!("Boss director has no player to track; staying dormant");
                        self.phase = DirectorPhase::Dormant;
                        return;
                    }
                    self.timer -= dt;
                    if self.timer > 0.0 {
                        return;
                    }
                    self.phase = DirectorPhase::WaitingForPlayer;
                    dt = 0.0;
                }
                DirectorPhase::WaitingForPlayer => {
                    if !in_range {
                        if self.in_arena {
                            self.in_arena = false;
                            out.arena = Some(ArenaEdge::Exited);
                        }
                        return;
                    }
                    if !self.in_arena {
                        self.in_arena = true;
                        out.arena = Some(ArenaEdge::Entered);
                    }
                    self.phase = DirectorPhase::AttackSelection;
                }
                DirectorPhase::AttackSelection => {
                    let pattern = self.start_attack(input.health_fraction, tuning);
                    out.attack_started = Some(pattern);
                    self.phase = DirectorPhase::AttackExecuting;
                    // First burst goes out on the tick the attack starts
                    dt = 0.0;
                }
                DirectorPhase::AttackExecuting => {
                    let Some(active) = self.active.as_mut() else {
                        self.phase = DirectorPhase::Cooldown;
                        continue;
                    };
                    active.advance(dt, &self.returned, &mut self.rng, &mut out.fire);
                    if !active.is_finished() {
                        return;
                    }
                    self.active = None;
                    self.returned.clear();
                    self.phase = DirectorPhase::Cooldown;
                    self.timer = if low_hp {
                        tuning.low_hp_cooldown
                    } else {
                        tuning.attack_cooldown
                    };
                    return;
                }
                DirectorPhase::Cooldown => {
                    // Leaving the arena aborts the wait
                    if !in_range {
                        self.phase = DirectorPhase::WaitingForPlayer;
                        continue;
                    }
                    self.timer -= dt;
                    if self.timer > 0.0 {
                        return;
                    }
                    self.phase = DirectorPhase::WaitingForPlayer;
                    dt = 0.0;
                }
            }
        }
    }

    fn start_attack(&mut self, health_fraction: f32, tuning: &BossTuning) -> AttackPattern {
        let low_hp = health_fraction <= LOW_HEALTH;
        let pattern = select_attack(health_fraction, self.last_attack, tuning, &mut self.rng);
        self.last_attack = Some(pattern);
        self.returned.clear();

        let active = if pattern == AttackPattern::DualAttack {
            let (a, b) = select_dual_pair(&mut self.rng);
            let first = self.new_routine(a, tuning, low_hp);
            let second = self.new_routine(b, tuning, low_hp);
            match (first, second) {
                (Some(first), Some(second)) => Some(ActiveAttack::Dual {
                    first,
                    second,
                    elapsed: 0.0,
                    window: tuning.dual.window,
                }),
                _ => None,
            }
        } else {
            self.new_routine(pattern, tuning, low_hp)
                .map(ActiveAttack::Single)
        };

        debug!("Boss attack selected: {:?}", pattern);
        self.active = active;
        pattern
    }

    fn new_routine(
        &mut self,
        pattern: AttackPattern,
        tuning: &BossTuning,
        low_hp: bool,
    ) -> Option<AttackRoutine> {
        let id = self.next_routine_id;
        self.next_routine_id += 1;
        AttackRoutine::new(id, pattern, tuning, low_hp, &mut self.rng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RageLevel {
    Half,
    Quarter,
}

/// One-shot rage flags at 50% and 25% health.
#[derive(Component, Debug, Default, Clone)]
pub struct RageThresholds {
    pub half_fired: bool,
    pub quarter_fired: bool,
}

impl RageThresholds {
    /// Fire any threshold crossed for the first time. A single big hit can cross both.
    pub fn observe(&mut self, health_fraction: f32) -> Vec<RageLevel> {
        let mut crossed = Vec::new();
        if !self.half_fired && health_fraction <= HALF_HEALTH {
            self.half_fired = true;
            crossed.push(RageLevel::Half);
        }
        if !self.quarter_fired && health_fraction <= LOW_HEALTH {
            self.quarter_fired = true;
            crossed.push(RageLevel::Quarter);
        }
        crossed
    }
}
