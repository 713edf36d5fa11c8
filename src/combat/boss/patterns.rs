//! Combat domain: boss attack patterns as routines polled once per tick.
//!
//! A routine never spawns anything itself. Each poll appends the shots due
//! this tick to a `FireCommand` list that the spawner system turns into
//! projectile entities.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::difficulty::BossTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackPattern {
    CrossSpin,
    CircleWave,
    RandomCircle,
    HomingShots,
    DualAttack,
}

impl AttackPattern {
    /// Patterns that are always in the pool and may run inside a DualAttack.
    pub const BASE: [AttackPattern; 3] = [
        AttackPattern::CrossSpin,
        AttackPattern::CircleWave,
        AttackPattern::RandomCircle,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Straight,
    Homing,
    Boomerang,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading {
    /// Degrees counter-clockwise from +x
    Angle(f32),
    TowardPlayer,
}

/// One projectile a routine wants spawned at the boss this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireCommand {
    pub heading: Heading,
    pub speed: f32,
    pub kind: ShotKind,
    /// Id of the routine that fired the shot
    pub routine: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum RoutineKind {
    CrossSpin {
        burst: u32,
        bursts: u32,
        angle_step: f32,
        direction: f32,
        spokes: u32,
    },
    CircleWave {
        wave: u32,
        waves: u32,
        per_wave: u32,
        ring_step: f32,
        offset_step: f32,
        random: bool,
    },
    Homing {
        fired: u32,
        count: u32,
    },
}

/// Runtime state of one attack pattern. Parameters are fixed when it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackRoutine {
    pub id: u32,
    pub pattern: AttackPattern,
    kind: RoutineKind,
    shot: ShotKind,
    speed: f32,
    delay: f32,
    /// Seconds until the next step is due
    wait: f32,
    linger_limit: f32,
    lingering: bool,
    finished: bool,
}

impl AttackRoutine {
    /// Build a single-pattern routine. `DualAttack` is not a routine and yields `None`.
    pub fn new(
        id: u32,
        pattern: AttackPattern,
        tuning: &BossTuning,
        low_hp: bool,
        rng: &mut ChaCha8Rng,
    ) -> Option<Self> {
        let cross = &tuning.cross_spin;
        let wave = &tuning.circle_wave;
        let ring_shot = if wave.boomerang_rings {
            ShotKind::Boomerang
        } else {
            ShotKind::Straight
        };
        let wave_delay = if low_hp { wave.low_hp_delay } else { wave.delay };

        let (kind, shot, speed, delay) = match pattern {
            AttackPattern::CrossSpin => {
                let bursts = if cross.angle_step > 0.0 {
                    (cross.sweep / cross.angle_step).floor() as u32 + 1
                } else {
                    1
                };
                let direction = if cross.random_spin_direction && rng.random_bool(0.5) {
                    -1.0
                } else {
                    1.0
                };
                let spokes = if low_hp && cross.extra_spokes_at_low_hp { 8 } else { 4 };
                (
                    RoutineKind::CrossSpin {
                        burst: 0,
                        bursts,
                        angle_step: cross.angle_step,
                        direction,
                        spokes,
                    },
                    ShotKind::Straight,
                    if low_hp { cross.low_hp_speed } else { cross.speed },
                    if low_hp { cross.low_hp_delay } else { cross.delay },
                )
            }
            AttackPattern::CircleWave | AttackPattern::RandomCircle => (
                RoutineKind::CircleWave {
                    wave: 0,
                    waves: wave.waves,
                    per_wave: wave.projectiles_per_wave(),
                    ring_step: wave.ring_step,
                    offset_step: wave.wave_offset_step,
                    random: pattern == AttackPattern::RandomCircle,
                },
                ring_shot,
                if pattern == AttackPattern::RandomCircle {
                    wave.random_speed
                } else {
                    wave.speed
                },
                wave_delay,
            ),
            AttackPattern::HomingShots => (
                RoutineKind::Homing {
                    fired: 0,
                    count: if low_hp {
                        tuning.homing.low_hp_count
                    } else {
                        tuning.homing.count
                    },
                },
                ShotKind::Homing,
                tuning.homing.speed,
                tuning.homing.interval,
            ),
            AttackPattern::DualAttack => return None,
        };

        Some(Self {
            id,
            pattern,
            kind,
            shot,
            speed,
            delay,
            wait: 0.0,
            linger_limit: wave.boomerang_wait_limit,
            lingering: false,
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn fires_boomerangs(&self) -> bool {
        self.shot == ShotKind::Boomerang
    }

    /// Advance by `dt`. `returned` reports whether one of this routine's
    /// boomerangs has turned back, which ends the routine at once.
    pub fn advance(
        &mut self,
        dt: f32,
        returned: bool,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<FireCommand>,
    ) {
        if self.finished {
            return;
        }
        if returned && self.fires_boomerangs() {
            self.finished = true;
            return;
        }

        self.wait -= dt;
        while self.wait <= 0.0 {
            if self.fire_next(rng, out) {
                self.wait += self.delay;
            } else if self.fires_boomerangs() && !self.lingering {
                // Give the last ring time to turn around
                self.lingering = true;
                self.wait += self.linger_limit;
            } else {
                self.finished = true;
                break;
            }
        }
    }

    /// Fire the next burst. Returns false once every burst is out.
    fn fire_next(&mut self, rng: &mut ChaCha8Rng, out: &mut Vec<FireCommand>) -> bool {
        let (id, speed, shot) = (self.id, self.speed, self.shot);
        let command = |heading| FireCommand {
            heading,
            speed,
            kind: shot,
            routine: id,
        };

        match &mut self.kind {
            RoutineKind::CrossSpin {
                burst,
                bursts,
                angle_step,
                direction,
                spokes,
            } => {
                if *burst >= *bursts {
                    return false;
                }
                let offset = *direction * *burst as f32 * *angle_step;
                let spacing = 360.0 / *spokes as f32;
                for spoke in 0..*spokes {
                    out.push(command(Heading::Angle(offset + spoke as f32 * spacing)));
                }
                *burst += 1;
            }
            RoutineKind::CircleWave {
                wave,
                waves,
                per_wave,
                ring_step,
                offset_step,
                random,
            } => {
                if *wave >= *waves {
                    return false;
                }
                let offset = *wave as f32 * *offset_step;
                for i in 0..*per_wave {
                    let angle = if *random {
                        rng.random_range(0.0..360.0)
                    } else {
                        offset + i as f32 * *ring_step
                    };
                    out.push(command(Heading::Angle(angle)));
                }
                *wave += 1;
            }
            RoutineKind::Homing { fired, count } => {
                if *fired >= *count {
                    return false;
                }
                out.push(command(Heading::TowardPlayer));
                *fired += 1;
            }
        }
        true
    }
}

/// The attack currently owned by the director.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveAttack {
    Single(AttackRoutine),
    /// Two sub-routines advanced side by side for at least `window` seconds
    Dual {
        first: AttackRoutine,
        second: AttackRoutine,
        elapsed: f32,
        window: f32,
    },
}

impl ActiveAttack {
    pub fn pattern(&self) -> AttackPattern {
        match self {
            ActiveAttack::Single(routine) => routine.pattern,
            ActiveAttack::Dual { .. } => AttackPattern::DualAttack,
        }
    }

    pub fn advance(
        &mut self,
        dt: f32,
        returned: &[u32],
        rng: &mut ChaCha8Rng,
        out: &mut Vec<FireCommand>,
    ) {
        match self {
            ActiveAttack::Single(routine) => {
                let turned = returned.contains(&routine.id);
                routine.advance(dt, turned, rng, out);
            }
            ActiveAttack::Dual {
                first,
                second,
                elapsed,
                ..
            } => {
                *elapsed += dt;
                let turned = returned.contains(&first.id);
                first.advance(dt, turned, rng, out);
                let turned = returned.contains(&second.id);
                second.advance(dt, turned, rng, out);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            ActiveAttack::Single(routine) => routine.is_finished(),
            ActiveAttack::Dual {
                first,
                second,
                elapsed,
                window,
            } => *elapsed >= *window && first.is_finished() && second.is_finished(),
        }
    }
}
