//! Combat domain: the boss encounter.

mod director;
mod patterns;
mod selection;
mod systems;

#[cfg(test)]
mod tests;

pub use director::{
    ArenaEdge, BossDirector, DirectorInput, DirectorOutput, DirectorPhase, RageLevel,
    RageThresholds,
};
pub use patterns::{ActiveAttack, AttackPattern, AttackRoutine, FireCommand, Heading, ShotKind};
pub use selection::{HALF_HEALTH, LOW_HEALTH, attack_pool, select_attack, select_dual_pair};

pub(crate) use systems::{
    apply_boomerang_returns, apply_boss_rage, despawn_defeated_boss, handle_boss_death,
    spawn_boss_projectiles, tick_boss_directors,
};
