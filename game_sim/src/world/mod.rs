//! Path: game_sim/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BossState, ProjectileWorld, GameWorld）

mod boss;
mod enemy;
mod frame_event;
mod game_world;
mod intent;
mod player;
mod progression;
mod projectile;

pub use boss::BossState;
pub use enemy::EnemyWorld;
pub use frame_event::{DamageSource, FrameEvent};
pub use game_world::GameWorld;
pub use intent::AttackIntent;
pub use player::PlayerState;
pub use progression::{LevelPhase, ProgressionState};
pub use projectile::{ProjectileKind, ProjectileOwner, ProjectileWorld};
