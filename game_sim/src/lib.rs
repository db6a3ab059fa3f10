//! Path: game_sim/src/lib.rs
//! Summary: 戦闘・進行シミュレーション本体（ワールド状態・tick パイプライン・スナップショット）

pub mod game_logic;
pub mod input;
pub mod render_snapshot;
pub mod world;

pub use game_logic::{advance_frame, drain_frame_events};
pub use input::InputSnapshot;
pub use render_snapshot::{build_render_frame, HudData, RenderFrame};
pub use world::{
    AttackIntent, BossState, DamageSource, EnemyWorld, FrameEvent, GameWorld, LevelPhase,
    PlayerState, ProgressionState, ProjectileKind, ProjectileOwner, ProjectileWorld,
};
