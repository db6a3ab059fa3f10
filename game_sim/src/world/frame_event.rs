//! Path: game_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（外部コンシューマへの通知用）

use game_core::collectible::CollectibleKind;
use game_core::enemy::EnemyKind;
use serde::Serialize;

/// プレイヤーダメージの発生源
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageSource {
    EnemyMelee,
    BossMelee,
    Projectile,
}

/// フレーム内で発生したゲームイベント。毎 tick drain され、
/// 音声・パーティクル・UI・ブロックチェーン連携が購読する。
/// シミュレーションデータにコールバックは埋め込まない。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FrameEvent {
    EnemyKilled { kind: EnemyKind, points: u32 },
    BossPhaseChanged { from: u8, to: u8 },
    BossDefeated {
        level: u32,
        points: u32,
        reward_health: f32,
        reward_damage: f32,
    },
    PlayerDamaged { amount: f32, source: DamageSource },
    CollectiblePickup { kind: CollectibleKind, value: u32 },
    LevelComplete { level: u32 },
    /// 終端イベント。外部の経済コンシューマは won と final_score のみ読む
    GameOver { won: bool, final_score: u32 },
}
