//! Path: game_sim/src/game_logic/tick.rs
//! Summary: 固定順序の tick パイプライン（1 tick = 1 回の同期呼び出し）

use super::systems::boss_ai::update_boss;
use super::systems::collectibles::update_collectibles;
use super::systems::collision::resolve_combat;
use super::systems::enemy_ai::update_enemies;
use super::systems::player_input::update_player;
use super::systems::progression::update_progression;
use super::systems::projectiles::update_projectiles;
use crate::input::InputSnapshot;
use crate::world::GameWorld;
use game_core::constants::MAX_FRAME_DELTA;

/// ワールドを 1 tick 進める。
///
/// 入力 → プレイヤー → 敵 AI → ボス AI → 弾丸前進 → 衝突解決 →
/// 収集物 → 進行判定の固定順で処理し、tick 全体が外部から見て
/// アトミックになる（レンダラは tick 後のスナップショットのみを読む）。
/// game_over 後は何も変更しない。
pub fn advance_frame(w: &mut GameWorld, input: &InputSnapshot, delta_seconds: f32) {
    if w.progression.game_over {
        return;
    }
    // 時間が進まない tick は完全な no-op
    if delta_seconds <= 0.0 {
        return;
    }
    // 停止復帰後の巨大なデルタはクランプしてトンネリングを避ける
    let dt = delta_seconds.min(MAX_FRAME_DELTA);
    log::trace!("advance_frame: dt={dt} frame_id={}", w.frame_id);
    w.frame_id += 1;
    w.elapsed_seconds += dt;

    update_player(w, input, dt);
    update_enemies(w, dt);
    update_boss(w, dt);
    update_projectiles(w, dt);
    resolve_combat(w);
    update_collectibles(w);
    update_progression(w);
}
