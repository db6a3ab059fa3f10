//! Path: game_sim/src/game_logic/events.rs
//! Summary: フレームイベントの drain（外部コンシューマ向け）

use crate::world::{FrameEvent, GameWorld};

/// この tick までに溜まったイベントを取り出す。呼び出し後、キューは空になる。
/// game_over 後もスナップショット同様に読み出し可能
pub fn drain_frame_events(w: &mut GameWorld) -> Vec<FrameEvent> {
    w.frame_events.drain(..).collect()
}
