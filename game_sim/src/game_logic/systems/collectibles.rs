//! Path: game_sim/src/game_logic/systems/collectibles.rs
//! Summary: 収集物の取得判定と即時効果の適用

use crate::world::{FrameEvent, GameWorld};
use game_core::collectible::CollectibleKind;
use game_core::util::dist;

pub(crate) fn update_collectibles(w: &mut GameWorld) {
    if w.player.is_dead() {
        return;
    }
    let (px, py) = w.player.center();
    let half = w.player.size() / 2.0;

    let len = w.collectibles.len();
    for i in 0..len {
        if w.collectibles.collected[i] {
            continue;
        }
        let cx = w.collectibles.positions_x[i];
        let cy = w.collectibles.positions_y[i];
        let kind = w.collectibles.kinds[i];
        // 取得判定は中心間距離 < 収集物サイズ + プレイヤー半幅
        if dist(px, py, cx, cy) < kind.size() + half {
            if !w.collectibles.collect(i) {
                continue;
            }
            let value = w.collectibles.value[i];
            let duration = w.collectibles.duration[i];
            apply_pickup(w, kind, value, duration);
        }
    }
}

/// 取得効果の適用。通貨は加算、ポーションは回復、ブーストはタイマーに加算
/// （リセットではなく延長。効果中の再取得は残り時間を伸ばす）
fn apply_pickup(w: &mut GameWorld, kind: CollectibleKind, value: u32, duration: f32) {
    match kind {
        CollectibleKind::Coin | CollectibleKind::RareGem => {
            w.player.coins += value;
            w.player.score += value;
        }
        CollectibleKind::HealthPotion => w.player.heal(value as f32),
        CollectibleKind::SpeedBoost => w.player.speed_boost += duration,
        CollectibleKind::DamageBoost => w.player.damage_boost += duration,
        CollectibleKind::DefenseBoost => w.player.defense_boost += duration,
        CollectibleKind::JumpBoost => w.player.jump_boost += duration,
    }
    w.frame_events.push(FrameEvent::CollectiblePickup { kind, value });
    log::debug!("pickup: {} (+{value})", kind.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> GameWorld {
        let mut w = GameWorld::new(Vec::new(), 1);
        w.player.x = 500.0;
        w.player.y = 400.0;
        w
    }

    #[test]
    fn coin_within_radius_is_collected() {
        let mut w = world();
        let (px, py) = w.player.center();
        w.collectibles.spawn(px + 10.0, py, CollectibleKind::Coin, 3, 0.0);
        update_collectibles(&mut w);
        assert!(w.collectibles.collected[0]);
        assert_eq!(w.player.coins, 3);
        assert_eq!(w.player.score, 3);
        assert_eq!(w.frame_events.len(), 1);
    }

    #[test]
    fn pickup_is_idempotent() {
        let mut w = world();
        let (px, py) = w.player.center();
        w.collectibles.spawn(px, py, CollectibleKind::RareGem, 50, 0.0);
        update_collectibles(&mut w);
        update_collectibles(&mut w);
        assert_eq!(w.player.coins, 50);
        assert_eq!(w.frame_events.len(), 1);
        assert_eq!(w.collectibles.count, 0);
    }

    #[test]
    fn out_of_range_collectible_stays() {
        let mut w = world();
        let (px, py) = w.player.center();
        w.collectibles.spawn(px + 200.0, py, CollectibleKind::Coin, 1, 0.0);
        update_collectibles(&mut w);
        assert!(!w.collectibles.collected[0]);
        assert_eq!(w.player.coins, 0);
    }

    #[test]
    fn potion_heals_clamped() {
        let mut w = world();
        w.player.hp = 90.0;
        let (px, py) = w.player.center();
        w.collectibles.spawn(px, py, CollectibleKind::HealthPotion, 25, 0.0);
        update_collectibles(&mut w);
        assert!((w.player.hp - w.player.max_hp).abs() < 0.001);
    }

    #[test]
    fn boost_durations_stack_additively() {
        let mut w = world();
        let (px, py) = w.player.center();
        w.player.speed_boost = 4.0;
        w.collectibles.spawn(px, py, CollectibleKind::SpeedBoost, 1, 10.0);
        update_collectibles(&mut w);
        // リセットではなく加算（効果中の再取得で延長）
        assert!((w.player.speed_boost - 14.0).abs() < 0.001);
    }
}
