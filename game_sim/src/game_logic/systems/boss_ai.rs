//! Path: game_sim/src/game_logic/systems/boss_ai.rs
//! Summary: ボス AI（フェーズ再計算・追跡・近接/射撃/特殊攻撃）

use crate::world::{AttackIntent, BossState, FrameEvent, GameWorld, ProjectileKind, ProjectileOwner};
use game_core::boss::{
    phase_for_health_ratio, phase_melee_cooldown, phase_projectile_cooldown,
    phase_projectile_damage_mult, phase_projectile_speed, phase_special_recharge,
    phase_speed_mult, SpecialPattern,
};
use game_core::constants::{BOSS_PHASE3_FAN_SPREAD, MAP_HEIGHT, MAP_WIDTH};
use game_core::util::dist;

pub(crate) fn update_boss(w: &mut GameWorld, dt: f32) {
    // 借用衝突を避けるため一旦取り出し、更新後に戻す。
    // ボスの死亡処理は衝突解決側（damage_boss）が行うため、ここでは生存前提
    let Some(mut boss) = w.boss.take() else {
        return;
    };

    boss.is_attacking = false;
    boss.attack_cooldown = (boss.attack_cooldown - dt).max(0.0);
    boss.projectile_cooldown = (boss.projectile_cooldown - dt).max(0.0);
    boss.special_cooldown = (boss.special_cooldown - dt).max(0.0);

    // フェーズは HP 比率から毎 tick 再計算。回復は存在しないが、
    // 単調増加（1→2→3）は max で構造的にも保証しておく
    let computed = phase_for_health_ratio(boss.hp / boss.max_hp);
    let next = boss.phase.max(computed);
    if next != boss.phase {
        // しきい値を跨いだ tick にのみ 1 回だけ発火する
        w.frame_events.push(FrameEvent::BossPhaseChanged { from: boss.phase, to: next });
        log::debug!("boss phase {} -> {} (hp {:.0}/{:.0})", boss.phase, next, boss.hp, boss.max_hp);
        boss.phase = next;
    }

    if w.player.is_dead() {
        // 標的がいないので行動しない
        w.boss = Some(boss);
        return;
    }

    let params = boss.kind.params();
    let (px, py) = w.player.center();
    let (bx, by) = boss.center();
    boss.facing_right = px > bx;
    let d = dist(bx, by, px, py);

    // 近接射程外ならフェーズ倍率つきで直進追跡
    if d > params.attack_range {
        let dd = d.max(0.001);
        let speed = params.speed * phase_speed_mult(boss.phase);
        boss.x += (px - bx) / dd * speed * dt;
        boss.y += (py - by) / dd * speed * dt;
        boss.x = boss.x.clamp(0.0, MAP_WIDTH - params.size);
        boss.y = boss.y.clamp(0.0, MAP_HEIGHT - params.size);
    }

    // 近接攻撃
    if d <= params.attack_range && boss.attack_cooldown <= 0.0 {
        w.pending_attacks.push(AttackIntent::BossMelee);
        boss.attack_cooldown = phase_melee_cooldown(boss.phase);
        boss.is_attacking = true;
    }

    // 射撃（近接判定とは独立）。フェーズ 3 は 3 発の扇
    if d <= params.projectile_range && boss.projectile_cooldown <= 0.0 {
        let kind = ProjectileKind::for_boss(boss.kind);
        let damage = params.attack_damage * phase_projectile_damage_mult(boss.phase);
        let speed = phase_projectile_speed(boss.phase);
        let (cx, cy) = boss.center();
        if boss.phase >= 3 {
            let base = (py - cy).atan2(px - cx);
            for k in -1i32..=1 {
                let angle = base + k as f32 * BOSS_PHASE3_FAN_SPREAD;
                w.projectiles
                    .spawn_at_angle(kind, ProjectileOwner::Enemy, cx, cy, angle, damage, speed);
            }
        } else {
            w.projectiles
                .spawn_at_target(kind, ProjectileOwner::Enemy, cx, cy, px, py, damage, speed);
        }
        boss.projectile_cooldown = phase_projectile_cooldown(boss.phase);
    }

    // 特殊攻撃。フェーズ 2 から解禁され、リチャージはフェーズ依存
    if let Some(recharge) = phase_special_recharge(boss.phase) {
        if boss.special_cooldown <= 0.0 {
            fire_special(w, &boss, px, py);
            boss.special_cooldown = recharge;
        }
    }

    w.boss = Some(boss);
}

/// ボス種類固有の弾幕（扇 / 放射）を展開する
fn fire_special(w: &mut GameWorld, boss: &BossState, px: f32, py: f32) {
    let params = boss.kind.params();
    let kind = ProjectileKind::for_boss(boss.kind);
    let (cx, cy) = boss.center();
    let damage = params.attack_damage * params.special_damage_mult;
    let speed = params.special_speed;

    match params.special {
        SpecialPattern::Fan { count, step } => {
            let base = (py - cy).atan2(px - cx);
            let half = (count as f32 - 1.0) / 2.0;
            for i in 0..count {
                let angle = base + (i as f32 - half) * step;
                w.projectiles
                    .spawn_at_angle(kind, ProjectileOwner::Enemy, cx, cy, angle, damage, speed);
            }
        }
        SpecialPattern::Radial { count } => {
            for i in 0..count {
                let angle = i as f32 * std::f32::consts::TAU / count as f32;
                w.projectiles
                    .spawn_at_angle(kind, ProjectileOwner::Enemy, cx, cy, angle, damage, speed);
            }
        }
    }
    log::debug!("boss special fired: {}", params.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::boss::BossKind;
    use game_core::constants::FIXED_STEP;

    fn world_with_boss(kind: BossKind, x: f32, y: f32) -> GameWorld {
        let mut w = GameWorld::new(Vec::new(), 5);
        w.boss = Some(BossState::new(kind, x, y));
        w
    }

    #[test]
    fn chases_player_when_out_of_melee_range() {
        let mut w = world_with_boss(BossKind::DragonLord, 1400.0, 300.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        update_boss(&mut w, FIXED_STEP);
        let boss = w.boss.as_ref().unwrap();
        assert!(boss.x < 1400.0);
        assert!(!boss.facing_right);
    }

    #[test]
    fn melee_intent_inside_range() {
        let mut w = world_with_boss(BossKind::DragonLord, 520.0, 400.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        update_boss(&mut w, FIXED_STEP);
        assert!(w.pending_attacks.contains(&AttackIntent::BossMelee));
        let boss = w.boss.as_ref().unwrap();
        assert!(boss.is_attacking);
        assert!((boss.attack_cooldown - phase_melee_cooldown(1)).abs() < 0.001);
    }

    #[test]
    fn single_projectile_in_phase_1() {
        let mut w = world_with_boss(BossKind::DragonLord, 700.0, 400.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        update_boss(&mut w, FIXED_STEP);
        assert_eq!(w.projectiles.count, 1);
        assert_eq!(w.projectiles.kinds[0], ProjectileKind::Fireball);
    }

    #[test]
    fn triple_fan_in_phase_3() {
        let mut w = world_with_boss(BossKind::DragonLord, 700.0, 400.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        let boss = w.boss.as_mut().unwrap();
        boss.hp = boss.max_hp * 0.2; // フェーズ 3 帯
        boss.special_cooldown = 99.0; // 特殊攻撃は切り離して射撃のみ見る
        update_boss(&mut w, FIXED_STEP);
        assert_eq!(w.projectiles.count, 3);
        // ダメージはフェーズ 3 倍率
        let expected = BossKind::DragonLord.params().attack_damage * 1.5;
        assert!((w.projectiles.damage[0] - expected).abs() < 0.001);
    }

    #[test]
    fn phase_change_event_fires_exactly_once() {
        let mut w = world_with_boss(BossKind::DragonLord, 1400.0, 300.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        let boss = w.boss.as_mut().unwrap();
        boss.hp = 320.0; // 64% < 66% → フェーズ 2
        update_boss(&mut w, FIXED_STEP);
        let changes: Vec<_> = w
            .frame_events
            .iter()
            .filter(|e| matches!(e, FrameEvent::BossPhaseChanged { .. }))
            .collect();
        assert_eq!(changes.len(), 1);
        assert_eq!(w.boss.as_ref().unwrap().phase, 2);
        // 同じ HP 帯に留まる限り再発火しない
        w.frame_events.clear();
        update_boss(&mut w, FIXED_STEP);
        update_boss(&mut w, FIXED_STEP);
        assert!(w
            .frame_events
            .iter()
            .all(|e| !matches!(e, FrameEvent::BossPhaseChanged { .. })));
    }

    #[test]
    fn phase_never_decreases() {
        let mut w = world_with_boss(BossKind::LichKing, 1400.0, 300.0);
        w.player.x = 500.0;
        let boss = w.boss.as_mut().unwrap();
        boss.phase = 3;
        boss.hp = boss.max_hp; // 満タンでもフェーズは戻らない
        update_boss(&mut w, FIXED_STEP);
        assert_eq!(w.boss.as_ref().unwrap().phase, 3);
    }

    #[test]
    fn special_gated_by_phase() {
        // フェーズ 1 では特殊攻撃なし
        let mut w = world_with_boss(BossKind::LichKing, 700.0, 400.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        let boss = w.boss.as_mut().unwrap();
        boss.projectile_cooldown = 99.0;
        update_boss(&mut w, FIXED_STEP);
        assert_eq!(w.projectiles.count, 0);

        // フェーズ 2 に落とすと放射 8 発 + リチャージ 8 秒
        let boss = w.boss.as_mut().unwrap();
        boss.hp = boss.max_hp * 0.5;
        boss.projectile_cooldown = 99.0;
        update_boss(&mut w, FIXED_STEP);
        assert_eq!(w.projectiles.count, 8);
        let boss = w.boss.as_ref().unwrap();
        assert!((boss.special_cooldown - 8.0).abs() < 0.001);
    }

    #[test]
    fn no_action_against_dead_player() {
        let mut w = world_with_boss(BossKind::DragonLord, 520.0, 400.0);
        w.player.x = 500.0;
        w.player.y = 400.0;
        w.player.hp = 0.0;
        update_boss(&mut w, FIXED_STEP);
        assert!(w.pending_attacks.is_empty());
        assert_eq!(w.projectiles.count, 0);
    }
}
