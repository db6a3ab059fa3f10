//! Path: game_sim/src/game_logic/systems/collision.rs
//! Summary: 衝突解決。攻撃インテントと弾丸命中を消費し、ダメージ適用を一元化する

use crate::world::{AttackIntent, DamageSource, FrameEvent, GameWorld, ProjectileOwner};
use game_core::constants::{
    ATTACK_HITBOX_HEIGHT, ATTACK_HITBOX_WIDTH, DEFENSE_BOOST_FACTOR, INVINCIBLE_DURATION,
};
use game_core::util::{aabb_overlap, dist};

/// tick 内の全ダメージ解決。インテント → 弾丸の順に処理する
pub(crate) fn resolve_combat(w: &mut GameWorld) {
    resolve_attack_intents(w);
    resolve_projectile_hits(w);
}

fn resolve_attack_intents(w: &mut GameWorld) {
    let intents = std::mem::take(&mut w.pending_attacks);
    for intent in intents {
        match intent {
            AttackIntent::PlayerMelee { damage } => resolve_player_melee(w, damage),
            AttackIntent::EnemyMelee { enemy_idx } => {
                // 発行後に死んだ敵のインテントは破棄
                if enemy_idx >= w.enemies.len() || !w.enemies.alive[enemy_idx] {
                    continue;
                }
                let (ex, ey) = w.enemies.center(enemy_idx);
                let (px, py) = w.player.center();
                let range = w.enemies.kinds[enemy_idx].params().attack_range;
                if dist(ex, ey, px, py) <= range {
                    let damage = w.enemies.attack_damage[enemy_idx];
                    damage_player(w, damage, DamageSource::EnemyMelee);
                }
            }
            AttackIntent::BossMelee => {
                let hit = w.boss.as_ref().map(|b| {
                    let (bx, by) = b.center();
                    let params = b.kind.params();
                    (bx, by, params.attack_range, params.attack_damage)
                });
                if let Some((bx, by, range, damage)) = hit {
                    let (px, py) = w.player.center();
                    if dist(bx, by, px, py) <= range {
                        damage_player(w, damage, DamageSource::BossMelee);
                    }
                }
            }
        }
    }
}

/// プレイヤー近接攻撃: 自分を中心とした矩形ヒットボックスで敵とボスを薙ぐ
fn resolve_player_melee(w: &mut GameWorld, damage: f32) {
    let (px, py) = w.player.center();
    let hx = px - ATTACK_HITBOX_WIDTH / 2.0;
    let hy = py - ATTACK_HITBOX_HEIGHT / 2.0;

    let len = w.enemies.len();
    for i in 0..len {
        if !w.enemies.alive[i] {
            continue;
        }
        let size = w.enemies.size(i);
        if aabb_overlap(
            hx, hy, ATTACK_HITBOX_WIDTH, ATTACK_HITBOX_HEIGHT,
            w.enemies.positions_x[i], w.enemies.positions_y[i], size, size,
        ) {
            damage_enemy(w, i, damage);
        }
    }

    let boss_rect = w.boss.as_ref().map(|b| (b.x, b.y, b.size()));
    if let Some((bx, by, bs)) = boss_rect {
        if aabb_overlap(hx, hy, ATTACK_HITBOX_WIDTH, ATTACK_HITBOX_HEIGHT, bx, by, bs, bs) {
            damage_boss(w, damage);
        }
    }
}

/// 弾丸 vs 有効標的。所有派閥の標的にのみ当たり、最初の命中で消費される
fn resolve_projectile_hits(w: &mut GameWorld) {
    let psize = w.projectiles.size();
    let len = w.projectiles.len();
    for i in 0..len {
        if !w.projectiles.alive[i] {
            continue;
        }
        let x = w.projectiles.positions_x[i];
        let y = w.projectiles.positions_y[i];
        let damage = w.projectiles.damage[i];

        match w.projectiles.owner[i] {
            ProjectileOwner::Enemy => {
                let hit = !w.player.is_dead()
                    && aabb_overlap(
                        x, y, psize, psize,
                        w.player.x, w.player.y, w.player.size(), w.player.size(),
                    );
                if hit {
                    // グレイス中やシールド中でも弾自体は消費される
                    w.projectiles.kill(i);
                    damage_player(w, damage, DamageSource::Projectile);
                }
            }
            ProjectileOwner::Player => {
                let mut consumed = false;
                let elen = w.enemies.len();
                for e in 0..elen {
                    if !w.enemies.alive[e] {
                        continue;
                    }
                    let es = w.enemies.size(e);
                    if aabb_overlap(
                        x, y, psize, psize,
                        w.enemies.positions_x[e], w.enemies.positions_y[e], es, es,
                    ) {
                        w.projectiles.kill(i);
                        damage_enemy(w, e, damage);
                        consumed = true;
                        break;
                    }
                }
                if !consumed {
                    let boss_rect = w.boss.as_ref().map(|b| (b.x, b.y, b.size()));
                    if let Some((bx, by, bs)) = boss_rect {
                        if aabb_overlap(x, y, psize, psize, bx, by, bs, bs) {
                            w.projectiles.kill(i);
                            damage_boss(w, damage);
                        }
                    }
                }
            }
        }
    }
}

/// プレイヤーへのダメージ適用。
/// シールド / ドッジ中は完全無効、被弾グレイス中は無視、
/// 通過した場合のみ防御ブースト半減を掛けてグレイスを張り直す
pub(crate) fn damage_player(w: &mut GameWorld, amount: f32, source: DamageSource) {
    let p = &mut w.player;
    if p.is_dead() {
        return;
    }
    if p.is_shielding || p.is_dodging() {
        return;
    }
    if p.invulnerable_timer > 0.0 {
        return;
    }
    let actual = if p.defense_boost > 0.0 {
        amount * DEFENSE_BOOST_FACTOR
    } else {
        amount
    };
    p.hp = (p.hp - actual).max(0.0);
    p.invulnerable_timer = INVINCIBLE_DURATION;
    w.frame_events.push(FrameEvent::PlayerDamaged { amount: actual, source });
    log::debug!("player damaged: {:.1} ({:?}) hp={:.1}", actual, source, w.player.hp);
}

/// 敵へのダメージ適用と撃破時のスコア・イベント処理
pub(crate) fn damage_enemy(w: &mut GameWorld, i: usize, amount: f32) {
    if !w.enemies.alive[i] {
        return;
    }
    w.enemies.hp[i] = (w.enemies.hp[i] - amount).max(0.0);
    if w.enemies.hp[i] > 0.0 {
        return;
    }
    let kind = w.enemies.kinds[i];
    let points = kind.points();
    w.enemies.kill(i);
    w.progression.enemies_defeated += 1;
    w.player.points += points;
    w.player.score += points;
    w.frame_events.push(FrameEvent::EnemyKilled { kind, points });
    log::debug!("enemy killed: {} (+{points})", kind.name());
}

/// ボスへのダメージ適用。撃破時は報酬を適用して除去し、進行側が遷移を拾う
pub(crate) fn damage_boss(w: &mut GameWorld, amount: f32) {
    let Some(boss) = w.boss.as_mut() else {
        return;
    };
    boss.hp = (boss.hp - amount).max(0.0);
    if boss.hp > 0.0 {
        return;
    }
    let kind = boss.kind;
    let params = kind.params();
    let points = kind.points();
    w.boss = None;
    w.progression.boss_defeated = true;
    w.player.points += points;
    w.player.score += points;
    w.player.heal(params.reward_health);
    w.player.attack_damage += params.reward_damage;
    w.frame_events.push(FrameEvent::BossDefeated {
        level: params.level,
        points,
        reward_health: params.reward_health,
        reward_damage: params.reward_damage,
    });
    log::debug!("boss defeated: {} (+{points})", params.name);
}
