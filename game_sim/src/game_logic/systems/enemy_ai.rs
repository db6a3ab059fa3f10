//! Path: game_sim/src/game_logic/systems/enemy_ai.rs
//! Summary: 敵 AI（索敵 → 追跡 / 近接 / 射撃の判断）と待機ふらつき

use crate::world::{AttackIntent, EnemyWorld, GameWorld, ProjectileKind, ProjectileOwner};
use game_core::constants::{
    ENEMY_MELEE_COOLDOWN, ENEMY_PROJECTILE_SPEED, ENEMY_RANGED_COOLDOWN, FRICTION_PER_STEP,
    MAP_HEIGHT, MAP_WIDTH, WANDER_MAX_PAUSE, WANDER_MIN_PAUSE, WANDER_SPEED_RATIO,
};
use game_core::util::dist;

/// 最近接の生存敵インデックスを返す
pub(crate) fn find_nearest_enemy(enemies: &EnemyWorld, px: f32, py: f32) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest  = None;
    for i in 0..enemies.len() {
        if !enemies.alive[i] {
            continue;
        }
        let (ex, ey) = enemies.center(i);
        let dx = ex - px;
        let dy = ey - py;
        let d = dx * dx + dy * dy;
        if d < min_dist {
            min_dist = d;
            nearest  = Some(i);
        }
    }
    nearest
}

pub(crate) fn update_enemies(w: &mut GameWorld, dt: f32) {
    // 借用前にプレイヤー情報をコピー
    let player_dead = w.player.is_dead();
    let (px, py) = w.player.center();

    let len = w.enemies.len();
    for i in 0..len {
        if !w.enemies.alive[i] {
            continue;
        }

        // 一時フラグとクールダウンの更新
        w.enemies.attacking[i] = false;
        w.enemies.attack_cooldown[i] = (w.enemies.attack_cooldown[i] - dt).max(0.0);

        let params = w.enemies.kinds[i].params();
        let (ex, ey) = w.enemies.center(i);
        // 死んだ標的への参照は無限遠として扱い、待機に落とす
        let d = if player_dead { f32::INFINITY } else { dist(ex, ey, px, py) };

        if d > params.aggro_range {
            idle_wander(w, i, dt, params.speed);
        } else {
            w.enemies.facing_right[i] = px > ex;
            let cooldown_ready = w.enemies.attack_cooldown[i] <= 0.0;

            if d <= params.attack_range {
                // 近接帯: 停止して殴る
                w.enemies.velocities_x[i] = 0.0;
                w.enemies.velocities_y[i] = 0.0;
                if cooldown_ready {
                    w.pending_attacks.push(AttackIntent::EnemyMelee { enemy_idx: i });
                    w.enemies.attack_cooldown[i] = ENEMY_MELEE_COOLDOWN;
                    w.enemies.attacking[i] = true;
                }
            } else if params.projectile_range > 0.0
                && d <= params.projectile_range
                && cooldown_ready
            {
                // 射撃帯: 立ち止まって現在位置のプレイヤーへ投げる
                w.enemies.velocities_x[i] = 0.0;
                w.enemies.velocities_y[i] = 0.0;
                let damage = w.enemies.attack_damage[i];
                w.projectiles.spawn_at_target(
                    ProjectileKind::Bone,
                    ProjectileOwner::Enemy,
                    ex,
                    ey,
                    px,
                    py,
                    damage,
                    ENEMY_PROJECTILE_SPEED,
                );
                w.enemies.attack_cooldown[i] = ENEMY_RANGED_COOLDOWN;
                w.enemies.attacking[i] = true;
            } else {
                // 追跡: プレイヤーへ直進
                let dd = d.max(0.001);
                w.enemies.velocities_x[i] = (px - ex) / dd * params.speed;
                w.enemies.velocities_y[i] = (py - ey) / dd * params.speed;
            }
        }

        // 位置の積分と境界クランプ
        let size = w.enemies.size(i);
        w.enemies.positions_x[i] =
            (w.enemies.positions_x[i] + w.enemies.velocities_x[i] * dt).clamp(0.0, MAP_WIDTH - size);
        w.enemies.positions_y[i] =
            (w.enemies.positions_y[i] + w.enemies.velocities_y[i] * dt).clamp(0.0, MAP_HEIGHT - size);
    }
}

/// アグロ外の待機挙動。速度は摩擦で 0 へ減衰し、時々小さなふらつきを抽選する
fn idle_wander(w: &mut GameWorld, i: usize, dt: f32, speed: f32) {
    let friction = FRICTION_PER_STEP.powf(dt * 60.0);
    w.enemies.velocities_x[i] *= friction;
    w.enemies.velocities_y[i] *= friction;

    w.enemies.wander_timer[i] = (w.enemies.wander_timer[i] - dt).max(0.0);
    if w.enemies.wander_timer[i] <= 0.0 && dt > 0.0 {
        let angle = w.rng.next_f32() * std::f32::consts::TAU;
        let drift = speed * WANDER_SPEED_RATIO;
        w.enemies.velocities_x[i] = angle.cos() * drift;
        w.enemies.velocities_y[i] = angle.sin() * drift;
        w.enemies.facing_right[i] = w.enemies.velocities_x[i] > 0.0;
        w.enemies.wander_timer[i] = w.rng.next_range(WANDER_MIN_PAUSE, WANDER_MAX_PAUSE);
    }
}
