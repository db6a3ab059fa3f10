//! Path: game_sim/src/game_logic/systems/projectiles.rs
//! Summary: 弾丸の前進・寿命切れ・マップ外カリング（命中判定は衝突解決側）

use crate::world::GameWorld;
use game_core::constants::{MAP_HEIGHT, MAP_WIDTH, PROJECTILE_CULL_MARGIN};

pub(crate) fn update_projectiles(w: &mut GameWorld, dt: f32) {
    let len = w.projectiles.len();
    for i in 0..len {
        if !w.projectiles.alive[i] {
            continue;
        }
        w.projectiles.positions_x[i] += w.projectiles.velocities_x[i] * dt;
        w.projectiles.positions_y[i] += w.projectiles.velocities_y[i] * dt;
        w.projectiles.age[i] += dt;

        if w.projectiles.age[i] >= w.projectiles.lifetime[i] {
            w.projectiles.kill(i);
            continue;
        }

        // マップ外へ大きく出た弾は破棄する
        let x = w.projectiles.positions_x[i];
        let y = w.projectiles.positions_y[i];
        if x < -PROJECTILE_CULL_MARGIN
            || x > MAP_WIDTH + PROJECTILE_CULL_MARGIN
            || y < -PROJECTILE_CULL_MARGIN
            || y > MAP_HEIGHT + PROJECTILE_CULL_MARGIN
        {
            w.projectiles.kill(i);
        }
    }
}
