//! Path: game_sim/src/game_logic/systems/player_input.rs
//! Summary: プレイヤー更新（移動積分・アクション発火・タイマー減衰）

use super::enemy_ai::find_nearest_enemy;
use crate::input::InputSnapshot;
use crate::world::{AttackIntent, GameWorld, ProjectileKind, ProjectileOwner};
use game_core::constants::{
    ATTACK_COOLDOWN, DODGE_COOLDOWN, DODGE_INVULN, FRICTION_PER_STEP, HEAVY_ATTACK_COOLDOWN,
    HEAVY_ATTACK_DAMAGE_RATIO, HEAVY_ATTACK_MANA_COST, HEAVY_ATTACK_SPEED, JUMP_BOOST_MULT,
    JUMP_COOLDOWN, JUMP_IMPULSE, MANA_REGEN_PER_SEC, MAP_HEIGHT, MAP_WIDTH, PLAYER_ACCEL,
    PLAYER_SIZE,
};

pub(crate) fn update_player(w: &mut GameWorld, input: &InputSnapshot, dt: f32) {
    if w.player.is_dead() {
        // 死亡後は入力を受け付けない。game_over は進行システムが立てる
        return;
    }

    let (dx, dy) = input.direction();

    // 加速（軸ごと）。瞬間移動ではなく加速 + 摩擦で速度を作る
    let accel = PLAYER_ACCEL * dt;
    if dx < 0.0 {
        w.player.vx -= accel;
        w.player.facing_right = false;
    } else if dx > 0.0 {
        w.player.vx += accel;
        w.player.facing_right = true;
    }
    if dy < 0.0 {
        w.player.vy -= accel;
    } else if dy > 0.0 {
        w.player.vy += accel;
    }

    // 入力のない軸は摩擦で減衰。0.8^(60*dt) なので dt=0 では変化しない
    let friction = FRICTION_PER_STEP.powf(dt * 60.0);
    if dx == 0.0 {
        w.player.vx *= friction;
    }
    if dy == 0.0 {
        w.player.vy *= friction;
    }

    // 最大速度（スピードブースト込み）で軸ごとにクランプ
    let max_speed = w.player.max_speed();
    w.player.vx = w.player.vx.clamp(-max_speed, max_speed);
    w.player.vy = w.player.vy.clamp(-max_speed, max_speed);

    // ドッジ: 短い無敵窓と速度倍化
    if input.dodge && w.player.dodge_cooldown <= 0.0 {
        w.player.dodge_cooldown = DODGE_COOLDOWN;
        w.player.invulnerable_timer = w.player.invulnerable_timer.max(DODGE_INVULN);
        w.player.vx *= 2.0;
        w.player.vy *= 2.0;
    }

    // ホップ: 移動方向への瞬間加速。停止中は何も起きない
    if input.jump && w.player.jump_cooldown <= 0.0 && (dx != 0.0 || dy != 0.0) {
        let len = (dx * dx + dy * dy).sqrt();
        let mult = if w.player.jump_boost > 0.0 { JUMP_BOOST_MULT } else { 1.0 };
        w.player.vx += dx / len * JUMP_IMPULSE * mult;
        w.player.vy += dy / len * JUMP_IMPULSE * mult;
        w.player.jump_cooldown = JUMP_COOLDOWN;
    }

    // シールドは押下中のみ有効
    w.player.is_shielding = input.shield;

    // 近接攻撃。クールダウンがそのまま攻撃窓を兼ねる
    if input.attack && w.player.attack_cooldown <= 0.0 {
        w.player.attack_cooldown = ATTACK_COOLDOWN;
        let damage = w.player.effective_attack_damage();
        w.pending_attacks.push(AttackIntent::PlayerMelee { damage });
    }

    // 特殊攻撃: マナを消費して直進弾を撃つ。最近接の敵、いなければボスを狙う
    if input.heavy_attack
        && w.player.heavy_cooldown <= 0.0
        && w.player.mana >= HEAVY_ATTACK_MANA_COST
    {
        let (px, py) = w.player.center();
        let target = find_nearest_enemy(&w.enemies, px, py)
            .map(|i| w.enemies.center(i))
            .or_else(|| w.boss.as_ref().map(|b| b.center()));
        // 標的がいなければ発射もマナ消費もしない
        if let Some((tx, ty)) = target {
            let damage = w.player.effective_attack_damage() * HEAVY_ATTACK_DAMAGE_RATIO;
            w.projectiles.spawn_at_target(
                ProjectileKind::PlayerEnergy,
                ProjectileOwner::Player,
                px,
                py,
                tx,
                ty,
                damage,
                HEAVY_ATTACK_SPEED,
            );
            w.player.mana -= HEAVY_ATTACK_MANA_COST;
            w.player.heavy_cooldown = HEAVY_ATTACK_COOLDOWN;
        }
    }

    // 位置の積分と境界クランプ（壁で速度を殺す）
    w.player.x += w.player.vx * dt;
    w.player.y += w.player.vy * dt;
    if w.player.x < 0.0 {
        w.player.x = 0.0;
        w.player.vx = 0.0;
    }
    if w.player.x + PLAYER_SIZE > MAP_WIDTH {
        w.player.x = MAP_WIDTH - PLAYER_SIZE;
        w.player.vx = 0.0;
    }
    if w.player.y < 0.0 {
        w.player.y = 0.0;
        w.player.vy = 0.0;
    }
    if w.player.y + PLAYER_SIZE > MAP_HEIGHT {
        w.player.y = MAP_HEIGHT - PLAYER_SIZE;
        w.player.vy = 0.0;
    }

    // タイマー減衰。0 で止まり、負にはならない
    w.player.attack_cooldown = (w.player.attack_cooldown - dt).max(0.0);
    w.player.heavy_cooldown = (w.player.heavy_cooldown - dt).max(0.0);
    w.player.dodge_cooldown = (w.player.dodge_cooldown - dt).max(0.0);
    w.player.jump_cooldown = (w.player.jump_cooldown - dt).max(0.0);
    w.player.invulnerable_timer = (w.player.invulnerable_timer - dt).max(0.0);
    w.player.speed_boost = (w.player.speed_boost - dt).max(0.0);
    w.player.damage_boost = (w.player.damage_boost - dt).max(0.0);
    w.player.defense_boost = (w.player.defense_boost - dt).max(0.0);
    w.player.jump_boost = (w.player.jump_boost - dt).max(0.0);

    // マナ自動回復
    w.player.mana = (w.player.mana + MANA_REGEN_PER_SEC * dt).min(w.player.max_mana);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::constants::FIXED_STEP;

    fn world() -> GameWorld {
        GameWorld::with_defaults()
    }

    #[test]
    fn no_input_zero_dt_is_a_no_op() {
        let mut w = world();
        w.player.vx = 120.0;
        w.player.attack_cooldown = 0.3;
        let (x0, vx0, cd0) = (w.player.x, w.player.vx, w.player.attack_cooldown);
        update_player(&mut w, &InputSnapshot::NONE, 0.0);
        assert_eq!(w.player.x, x0);
        assert_eq!(w.player.vx, vx0);
        assert_eq!(w.player.attack_cooldown, cd0);
    }

    #[test]
    fn acceleration_and_friction() {
        let mut w = world();
        let input = InputSnapshot { move_right: true, ..InputSnapshot::NONE };
        for _ in 0..30 {
            update_player(&mut w, &input, FIXED_STEP);
        }
        assert!(w.player.vx > 0.0);
        assert!(w.player.facing_right);
        let moving = w.player.vx;
        // 入力を離すと減衰していく
        for _ in 0..60 {
            update_player(&mut w, &InputSnapshot::NONE, FIXED_STEP);
        }
        assert!(w.player.vx < moving * 0.01);
    }

    #[test]
    fn speed_clamped_to_max() {
        let mut w = world();
        let input = InputSnapshot { move_right: true, ..InputSnapshot::NONE };
        for _ in 0..240 {
            update_player(&mut w, &input, FIXED_STEP);
        }
        assert!(w.player.vx <= w.player.max_speed() + 0.001);
    }

    #[test]
    fn attack_is_cooldown_gated() {
        let mut w = world();
        let input = InputSnapshot { attack: true, ..InputSnapshot::NONE };
        update_player(&mut w, &input, FIXED_STEP);
        assert_eq!(w.pending_attacks.len(), 1);
        assert!(w.player.is_attacking());
        // クールダウン中は再発火しない
        update_player(&mut w, &input, FIXED_STEP);
        assert_eq!(w.pending_attacks.len(), 1);
        // クールダウン明けで再発火する
        for _ in 0..40 {
            update_player(&mut w, &InputSnapshot::NONE, FIXED_STEP);
        }
        update_player(&mut w, &input, FIXED_STEP);
        assert_eq!(w.pending_attacks.len(), 2);
    }

    #[test]
    fn heavy_attack_needs_mana_and_a_target() {
        let mut w = world();
        let input = InputSnapshot { heavy_attack: true, ..InputSnapshot::NONE };
        w.player.mana = HEAVY_ATTACK_MANA_COST - 1.0;
        update_player(&mut w, &input, FIXED_STEP);
        assert_eq!(w.projectiles.count, 0);

        w.player.mana = w.player.max_mana;
        update_player(&mut w, &input, FIXED_STEP);
        assert_eq!(w.projectiles.count, 1);
        assert!(w.player.mana < w.player.max_mana);
        assert_eq!(w.projectiles.owner[0], ProjectileOwner::Player);

        // 標的が一切いなければ撃たない（マナも減らない）
        let mut empty = GameWorld::new(Vec::new(), 1);
        empty.player.mana = empty.player.max_mana;
        update_player(&mut empty, &input, FIXED_STEP);
        assert_eq!(empty.projectiles.count, 0);
        assert_eq!(empty.player.mana, empty.player.max_mana);
    }

    #[test]
    fn dodge_grants_invulnerability_window() {
        let mut w = world();
        w.player.vx = 100.0;
        let input = InputSnapshot { dodge: true, ..InputSnapshot::NONE };
        update_player(&mut w, &input, FIXED_STEP);
        assert!(w.player.invulnerable_timer > 0.0);
        assert!(w.player.is_dodging());
        assert!(w.player.vx > 150.0);
        // クールダウン中の再入力は無視される
        let t = w.player.dodge_cooldown;
        update_player(&mut w, &input, FIXED_STEP);
        assert!(w.player.dodge_cooldown < t);
    }

    #[test]
    fn hop_requires_movement_direction() {
        let mut w = world();
        let standing = InputSnapshot { jump: true, ..InputSnapshot::NONE };
        update_player(&mut w, &standing, FIXED_STEP);
        assert_eq!(w.player.jump_cooldown, 0.0);

        let moving = InputSnapshot { jump: true, move_right: true, ..InputSnapshot::NONE };
        update_player(&mut w, &moving, FIXED_STEP);
        assert!(w.player.jump_cooldown > 0.0);
        assert!(w.player.vx > JUMP_IMPULSE * 0.9);
    }

    #[test]
    fn mana_regenerates_to_cap() {
        let mut w = world();
        w.player.mana = 0.0;
        for _ in 0..600 {
            update_player(&mut w, &InputSnapshot::NONE, FIXED_STEP);
        }
        assert!((w.player.mana - w.player.max_mana).abs() < 0.001);
    }
}
