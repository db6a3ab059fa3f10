//! Path: game_sim/src/world/boss.rs
//! Summary: ボス状態（BossState）。同時に存在するのは常に 0 か 1 体

use game_core::boss::BossKind;

pub struct BossState {
    pub kind: BossKind,
    pub x: f32,
    pub y: f32,
    pub hp:     f32,
    pub max_hp: f32,
    /// HP 比率から導出されるフェーズ（1→2→3 の単調増加のみ）
    pub phase: u8,
    pub attack_cooldown:     f32,
    pub projectile_cooldown: f32,
    pub special_cooldown:    f32,
    pub facing_right: bool,
    /// この tick で近接攻撃を出したか（描画用の一時フラグ）
    pub is_attacking: bool,
}

impl BossState {
    pub fn new(kind: BossKind, x: f32, y: f32) -> Self {
        let params = kind.params();
        Self {
            kind,
            x,
            y,
            hp:     params.max_hp,
            max_hp: params.max_hp,
            phase: 1,
            attack_cooldown:     0.0,
            projectile_cooldown: 0.0,
            special_cooldown:    0.0,
            facing_right: true,
            is_attacking: false,
        }
    }

    pub fn size(&self) -> f32 {
        self.kind.params().size
    }

    pub fn center(&self) -> (f32, f32) {
        let half = self.size() / 2.0;
        (self.x + half, self.y + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_full_health_in_phase_1() {
        let b = BossState::new(BossKind::DragonLord, 1400.0, 300.0);
        assert!((b.hp - b.max_hp).abs() < 0.001);
        assert!((b.max_hp - 500.0).abs() < 0.001);
        assert_eq!(b.phase, 1);
    }
}
