//! Path: game_core/src/entity_params.rs
//! Summary: 敵・ボスの種類別パラメータテーブル
//!
//! 種類ごとの数値を一箇所に集約し、戦闘ロジック側には enum タグ経由で
//! 参照させる。スプライトや色などの見た目はこのクレートでは扱わない。

use crate::boss::{BossKind, SpecialPattern};
use crate::constants::ENEMY_AGGRO_RANGE;
use crate::enemy::EnemyKind;

/// 敵のパラメータ（EnemyKind で参照）
#[derive(Clone, Copy, Debug)]
pub struct EnemyParams {
    pub max_hp:           f32,
    pub speed:            f32,
    /// 当たり判定の一辺（正方形）
    pub size:             f32,
    pub attack_damage:    f32,
    pub attack_range:     f32,
    /// 射撃可能距離。0 は近接専用
    pub projectile_range: f32,
    pub aggro_range:      f32,
    /// 撃破時のポイント
    pub points:           u32,
    pub name:             &'static str,
}

static ENEMY_TABLE: [EnemyParams; 3] = [
    EnemyParams { max_hp: 120.0, speed: 80.0, size: 24.0, attack_damage: 15.0, attack_range: 60.0, projectile_range: 0.0,   aggro_range: ENEMY_AGGRO_RANGE, points: 10, name: "goblin" },
    EnemyParams { max_hp: 200.0, speed: 60.0, size: 32.0, attack_damage: 25.0, attack_range: 80.0, projectile_range: 0.0,   aggro_range: ENEMY_AGGRO_RANGE, points: 20, name: "orc" },
    EnemyParams { max_hp: 150.0, speed: 70.0, size: 28.0, attack_damage: 20.0, attack_range: 70.0, projectile_range: 200.0, aggro_range: ENEMY_AGGRO_RANGE, points: 15, name: "skeleton" },
];

impl EnemyParams {
    pub fn get(kind: EnemyKind) -> &'static EnemyParams {
        &ENEMY_TABLE[kind as usize]
    }
}

// ─── BossParams ────────────────────────────────────────────────

/// ボスのパラメータ（BossKind で参照）
#[derive(Clone, Copy, Debug)]
pub struct BossParams {
    /// 担当ストーリーレベル
    pub level:               u32,
    pub max_hp:              f32,
    pub speed:               f32,
    pub size:                f32,
    pub attack_damage:       f32,
    pub attack_range:        f32,
    pub projectile_range:    f32,
    /// 特殊攻撃の弾幕形状
    pub special:             SpecialPattern,
    pub special_damage_mult: f32,
    pub special_speed:       f32,
    /// 撃破時の恒久報酬（回復量と攻撃力上昇）
    pub reward_health:       f32,
    pub reward_damage:       f32,
    pub name:                &'static str,
}

pub(crate) static BOSS_TABLE: [BossParams; 3] = [
    BossParams {
        level: 1, max_hp: 500.0, speed: 150.0, size: 100.0,
        attack_damage: 40.0, attack_range: 120.0, projectile_range: 300.0,
        special: SpecialPattern::Fan { count: 5, step: 0.4 },
        special_damage_mult: 1.8, special_speed: 180.0,
        reward_health: 50.0, reward_damage: 5.0,
        name: "Dragon Lord",
    },
    BossParams {
        level: 2, max_hp: 600.0, speed: 90.0, size: 110.0,
        attack_damage: 45.0, attack_range: 130.0, projectile_range: 280.0,
        special: SpecialPattern::Radial { count: 8 },
        special_damage_mult: 1.6, special_speed: 160.0,
        reward_health: 75.0, reward_damage: 8.0,
        name: "Lich King",
    },
    BossParams {
        level: 3, max_hp: 700.0, speed: 110.0, size: 120.0,
        attack_damage: 50.0, attack_range: 140.0, projectile_range: 320.0,
        special: SpecialPattern::Fan { count: 6, step: 0.2 },
        special_damage_mult: 1.7, special_speed: 220.0,
        reward_health: 100.0, reward_damage: 10.0,
        name: "Demon Prince",
    },
];

impl BossParams {
    pub fn get(kind: BossKind) -> &'static BossParams {
        &BOSS_TABLE[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_table_lookup() {
        let p = EnemyParams::get(EnemyKind::Skeleton);
        assert_eq!(p.name, "skeleton");
        assert!((p.projectile_range - 200.0).abs() < 0.001);
    }

    #[test]
    fn boss_table_lookup() {
        let p = BossParams::get(BossKind::LichKing);
        assert_eq!(p.level, 2);
        assert!((p.max_hp - 600.0).abs() < 0.001);
        assert!(matches!(p.special, SpecialPattern::Radial { count: 8 }));
    }

    #[test]
    fn boss_rewards_grow_with_level() {
        let d = BossParams::get(BossKind::DragonLord);
        let l = BossParams::get(BossKind::LichKing);
        let p = BossParams::get(BossKind::DemonPrince);
        assert!(d.reward_health < l.reward_health && l.reward_health < p.reward_health);
        assert!(d.reward_damage < l.reward_damage && l.reward_damage < p.reward_damage);
    }
}
