//! Path: game_core/src/boss.rs
//! Summary: ボス種類・フェーズスケーリング・特殊攻撃パターンの共通定義

use crate::constants::{BOSS_PHASE2_THRESHOLD, BOSS_PHASE3_THRESHOLD};
use crate::entity_params::{BossParams, BOSS_TABLE};
use serde::{Deserialize, Serialize};

/// ボスの種類（ストーリーレベルごとに 1 体）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BossKind {
    DragonLord  = 0,
    LichKing    = 1,
    DemonPrince = 2,
}

impl BossKind {
    /// 外部データからのデシリアライズ用。未知の ID は None。
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::DragonLord),
            1 => Some(Self::LichKing),
            2 => Some(Self::DemonPrince),
            _ => None,
        }
    }

    /// 指定ストーリーレベルを担当するボス
    pub fn for_level(level: u32) -> Option<Self> {
        BOSS_TABLE
            .iter()
            .position(|b| b.level == level)
            .and_then(|i| Self::from_u8(i as u8))
    }

    pub fn params(self) -> &'static BossParams {
        BossParams::get(self)
    }

    pub fn max_hp(self) -> f32 {
        self.params().max_hp
    }

    pub fn level(self) -> u32 {
        self.params().level
    }

    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// 撃破時に加算されるポイント（レベル × 100）
    pub fn points(self) -> u32 {
        self.params().level * 100
    }
}

/// ボス種類ごとの特殊攻撃の弾幕形状
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SpecialPattern {
    /// プレイヤー方向を中心とした扇状射撃
    Fan { count: u32, step: f32 },
    /// 全周への放射射撃
    Radial { count: u32 },
}

// ─── フェーズスケーリング ─────────────────────────────────────
// HP 比率から導出される 1/2/3 のフェーズ。数値が上がるほど攻撃的になる。

/// HP 比率（hp / max_hp）から対応するフェーズを返す。
/// しきい値ちょうど（66% / 33%）は上のフェーズに留まる
pub fn phase_for_health_ratio(ratio: f32) -> u8 {
    if ratio >= BOSS_PHASE2_THRESHOLD {
        1
    } else if ratio >= BOSS_PHASE3_THRESHOLD {
        2
    } else {
        3
    }
}

pub fn phase_speed_mult(phase: u8) -> f32 {
    match phase {
        1 => 1.0,
        2 => 1.2,
        _ => 1.5,
    }
}

pub fn phase_melee_cooldown(phase: u8) -> f32 {
    match phase {
        1 => 2.0,
        2 => 1.5,
        _ => 1.0,
    }
}

pub fn phase_projectile_cooldown(phase: u8) -> f32 {
    match phase {
        1 => 2.0,
        2 => 1.5,
        _ => 1.0,
    }
}

pub fn phase_projectile_damage_mult(phase: u8) -> f32 {
    match phase {
        1 => 1.0,
        2 => 1.2,
        _ => 1.5,
    }
}

pub fn phase_projectile_speed(phase: u8) -> f32 {
    match phase {
        1 => 150.0,
        2 => 200.0,
        _ => 250.0,
    }
}

/// 特殊攻撃のリチャージ秒。フェーズ 1 では使用不可
pub fn phase_special_recharge(phase: u8) -> Option<f32> {
    match phase {
        2 => Some(8.0),
        3 => Some(5.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_thresholds() {
        assert_eq!(phase_for_health_ratio(1.0), 1);
        // しきい値ちょうどは上のフェーズ（66% でまだフェーズ 1）
        assert_eq!(phase_for_health_ratio(0.66), 1);
        assert_eq!(phase_for_health_ratio(0.64), 2);
        assert_eq!(phase_for_health_ratio(0.33), 2);
        assert_eq!(phase_for_health_ratio(0.32), 3);
        assert_eq!(phase_for_health_ratio(0.0), 3);
    }

    #[test]
    fn aggression_scales_monotonically() {
        assert!(phase_speed_mult(1) < phase_speed_mult(2));
        assert!(phase_speed_mult(2) < phase_speed_mult(3));
        assert!(phase_melee_cooldown(1) > phase_melee_cooldown(3));
        assert!(phase_projectile_cooldown(1) > phase_projectile_cooldown(3));
    }

    #[test]
    fn special_unavailable_in_phase_1() {
        assert_eq!(phase_special_recharge(1), None);
        assert_eq!(phase_special_recharge(2), Some(8.0));
        assert_eq!(phase_special_recharge(3), Some(5.0));
    }

    #[test]
    fn one_boss_per_level() {
        assert_eq!(BossKind::for_level(1), Some(BossKind::DragonLord));
        assert_eq!(BossKind::for_level(2), Some(BossKind::LichKing));
        assert_eq!(BossKind::for_level(3), Some(BossKind::DemonPrince));
        assert_eq!(BossKind::for_level(4), None);
    }

    #[test]
    fn boss_points_scale_with_level() {
        assert_eq!(BossKind::DragonLord.points(), 100);
        assert_eq!(BossKind::LichKing.points(), 200);
        assert_eq!(BossKind::DemonPrince.points(), 300);
    }
}
