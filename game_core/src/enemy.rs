//! Path: game_core/src/enemy.rs
//! Summary: 敵種類（EnemyKind）とステータスアクセサ

use crate::entity_params::EnemyParams;
use serde::{Deserialize, Serialize};

/// 敵の種類（クローズドな列挙 + 定数テーブル参照）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EnemyKind {
    #[default]
    Goblin   = 0,
    Orc      = 1,
    Skeleton = 2,
}

impl EnemyKind {
    /// 外部データからのデシリアライズ用。未知の ID は None。
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Goblin),
            1 => Some(Self::Orc),
            2 => Some(Self::Skeleton),
            _ => None,
        }
    }

    pub fn params(self) -> &'static EnemyParams {
        EnemyParams::get(self)
    }

    pub fn max_hp(self) -> f32 {
        self.params().max_hp
    }

    pub fn speed(self) -> f32 {
        self.params().speed
    }

    pub fn attack_damage(self) -> f32 {
        self.params().attack_damage
    }

    /// 射撃可能距離。0 は近接専用
    pub fn projectile_range(self) -> f32 {
        self.params().projectile_range
    }

    /// 撃破時に加算されるポイント
    pub fn points(self) -> u32 {
        self.params().points
    }

    pub fn name(self) -> &'static str {
        self.params().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_stats() {
        assert!((EnemyKind::Goblin.max_hp() - 120.0).abs() < 0.001);
        assert!((EnemyKind::Orc.max_hp() - 200.0).abs() < 0.001);
        assert!((EnemyKind::Skeleton.max_hp() - 150.0).abs() < 0.001);
        assert!((EnemyKind::Goblin.speed() - 80.0).abs() < 0.001);
        assert!((EnemyKind::Orc.speed() - 60.0).abs() < 0.001);
    }

    #[test]
    fn only_skeleton_is_ranged() {
        assert_eq!(EnemyKind::Goblin.projectile_range(), 0.0);
        assert_eq!(EnemyKind::Orc.projectile_range(), 0.0);
        assert!(EnemyKind::Skeleton.projectile_range() > 0.0);
    }

    #[test]
    fn kill_points() {
        assert_eq!(EnemyKind::Goblin.points(), 10);
        assert_eq!(EnemyKind::Orc.points(), 20);
        assert_eq!(EnemyKind::Skeleton.points(), 15);
    }

    #[test]
    fn from_u8_round_trip() {
        for kind in [EnemyKind::Goblin, EnemyKind::Orc, EnemyKind::Skeleton] {
            assert_eq!(EnemyKind::from_u8(kind as u8), Some(kind));
        }
        assert_eq!(EnemyKind::from_u8(9), None);
    }
}
