//! Path: game_core/src/collectible.rs
//! Summary: 収集物の種類定義と CollectibleWorld（SoA）

use serde::{Deserialize, Serialize};

/// 収集物の種類
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CollectibleKind {
    #[default]
    Coin         = 0, // 通貨（value = 枚数）
    RareGem      = 1, // 高額通貨
    HealthPotion = 2, // HP 回復（value = 回復量）
    SpeedBoost   = 3, // 以下、時限ブースト（duration 秒を加算）
    DamageBoost  = 4,
    DefenseBoost = 5,
    JumpBoost    = 6,
}

impl CollectibleKind {
    /// ブースト系（取得時に対応タイマーへ duration を加算する種類）か
    pub fn is_boost(self) -> bool {
        matches!(
            self,
            Self::SpeedBoost | Self::DamageBoost | Self::DefenseBoost | Self::JumpBoost
        )
    }

    /// 通貨系（coins に加算される種類）か
    pub fn is_currency(self) -> bool {
        matches!(self, Self::Coin | Self::RareGem)
    }

    /// 取得判定の半径に使う基準サイズ
    pub fn size(self) -> f32 {
        match self {
            Self::Coin => 20.0,
            Self::RareGem => 35.0,
            Self::HealthPotion => 25.0,
            _ => 30.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::RareGem => "rare_gem",
            Self::HealthPotion => "health_potion",
            Self::SpeedBoost => "speed_boost",
            Self::DamageBoost => "damage_boost",
            Self::DefenseBoost => "defense_boost",
            Self::JumpBoost => "jump_boost",
        }
    }
}

/// 収集物 SoA（Structure of Arrays）
///
/// レベルロード時に一括生成され、取得されたスロットは collected フラグを
/// 立てたまま残す（レベル内での再出現はない）。
pub struct CollectibleWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    pub kinds:       Vec<CollectibleKind>,
    pub value:       Vec<u32>,
    /// ブースト系の効果時間（秒）。その他の種類は 0
    pub duration:    Vec<f32>,
    pub collected:   Vec<bool>,
    /// 未取得の個数
    pub count:       usize,
}

impl CollectibleWorld {
    pub fn new() -> Self {
        Self {
            positions_x: Vec::new(),
            positions_y: Vec::new(),
            kinds:       Vec::new(),
            value:       Vec::new(),
            duration:    Vec::new(),
            collected:   Vec::new(),
            count:       0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    /// レベル切り替え時に全消去
    pub fn clear(&mut self) {
        self.positions_x.clear();
        self.positions_y.clear();
        self.kinds.clear();
        self.value.clear();
        self.duration.clear();
        self.collected.clear();
        self.count = 0;
    }

    pub fn spawn(&mut self, x: f32, y: f32, kind: CollectibleKind, value: u32, duration: f32) {
        self.positions_x.push(x);
        self.positions_y.push(y);
        self.kinds.push(kind);
        self.value.push(value);
        self.duration.push(duration);
        self.collected.push(false);
        self.count += 1;
    }

    /// 取得済みフラグを立てる。二重取得は無効（false を返す）
    pub fn collect(&mut self, i: usize) -> bool {
        if self.collected[i] {
            return false;
        }
        self.collected[i] = true;
        self.count = self.count.saturating_sub(1);
        true
    }
}

impl Default for CollectibleWorld {
    fn default() -> Self {
        Self::new()
    }
}
