//! Path: game_core/src/level.rs
//! Summary: レベルプラン（外部レベルプロバイダとの受け渡し形式）と既定キャンペーン

use crate::boss::BossKind;
use crate::collectible::CollectibleKind;
use crate::constants::{MAP_HEIGHT, MAP_WIDTH};
use crate::enemy::EnemyKind;
use crate::physics::rng::SimpleRng;
use serde::{Deserialize, Serialize};

/// 敵 1 体分のスポーン記述。max_hp / attack_damage は種類既定値の上書き
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub x:    f32,
    pub y:    f32,
    #[serde(default)]
    pub max_hp:        Option<f32>,
    #[serde(default)]
    pub attack_damage: Option<f32>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BossSpawn {
    pub kind: BossKind,
    pub x:    f32,
    pub y:    f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollectibleSpawn {
    pub kind:  CollectibleKind,
    pub x:     f32,
    pub y:     f32,
    pub value: u32,
    /// ブースト系の効果時間（秒）。その他は 0
    #[serde(default)]
    pub duration: f32,
}

/// 1 レベル分のプラン。ボス記述がない場合、進行はそのレベルで停滞する
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelPlan {
    pub level:        u32,
    pub name:         String,
    pub enemies:      Vec<EnemySpawn>,
    pub boss:         Option<BossSpawn>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleSpawn>,
}

impl EnemySpawn {
    fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        Self { kind, x, y, max_hp: None, attack_damage: None }
    }

    fn with_stats(kind: EnemyKind, x: f32, y: f32, hp: f32, dmg: f32) -> Self {
        Self { kind, x, y, max_hp: Some(hp), attack_damage: Some(dmg) }
    }
}

/// 既定の敵スポーン座標（レベル間で共有）
const SPAWN_POINTS: [(f32, f32); 6] = [
    (450.0, 350.0),
    (550.0, 450.0),
    (520.0, 420.0),
    (400.0, 300.0),
    (600.0, 400.0),
    (480.0, 500.0),
];

const BOSS_SPAWN_POINT: (f32, f32) = (1400.0, 300.0);

/// 既定キャンペーン（3 レベル）を構築する。
/// 敵編成は固定、収集物の配置のみ rng で決まる。
pub fn default_campaign(rng: &mut SimpleRng) -> Vec<LevelPlan> {
    use EnemyKind::{Goblin, Orc, Skeleton};

    let p = SPAWN_POINTS;
    let levels = [
        // レベル 1: 控えめな編成に射撃役の skeleton を 1 体混ぜる
        (1, "House of Forks", BossKind::DragonLord, vec![
            EnemySpawn::new(Goblin, p[0].0, p[0].1),
            EnemySpawn::new(Skeleton, p[1].0, p[1].1),
            EnemySpawn::new(Goblin, p[2].0, p[2].1),
        ]),
        // レベル 2: 既定値より硬い個体で構成
        (2, "House of Greed", BossKind::LichKing, vec![
            EnemySpawn::with_stats(Orc, p[0].0, p[0].1, 250.0, 30.0),
            EnemySpawn::with_stats(Skeleton, p[1].0, p[1].1, 180.0, 25.0),
            EnemySpawn::with_stats(Goblin, p[2].0, p[2].1, 150.0, 20.0),
            EnemySpawn::with_stats(Orc, p[3].0, p[3].1, 250.0, 30.0),
        ]),
        // レベル 3: 最終編成
        (3, "House of Silence", BossKind::DemonPrince, vec![
            EnemySpawn::with_stats(Skeleton, p[0].0, p[0].1, 200.0, 30.0),
            EnemySpawn::with_stats(Orc, p[1].0, p[1].1, 300.0, 35.0),
            EnemySpawn::with_stats(Skeleton, p[2].0, p[2].1, 200.0, 30.0),
            EnemySpawn::with_stats(Goblin, p[3].0, p[3].1, 180.0, 25.0),
            EnemySpawn::with_stats(Orc, p[4].0, p[4].1, 300.0, 35.0),
        ]),
    ];

    levels
        .into_iter()
        .map(|(level, name, boss, enemies)| LevelPlan {
            level,
            name: name.to_string(),
            enemies,
            boss: Some(BossSpawn { kind: boss, x: BOSS_SPAWN_POINT.0, y: BOSS_SPAWN_POINT.1 }),
            collectibles: roll_collectibles(rng),
        })
        .collect()
}

/// マップ端から 50px のマージンを取ったランダム座標
fn roll_position(rng: &mut SimpleRng) -> (f32, f32) {
    (
        rng.next_range(50.0, MAP_WIDTH - 50.0),
        rng.next_range(50.0, MAP_HEIGHT - 50.0),
    )
}

/// 1 レベル分の収集物を抽選する
fn roll_collectibles(rng: &mut SimpleRng) -> Vec<CollectibleSpawn> {
    let mut out = Vec::new();

    // コイン 5〜12 枚、価値 1〜5
    let coins = 5 + rng.next_below(8);
    for _ in 0..coins {
        let (x, y) = roll_position(rng);
        out.push(CollectibleSpawn {
            kind: CollectibleKind::Coin,
            x, y,
            value: 1 + rng.next_below(5),
            duration: 0.0,
        });
    }

    // 回復ポーション 2〜4 個
    let potions = 2 + rng.next_below(3);
    for _ in 0..potions {
        let (x, y) = roll_position(rng);
        out.push(CollectibleSpawn {
            kind: CollectibleKind::HealthPotion,
            x, y,
            value: 25,
            duration: 0.0,
        });
    }

    // ブースト 1〜2 個
    let boosts = 1 + rng.next_below(2);
    let boost_kinds = [
        CollectibleKind::SpeedBoost,
        CollectibleKind::DamageBoost,
        CollectibleKind::DefenseBoost,
        CollectibleKind::JumpBoost,
    ];
    for _ in 0..boosts {
        let kind = boost_kinds[rng.next_below(4) as usize];
        let (x, y) = roll_position(rng);
        out.push(CollectibleSpawn { kind, x, y, value: 1, duration: 10.0 });
    }

    // レアジェムは 30% の確率で 1 個
    if rng.next_f32() < 0.3 {
        let (x, y) = roll_position(rng);
        out.push(CollectibleSpawn {
            kind: CollectibleKind::RareGem,
            x, y,
            value: 50,
            duration: 0.0,
        });
    }

    out
}
