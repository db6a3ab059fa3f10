//! Path: game_sim/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorld）。全コレクションの唯一の所有者
//!
//! 単一スレッドの協調的 tick で駆動される。外部（レンダラ・UI・経済連携）は
//! tick 後のスナップショットとイベントのみを読み、ワールドを直接変更しない。

use super::{
    AttackIntent, BossState, EnemyWorld, FrameEvent, LevelPhase, PlayerState, ProgressionState,
    ProjectileWorld,
};
use game_core::collectible::CollectibleWorld;
use game_core::constants::WORLD_RNG_SEED;
use game_core::level::{default_campaign, LevelPlan};
use game_core::physics::rng::SimpleRng;

pub struct GameWorld {
    pub frame_id:        u32,
    pub elapsed_seconds: f32,
    pub player:       PlayerState,
    pub enemies:      EnemyWorld,
    /// 同時に存在するボスは 0 か 1 体
    pub boss:         Option<BossState>,
    pub projectiles:  ProjectileWorld,
    pub collectibles: CollectibleWorld,
    /// 外部レベルプロバイダから受け取ったプラン一覧（セッション全体分）
    pub plans:     Vec<LevelPlan>,
    pub max_level: u32,
    pub progression: ProgressionState,
    pub rng: SimpleRng,
    /// この tick で発行された攻撃インテント（衝突解決が drain する）
    pub pending_attacks: Vec<AttackIntent>,
    /// この tick で発生したイベント（外部が drain する）
    pub frame_events: Vec<FrameEvent>,
}

impl GameWorld {
    pub fn new(plans: Vec<LevelPlan>, seed: u64) -> Self {
        Self::from_parts(plans, SimpleRng::new(seed))
    }

    /// 既定キャンペーン（3 レベル）で開始する
    pub fn with_default_campaign(seed: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let plans = default_campaign(&mut rng);
        Self::from_parts(plans, rng)
    }

    pub fn with_defaults() -> Self {
        Self::with_default_campaign(WORLD_RNG_SEED)
    }

    fn from_parts(plans: Vec<LevelPlan>, rng: SimpleRng) -> Self {
        let max_level = plans.iter().map(|p| p.level).max().unwrap_or(0);
        let mut world = Self {
            frame_id:        0,
            elapsed_seconds: 0.0,
            player:       PlayerState::new(),
            enemies:      EnemyWorld::new(),
            boss:         None,
            projectiles:  ProjectileWorld::new(),
            collectibles: CollectibleWorld::new(),
            plans,
            max_level,
            progression: ProgressionState::new(),
            rng,
            pending_attacks: Vec::new(),
            frame_events: Vec::new(),
        };
        world.load_level(1);
        world
    }

    pub fn plan_for_level(&self, level: u32) -> Option<&LevelPlan> {
        self.plans.iter().find(|p| p.level == level)
    }

    /// 指定レベルの敵・収集物を配置し直す。プランがなければ何もせず false
    /// （進行はそのまま停滞する。呼び出し側の設定ミスでありシミュレーション
    /// の失敗ではない）
    pub(crate) fn load_level(&mut self, level: u32) -> bool {
        let Some(plan) = self.plan_for_level(level) else {
            log::warn!("load_level: no plan for level {level}, progression stalls");
            return false;
        };
        let enemies = plan.enemies.clone();
        let collectibles = plan.collectibles.clone();
        let name = plan.name.clone();

        self.enemies.clear();
        self.enemies.spawn_all(&enemies);
        self.collectibles.clear();
        for c in &collectibles {
            self.collectibles.spawn(c.x, c.y, c.kind, c.value, c.duration);
        }
        self.projectiles.clear();
        self.boss = None;
        self.pending_attacks.clear();

        self.progression.current_level = level;
        self.progression.phase = LevelPhase::Enemies;
        self.progression.total_enemies = self.enemies.count as u32;
        self.progression.enemies_defeated = 0;
        self.progression.boss_defeated = false;

        log::debug!(
            "load_level: level={level} ({name}) enemies={} collectibles={}",
            self.enemies.count,
            self.collectibles.count,
        );
        true
    }

    /// セッション再スタート。プレイヤーは再生成せず reset する
    pub fn reset(&mut self) {
        self.player.reset();
        self.progression = ProgressionState::new();
        self.frame_events.clear();
        self.frame_id = 0;
        self.elapsed_seconds = 0.0;
        self.load_level(1);
    }
}
