//! Path: game_sim/src/world/projectile.rs
//! Summary: 弾丸 SoA（ProjectileWorld）と所有派閥・描画種別

use game_core::boss::BossKind;
use game_core::constants::{PROJECTILE_LIFETIME, PROJECTILE_SIZE};
use serde::Serialize;

/// 弾丸の所有派閥。自派閥には決して当たらない
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// 描画用の弾丸種別
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    Fireball,
    Bone,
    DarkEnergy,
    Lightning,
    PlayerEnergy,
}

impl ProjectileKind {
    /// ボス種類ごとの弾種
    pub fn for_boss(kind: BossKind) -> Self {
        match kind {
            BossKind::DragonLord => Self::Fireball,
            BossKind::LichKing => Self::DarkEnergy,
            BossKind::DemonPrince => Self::Lightning,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fireball => "fireball",
            Self::Bone => "bone",
            Self::DarkEnergy => "dark_energy",
            Self::Lightning => "lightning",
            Self::PlayerEnergy => "player_energy",
        }
    }
}

/// 弾丸 SoA（Structure of Arrays）
///
/// 速度は発射時に向き（発射点→目標点の単位ベクトル × 速さ）で確定し、
/// 以後は直進のみ（ホーミングなし）。
pub struct ProjectileWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_x: Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub damage:       Vec<f32>,
    pub age:          Vec<f32>,
    pub lifetime:     Vec<f32>,
    pub owner:        Vec<ProjectileOwner>,
    pub kinds:        Vec<ProjectileKind>,
    pub alive:        Vec<bool>,
    pub count:        usize,
    free_list:        Vec<usize>,
}

impl ProjectileWorld {
    pub fn new() -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            velocities_x: Vec::new(),
            velocities_y: Vec::new(),
            damage:       Vec::new(),
            age:          Vec::new(),
            lifetime:     Vec::new(),
            owner:        Vec::new(),
            kinds:        Vec::new(),
            alive:        Vec::new(),
            count:        0,
            free_list:    Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn clear(&mut self) {
        self.positions_x.clear();
        self.positions_y.clear();
        self.velocities_x.clear();
        self.velocities_y.clear();
        self.damage.clear();
        self.age.clear();
        self.lifetime.clear();
        self.owner.clear();
        self.kinds.clear();
        self.alive.clear();
        self.count = 0;
        self.free_list.clear();
    }

    /// 目標点に向けて発射する。向きはこの時点のスナップショットで固定
    pub fn spawn_at_target(
        &mut self,
        kind: ProjectileKind,
        owner: ProjectileOwner,
        x: f32,
        y: f32,
        target_x: f32,
        target_y: f32,
        damage: f32,
        speed: f32,
    ) {
        let dx = target_x - x;
        let dy = target_y - y;
        let dist = (dx * dx + dy * dy).sqrt().max(0.001);
        self.spawn_raw(kind, owner, x, y, (dx / dist) * speed, (dy / dist) * speed, damage);
    }

    /// 角度指定の発射（扇状・放射弾幕用）
    pub fn spawn_at_angle(
        &mut self,
        kind: ProjectileKind,
        owner: ProjectileOwner,
        x: f32,
        y: f32,
        angle: f32,
        damage: f32,
        speed: f32,
    ) {
        self.spawn_raw(kind, owner, x, y, angle.cos() * speed, angle.sin() * speed, damage);
    }

    fn spawn_raw(
        &mut self,
        kind: ProjectileKind,
        owner: ProjectileOwner,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        damage: f32,
    ) {
        if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから空きスロットを取得
            self.positions_x[i]  = x;
            self.positions_y[i]  = y;
            self.velocities_x[i] = vx;
            self.velocities_y[i] = vy;
            self.damage[i]       = damage;
            self.age[i]          = 0.0;
            self.lifetime[i]     = PROJECTILE_LIFETIME;
            self.owner[i]        = owner;
            self.kinds[i]        = kind;
            self.alive[i]        = true;
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_x.push(vx);
            self.velocities_y.push(vy);
            self.damage.push(damage);
            self.age.push(0.0);
            self.lifetime.push(PROJECTILE_LIFETIME);
            self.owner.push(owner);
            self.kinds.push(kind);
            self.alive.push(true);
        }
        self.count += 1;
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn size(&self) -> f32 {
        PROJECTILE_SIZE
    }
}

impl Default for ProjectileWorld {
    fn default() -> Self {
        Self::new()
    }
}
