//! Path: game_sim/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）とレベルプランからの一括スポーン

use game_core::enemy::EnemyKind;
use game_core::level::EnemySpawn;

/// 敵 SoA（Structure of Arrays）
///
/// レベルプランのステータス上書きを保持するため max_hp / attack_damage も
/// スロットごとに持つ。空きスロットはフリーリストで O(1) 再利用する。
pub struct EnemyWorld {
    pub positions_x:     Vec<f32>,
    pub positions_y:     Vec<f32>,
    pub velocities_x:    Vec<f32>,
    pub velocities_y:    Vec<f32>,
    pub hp:              Vec<f32>,
    pub max_hp:          Vec<f32>,
    pub attack_damage:   Vec<f32>,
    pub attack_cooldown: Vec<f32>,
    /// アグロ外のふらつき移動の次回抽選までの秒数
    pub wander_timer:    Vec<f32>,
    pub kinds:           Vec<EnemyKind>,
    pub facing_right:    Vec<bool>,
    /// この tick で攻撃を出したか（描画用の一時フラグ）
    pub attacking:       Vec<bool>,
    pub alive:           Vec<bool>,
    /// 生存数
    pub count:           usize,
    free_list:           Vec<usize>,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            positions_x:     Vec::new(),
            positions_y:     Vec::new(),
            velocities_x:    Vec::new(),
            velocities_y:    Vec::new(),
            hp:              Vec::new(),
            max_hp:          Vec::new(),
            attack_damage:   Vec::new(),
            attack_cooldown: Vec::new(),
            wander_timer:    Vec::new(),
            kinds:           Vec::new(),
            facing_right:    Vec::new(),
            attacking:       Vec::new(),
            alive:           Vec::new(),
            count:           0,
            free_list:       Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// レベル切り替え時に全スロットを破棄する
    pub fn clear(&mut self) {
        self.positions_x.clear();
        self.positions_y.clear();
        self.velocities_x.clear();
        self.velocities_y.clear();
        self.hp.clear();
        self.max_hp.clear();
        self.attack_damage.clear();
        self.attack_cooldown.clear();
        self.wander_timer.clear();
        self.kinds.clear();
        self.facing_right.clear();
        self.attacking.clear();
        self.alive.clear();
        self.count = 0;
        self.free_list.clear();
    }

    /// スポーン記述 1 件からスロットを確保する。
    /// ステータス上書きがなければ種類の既定値を使う。
    pub fn spawn(&mut self, spawn: &EnemySpawn) {
        let params = spawn.kind.params();
        let max_hp = spawn.max_hp.unwrap_or(params.max_hp);
        let damage = spawn.attack_damage.unwrap_or(params.attack_damage);

        if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから再利用
            self.positions_x[i]     = spawn.x;
            self.positions_y[i]     = spawn.y;
            self.velocities_x[i]    = 0.0;
            self.velocities_y[i]    = 0.0;
            self.hp[i]              = max_hp;
            self.max_hp[i]          = max_hp;
            self.attack_damage[i]   = damage;
            self.attack_cooldown[i] = 0.0;
            self.wander_timer[i]    = 0.0;
            self.kinds[i]           = spawn.kind;
            self.facing_right[i]    = true;
            self.attacking[i]       = false;
            self.alive[i]           = true;
        } else {
            self.positions_x.push(spawn.x);
            self.positions_y.push(spawn.y);
            self.velocities_x.push(0.0);
            self.velocities_y.push(0.0);
            self.hp.push(max_hp);
            self.max_hp.push(max_hp);
            self.attack_damage.push(damage);
            self.attack_cooldown.push(0.0);
            self.wander_timer.push(0.0);
            self.kinds.push(spawn.kind);
            self.facing_right.push(true);
            self.attacking.push(false);
            self.alive.push(true);
        }
        self.count += 1;
    }

    pub fn spawn_all(&mut self, spawns: &[EnemySpawn]) {
        for s in spawns {
            self.spawn(s);
        }
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    /// 当たり判定の一辺（種類から引く）
    pub fn size(&self, i: usize) -> f32 {
        self.kinds[i].params().size
    }

    pub fn center(&self, i: usize) -> (f32, f32) {
        let half = self.size(i) / 2.0;
        (self.positions_x[i] + half, self.positions_y[i] + half)
    }
}

impl Default for EnemyWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_of(kind: EnemyKind, x: f32, y: f32) -> EnemySpawn {
        EnemySpawn { kind, x, y, max_hp: None, attack_damage: None }
    }

    #[test]
    fn spawn_uses_kind_defaults() {
        let mut w = EnemyWorld::new();
        w.spawn(&spawn_of(EnemyKind::Orc, 10.0, 20.0));
        assert_eq!(w.count, 1);
        assert!((w.hp[0] - 200.0).abs() < 0.001);
        assert!((w.attack_damage[0] - 25.0).abs() < 0.001);
    }

    #[test]
    fn spawn_applies_stat_overrides() {
        let mut w = EnemyWorld::new();
        w.spawn(&EnemySpawn {
            kind: EnemyKind::Orc,
            x: 0.0,
            y: 0.0,
            max_hp: Some(250.0),
            attack_damage: Some(30.0),
        });
        assert!((w.hp[0] - 250.0).abs() < 0.001);
        assert!((w.max_hp[0] - 250.0).abs() < 0.001);
        assert!((w.attack_damage[0] - 30.0).abs() < 0.001);
    }

    #[test]
    fn kill_and_slot_reuse() {
        let mut w = EnemyWorld::new();
        w.spawn(&spawn_of(EnemyKind::Goblin, 1.0, 1.0));
        w.spawn(&spawn_of(EnemyKind::Goblin, 2.0, 2.0));
        w.kill(0);
        assert_eq!(w.count, 1);
        // 二重 kill は数を壊さない
        w.kill(0);
        assert_eq!(w.count, 1);
        // 空きスロット 0 が再利用される
        w.spawn(&spawn_of(EnemyKind::Skeleton, 9.0, 9.0));
        assert_eq!(w.len(), 2);
        assert_eq!(w.kinds[0], EnemyKind::Skeleton);
        assert!(w.alive[0]);
    }
}
