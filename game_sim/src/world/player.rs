//! Path: game_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・HP/マナ・クールダウン・ブーストタイマー・スコア）

use game_core::constants::{
    ATTACK_COOLDOWN, ATTACK_WINDOW, DAMAGE_BOOST_MULT, DODGE_ACTIVE_UNTIL, PLAYER_ATTACK_DAMAGE,
    PLAYER_MAX_HP, PLAYER_MAX_MANA, PLAYER_MAX_SPEED, PLAYER_SIZE, SPEED_BOOST_MULT,
};

/// セッションを通して 1 体のみ生成され、リスタート時は reset で再初期化される
pub struct PlayerState {
    pub x:  f32,
    pub y:  f32,
    pub vx: f32,
    pub vy: f32,
    pub hp:       f32,
    pub max_hp:   f32,
    pub mana:     f32,
    pub max_mana: f32,
    /// 基礎攻撃力 + ボス撃破の恒久報酬
    pub attack_damage:      f32,
    pub attack_cooldown:    f32,
    pub heavy_cooldown:     f32,
    pub dodge_cooldown:     f32,
    pub jump_cooldown:      f32,
    pub invulnerable_timer: f32,
    pub facing_right: bool,
    pub is_shielding: bool,
    // 時限ブースト（残り秒数、取得で加算される）
    pub speed_boost:   f32,
    pub damage_boost:  f32,
    pub defense_boost: f32,
    pub jump_boost:    f32,
    // 累積スコア
    pub points: u32,
    pub coins:  u32,
    pub score:  u32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            x: 500.0,
            y: 400.0,
            vx: 0.0,
            vy: 0.0,
            hp:       PLAYER_MAX_HP,
            max_hp:   PLAYER_MAX_HP,
            mana:     PLAYER_MAX_MANA,
            max_mana: PLAYER_MAX_MANA,
            attack_damage:      PLAYER_ATTACK_DAMAGE,
            attack_cooldown:    0.0,
            heavy_cooldown:     0.0,
            dodge_cooldown:     0.0,
            jump_cooldown:      0.0,
            invulnerable_timer: 0.0,
            facing_right: true,
            is_shielding: false,
            speed_boost:   0.0,
            damage_boost:  0.0,
            defense_boost: 0.0,
            jump_boost:    0.0,
            points: 0,
            coins:  0,
            score:  0,
        }
    }

    /// リスタート時の再初期化（再生成はしない）
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn size(&self) -> f32 {
        PLAYER_SIZE
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + PLAYER_SIZE / 2.0, self.y + PLAYER_SIZE / 2.0)
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// 攻撃判定窓。クールダウン先頭の ATTACK_WINDOW 秒だけ真になる
    /// （遅延コールバックではなく減衰するクールダウンから導出する）
    pub fn is_attacking(&self) -> bool {
        self.attack_cooldown > ATTACK_COOLDOWN - ATTACK_WINDOW
    }

    /// ドッジ状態もクールダウンから導出する
    pub fn is_dodging(&self) -> bool {
        self.dodge_cooldown > DODGE_ACTIVE_UNTIL
    }

    /// ダメージブースト適用後の攻撃力
    pub fn effective_attack_damage(&self) -> f32 {
        if self.damage_boost > 0.0 {
            self.attack_damage * DAMAGE_BOOST_MULT
        } else {
            self.attack_damage
        }
    }

    /// スピードブースト適用後の最大速度
    pub fn max_speed(&self) -> f32 {
        if self.speed_boost > 0.0 {
            PLAYER_MAX_SPEED * SPEED_BOOST_MULT
        } else {
            PLAYER_MAX_SPEED
        }
    }

    /// 最大 HP を超えない回復
    pub fn heal(&mut self, amount: f32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
