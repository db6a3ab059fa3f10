//! Path: game_sim/src/render_snapshot.rs
//! Summary: ワールドから描画用スナップショットを構築する
//!
//! レンダラ・UI は tick 後にこの読み取り専用データだけを受け取り、
//! ワールド本体には触れない。

use crate::world::{GameWorld, LevelPhase};
use game_core::boss::BossKind;
use serde::Serialize;

/// 生存アクター 1 体分の描画データ
#[derive(Debug, Clone, Serialize)]
pub struct ActorSprite {
    pub x:    f32,
    pub y:    f32,
    pub size: f32,
    /// "player" / 敵種類名 / ボス名
    pub kind: &'static str,
    pub facing_right: bool,
    pub is_attacking: bool,
    pub hp:     f32,
    pub max_hp: f32,
    /// ボスのみ Some
    pub phase: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileSprite {
    pub x:    f32,
    pub y:    f32,
    pub size: f32,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectibleSprite {
    pub x:     f32,
    pub y:     f32,
    pub size:  f32,
    pub kind:  &'static str,
    pub value: u32,
}

/// ボス HP バー表示用
#[derive(Debug, Clone, Serialize)]
pub struct BossHudInfo {
    pub name:   &'static str,
    pub hp:     f32,
    pub max_hp: f32,
    pub phase:  u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct HudData {
    pub hp:       f32,
    pub max_hp:   f32,
    pub mana:     f32,
    pub max_mana: f32,
    pub score:  u32,
    pub points: u32,
    pub coins:  u32,
    pub level:  u32,
    pub phase:  LevelPhase,
    pub enemies_remaining: u32,
    pub boss: Option<BossHudInfo>,
    pub game_over: bool,
    pub won:       bool,
}

/// 1 tick 分の読み取り専用スナップショット
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub frame_id:     u32,
    pub actors:       Vec<ActorSprite>,
    pub projectiles:  Vec<ProjectileSprite>,
    pub collectibles: Vec<CollectibleSprite>,
    pub hud:          HudData,
}

fn boss_sprite_kind(kind: BossKind) -> &'static str {
    kind.params().name
}

/// GameWorld から RenderFrame を構築する。ワールドは変更しない
pub fn build_render_frame(w: &GameWorld) -> RenderFrame {
    let mut actors = Vec::with_capacity(1 + w.boss.is_some() as usize + w.enemies.count);

    actors.push(ActorSprite {
        x:    w.player.x,
        y:    w.player.y,
        size: w.player.size(),
        kind: "player",
        facing_right: w.player.facing_right,
        is_attacking: w.player.is_attacking(),
        hp:     w.player.hp,
        max_hp: w.player.max_hp,
        phase: None,
    });

    if let Some(ref boss) = w.boss {
        actors.push(ActorSprite {
            x:    boss.x,
            y:    boss.y,
            size: boss.size(),
            kind: boss_sprite_kind(boss.kind),
            facing_right: boss.facing_right,
            is_attacking: boss.is_attacking,
            hp:     boss.hp,
            max_hp: boss.max_hp,
            phase: Some(boss.phase),
        });
    }

    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        actors.push(ActorSprite {
            x:    w.enemies.positions_x[i],
            y:    w.enemies.positions_y[i],
            size: w.enemies.size(i),
            kind: w.enemies.kinds[i].name(),
            facing_right: w.enemies.facing_right[i],
            is_attacking: w.enemies.attacking[i],
            hp:     w.enemies.hp[i],
            max_hp: w.enemies.max_hp[i],
            phase: None,
        });
    }

    let mut projectiles = Vec::with_capacity(w.projectiles.count);
    for i in 0..w.projectiles.len() {
        if !w.projectiles.alive[i] {
            continue;
        }
        projectiles.push(ProjectileSprite {
            x:    w.projectiles.positions_x[i],
            y:    w.projectiles.positions_y[i],
            size: w.projectiles.size(),
            kind: w.projectiles.kinds[i].name(),
        });
    }

    // 未取得の収集物だけを出す
    let mut collectibles = Vec::with_capacity(w.collectibles.count);
    for i in 0..w.collectibles.len() {
        if w.collectibles.collected[i] {
            continue;
        }
        collectibles.push(CollectibleSprite {
            x:     w.collectibles.positions_x[i],
            y:     w.collectibles.positions_y[i],
            size:  w.collectibles.kinds[i].size(),
            kind:  w.collectibles.kinds[i].name(),
            value: w.collectibles.value[i],
        });
    }

    let boss_hud = w.boss.as_ref().map(|b| BossHudInfo {
        name:   b.kind.params().name,
        hp:     b.hp,
        max_hp: b.max_hp,
        phase:  b.phase,
    });

    let hud = HudData {
        hp:       w.player.hp,
        max_hp:   w.player.max_hp,
        mana:     w.player.mana,
        max_mana: w.player.max_mana,
        score:  w.player.score,
        points: w.player.points,
        coins:  w.player.coins,
        level:  w.progression.current_level,
        phase:  w.progression.phase,
        enemies_remaining: w.progression.total_enemies
            .saturating_sub(w.progression.enemies_defeated),
        boss: boss_hud,
        game_over: w.progression.game_over,
        won:       w.progression.won,
    };

    RenderFrame { frame_id: w.frame_id, actors, projectiles, collectibles, hud }
}
