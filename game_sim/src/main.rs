//! Path: game_sim/src/main.rs
//! Summary: ヘッドレス実行デモ。自動操作で 1 セッションを回し、イベントを標準出力へ流す
//!
//! レンダラなしでシミュレーションを端から端まで駆動する確認用バイナリ。
//! イベントは JSON 1 行ずつ出力され、終端の GameOver 行だけを読む外部
//! コンシューマ（経済連携など）の代わりに最後に結果行を出す。

use game_core::constants::{FIXED_STEP, WORLD_RNG_SEED};
use game_core::util::dist;
use game_sim::{
    advance_frame, build_render_frame, drain_frame_events, GameWorld, InputSnapshot,
};

/// 最長 10 分（シミュレーション時間）で打ち切る
const MAX_TICKS: u32 = 10 * 60 * 60;

/// 単純な自動操作: 最近接の標的へ歩き、射程で殴り、マナがあれば特殊攻撃。
/// 体力が減ったらドッジとシールドで粘る
fn autopilot(w: &GameWorld) -> InputSnapshot {
    let mut input = InputSnapshot::NONE;
    let (px, py) = w.player.center();

    let mut target: Option<(f32, f32, f32)> = None;
    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let (ex, ey) = w.enemies.center(i);
        let d = dist(px, py, ex, ey);
        if target.map_or(true, |(best, _, _)| d < best) {
            target = Some((d, ex, ey));
        }
    }
    if target.is_none() {
        if let Some(ref boss) = w.boss {
            let (bx, by) = boss.center();
            target = Some((dist(px, py, bx, by), bx, by));
        }
    }
    let Some((d, tx, ty)) = target else {
        return input;
    };

    if tx < px - 10.0 {
        input.move_left = true;
    } else if tx > px + 10.0 {
        input.move_right = true;
    }
    if ty < py - 10.0 {
        input.move_up = true;
    } else if ty > py + 10.0 {
        input.move_down = true;
    }

    if d < 70.0 {
        input.attack = true;
    } else if d < 400.0 {
        input.heavy_attack = true;
    }
    if w.player.hp < 50.0 {
        input.dodge = true;
    }
    if w.player.hp < 30.0 {
        input.shield = true;
    }
    input
}

fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(WORLD_RNG_SEED);
    let mut world = GameWorld::with_default_campaign(seed);
    println!("campaign start: {} levels, seed={seed}", world.max_level);

    for _ in 0..MAX_TICKS {
        let input = autopilot(&world);
        advance_frame(&mut world, &input, FIXED_STEP);
        for event in drain_frame_events(&mut world) {
            match serde_json::to_string(&event) {
                Ok(json) => println!("event: {json}"),
                Err(e) => log::warn!("event serialization failed: {e}"),
            }
        }
        if world.progression.game_over {
            break;
        }
    }

    let frame = build_render_frame(&world);
    println!(
        "final: level={} phase={:?} hp={:.0} score={} ticks={}",
        frame.hud.level, frame.hud.phase, frame.hud.hp, frame.hud.score, frame.frame_id,
    );
    // 終端シグナル。外部の結果コンシューマはこの 2 値だけを読む
    println!(
        "result: won={} final_score={}",
        world.progression.won, world.player.score,
    );
}
