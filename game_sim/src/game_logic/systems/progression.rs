//! Path: game_sim/src/game_logic/systems/progression.rs
//! Summary: レベル進行ステートマシン（enemies → boss → 次レベル / 完走、敗北判定）

use crate::world::{BossState, FrameEvent, GameWorld, LevelPhase};

pub(crate) fn update_progression(w: &mut GameWorld) {
    if w.progression.game_over {
        return;
    }

    // 敗北はフェーズに関係なく即時
    if w.player.is_dead() {
        finish(w, false);
        return;
    }

    match w.progression.phase {
        LevelPhase::Enemies => {
            // 空のスポーンリストでは遷移しない（呼び出し側の設定ミスとして停滞）
            if w.progression.total_enemies > 0 && w.enemies.count == 0 {
                try_spawn_boss(w);
            }
        }
        LevelPhase::Boss => {
            if !w.progression.boss_defeated {
                return;
            }
            let completed = w.progression.current_level;
            if completed >= w.max_level {
                // 最終レベルのボス撃破で完走
                w.frame_events.push(FrameEvent::LevelComplete { level: completed });
                w.progression.level_complete = true;
                finish(w, true);
            } else if w.load_level(completed + 1) {
                w.frame_events.push(FrameEvent::LevelComplete { level: completed });
                log::debug!("advancing to level {}", completed + 1);
            }
            // 次プランがない場合は load_level が警告を出し、そのまま停滞する
        }
    }
}

/// 敵全滅時のボス出現。ボス記述がないレベルでは enemies フェーズに留まる
fn try_spawn_boss(w: &mut GameWorld) {
    let level = w.progression.current_level;
    let Some(spawn) = w.plan_for_level(level).and_then(|p| p.boss) else {
        log::warn!("boss descriptor missing for level {level}; staying in enemies phase");
        return;
    };
    w.progression.enemies_defeated = w.progression.total_enemies;
    w.progression.phase = LevelPhase::Boss;
    w.boss = Some(BossState::new(spawn.kind, spawn.x, spawn.y));
    log::debug!("boss spawned: {} at ({:.0}, {:.0})", spawn.kind.name(), spawn.x, spawn.y);
}

/// 終端状態への遷移。以後の tick はワールドを変更しない
fn finish(w: &mut GameWorld, won: bool) {
    w.progression.game_over = true;
    w.progression.won = won;
    w.frame_events.push(FrameEvent::GameOver { won, final_score: w.player.score });
    log::debug!("game over: won={won} score={}", w.player.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::boss::BossKind;
    use game_core::enemy::EnemyKind;
    use game_core::level::{BossSpawn, EnemySpawn, LevelPlan};

    fn plan(level: u32, enemy_count: usize, boss: Option<BossKind>) -> LevelPlan {
        LevelPlan {
            level,
            name: format!("level-{level}"),
            enemies: (0..enemy_count)
                .map(|i| EnemySpawn {
                    kind: EnemyKind::Goblin,
                    x: 100.0 + i as f32 * 40.0,
                    y: 100.0,
                    max_hp: None,
                    attack_damage: None,
                })
                .collect(),
            boss: boss.map(|kind| BossSpawn { kind, x: 1400.0, y: 300.0 }),
            collectibles: Vec::new(),
        }
    }

    fn kill_all_enemies(w: &mut GameWorld) {
        for i in 0..w.enemies.len() {
            w.enemies.kill(i);
        }
    }

    #[test]
    fn enemies_phase_flips_to_boss_when_cleared() {
        let mut w = GameWorld::new(vec![plan(1, 3, Some(BossKind::DragonLord))], 1);
        update_progression(&mut w);
        assert_eq!(w.progression.phase, LevelPhase::Enemies);
        kill_all_enemies(&mut w);
        update_progression(&mut w);
        assert_eq!(w.progression.phase, LevelPhase::Boss);
        let boss = w.boss.as_ref().expect("boss spawned");
        assert!((boss.hp - boss.max_hp).abs() < 0.001);
        assert_eq!(w.progression.enemies_defeated, 3);
    }

    #[test]
    fn empty_spawn_list_stalls_in_enemies_phase() {
        let mut w = GameWorld::new(vec![plan(1, 0, Some(BossKind::DragonLord))], 1);
        for _ in 0..10 {
            update_progression(&mut w);
        }
        assert_eq!(w.progression.phase, LevelPhase::Enemies);
        assert!(w.boss.is_none());
        assert!(!w.progression.game_over);
    }

    #[test]
    fn missing_boss_descriptor_stalls() {
        let mut w = GameWorld::new(vec![plan(1, 1, None)], 1);
        kill_all_enemies(&mut w);
        for _ in 0..10 {
            update_progression(&mut w);
        }
        assert_eq!(w.progression.phase, LevelPhase::Enemies);
        assert!(w.boss.is_none());
    }

    #[test]
    fn boss_defeat_advances_to_next_level() {
        let plans = vec![
            plan(1, 2, Some(BossKind::DragonLord)),
            plan(2, 4, Some(BossKind::LichKing)),
        ];
        let mut w = GameWorld::new(plans, 1);
        kill_all_enemies(&mut w);
        update_progression(&mut w);
        assert_eq!(w.progression.phase, LevelPhase::Boss);
        // ボス撃破は衝突解決が立てるフラグで観測する
        w.boss = None;
        w.progression.boss_defeated = true;
        update_progression(&mut w);
        assert_eq!(w.progression.current_level, 2);
        assert_eq!(w.progression.phase, LevelPhase::Enemies);
        assert_eq!(w.progression.total_enemies, 4);
        assert!(!w.progression.boss_defeated);
        assert!(w
            .frame_events
            .iter()
            .any(|e| matches!(e, FrameEvent::LevelComplete { level: 1 })));
    }

    #[test]
    fn final_boss_defeat_completes_the_game() {
        let mut w = GameWorld::new(vec![plan(1, 1, Some(BossKind::DragonLord))], 1);
        w.player.score = 420;
        kill_all_enemies(&mut w);
        update_progression(&mut w);
        w.boss = None;
        w.progression.boss_defeated = true;
        update_progression(&mut w);
        assert!(w.progression.level_complete);
        assert!(w.progression.game_over);
        assert!(w.progression.won);
        assert!(w
            .frame_events
            .iter()
            .any(|e| matches!(e, FrameEvent::GameOver { won: true, final_score: 420 })));
    }

    #[test]
    fn player_death_is_immediate_loss_in_any_phase() {
        let mut w = GameWorld::new(vec![plan(1, 2, Some(BossKind::DragonLord))], 1);
        w.player.hp = 0.0;
        update_progression(&mut w);
        assert!(w.progression.game_over);
        assert!(!w.progression.won);
        // 終端後は再発火しない
        let events = w.frame_events.len();
        update_progression(&mut w);
        assert_eq!(w.frame_events.len(), events);
    }
}
