//! Path: game_sim/src/world/progression.rs
//! Summary: レベル進行状態（enemies → boss → 次レベル / 完走）

use serde::Serialize;

/// レベル内の進行フェーズ
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelPhase {
    Enemies,
    Boss,
}

#[derive(Clone, Copy, Debug)]
pub struct ProgressionState {
    pub current_level:    u32,
    pub phase:            LevelPhase,
    pub enemies_defeated: u32,
    pub total_enemies:    u32,
    pub boss_defeated:    bool,
    pub level_complete:   bool,
    pub game_over:        bool,
    pub won:              bool,
}

impl ProgressionState {
    pub fn new() -> Self {
        Self {
            current_level:    1,
            phase:            LevelPhase::Enemies,
            enemies_defeated: 0,
            total_enemies:    0,
            boss_defeated:    false,
            level_complete:   false,
            game_over:        false,
            won:              false,
        }
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}
